//! Outcome classification

use super::contact::ContactReport;
use crate::sortie::{ResultBand, RiskPosture};

/// Band for a quiet sortie, no scoring involved
pub const QUIET_BAND: ResultBand = ResultBand::Success;

/// Risk-adjusted friendly/opposing ratio
pub fn score_ratio(friendly: f32, opposing: f32, risk: RiskPosture) -> f32 {
    friendly / opposing.max(1.0) * risk.ratio_factor()
}

/// Classify a contested sortie from its scores
pub fn classify(friendly: f32, opposing: f32, risk: RiskPosture) -> ResultBand {
    ResultBand::from_ratio(score_ratio(friendly, opposing, risk))
}

/// `Some(Success)` when nothing happened in the air, otherwise `None` and
/// the caller must score the engagement.
pub fn short_circuit(contact: &ContactReport) -> Option<ResultBand> {
    contact.is_quiet().then_some(QUIET_BAND)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mission::contact::ContactIntensity;
    use crate::sortie::SpecialEvent;

    #[test]
    fn test_quiet_contact_short_circuits() {
        let quiet = ContactReport { intensity: ContactIntensity::None, special_event: None, chance: 40.0 };
        assert_eq!(short_circuit(&quiet), Some(ResultBand::Success));

        let zeppelin = ContactReport {
            intensity: ContactIntensity::None,
            special_event: Some(SpecialEvent::Zeppelin),
            chance: 40.0,
        };
        assert_eq!(short_circuit(&zeppelin), None);
    }

    #[test]
    fn test_risk_posture_shifts_band() {
        assert_eq!(classify(20.0, 20.0, RiskPosture::Standard), ResultBand::Stalemate);
        assert_eq!(classify(20.0, 17.0, RiskPosture::Aggressive), ResultBand::MarginalSuccess);
        // 0.9 sits on the strict threshold and falls through
        assert_eq!(classify(20.0, 20.0, RiskPosture::Conservative), ResultBand::MarginalFailure);
        assert_eq!(classify(15.0, 20.0, RiskPosture::Conservative), ResultBand::Failure);
    }

    #[test]
    fn test_opposing_floor_in_ratio() {
        assert!((score_ratio(3.0, 0.2, RiskPosture::Standard) - 3.0).abs() < 1e-6);
        assert_eq!(classify(3.0, 0.0, RiskPosture::Standard), ResultBand::DecisiveSuccess);
    }
}
