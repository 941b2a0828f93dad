//! Exchange-ratio finalization
//!
//! A successful sortie that cost lives is marked down when the enemy paid
//! too little for them. The band only ever moves toward greater severity.

use crate::sortie::{CasualtyCounts, MissionLog, Phase, ResultBand};

/// Below this exchange ratio the band drops two steps
const POOR_EXCHANGE: f32 = 1.0;

/// Below this exchange ratio the band drops one step
const EVEN_EXCHANGE: f32 = 3.0;

/// Enemy kills per friendly crew killed, `None` when nobody died
pub fn exchange_ratio(casualties: &CasualtyCounts) -> Option<f32> {
    (casualties.crew_killed > 0).then(|| casualties.enemy_kills as f32 / casualties.crew_killed as f32)
}

/// Final band after the exchange-ratio check
pub fn finalize_band(band: ResultBand, casualties: &CasualtyCounts) -> ResultBand {
    if !band.is_success() {
        return band;
    }
    match exchange_ratio(casualties) {
        Some(ratio) if ratio < POOR_EXCHANGE => band.downgrade(2, ResultBand::MarginalFailure),
        Some(ratio) if ratio < EVEN_EXCHANGE => band.downgrade(1, ResultBand::Stalemate),
        _ => band,
    }
}

/// Apply finalization, logging only when the band changes
pub fn finalize(band: ResultBand, casualties: &CasualtyCounts, log: &mut MissionLog) -> ResultBand {
    let finalized = finalize_band(band, casualties);
    if finalized != band {
        log.push(
            Phase::Finalization,
            format!(
                "Exchange ratio {}:{} reduces the result from {} to {}",
                casualties.enemy_kills, casualties.crew_killed, band, finalized
            ),
        );
    }
    finalized
}
