//! Derived crew ratings and pilot skills
//!
//! Ratings are weighted blends of effective stats (0..=100 scale). A flight
//! assignment's combined rating blends the pilot with whichever secondary
//! seat matters for the mission type.

use serde::{Deserialize, Serialize};

use super::member::CrewMember;
use super::stats::Stat;

/// Which combined rating a mission type draws on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrewBlend {
    Dogfight,
    Bombing,
    Recon,
    Defensive,
}

impl CrewBlend {
    /// Divisor applied when the blend feeds the effectiveness score
    pub fn score_divisor(&self) -> f32 {
        match self {
            CrewBlend::Defensive => 20.0,
            _ => 10.0,
        }
    }
}

/// The crew occupying one aircraft
#[derive(Debug, Clone, Copy)]
pub struct CrewSeats<'a> {
    pub pilot: &'a CrewMember,
    pub gunner: Option<&'a CrewMember>,
    pub observer: Option<&'a CrewMember>,
}

fn weighted(crew: &CrewMember, weights: &[(Stat, f32)]) -> f32 {
    weights.iter().map(|(s, w)| crew.effective(*s) * w).sum()
}

pub fn pilot_dogfight(pilot: &CrewMember) -> f32 {
    weighted(pilot, &[(Stat::Fly, 0.35), (Stat::Gun, 0.30), (Stat::Rfx, 0.20), (Stat::Da, 0.15)])
}

pub fn pilot_bombing(pilot: &CrewMember) -> f32 {
    weighted(pilot, &[(Stat::Nav, 0.30), (Stat::Cmp, 0.30), (Stat::Fly, 0.20), (Stat::Dis, 0.20)])
}

pub fn pilot_recon(pilot: &CrewMember) -> f32 {
    weighted(pilot, &[(Stat::Oa, 0.30), (Stat::Nav, 0.30), (Stat::Fly, 0.20), (Stat::Adp, 0.20)])
}

pub fn pilot_defensive(pilot: &CrewMember) -> f32 {
    weighted(pilot, &[(Stat::Ta, 0.30), (Stat::Fly, 0.30), (Stat::Dis, 0.20), (Stat::Gun, 0.20)])
}

/// How well a pilot brings a reconnaissance machine home
pub fn pilot_recon_survival(pilot: &CrewMember) -> f32 {
    0.4 * pilot_recon(pilot) + 0.3 * pilot.effective(Stat::Da) + 0.3 * pilot.effective(Stat::Fly)
}

fn gunner_aim(gunner: &CrewMember) -> f32 {
    weighted(gunner, &[(Stat::Gun, 0.7), (Stat::Oa, 0.3)])
}

fn observer_spotting(observer: &CrewMember) -> f32 {
    weighted(observer, &[(Stat::Oa, 0.6), (Stat::Ta, 0.4)])
}

fn observer_bomb_aiming(observer: &CrewMember) -> f32 {
    weighted(observer, &[(Stat::Nav, 0.5), (Stat::Oa, 0.5)])
}

impl<'a> CrewSeats<'a> {
    pub fn solo(pilot: &'a CrewMember) -> Self {
        Self { pilot, gunner: None, observer: None }
    }

    pub fn has_secondary(&self) -> bool {
        self.gunner.is_some() || self.observer.is_some()
    }

    /// Combined rating for a mission blend (0..=100 scale)
    pub fn combined(&self, blend: CrewBlend) -> f32 {
        match blend {
            CrewBlend::Dogfight => {
                let pilot = pilot_dogfight(self.pilot);
                match self.gunner {
                    Some(g) => 0.8 * pilot + 0.2 * gunner_aim(g),
                    None => pilot,
                }
            }
            CrewBlend::Bombing => {
                let pilot = pilot_bombing(self.pilot);
                let secondary = self
                    .observer
                    .map(observer_bomb_aiming)
                    .or_else(|| self.gunner.map(|g| g.effective(Stat::Gun)));
                match secondary {
                    Some(s) => 0.7 * pilot + 0.3 * s,
                    None => pilot,
                }
            }
            CrewBlend::Recon => {
                let pilot = pilot_recon(self.pilot);
                match self.observer {
                    Some(o) => 0.6 * pilot + 0.4 * observer_spotting(o),
                    None => pilot,
                }
            }
            CrewBlend::Defensive => {
                let pilot = pilot_defensive(self.pilot);
                match self.gunner {
                    Some(g) => 0.7 * pilot + 0.3 * g.effective(Stat::Gun),
                    None => pilot,
                }
            }
        }
    }

    /// Reconnaissance score used by map discovery
    pub fn combined_recon(&self) -> f32 {
        let base = pilot_recon_survival(self.pilot);
        if let Some(o) = self.observer {
            base + 0.3 * o.effective(Stat::Oa) + 0.2 * o.effective(Stat::Ta)
        } else if let Some(g) = self.gunner {
            base + 0.2 * g.effective(Stat::Oa)
        } else {
            base
        }
    }
}

/// Threshold-gated pilot capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PilotSkill {
    Ace,
    Wingman,
    Steady,
}

impl PilotSkill {
    pub const ALL: [PilotSkill; 3] = [PilotSkill::Ace, PilotSkill::Wingman, PilotSkill::Steady];

    /// Flat bonus to the friendly effectiveness score
    pub fn score_bonus(&self) -> f32 {
        match self {
            PilotSkill::Ace => 3.0,
            PilotSkill::Wingman => 1.5,
            PilotSkill::Steady => 1.0,
        }
    }

    fn requirements(&self) -> &'static [(Stat, f32)] {
        match self {
            PilotSkill::Ace => &[(Stat::Fly, 75.0), (Stat::Gun, 70.0), (Stat::Rfx, 70.0)],
            PilotSkill::Wingman => &[(Stat::Ta, 65.0), (Stat::Dis, 60.0)],
            PilotSkill::Steady => &[(Stat::Cmp, 70.0), (Stat::Sta, 60.0)],
        }
    }

    pub fn qualifies(&self, pilot: &CrewMember) -> bool {
        self.requirements().iter().all(|(s, min)| pilot.effective(*s) >= *min)
    }
}

/// Skills a pilot currently qualifies for
pub fn pilot_skills(pilot: &CrewMember) -> Vec<PilotSkill> {
    PilotSkill::ALL.iter().copied().filter(|s| s.qualifies(pilot)).collect()
}
