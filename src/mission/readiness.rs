//! Readiness gate
//!
//! Checks stocks and infrastructure before anything is spent. A blocked
//! sortie is aborted with no resource, aircraft or crew mutation.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::costs::sortie_costs;
use crate::aircraft::AircraftType;
use crate::base::BaseResourcePool;
use crate::core::config::EngineConfig;
use crate::sortie::{MissionLog, Phase, ResourceUsage, Sortie};

/// Flights per point of Maintenance rating before ground crews are strained
const FLIGHTS_PER_MAINTENANCE: usize = 2;

/// Why the gate refused a launch
#[derive(Debug, Display, Clone, PartialEq, Serialize, Deserialize)]
pub enum BlockReason {
    #[display(fmt = "insufficient fuel (need {}, have {})", needed, available)]
    InsufficientFuel { needed: u32, available: u32 },
    #[display(fmt = "insufficient ammunition (need {}, have {})", needed, available)]
    InsufficientAmmo { needed: u32, available: u32 },
    #[display(fmt = "{} needs runway {} but base runway is {}", aircraft, required, available)]
    RunwayTooShort { aircraft: String, required: u8, available: u8 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Readiness {
    Green { costs: ResourceUsage, strained: bool },
    Blocked { reasons: Vec<BlockReason> },
}

/// Evaluate launch preconditions. Reads `pool`; never modifies it.
pub fn check_readiness(
    sortie: &Sortie,
    aircraft: &[&AircraftType],
    pool: &BaseResourcePool,
    config: &EngineConfig,
    log: &mut MissionLog,
) -> Readiness {
    let costs = sortie_costs(
        aircraft,
        sortie.mission_type,
        sortie.target_distance,
        pool.efficiency_bonus,
        config,
    );

    let mut reasons = Vec::new();

    if pool.fuel < costs.fuel {
        reasons.push(BlockReason::InsufficientFuel {
            needed: costs.fuel,
            available: pool.fuel,
        });
    }

    if pool.ammo < costs.ammo {
        reasons.push(BlockReason::InsufficientAmmo {
            needed: costs.ammo,
            available: pool.ammo,
        });
    }

    let runway = pool.facilities.runway;
    for t in aircraft.iter().filter(|t| t.runway_requirement > runway) {
        reasons.push(BlockReason::RunwayTooShort {
            aircraft: t.name.clone(),
            required: t.runway_requirement,
            available: runway,
        });
    }

    if !reasons.is_empty() {
        for reason in &reasons {
            log.push(Phase::Readiness, format!("Readiness: RED - {}", reason));
        }
        return Readiness::Blocked { reasons };
    }

    let strained = sortie.assignments.len() > FLIGHTS_PER_MAINTENANCE * pool.facilities.maintenance as usize;
    if strained {
        log.push(
            Phase::Readiness,
            format!(
                "Warning: {} flights strain a maintenance section rated {}",
                sortie.assignments.len(),
                pool.facilities.maintenance
            ),
        );
    }

    log.push(Phase::Readiness, "Readiness: GREEN");
    Readiness::Green { costs, strained }
}
