//! Map discovery
//!
//! Hidden locations close to the flight path may be spotted on the way. At
//! most one location is revealed per sortie.

use serde::{Deserialize, Serialize};

use super::consequence::FlightOutcome;
use super::dice::Dice;
use super::engine::SortieContext;
use crate::campaign::{distance_to_path, MapLocation};
use crate::core::config::EngineConfig;
use crate::core::types::{LocationId, Vec2};
use crate::crew::{CrewSeats, PersonnelService};
use crate::sortie::{FlightAssignment, MissionLog, Phase, Sortie};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discovery {
    pub location: LocationId,
    pub name: String,
}

/// Undiscovered locations strictly inside `radius` of the flight path
pub fn discovery_candidates<'a>(
    locations: &'a [MapLocation],
    waypoints: &[Vec2],
    radius: f32,
) -> Vec<&'a MapLocation> {
    locations
        .iter()
        .filter(|l| !l.discovered)
        .filter(|l| distance_to_path(l.position, waypoints).is_some_and(|d| d < radius))
        .collect()
}

pub fn discovery_chance(distance: f32, recon_score: f32, config: &EngineConfig) -> f32 {
    config.discovery_base_chance
        + distance / config.discovery_distance_divisor
        + recon_score / config.discovery_recon_divisor
}

/// Sum of combined recon ratings over all flights
pub fn recon_score(assignments: &[FlightAssignment], roster: &dyn PersonnelService) -> f32 {
    assignments
        .iter()
        .filter_map(|a| {
            let pilot = roster.crew(a.pilot)?;
            let seats = CrewSeats {
                pilot,
                gunner: a.gunner.and_then(|id| roster.crew(id)),
                observer: a.observer.and_then(|id| roster.crew(id)),
            };
            Some(seats.combined_recon())
        })
        .sum()
}

pub fn resolve_discovery(
    sortie: &Sortie,
    outcomes: &[FlightOutcome],
    ctx: &mut SortieContext<'_>,
    config: &EngineConfig,
    dice: &mut dyn Dice,
    log: &mut MissionLog,
) -> Option<Discovery> {
    if outcomes.iter().all(FlightOutcome::aircraft_lost) {
        return None;
    }

    let score = recon_score(&sortie.assignments, &*ctx.roster);
    let candidates: Vec<Discovery> =
        discovery_candidates(ctx.map.locations(), &sortie.waypoints, config.discovery_radius)
            .into_iter()
            .map(|l| Discovery {
                location: l.id,
                name: l.name.clone(),
            })
            .collect();

    if candidates.is_empty() {
        return None;
    }

    let chance = discovery_chance(sortie.target_distance, score, config);
    if !dice.chance(chance) {
        tracing::debug!("Discovery roll failed against {:.1}% ({} candidates)", chance, candidates.len());
        return None;
    }

    let found = candidates[dice.index(candidates.len())].clone();
    if !ctx.map.mark_discovered(found.location, ctx.date) {
        return None;
    }

    log.push(Phase::Discovery, format!("Discovered: {}", found.name));
    tracing::info!("Sortie discovered {} on {}", found.name, ctx.date);
    Some(found)
}
