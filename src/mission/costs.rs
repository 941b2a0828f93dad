//! Fuel and ammunition costs
//!
//! Shared by the readiness gate (what the sortie needs) and the consequence
//! phase (what it burns), so the two always agree.

use crate::aircraft::AircraftType;
use crate::core::config::EngineConfig;
use crate::sortie::{MissionType, ResourceUsage};

/// Distance at which fuel consumption doubles
const FUEL_DISTANCE_SCALE: f32 = 50.0;

fn efficiency_multiplier(efficiency: f32, config: &EngineConfig) -> f32 {
    1.0 - efficiency.clamp(0.0, config.max_efficiency)
}

pub fn fuel_cost<'a>(
    aircraft: impl IntoIterator<Item = &'a AircraftType>,
    distance: f32,
    efficiency: f32,
    config: &EngineConfig,
) -> u32 {
    let raw: f32 = aircraft
        .into_iter()
        .map(|t| t.fuel_consumption * (1.0 + distance / FUEL_DISTANCE_SCALE))
        .sum();
    let cost = (raw * efficiency_multiplier(efficiency, config)).round() as u32;
    cost.max(config.min_fuel_cost)
}

pub fn ammo_cost<'a>(
    aircraft: impl IntoIterator<Item = &'a AircraftType>,
    mission_type: MissionType,
    efficiency: f32,
    config: &EngineConfig,
) -> u32 {
    let factor = mission_type.profile().ammo_factor;
    let raw: f32 = aircraft.into_iter().map(|t| t.ammo_consumption * factor).sum();
    let cost = (raw * efficiency_multiplier(efficiency, config)).round() as u32;
    cost.max(config.min_ammo_cost)
}

/// Fuel and ammunition a sortie flown by `aircraft` will consume
pub fn sortie_costs(
    aircraft: &[&AircraftType],
    mission_type: MissionType,
    distance: f32,
    efficiency: f32,
    config: &EngineConfig,
) -> ResourceUsage {
    ResourceUsage {
        fuel: fuel_cost(aircraft.iter().copied(), distance, efficiency, config),
        ammo: ammo_cost(aircraft.iter().copied(), mission_type, efficiency, config),
    }
}
