//! Engine configuration with documented constants
//!
//! Tunables that shape sortie resolution are collected here. Formula weights
//! that define the combat model itself live beside the formulas.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::error::{Result, SortieError};

/// Configuration for the mission resolution engine
///
/// Defaults reproduce the reference balance. A TOML file may override any
/// subset of fields; missing fields keep their default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    // === CONTACT ===
    /// Lowest possible contact chance after the Operations reduction (percent)
    pub contact_floor: f32,

    /// Highest possible contact chance (percent)
    pub contact_ceiling: f32,

    /// Contact chance removed per point of Operations rating
    ///
    /// At 5.0, a rating-5 operations room removes 25 points of contact chance.
    pub contact_reduction_per_operations: f32,

    // === COSTS ===
    /// Upper bound on the base efficiency bonus applied to fuel and ammo costs
    pub max_efficiency: f32,

    /// Minimum fuel charged for any launched sortie
    pub min_fuel_cost: u32,

    /// Minimum ammunition charged for any launched sortie
    pub min_ammo_cost: u32,

    // === CASUALTIES ===
    /// Inclusive range of recovery days for a wounded crew member
    pub wound_days: (u32, u32),

    /// Inclusive range of days in hospital after a breakdown
    pub hospital_days: (u32, u32),

    // === PROGRESSION ===
    /// Fatigue gained by every sortie regardless of distance
    pub fatigue_base: f32,

    /// Fatigue gained per unit of target distance
    pub fatigue_per_distance: f32,

    /// Base chance (percent) of a trait breakout per pilot per sortie
    pub trait_base_chance: f32,

    // === DISCOVERY ===
    /// Locations strictly closer than this to the flight path are candidates
    pub discovery_radius: f32,

    /// Flat discovery chance before distance and recon terms (percent)
    pub discovery_base_chance: f32,

    /// Target distance is divided by this before adding to discovery chance
    pub discovery_distance_divisor: f32,

    /// Combined recon score is divided by this before adding to discovery chance
    pub discovery_recon_divisor: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            contact_floor: 10.0,
            contact_ceiling: 95.0,
            contact_reduction_per_operations: 5.0,

            max_efficiency: 0.9,
            min_fuel_cost: 1,
            min_ammo_cost: 1,

            wound_days: (3, 10),
            hospital_days: (7, 14),

            fatigue_base: 10.0,
            fatigue_per_distance: 1.5,
            trait_base_chance: 5.0,

            discovery_radius: 15.0,
            discovery_base_chance: 5.0,
            discovery_distance_divisor: 5.0,
            discovery_recon_divisor: 10.0,
        }
    }
}

impl EngineConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.contact_floor > self.contact_ceiling {
            return Err(format!(
                "contact_floor ({}) should be <= contact_ceiling ({})",
                self.contact_floor, self.contact_ceiling
            ));
        }

        if !(0.0..=1.0).contains(&self.max_efficiency) {
            return Err(format!(
                "max_efficiency ({}) must lie in [0, 1]",
                self.max_efficiency
            ));
        }

        if self.wound_days.0 > self.wound_days.1 || self.hospital_days.0 > self.hospital_days.1 {
            return Err("Day ranges must be ordered (min, max)".into());
        }

        if self.discovery_radius <= 0.0 {
            return Err("discovery_radius must be positive".into());
        }

        if self.discovery_distance_divisor <= 0.0 || self.discovery_recon_divisor <= 0.0 {
            return Err("Discovery divisors must be positive".into());
        }

        Ok(())
    }
}

/// Parse and validate a config from TOML text
pub fn parse_config(content: &str) -> Result<EngineConfig> {
    let config: EngineConfig = toml::from_str(content)?;
    config.validate().map_err(SortieError::InvalidConfig)?;
    Ok(config)
}

/// Load a config from a TOML file
pub fn load_config(path: impl AsRef<Path>) -> Result<EngineConfig> {
    let content = fs::read_to_string(path.as_ref())?;
    parse_config(&content)
}
