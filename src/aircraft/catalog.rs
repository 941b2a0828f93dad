//! Aircraft types and their static effectiveness
//!
//! Performance attributes use a 1-10 scale. The effectiveness formulas are
//! fixed weighted sums of those attributes; only the crew and condition of a
//! particular unit vary from sortie to sortie.

use serde::{Deserialize, Serialize};

/// Which static effectiveness an aircraft contributes on a mission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectivenessRole {
    Fighter,
    Bomber,
    Recon,
    /// Mean of fighter effectiveness and durability
    Escort,
    /// Mean of fighter and bomber effectiveness
    GroundAttack,
}

/// Immutable catalog entry for an aircraft model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftType {
    pub name: String,
    /// Crew positions including the pilot (1-3)
    pub seats: u8,

    pub speed: f32,
    pub climb: f32,
    pub turn: f32,
    pub firepower: f32,
    pub rear_firepower: f32,
    pub accuracy: f32,
    pub stability: f32,
    pub dive_safety: f32,
    pub durability: f32,
    pub bomb_load: f32,
    pub camera: f32,
    pub range: f32,

    pub fighter_role: f32,
    pub bomber_role: f32,
    pub recon_role: f32,

    /// Minimum runway rating (1-5) the type can operate from
    pub runway_requirement: u8,
    pub fuel_consumption: f32,
    pub ammo_consumption: f32,
    /// Inherent airframe stress (0-60) before wear is added
    pub structural_stress: f32,
}

impl AircraftType {
    pub fn fighter_effectiveness(&self) -> f32 {
        self.fighter_role
            + 0.6 * (self.speed + self.climb + self.turn)
            + 0.7 * self.firepower
            + 0.5 * self.accuracy
            + 0.3 * (self.stability + self.dive_safety)
    }

    pub fn bomber_effectiveness(&self) -> f32 {
        self.bomber_role
            + 0.8 * self.bomb_load
            + 0.5 * self.stability
            + 0.4 * self.accuracy
            + 0.3 * self.durability
            + 0.2 * self.range
    }

    pub fn recon_effectiveness(&self) -> f32 {
        self.recon_role
            + 0.8 * self.camera
            + 0.5 * self.speed
            + 0.4 * self.climb
            + 0.3 * self.stability
            + 0.2 * self.range
    }

    pub fn durability_rating(&self) -> f32 {
        1.5 * self.durability + 0.5 * self.dive_safety + 0.3 * self.stability
    }

    pub fn role_effectiveness(&self, role: EffectivenessRole) -> f32 {
        match role {
            EffectivenessRole::Fighter => self.fighter_effectiveness(),
            EffectivenessRole::Bomber => self.bomber_effectiveness(),
            EffectivenessRole::Recon => self.recon_effectiveness(),
            EffectivenessRole::Escort => {
                (self.fighter_effectiveness() + self.durability_rating()) / 2.0
            }
            EffectivenessRole::GroundAttack => {
                (self.fighter_effectiveness() + self.bomber_effectiveness()) / 2.0
            }
        }
    }

    pub fn is_multi_seat(&self) -> bool {
        self.seats >= 2
    }

    // === STOCK TYPES ===

    /// Single-seat scout
    pub fn scout() -> Self {
        Self {
            name: "Scout".to_string(),
            seats: 1,
            speed: 7.0,
            climb: 6.0,
            turn: 8.0,
            firepower: 6.0,
            rear_firepower: 0.0,
            accuracy: 6.0,
            stability: 4.0,
            dive_safety: 5.0,
            durability: 4.0,
            bomb_load: 0.0,
            camera: 1.0,
            range: 4.0,
            fighter_role: 6.0,
            bomber_role: 0.0,
            recon_role: 1.0,
            runway_requirement: 2,
            fuel_consumption: 10.0,
            ammo_consumption: 8.0,
            structural_stress: 15.0,
        }
    }

    /// Two-seat reconnaissance machine
    pub fn two_seater() -> Self {
        Self {
            name: "Two-Seater".to_string(),
            seats: 2,
            speed: 5.0,
            climb: 4.0,
            turn: 4.0,
            firepower: 4.0,
            rear_firepower: 5.0,
            accuracy: 5.0,
            stability: 7.0,
            dive_safety: 5.0,
            durability: 6.0,
            bomb_load: 3.0,
            camera: 7.0,
            range: 6.0,
            fighter_role: 2.0,
            bomber_role: 3.0,
            recon_role: 6.0,
            runway_requirement: 2,
            fuel_consumption: 14.0,
            ammo_consumption: 6.0,
            structural_stress: 10.0,
        }
    }

    /// Heavy two-seat day bomber
    pub fn day_bomber() -> Self {
        Self {
            name: "Day Bomber".to_string(),
            seats: 2,
            speed: 4.0,
            climb: 3.0,
            turn: 3.0,
            firepower: 3.0,
            rear_firepower: 6.0,
            accuracy: 5.0,
            stability: 8.0,
            dive_safety: 4.0,
            durability: 7.0,
            bomb_load: 8.0,
            camera: 3.0,
            range: 7.0,
            fighter_role: 1.0,
            bomber_role: 7.0,
            recon_role: 2.0,
            runway_requirement: 3,
            fuel_consumption: 20.0,
            ammo_consumption: 10.0,
            structural_stress: 25.0,
        }
    }
}
