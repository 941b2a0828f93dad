//! Contact and engagement
//!
//! Rolls for rare special encounters, then one contact roll that places the
//! sortie in one of four intensity tiers.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::dice::Dice;
use crate::core::config::EngineConfig;
use crate::sortie::{MissionLog, MissionType, Phase, SpecialEvent};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum ContactIntensity {
    #[display(fmt = "no contact")]
    None = 0,
    #[display(fmt = "a skirmish")]
    Skirmish = 1,
    #[display(fmt = "heavy fighting")]
    Heavy = 2,
    #[display(fmt = "an ambush")]
    Ambush = 3,
}

impl ContactIntensity {
    pub fn level(&self) -> u8 {
        *self as u8
    }

    pub fn had_contact(&self) -> bool {
        *self != ContactIntensity::None
    }

    /// Tier for a contact roll `roll` in [0, 100) against `chance`.
    ///
    /// A roll at or above the chance means no contact; below it, the three
    /// equal thirds of [0, chance) give Skirmish, Heavy and Ambush in order.
    pub fn from_roll(roll: f32, chance: f32) -> Self {
        if roll >= chance {
            ContactIntensity::None
        } else if roll < chance / 3.0 {
            ContactIntensity::Skirmish
        } else if roll < 2.0 * chance / 3.0 {
            ContactIntensity::Heavy
        } else {
            ContactIntensity::Ambush
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContactReport {
    pub intensity: ContactIntensity,
    pub special_event: Option<SpecialEvent>,
    pub chance: f32,
}

impl ContactReport {
    /// True when nothing at all happened in the air
    pub fn is_quiet(&self) -> bool {
        !self.intensity.had_contact() && self.special_event.is_none()
    }
}

/// Contact chance after distance and the Operations reduction, clamped
pub fn contact_chance(
    mission_type: MissionType,
    distance: f32,
    operations: u8,
    config: &EngineConfig,
) -> f32 {
    let profile = mission_type.profile();
    let base = profile.contact_base + profile.contact_per_distance * distance;
    let reduced = base - config.contact_reduction_per_operations * operations as f32;
    reduced.clamp(config.contact_floor, config.contact_ceiling)
}

/// Roll for the mission type's special encounter, if it has one
pub fn roll_special_event(mission_type: MissionType, dice: &mut dyn Dice) -> Option<SpecialEvent> {
    let (event, chance) = mission_type.profile().special_event?;
    dice.chance(chance).then_some(event)
}

pub fn simulate_contact(
    mission_type: MissionType,
    distance: f32,
    operations: u8,
    config: &EngineConfig,
    dice: &mut dyn Dice,
    log: &mut MissionLog,
) -> ContactReport {
    let special_event = roll_special_event(mission_type, dice);
    let chance = contact_chance(mission_type, distance, operations, config);
    let intensity = ContactIntensity::from_roll(dice.percent(), chance);

    if let Some(event) = special_event {
        log.push(Phase::Contact, format!("Special event: {}!", event));
    }
    log.push(Phase::Contact, format!("Contact: {} (chance {:.0}%)", intensity, chance));

    tracing::debug!(
        "Contact phase: {:?} intensity {} special {:?}",
        mission_type,
        intensity.level(),
        special_event
    );

    ContactReport {
        intensity,
        special_event,
        chance,
    }
}
