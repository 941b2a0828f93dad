//! Mission types and their profile table
//!
//! Every per-type formula input lives in one `MissionProfile` row. Phases
//! look values up here instead of branching on the mission type themselves.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::aircraft::EffectivenessRole;
use crate::crew::{CrewBlend, Stat};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionType {
    Patrol,
    Interception,
    Escort,
    Reconnaissance,
    Bombing,
    Strafing,
    #[display(fmt = "Artillery Spotting")]
    ArtillerySpotting,
}

/// Rare encounters rolled independently of the contact roll
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecialEvent {
    #[display(fmt = "Ace Encounter")]
    AceEncounter,
    #[display(fmt = "Zeppelin")]
    Zeppelin,
}

impl SpecialEvent {
    /// Multiplier applied to the opposing score
    pub fn opposition_multiplier(&self) -> f32 {
        match self {
            SpecialEvent::AceEncounter => 2.5,
            SpecialEvent::Zeppelin => 3.0,
        }
    }
}

/// Static formula inputs for one mission type
#[derive(Debug, Clone, Copy)]
pub struct MissionProfile {
    /// Contact chance before distance and Operations (percent)
    pub contact_base: f32,
    /// Contact chance added per unit of target distance
    pub contact_per_distance: f32,
    /// Special event and its percent chance
    pub special_event: Option<(SpecialEvent, f32)>,
    /// Order-compliance bonus when the type matches the directive
    pub order_bonus: i32,
    pub aircraft_role: EffectivenessRole,
    pub crew_blend: CrewBlend,
    /// Multiplier on per-aircraft ammunition consumption
    pub ammo_factor: f32,
    /// Raw stat improvements for each participating pilot
    pub pilot_gains: &'static [(Stat, f32)],
    /// Each pilot is credited with a destroyed ground target
    pub ground_attack: bool,
}

static PATROL: MissionProfile = MissionProfile {
    contact_base: 40.0,
    contact_per_distance: 0.3,
    special_event: Some((SpecialEvent::AceEncounter, 5.0)),
    order_bonus: 10,
    aircraft_role: EffectivenessRole::Fighter,
    crew_blend: CrewBlend::Dogfight,
    ammo_factor: 1.0,
    pilot_gains: &[(Stat::Da, 0.5), (Stat::Cmp, 0.5)],
    ground_attack: false,
};

static INTERCEPTION: MissionProfile = MissionProfile {
    contact_base: 60.0,
    contact_per_distance: 0.2,
    special_event: Some((SpecialEvent::AceEncounter, 5.0)),
    order_bonus: 10,
    aircraft_role: EffectivenessRole::Fighter,
    crew_blend: CrewBlend::Dogfight,
    ammo_factor: 1.2,
    pilot_gains: &[(Stat::Da, 0.5), (Stat::Cmp, 0.5)],
    ground_attack: false,
};

static ESCORT: MissionProfile = MissionProfile {
    contact_base: 50.0,
    contact_per_distance: 0.4,
    special_event: None,
    order_bonus: 15,
    aircraft_role: EffectivenessRole::Escort,
    crew_blend: CrewBlend::Defensive,
    ammo_factor: 1.0,
    pilot_gains: &[(Stat::Ta, 0.8), (Stat::Dis, 0.5)],
    ground_attack: false,
};

static RECONNAISSANCE: MissionProfile = MissionProfile {
    contact_base: 30.0,
    contact_per_distance: 0.5,
    special_event: Some((SpecialEvent::Zeppelin, 3.0)),
    order_bonus: 15,
    aircraft_role: EffectivenessRole::Recon,
    crew_blend: CrewBlend::Recon,
    ammo_factor: 0.3,
    pilot_gains: &[(Stat::Adp, 1.0), (Stat::Da, 1.0), (Stat::Oa, 0.5)],
    ground_attack: false,
};

static BOMBING: MissionProfile = MissionProfile {
    contact_base: 50.0,
    contact_per_distance: 0.5,
    special_event: Some((SpecialEvent::Zeppelin, 3.0)),
    order_bonus: 20,
    aircraft_role: EffectivenessRole::Bomber,
    crew_blend: CrewBlend::Bombing,
    ammo_factor: 2.0,
    pilot_gains: &[(Stat::Gun, 0.8), (Stat::Dis, 0.5)],
    ground_attack: false,
};

static STRAFING: MissionProfile = MissionProfile {
    contact_base: 50.0,
    contact_per_distance: 0.0,
    special_event: None,
    order_bonus: 20,
    aircraft_role: EffectivenessRole::GroundAttack,
    crew_blend: CrewBlend::Bombing,
    ammo_factor: 1.5,
    pilot_gains: &[(Stat::Gun, 0.8), (Stat::Dis, 0.5)],
    ground_attack: true,
};

static ARTILLERY_SPOTTING: MissionProfile = MissionProfile {
    contact_base: 50.0,
    contact_per_distance: 0.0,
    special_event: None,
    order_bonus: 10,
    aircraft_role: EffectivenessRole::Recon,
    crew_blend: CrewBlend::Recon,
    ammo_factor: 0.3,
    pilot_gains: &[],
    ground_attack: false,
};

impl MissionType {
    pub const ALL: [MissionType; 7] = [
        MissionType::Patrol,
        MissionType::Interception,
        MissionType::Escort,
        MissionType::Reconnaissance,
        MissionType::Bombing,
        MissionType::Strafing,
        MissionType::ArtillerySpotting,
    ];

    pub fn profile(&self) -> &'static MissionProfile {
        match self {
            MissionType::Patrol => &PATROL,
            MissionType::Interception => &INTERCEPTION,
            MissionType::Escort => &ESCORT,
            MissionType::Reconnaissance => &RECONNAISSANCE,
            MissionType::Bombing => &BOMBING,
            MissionType::Strafing => &STRAFING,
            MissionType::ArtillerySpotting => &ARTILLERY_SPOTTING,
        }
    }

    /// Parse a mission type from a command-line style name
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = name.replace(['-', '_', ' '], "").to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|t| format!("{:?}", t).to_ascii_lowercase() == wanted)
    }
}
