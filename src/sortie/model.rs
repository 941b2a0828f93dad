//! The sortie aggregate
//!
//! A sortie is created Planned by the planner, flips to Active when
//! resolution begins and ends Resolved or Aborted.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::band::ResultBand;
use super::log::MissionLog;
use super::mission_type::MissionType;
use crate::core::types::{AircraftId, CrewId, Vec2};

/// Shortest target distance a planner may set
pub const MIN_TARGET_DISTANCE: f32 = 1.0;

/// Longest target distance a planner may set
pub const MAX_TARGET_DISTANCE: f32 = 150.0;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskPosture {
    Conservative,
    Standard,
    Aggressive,
}

impl RiskPosture {
    /// Multiplier on the friendly/opposing score ratio
    pub fn ratio_factor(&self) -> f32 {
        match self {
            RiskPosture::Conservative => 0.9,
            RiskPosture::Standard => 1.0,
            RiskPosture::Aggressive => 1.15,
        }
    }

    /// Multiplier on fatigue gained
    pub fn fatigue_factor(&self) -> f32 {
        match self {
            RiskPosture::Conservative => 0.75,
            RiskPosture::Standard => 1.0,
            RiskPosture::Aggressive => 1.25,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortieStatus {
    Planned,
    Active,
    Resolved,
    Aborted,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrewRole {
    Pilot,
    Gunner,
    Observer,
}

/// One aircraft and its crew on this sortie
///
/// Aircraft and pilot are required by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightAssignment {
    pub aircraft: AircraftId,
    pub pilot: CrewId,
    pub gunner: Option<CrewId>,
    pub observer: Option<CrewId>,
    pub kills_this_sortie: u32,
}

impl FlightAssignment {
    pub fn new(aircraft: AircraftId, pilot: CrewId) -> Self {
        Self {
            aircraft,
            pilot,
            gunner: None,
            observer: None,
            kills_this_sortie: 0,
        }
    }

    pub fn with_gunner(mut self, gunner: CrewId) -> Self {
        self.gunner = Some(gunner);
        self
    }

    pub fn with_observer(mut self, observer: CrewId) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Occupied seats, pilot first
    pub fn seats(&self) -> impl Iterator<Item = (CrewRole, CrewId)> {
        std::iter::once((CrewRole::Pilot, self.pilot))
            .chain(self.gunner.map(|id| (CrewRole::Gunner, id)))
            .chain(self.observer.map(|id| (CrewRole::Observer, id)))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceUsage {
    pub fuel: u32,
    pub ammo: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CasualtyCounts {
    pub aircraft_lost: u32,
    pub crew_wounded: u32,
    pub crew_killed: u32,
    pub enemy_kills: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderCompliance {
    pub followed: bool,
    pub bonus: i32,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sortie {
    pub mission_type: MissionType,
    /// Abstract distance units, 1-150
    pub target_distance: f32,
    pub risk: RiskPosture,
    pub status: SortieStatus,
    pub assignments: Vec<FlightAssignment>,
    /// Flight path from base to target, in map coordinates
    pub waypoints: Vec<Vec2>,
    pub result: Option<ResultBand>,
    pub log: MissionLog,
    pub consumed: ResourceUsage,
    pub casualties: CasualtyCounts,
    pub orders: OrderCompliance,
}

impl Sortie {
    pub fn new(mission_type: MissionType, target_distance: f32, risk: RiskPosture) -> Self {
        Self {
            mission_type,
            target_distance: target_distance.clamp(MIN_TARGET_DISTANCE, MAX_TARGET_DISTANCE),
            risk,
            status: SortieStatus::Planned,
            assignments: Vec::new(),
            waypoints: Vec::new(),
            result: None,
            log: MissionLog::new(),
            consumed: ResourceUsage::default(),
            casualties: CasualtyCounts::default(),
            orders: OrderCompliance::default(),
        }
    }

    pub fn with_assignment(mut self, assignment: FlightAssignment) -> Self {
        self.assignments.push(assignment);
        self
    }

    pub fn with_waypoints(mut self, waypoints: Vec<Vec2>) -> Self {
        self.waypoints = waypoints;
        self
    }
}
