//! Aircraft units and the hangar that holds them

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::catalog::AircraftType;
use crate::core::types::AircraftId;

/// Full airframe condition
pub const MAX_CONDITION: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AircraftStatus {
    Ready,
    Assigned,
    Repairing,
    Damaged,
    Lost,
}

/// One airframe on strength
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AircraftUnit {
    pub id: AircraftId,
    pub aircraft_type: Arc<AircraftType>,
    /// 0-100
    pub condition: f32,
    pub status: AircraftStatus,
}

impl AircraftUnit {
    pub fn new(aircraft_type: Arc<AircraftType>) -> Self {
        Self {
            id: AircraftId::new(),
            aircraft_type,
            condition: MAX_CONDITION,
            status: AircraftStatus::Ready,
        }
    }

    pub fn with_condition(mut self, condition: f32) -> Self {
        self.condition = condition.clamp(0.0, MAX_CONDITION);
        self
    }

    /// Inherent stress plus wear
    pub fn airframe_stress(&self) -> f32 {
        self.aircraft_type.structural_stress + (MAX_CONDITION - self.condition) / 2.0
    }

    pub fn is_lost(&self) -> bool {
        self.status == AircraftStatus::Lost
    }

    /// Knock `points` off condition and mark the airframe damaged
    pub fn apply_damage(&mut self, points: f32) {
        self.condition = (self.condition - points).max(0.0);
        self.status = AircraftStatus::Damaged;
    }

    pub fn mark_lost(&mut self) {
        self.condition = 0.0;
        self.status = AircraftStatus::Lost;
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Hangar {
    units: AHashMap<AircraftId, AircraftUnit>,
}

impl Hangar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, unit: AircraftUnit) -> AircraftId {
        let id = unit.id;
        self.units.insert(id, unit);
        id
    }

    pub fn get(&self, id: AircraftId) -> Option<&AircraftUnit> {
        self.units.get(&id)
    }

    pub fn get_mut(&mut self, id: AircraftId) -> Option<&mut AircraftUnit> {
        self.units.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
