//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for crew members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CrewId(pub Uuid);

impl CrewId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CrewId {
    fn default() -> Self {
        Self::new()
    }
}

/// Unique identifier for aircraft units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AircraftId(pub Uuid);

impl AircraftId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AircraftId {
    fn default() -> Self {
        Self::new()
    }
}

/// Location identifier for the campaign map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocationId(pub u32);

/// 2D position in map distance units
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl From<Vec2> for geo::Point<f64> {
    fn from(v: Vec2) -> Self {
        geo::Point::new(v.x as f64, v.y as f64)
    }
}

impl From<Vec2> for geo::Coord<f64> {
    fn from(v: Vec2) -> Self {
        geo::Coord { x: v.x as f64, y: v.y as f64 }
    }
}
