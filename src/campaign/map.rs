//! Campaign map - hidden locations and flight-path geometry
//!
//! The strategic world graph is generated elsewhere; this module only knows
//! where locations are and whether they have been found.

use geo::{EuclideanDistance, Line, Point};
use serde::{Deserialize, Serialize};

use super::location::MapLocation;
use crate::core::calendar::CampaignDate;
use crate::core::types::{LocationId, Vec2};

/// Map/discovery service consumed by the engine
pub trait MapService {
    fn locations(&self) -> &[MapLocation];

    /// Mark a location discovered. Returns false if unknown or already found.
    fn mark_discovered(&mut self, id: LocationId, date: CampaignDate) -> bool;
}

/// In-memory campaign map
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CampaignMap {
    locations: Vec<MapLocation>,
}

impl CampaignMap {
    pub fn new(locations: Vec<MapLocation>) -> Self {
        Self { locations }
    }

    pub fn add(&mut self, location: MapLocation) {
        self.locations.push(location);
    }

    pub fn get(&self, id: LocationId) -> Option<&MapLocation> {
        self.locations.iter().find(|l| l.id == id)
    }

    pub fn undiscovered(&self) -> impl Iterator<Item = &MapLocation> {
        self.locations.iter().filter(|l| !l.discovered)
    }
}

impl MapService for CampaignMap {
    fn locations(&self) -> &[MapLocation] {
        &self.locations
    }

    fn mark_discovered(&mut self, id: LocationId, date: CampaignDate) -> bool {
        self.locations
            .iter_mut()
            .find(|l| l.id == id)
            .map_or(false, |l| l.discover(date))
    }
}

/// Shortest distance from `point` to the polyline through `waypoints`.
///
/// Returns `None` when there are fewer than two waypoints (no segment).
pub fn distance_to_path(point: Vec2, waypoints: &[Vec2]) -> Option<f32> {
    let p: Point<f64> = point.into();
    waypoints
        .windows(2)
        .map(|leg| p.euclidean_distance(&Line::<f64>::new(leg[0], leg[1])))
        .min_by(|a, b| a.total_cmp(b))
        .map(|d| d as f32)
}
