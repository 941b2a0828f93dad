//! Location - a place on the campaign map
//!
//! Locations start hidden and are revealed by reconnaissance flown close to
//! them. Once discovered they stay discovered.

use serde::{Deserialize, Serialize};

use crate::core::calendar::CampaignDate;
use crate::core::types::{LocationId, Vec2};

/// A location on the campaign map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapLocation {
    pub id: LocationId,
    pub name: String,
    pub position: Vec2,
    pub discovered: bool,
    pub discovered_on: Option<CampaignDate>,
}

impl MapLocation {
    pub fn hidden(id: LocationId, name: impl Into<String>, position: Vec2) -> Self {
        Self {
            id,
            name: name.into(),
            position,
            discovered: false,
            discovered_on: None,
        }
    }

    /// Reveal this location. Returns false if it was already known.
    pub fn discover(&mut self, date: CampaignDate) -> bool {
        if self.discovered {
            return false;
        }
        self.discovered = true;
        self.discovered_on = Some(date);
        true
    }
}
