//! Daily command directive
//!
//! Headquarters issues at most one directive per day: a priority with the
//! mission types that satisfy it, or an order to conserve resources.

use serde::{Deserialize, Serialize};

use crate::sortie::MissionType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyDirective {
    pub priority: String,
    /// Mission types that count as following today's orders (may be empty)
    pub matching: Vec<MissionType>,
    pub conserve_resources: bool,
}

impl DailyDirective {
    pub fn priority(priority: impl Into<String>, matching: Vec<MissionType>) -> Self {
        Self {
            priority: priority.into(),
            matching,
            conserve_resources: false,
        }
    }

    pub fn conserve() -> Self {
        Self {
            priority: "Conserve resources".to_string(),
            matching: Vec::new(),
            conserve_resources: true,
        }
    }

    pub fn matches(&self, mission_type: MissionType) -> bool {
        self.matching.contains(&mission_type)
    }
}
