//! Sortie data model: mission types, assignments, result bands and the log

pub mod band;
pub mod log;
pub mod mission_type;
pub mod model;

pub use band::ResultBand;
pub use log::{LogEntry, MissionLog, Phase};
pub use mission_type::{MissionProfile, MissionType, SpecialEvent};
pub use model::{
    CasualtyCounts, CrewRole, FlightAssignment, OrderCompliance, ResourceUsage, RiskPosture,
    Sortie, SortieStatus, MAX_TARGET_DISTANCE, MIN_TARGET_DISTANCE,
};
