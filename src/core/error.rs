use thiserror::Error;

use crate::core::types::{AircraftId, CrewId};
use crate::sortie::SortieStatus;

#[derive(Error, Debug)]
pub enum SortieError {
    #[error("Sortie must be Planned to resolve, found {0:?}")]
    NotPlanned(SortieStatus),

    #[error("Sortie has no flight assignments")]
    NoAssignments,

    #[error("Aircraft not found in hangar: {0:?}")]
    UnknownAircraft(AircraftId),

    #[error("Crew member not found on roster: {0:?}")]
    UnknownCrew(CrewId),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SortieError>;
