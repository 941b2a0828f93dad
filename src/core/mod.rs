pub mod calendar;
pub mod config;
pub mod error;
pub mod types;

pub use calendar::{Calendar, CampaignDate};
pub use config::{load_config, parse_config, EngineConfig};
pub use error::{Result, SortieError};
