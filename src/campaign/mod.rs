pub mod command;
pub mod directive;
pub mod location;
pub mod map;

pub use command::{Captain, CommandService};
pub use directive::DailyDirective;
pub use location::MapLocation;
pub use map::{distance_to_path, CampaignMap, MapService};
