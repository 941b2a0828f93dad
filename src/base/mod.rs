//! Airbase resources and facilities

pub mod resources;

pub use resources::{BaseResourcePool, FacilityRatings, MAX_RATING, MIN_RATING};
