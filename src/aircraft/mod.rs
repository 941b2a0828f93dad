//! Aircraft types, units and the hangar

pub mod catalog;
pub mod unit;

pub use catalog::{AircraftType, EffectivenessRole};
pub use unit::{AircraftStatus, AircraftUnit, Hangar, MAX_CONDITION};
