//! Sortie Engine - squadron mission resolution
//!
//! Resolves one planned sortie at a time: order compliance, readiness,
//! contact, effectiveness scoring, outcome, losses, crew progression and map
//! discovery. Randomness and every collaborator are passed in explicitly.

pub mod aircraft;
pub mod base;
pub mod campaign;
pub mod core;
pub mod crew;
pub mod mission;
pub mod sortie;
