//! Sortie resolution pipeline

pub mod consequence;
pub mod contact;
pub mod costs;
pub mod dice;
pub mod discovery;
pub mod effectiveness;
pub mod engine;
pub mod finalize;
pub mod narrative;
pub mod orders;
pub mod outcome;
pub mod progression;
pub mod readiness;

pub use consequence::{AircraftFate, CrewFate, FlightOutcome};
pub use contact::{contact_chance, ContactIntensity, ContactReport};
pub use costs::sortie_costs;
pub use dice::{Dice, RngDice, ScriptedDice};
pub use discovery::Discovery;
pub use effectiveness::{FlightScore, Scores};
pub use engine::{MissionEngine, SortieContext, SortieReport};
pub use finalize::finalize_band;
pub use orders::evaluate_orders;
pub use readiness::{BlockReason, Readiness};
