//! Crew: stats, traits, ratings, growth and the personnel service

pub mod growth;
pub mod member;
pub mod ratings;
pub mod roster;
pub mod stats;
pub mod traits;

pub use growth::{apply_gains, diminishing_factor, scaled_gain, DailyProgress, GrowthOutcome};
pub use member::{CareerRecord, CrewMember, CrewStatus, HistoryEntry, Rank, MAX_FATIGUE};
pub use ratings::{pilot_skills, CrewBlend, CrewSeats, PilotSkill};
pub use roster::{PersonnelService, Roster};
pub use stats::{CrewStats, Stat, STAT_MAX};
pub use traits::{NegativeTrait, PositiveTrait, TraitSet, NEGATIVE_POOL, POSITIVE_POOL};
