//! Crew members
//!
//! A crew member persists across many sorties. The engine touches only the
//! mutable parts: stats, fatigue, merit, traits, career counters, status and
//! the career history.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::growth::{apply_gains, DailyProgress};
use super::stats::{CrewStats, Stat};
use super::traits::TraitSet;
use crate::core::calendar::CampaignDate;
use crate::core::types::CrewId;
use crate::sortie::MissionType;

/// Fatigue ceiling
pub const MAX_FATIGUE: f32 = 100.0;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    #[display(fmt = "2nd Lt.")]
    SecondLieutenant,
    #[display(fmt = "Lt.")]
    Lieutenant,
    #[display(fmt = "Capt.")]
    Captain,
    #[display(fmt = "Maj.")]
    Major,
}

/// Availability of a crew member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrewStatus {
    Active,
    Wounded { recovery_days: u32 },
    Hospitalized { recovery_days: u32 },
    Killed,
}

/// Lifetime counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerRecord {
    pub missions_flown: u32,
    pub victories: u32,
    pub ground_targets_destroyed: u32,
    pub times_wounded: u32,
    pub times_shot_down: u32,
}

/// One line of a crew member's career history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: CampaignDate,
    pub mission_type: MissionType,
    pub narrative: String,
    pub kills: u32,
    pub wounded: bool,
    pub shot_down: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewMember {
    pub id: CrewId,
    pub name: String,
    pub rank: Rank,
    pub stats: CrewStats,
    pub traits: TraitSet,
    pub fatigue: f32,
    pub merit: i32,
    pub status: CrewStatus,
    pub career: CareerRecord,
    pub history: Vec<HistoryEntry>,
    pub progress: DailyProgress,
}

impl CrewMember {
    pub fn new(name: impl Into<String>, stats: CrewStats) -> Self {
        Self {
            id: CrewId::new(),
            name: name.into(),
            rank: Rank::SecondLieutenant,
            stats,
            traits: TraitSet::new(),
            fatigue: 0.0,
            merit: 0,
            status: CrewStatus::Active,
            career: CareerRecord::default(),
            history: Vec::new(),
            progress: DailyProgress::default(),
        }
    }

    pub fn with_rank(mut self, rank: Rank) -> Self {
        self.rank = rank;
        self
    }

    /// Stat value after trait modifiers, clamped to 0..=100
    pub fn effective(&self, stat: Stat) -> f32 {
        (self.stats[stat] as i32 + self.traits.modifier_for(stat)).clamp(0, 100) as f32
    }

    pub fn is_alive(&self) -> bool {
        self.status != CrewStatus::Killed
    }

    pub fn add_fatigue(&mut self, amount: f32) {
        self.fatigue = (self.fatigue + amount).clamp(0.0, MAX_FATIGUE);
    }

    /// Fold raw improvements into stats through today's growth ledger.
    /// Returns the whole points actually gained.
    pub fn improve(&mut self, today: CampaignDate, gains: &[(Stat, f32)]) -> Vec<(Stat, u8)> {
        let outcome = apply_gains(&self.stats, &self.progress, today, gains);
        self.stats = outcome.stats;
        self.progress = outcome.progress;
        outcome.applied
    }

    /// Rank and name, e.g. "Lt. Hale"
    pub fn display_name(&self) -> String {
        format!("{} {}", self.rank, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crew::traits::{NegativeTrait, PositiveTrait};

    #[test]
    fn test_effective_stat_applies_traits() {
        let mut crew = CrewMember::new("Hale", CrewStats::uniform(50));
        crew.traits.add_positive(PositiveTrait::KeenEyed);
        crew.traits.add_negative(NegativeTrait::Reckless);
        assert_eq!(crew.effective(Stat::Oa), 55.0);
        assert_eq!(crew.effective(Stat::Dis), 45.0);
        assert_eq!(crew.effective(Stat::Gun), 50.0);
    }

    #[test]
    fn test_effective_stat_clamped() {
        let mut crew = CrewMember::new("Hale", CrewStats::uniform(2));
        crew.traits.add_negative(NegativeTrait::Jittery);
        assert_eq!(crew.effective(Stat::Cmp), 0.0);
    }

    #[test]
    fn test_fatigue_clamped() {
        let mut crew = CrewMember::new("Hale", CrewStats::default());
        crew.add_fatigue(250.0);
        assert_eq!(crew.fatigue, MAX_FATIGUE);
    }

    #[test]
    fn test_improve_carries_fraction_within_day() {
        let mut crew = CrewMember::new("Hale", CrewStats::uniform(50).with(Stat::Lrn, 100));
        assert!(crew.improve(CampaignDate(3), &[(Stat::Cmp, 0.6)]).is_empty());
        assert_eq!(crew.improve(CampaignDate(3), &[(Stat::Cmp, 0.6)]), vec![(Stat::Cmp, 1)]);
        assert_eq!(crew.stats[Stat::Cmp], 51);

        // New day starts a fresh ledger
        assert!(crew.improve(CampaignDate(4), &[(Stat::Cmp, 0.6)]).is_empty());
        assert_eq!(crew.progress.date, CampaignDate(4));
    }

    #[test]
    fn test_display_name() {
        let crew = CrewMember::new("Hale", CrewStats::default()).with_rank(Rank::Lieutenant);
        assert_eq!(crew.display_name(), "Lt. Hale");
    }
}
