//! Stat growth
//!
//! Raw improvements are scaled by the learner's LRN, cut by diminishing
//! returns near the top of the scale, and accumulated per stat per day. Only
//! the whole-point part of a day's accumulation ever reaches the stat block.
//!
//! `apply_gains` is a pure reducer: current stats + pending deltas in, new
//! stats out.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use super::stats::{CrewStats, Stat, STAT_MAX};
use crate::core::calendar::CampaignDate;

/// Stat value at which gains are halved
const HALF_GAIN_THRESHOLD: u8 = 80;

/// Stat value at which gains are quartered
const QUARTER_GAIN_THRESHOLD: u8 = 90;

/// Fractional growth accumulated by one crew member on one day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyProgress {
    pub date: CampaignDate,
    pub gains: AHashMap<Stat, f32>,
}

impl DailyProgress {
    pub fn new(date: CampaignDate) -> Self {
        Self { date, gains: AHashMap::new() }
    }

    /// Today's accumulated delta for a stat
    pub fn recorded(&self, stat: Stat) -> f32 {
        self.gains.get(&stat).copied().unwrap_or(0.0)
    }

    /// The ledger to accumulate into on `today` (fresh if the day rolled over)
    fn for_day(&self, today: CampaignDate) -> Self {
        if self.date == today {
            self.clone()
        } else {
            Self::new(today)
        }
    }
}

/// Result of folding a batch of gains into a stat block
#[derive(Debug, Clone, PartialEq)]
pub struct GrowthOutcome {
    pub stats: CrewStats,
    pub progress: DailyProgress,
    /// Whole points actually added, per stat, in application order
    pub applied: Vec<(Stat, u8)>,
}

/// Multiplier applied to gains for a stat at `current`
pub fn diminishing_factor(current: u8) -> f32 {
    if current >= QUARTER_GAIN_THRESHOLD {
        0.25
    } else if current >= HALF_GAIN_THRESHOLD {
        0.5
    } else {
        1.0
    }
}

/// Scale a raw improvement by learning rate and diminishing returns
pub fn scaled_gain(raw: f32, learning: u8, current: u8) -> f32 {
    raw * (learning as f32 / 100.0) * diminishing_factor(current)
}

/// Fold `pending` raw improvements into `stats`.
///
/// Each gain is scaled against the stat block as it stands when that gain is
/// applied. The day's running total per stat is floored; only the change in
/// the floored total is added, so fractional progress carries within a day
/// and is discarded when the day changes.
pub fn apply_gains(
    stats: &CrewStats,
    progress: &DailyProgress,
    today: CampaignDate,
    pending: &[(Stat, f32)],
) -> GrowthOutcome {
    let mut stats = *stats;
    let mut progress = progress.for_day(today);
    let mut applied = Vec::new();

    for &(stat, raw) in pending {
        if raw <= 0.0 {
            continue;
        }

        let delta = scaled_gain(raw, stats[Stat::Lrn], stats[stat]);
        let before = progress.recorded(stat);
        let after = before + delta;
        progress.gains.insert(stat, after);

        let whole = (after.floor() - before.floor()).max(0.0) as u32;
        if whole > 0 {
            let room = (STAT_MAX - stats[stat]) as u32;
            let points = whole.min(room) as u8;
            stats.raise(stat, points);
            if points > 0 {
                applied.push((stat, points));
            }
        }
    }

    GrowthOutcome { stats, progress, applied }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn learner(lrn: u8) -> CrewStats {
        CrewStats::uniform(50).with(Stat::Lrn, lrn)
    }

    #[test]
    fn test_top_bracket_quarters_gain() {
        let stats = learner(100).with(Stat::Gun, 92);
        let out = apply_gains(&stats, &DailyProgress::default(), CampaignDate(1), &[(Stat::Gun, 2.0)]);

        assert!((out.progress.recorded(Stat::Gun) - 0.5).abs() < 1e-6);
        // Half a point is not yet a whole point
        assert_eq!(out.stats[Stat::Gun], 92);
        assert!(out.applied.is_empty());
    }

    #[test]
    fn test_middle_bracket_halves_gain() {
        let stats = learner(100).with(Stat::Gun, 85);
        let out = apply_gains(&stats, &DailyProgress::default(), CampaignDate(1), &[(Stat::Gun, 4.0)]);
        assert_eq!(out.stats[Stat::Gun], 87);
        assert_eq!(out.applied, vec![(Stat::Gun, 2)]);
    }

    #[test]
    fn test_learning_rate_scales_gain() {
        let stats = learner(50).with(Stat::Oa, 40);
        let out = apply_gains(&stats, &DailyProgress::default(), CampaignDate(1), &[(Stat::Oa, 3.0)]);
        assert!((out.progress.recorded(Stat::Oa) - 1.5).abs() < 1e-6);
        assert_eq!(out.stats[Stat::Oa], 41);
    }

    #[test]
    fn test_fractions_accumulate_within_a_day() {
        let stats = learner(100).with(Stat::Cmp, 40);
        let first = apply_gains(&stats, &DailyProgress::default(), CampaignDate(3), &[(Stat::Cmp, 0.6)]);
        assert_eq!(first.stats[Stat::Cmp], 40);

        let second = apply_gains(&first.stats, &first.progress, CampaignDate(3), &[(Stat::Cmp, 0.6)]);
        assert_eq!(second.stats[Stat::Cmp], 41);
    }

    #[test]
    fn test_new_day_discards_fractions() {
        let stats = learner(100).with(Stat::Cmp, 40);
        let first = apply_gains(&stats, &DailyProgress::default(), CampaignDate(3), &[(Stat::Cmp, 0.6)]);
        let next_day = apply_gains(&first.stats, &first.progress, CampaignDate(4), &[(Stat::Cmp, 0.6)]);
        assert_eq!(next_day.stats[Stat::Cmp], 40);
        assert_eq!(next_day.progress.date, CampaignDate(4));
    }

    #[test]
    fn test_gain_clamped_at_max() {
        let stats = learner(100).with(Stat::Dis, 79);
        let out = apply_gains(&stats, &DailyProgress::default(), CampaignDate(1), &[(Stat::Dis, 50.0)]);
        assert_eq!(out.stats[Stat::Dis], 100);
    }

    #[test]
    fn test_input_untouched() {
        let stats = learner(100);
        let progress = DailyProgress::default();
        let _ = apply_gains(&stats, &progress, CampaignDate(0), &[(Stat::Fly, 5.0)]);
        assert_eq!(stats[Stat::Fly], 50);
        assert!(progress.gains.is_empty());
    }
}
