//! Crew traits
//!
//! Traits are permanent, stat-modifying attributes. A crew member holds at
//! most three positive and four negative traits; the fourth negative trait
//! sends them to hospital.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::stats::Stat;

/// Maximum number of positive traits a crew member may hold
pub const MAX_POSITIVE_TRAITS: usize = 3;

/// Negative trait count that triggers hospitalization
pub const MAX_NEGATIVE_TRAITS: usize = 4;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositiveTrait {
    /// Airframe stress penalties reduced to a quarter
    #[display(fmt = "Sturdy")]
    Sturdy,
    #[display(fmt = "Keen-Eyed")]
    KeenEyed,
    #[display(fmt = "Iron Nerve")]
    IronNerve,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NegativeTrait {
    #[display(fmt = "Jittery")]
    Jittery,
    #[display(fmt = "Reckless")]
    Reckless,
    #[display(fmt = "Superstitious")]
    Superstitious,
}

pub const POSITIVE_POOL: [PositiveTrait; 3] = [
    PositiveTrait::Sturdy,
    PositiveTrait::KeenEyed,
    PositiveTrait::IronNerve,
];

pub const NEGATIVE_POOL: [NegativeTrait; 3] = [
    NegativeTrait::Jittery,
    NegativeTrait::Reckless,
    NegativeTrait::Superstitious,
];

impl PositiveTrait {
    pub fn stat_modifier(&self) -> Option<(Stat, i8)> {
        match self {
            Self::Sturdy => None,
            Self::KeenEyed => Some((Stat::Oa, 5)),
            Self::IronNerve => Some((Stat::Cmp, 5)),
        }
    }
}

impl NegativeTrait {
    pub fn stat_modifier(&self) -> Option<(Stat, i8)> {
        match self {
            Self::Jittery => Some((Stat::Cmp, -5)),
            Self::Reckless => Some((Stat::Dis, -5)),
            Self::Superstitious => Some((Stat::Adp, -3)),
        }
    }
}

/// The traits a crew member has acquired
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitSet {
    pub positive: Vec<PositiveTrait>,
    pub negative: Vec<NegativeTrait>,
}

impl TraitSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_positive(&self, t: PositiveTrait) -> bool {
        self.positive.contains(&t)
    }

    /// Add a positive trait. Returns false when full or already held.
    pub fn add_positive(&mut self, t: PositiveTrait) -> bool {
        if self.positive.len() >= MAX_POSITIVE_TRAITS || self.has_positive(t) {
            return false;
        }
        self.positive.push(t);
        true
    }

    /// Add a negative trait. Returns false when the cap is already reached.
    pub fn add_negative(&mut self, t: NegativeTrait) -> bool {
        if self.negative.len() >= MAX_NEGATIVE_TRAITS {
            return false;
        }
        self.negative.push(t);
        true
    }

    pub fn at_breaking_point(&self) -> bool {
        self.negative.len() >= MAX_NEGATIVE_TRAITS
    }

    /// Net modifier applied to one stat by all held traits
    pub fn modifier_for(&self, stat: Stat) -> i32 {
        let pos = self.positive.iter().filter_map(|t| t.stat_modifier());
        let neg = self.negative.iter().filter_map(|t| t.stat_modifier());
        pos.chain(neg)
            .filter(|(s, _)| *s == stat)
            .map(|(_, m)| m as i32)
            .sum()
    }
}
