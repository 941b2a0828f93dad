//! The fifteen crew statistics
//!
//! Every stat is an integer in 0..=100. Growth arrives as fractional deltas
//! and is folded in by the growth reducer (see `growth`).

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Maximum value of any stat
pub const STAT_MAX: u8 = 100;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Stat {
    /// Flying
    #[display(fmt = "FLY")]
    Fly,
    /// Gunnery
    #[display(fmt = "GUN")]
    Gun,
    /// Reflexes
    #[display(fmt = "RFX")]
    Rfx,
    /// Danger awareness
    #[display(fmt = "DA")]
    Da,
    /// Observation acuity
    #[display(fmt = "OA")]
    Oa,
    /// Tactical acumen
    #[display(fmt = "TA")]
    Ta,
    /// Navigation
    #[display(fmt = "NAV")]
    Nav,
    /// Composure
    #[display(fmt = "CMP")]
    Cmp,
    /// Discipline
    #[display(fmt = "DIS")]
    Dis,
    /// Adaptability
    #[display(fmt = "ADP")]
    Adp,
    /// Aggression
    #[display(fmt = "AGG")]
    Agg,
    /// Stamina
    #[display(fmt = "STA")]
    Sta,
    /// Learning rate
    #[display(fmt = "LRN")]
    Lrn,
    /// Leadership
    #[display(fmt = "LDR")]
    Ldr,
    /// Mechanics
    #[display(fmt = "MEC")]
    Mec,
}

impl Stat {
    pub const COUNT: usize = 15;

    pub const ALL: [Stat; Stat::COUNT] = [
        Stat::Fly,
        Stat::Gun,
        Stat::Rfx,
        Stat::Da,
        Stat::Oa,
        Stat::Ta,
        Stat::Nav,
        Stat::Cmp,
        Stat::Dis,
        Stat::Adp,
        Stat::Agg,
        Stat::Sta,
        Stat::Lrn,
        Stat::Ldr,
        Stat::Mec,
    ];
}

/// A full stat block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewStats([u8; Stat::COUNT]);

impl CrewStats {
    /// Every stat set to `value` (clamped to the stat range)
    pub fn uniform(value: u8) -> Self {
        Self([value.min(STAT_MAX); Stat::COUNT])
    }

    pub fn with(mut self, stat: Stat, value: u8) -> Self {
        self[stat] = value.min(STAT_MAX);
        self
    }

    pub fn get(&self, stat: Stat) -> u8 {
        self[stat]
    }

    /// Add whole points, saturating at the stat maximum
    pub fn raise(&mut self, stat: Stat, points: u8) {
        self[stat] = self[stat].saturating_add(points).min(STAT_MAX);
    }

    pub fn iter(&self) -> impl Iterator<Item = (Stat, u8)> + '_ {
        Stat::ALL.iter().map(move |s| (*s, self[*s]))
    }
}

impl Default for CrewStats {
    fn default() -> Self {
        Self::uniform(50)
    }
}

impl Index<Stat> for CrewStats {
    type Output = u8;
    fn index(&self, stat: Stat) -> &u8 {
        &self.0[stat as usize]
    }
}

impl IndexMut<Stat> for CrewStats {
    fn index_mut(&mut self, stat: Stat) -> &mut u8 {
        &mut self.0[stat as usize]
    }
}
