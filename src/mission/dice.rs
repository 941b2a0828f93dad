//! Random source for sortie resolution
//!
//! Every roll the engine makes goes through `Dice`. Production code wraps a
//! seeded `rand` generator; tests can script exact draws with `ScriptedDice`.

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

pub trait Dice {
    /// Uniform draw in [0, 1)
    fn unit(&mut self) -> f64;

    /// Uniform draw in [0, 100)
    fn percent(&mut self) -> f32 {
        ((self.unit() * 100.0) as f32).min(99.9999)
    }

    /// True with `percent` chance
    fn chance(&mut self, percent: f32) -> bool {
        self.percent() < percent
    }

    /// Uniform integer in `lo..=hi`; returns `lo` for an empty range
    fn range_i32(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        let span = (hi - lo + 1) as f64;
        (lo + (self.unit() * span).floor() as i32).min(hi)
    }

    /// Uniform integer in `lo..=hi`
    fn range_u32(&mut self, lo: u32, hi: u32) -> u32 {
        self.range_i32(lo as i32, hi as i32).max(0) as u32
    }

    /// Uniform index into a collection of `len` items (`len` > 0)
    fn index(&mut self, len: usize) -> usize {
        ((self.unit() * len as f64).floor() as usize).min(len.saturating_sub(1))
    }

    fn coin(&mut self) -> bool {
        self.unit() < 0.5
    }
}

impl<D: Dice + ?Sized> Dice for &mut D {
    fn unit(&mut self) -> f64 {
        (**self).unit()
    }
}

/// Dice backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RngDice<R: RngCore>(pub R);

impl RngDice<ChaCha8Rng> {
    /// Deterministic dice for replays and tests
    pub fn seeded(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore> Dice for RngDice<R> {
    fn unit(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

/// Replays a fixed sequence of unit draws, then repeats `fallback`
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    queue: VecDeque<f64>,
    fallback: f64,
    drawn: usize,
}

impl ScriptedDice {
    pub fn new(draws: impl IntoIterator<Item = f64>) -> Self {
        Self {
            queue: draws.into_iter().collect(),
            fallback: 0.999,
            drawn: 0,
        }
    }

    /// Dice that return `value` on every draw
    pub fn constant(value: f64) -> Self {
        Self::new(Vec::new()).with_fallback(value)
    }

    pub fn with_fallback(mut self, fallback: f64) -> Self {
        self.fallback = fallback.clamp(0.0, 0.999_999);
        self
    }

    /// Scripted draws start from percentages, which reads better in tests
    pub fn from_percents(percents: impl IntoIterator<Item = f64>) -> Self {
        Self::new(percents.into_iter().map(|p| (p / 100.0).clamp(0.0, 0.999_999)))
    }

    /// Number of draws taken so far
    pub fn drawn(&self) -> usize {
        self.drawn
    }

    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl Dice for ScriptedDice {
    fn unit(&mut self) -> f64 {
        self.drawn += 1;
        self.queue.pop_front().unwrap_or(self.fallback)
    }
}
