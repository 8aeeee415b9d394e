//! Random rolls used by the mechanics.
//!
//! Every random decision in combat and encounter generation goes through
//! [`Roller`]. Live play uses a seeded [`StdRng`]; tests use
//! [`ScriptedRoller`] to pin exact values.

use std::collections::VecDeque;
use std::ops::RangeInclusive;

use rand::Rng;
use rand::rngs::StdRng;

/// A source of uniform rolls and coin flips.
pub trait Roller {
    /// Roll an integer uniformly from `range` (both ends inclusive).
    fn roll(&mut self, range: RangeInclusive<i32>) -> i32;

    /// Returns true with the given probability (clamped to 0.0-1.0).
    fn chance(&mut self, probability: f64) -> bool;

    /// Roll a non-negative amount uniformly from `range`.
    fn roll_amount(&mut self, range: RangeInclusive<u32>) -> u32 {
        let low = i32::try_from(*range.start()).unwrap_or(i32::MAX);
        let high = i32::try_from(*range.end()).unwrap_or(i32::MAX);
        u32::try_from(self.roll(low..=high)).unwrap_or(0)
    }

    /// Pick an index uniformly from `0..len`. `len` must be non-zero.
    fn pick(&mut self, len: usize) -> usize {
        let last = i32::try_from(len.saturating_sub(1)).unwrap_or(i32::MAX);
        usize::try_from(self.roll(0..=last)).unwrap_or(0)
    }
}

impl Roller for StdRng {
    fn roll(&mut self, range: RangeInclusive<i32>) -> i32 {
        self.random_range(range)
    }

    fn chance(&mut self, probability: f64) -> bool {
        self.random::<f64>() < probability.clamp(0.0, 1.0)
    }
}

/// A roller that replays queued values.
///
/// Rolls are clamped into the requested range so a script can never
/// produce an out-of-contract value. An exhausted roll queue yields the
/// low end of the range; an exhausted chance queue yields `false`.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRoller {
    rolls: VecDeque<i32>,
    chances: VecDeque<bool>,
}

impl ScriptedRoller {
    /// Create a roller with no queued values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue integer rolls, consumed in order.
    pub fn with_rolls(mut self, rolls: impl IntoIterator<Item = i32>) -> Self {
        self.rolls.extend(rolls);
        self
    }

    /// Queue chance outcomes, consumed in order.
    pub fn with_chances(mut self, chances: impl IntoIterator<Item = bool>) -> Self {
        self.chances.extend(chances);
        self
    }

    /// Number of integer rolls not yet consumed.
    pub fn remaining_rolls(&self) -> usize {
        self.rolls.len()
    }
}

impl Roller for ScriptedRoller {
    fn roll(&mut self, range: RangeInclusive<i32>) -> i32 {
        let (low, high) = (*range.start(), *range.end());
        self.rolls
            .pop_front()
            .map_or(low, |value| value.clamp(low, high))
    }

    fn chance(&mut self, _probability: f64) -> bool {
        self.chances.pop_front().unwrap_or(false)
    }
}
