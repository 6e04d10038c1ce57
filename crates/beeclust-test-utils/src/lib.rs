//! Test utilities for BeeClust development.
//!
//! Provides [`ScriptedRng`], a fully deterministic [`RngSource`] for
//! exact-outcome scenario tests, and grid-building [`fixtures`] helpers.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use beeclust_core::cell::Direction;
use beeclust_core::rng::RngSource;

/// A scripted [`RngSource`] for scenarios that need an exact, reproducible
/// sequence of "random" outcomes rather than a statistical distribution.
///
/// By default every probability check returns `0.0` (so `uniform01() < p`
/// is true for any `p > 0`, and false only when `p == 0.0`), and the
/// forced direction is [`Direction::North`]. Override either with the
/// builder methods before use.
pub struct ScriptedRng {
    uniform: f64,
    direction: Direction,
    below_sequence: Vec<u32>,
    below_cursor: usize,
}

impl ScriptedRng {
    /// A scripted RNG where every probability check trivially succeeds
    /// and `random_direction` always yields `Direction::North`.
    pub fn new() -> Self {
        Self {
            uniform: 0.0,
            direction: Direction::North,
            below_sequence: Vec::new(),
            below_cursor: 0,
        }
    }

    /// A scripted RNG that forces `random_direction()` to return `dir`.
    pub fn with_direction(dir: Direction) -> Self {
        Self {
            direction: dir,
            ..Self::new()
        }
    }

    /// Fix the value returned by `uniform01()`.
    pub fn with_uniform(mut self, value: f64) -> Self {
        self.uniform = value;
        self
    }

    /// Script the sequence of values `below()` returns (cycling once
    /// exhausted). Useful for driving `random_other_direction` exactly.
    pub fn with_below_sequence(mut self, values: Vec<u32>) -> Self {
        self.below_sequence = values;
        self
    }
}

impl Default for ScriptedRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngSource for ScriptedRng {
    fn uniform01(&mut self) -> f64 {
        self.uniform
    }

    fn below(&mut self, n: u32) -> u32 {
        if self.below_sequence.is_empty() {
            return 0;
        }
        let v = self.below_sequence[self.below_cursor % self.below_sequence.len()];
        self.below_cursor += 1;
        v % n.max(1)
    }

    fn random_direction(&mut self) -> Direction {
        self.direction
    }
}
