//! The injectable uniform-random oracle the tick kernel consumes.
//!
//! Randomness is an abstract capability rather than a concrete generator,
//! so that tests can script or seed it deterministically. [`RngSource`]
//! exposes the two primitives the kernel actually needs; [`DefaultRng`] is
//! the production implementation, seeded with a `rand_chacha::ChaCha8Rng`
//! the way `murk-propagators`'s noise injection seeds its per-tick
//! generator.

use crate::cell::Direction;
use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A source of uniform randomness for the tick kernel.
///
/// Implementors need only provide [`RngSource::uniform01`] and
/// [`RngSource::below`]; the direction-sampling helpers are derived from
/// those two primitives via default methods.
pub trait RngSource {
    /// A uniform real in `[0, 1)`.
    fn uniform01(&mut self) -> f64;

    /// A uniform integer in `[0, n)`. `n` must be nonzero.
    fn below(&mut self, n: u32) -> u32;

    /// A uniform direction from all four, for cells with forgotten
    /// (`-1`) direction.
    fn random_direction(&mut self) -> Direction {
        Direction::ALL[self.below(4) as usize]
    }

    /// A uniform direction from the three directions other than
    /// `current`. Deliberately not the biased `randint(1,3)` remap some
    /// BeeClust ports use; each of the three alternatives is equally
    /// likely.
    fn random_other_direction(&mut self, current: Direction) -> Direction {
        current.others()[self.below(3) as usize]
    }
}

/// The production [`RngSource`], backed by a seeded `ChaCha8Rng`.
#[derive(Clone, Debug)]
pub struct DefaultRng {
    inner: ChaCha8Rng,
}

impl DefaultRng {
    /// Seed a new generator deterministically.
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RngSource for DefaultRng {
    fn uniform01(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    fn below(&mut self, n: u32) -> u32 {
        self.inner.next_u32() % n
    }
}
