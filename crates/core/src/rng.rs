//! RNG module - the single random source threaded through the game
//!
//! Every random decision (template choice, marker scatter, bandit power and
//! attack) draws from a [`RandomSource`] passed in by the caller. The game
//! binary uses [`GameRng`], seeded from entropy or from a fixed seed; tests can
//! use a seeded `GameRng` or script their own source.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform random draws
pub trait RandomSource {
    /// Uniform draw from the inclusive range `[low, high]`
    fn roll(&mut self, low: u32, high: u32) -> u32;

    /// Uniform index in `[0, len)`
    fn pick(&mut self, len: usize) -> usize;

    /// Shuffle a slice using Fisher-Yates
    fn shuffle<T>(&mut self, slice: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..slice.len()).rev() {
            let j = self.pick(i + 1);
            slice.swap(i, j);
        }
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn roll(&mut self, low: u32, high: u32) -> u32 {
        (**self).roll(low, high)
    }

    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// Game RNG backed by `StdRng`
#[derive(Debug, Clone)]
pub struct GameRng {
    inner: StdRng,
}

impl GameRng {
    /// Create an RNG with a fixed seed (same seed, same game)
    pub fn seeded(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from operating system entropy
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }
}

impl RandomSource for GameRng {
    fn roll(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        self.inner.gen_range(low..=high)
    }

    fn pick(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.inner.gen_range(0..len)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
