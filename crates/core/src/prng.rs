//! Random sources for the sampler.
//!
//! The sampler only needs [`UniformSource`]: a uniform `f64` over a closed
//! range on demand. [`Xorshift64`] is the bundled seedable implementation.
//! The same seed produces the same sequence on every platform (pure integer
//! arithmetic in the core algorithm), so searches can be replayed by seed.

use serde::{Deserialize, Serialize};

/// Capability to draw independent, uniformly distributed values.
pub trait UniformSource {
    /// Returns a value uniformly distributed over the closed range
    /// `[min, max]`. Callers guarantee `min <= max`.
    fn uniform(&mut self, min: f64, max: f64) -> f64;
}

impl<U: UniformSource + ?Sized> UniformSource for &mut U {
    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        (**self).uniform(min, max)
    }
}

/// Xorshift64 deterministic PRNG with shifts (13, 7, 17).
///
/// A seed of 0 is replaced with a non-zero fallback, since zero is a fixed
/// point of the algorithm.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    /// Creates a new PRNG with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state and returns the next 64-bit value.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Returns a uniformly distributed f64 in [0, 1), built from the upper
    /// 53 bits of `next_u64()`.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Returns a uniformly distributed f64 in [min, max].
    ///
    /// Interpolates between the bounds instead of scaling `max - min`, so
    /// spans wider than `f64::MAX` stay finite. The result is clamped to the
    /// bounds to absorb rounding.
    pub fn next_range(&mut self, min: f64, max: f64) -> f64 {
        let f = self.next_f64();
        (min * (1.0 - f) + max * f).max(min).min(max)
    }
}

impl UniformSource for Xorshift64 {
    /// Returns `min` when `min == max`.
    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        self.next_range(min, max)
    }
}
