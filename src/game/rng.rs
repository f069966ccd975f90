//! Secret-number sources: injectable randomness for session starts.
//!
//! Production code draws from the thread-local RNG. Tests and
//! reproducible runs inject a fixed or seeded source instead.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of secret numbers for new sessions.
pub trait SecretSource {
    /// Draws an integer uniformly from `[min, max]` inclusive.
    fn draw(&mut self, min: u32, max: u32) -> u32;
}

/// Secret source backed by the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSecret;

impl RandomSecret {
    /// Creates a new thread-RNG-backed source.
    pub fn new() -> Self {
        Self
    }
}

impl SecretSource for RandomSecret {
    fn draw(&mut self, min: u32, max: u32) -> u32 {
        rand::thread_rng().gen_range(min..=max)
    }
}

/// Secret source with a reproducible draw sequence.
///
/// Two sources created from the same seed produce identical secrets.
#[derive(Debug, Clone)]
pub struct SeededSecret {
    rng: StdRng,
}

impl SeededSecret {
    /// Creates a source seeded from the given value.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl SecretSource for SeededSecret {
    fn draw(&mut self, min: u32, max: u32) -> u32 {
        self.rng.gen_range(min..=max)
    }
}

/// Secret source that always returns a predetermined value.
///
/// Values outside the requested range are clamped into it, so the
/// source never breaks the draw contract.
#[derive(Debug, Clone, Copy)]
pub struct FixedSecret {
    value: u32,
}

impl FixedSecret {
    /// Creates a source that always draws `value`.
    pub fn new(value: u32) -> Self {
        Self { value }
    }
}

impl SecretSource for FixedSecret {
    fn draw(&mut self, min: u32, max: u32) -> u32 {
        self.value.clamp(min, max)
    }
}
