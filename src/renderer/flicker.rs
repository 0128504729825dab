//! Time-bucketed flicker suppression
//!
//! A glow pass is skipped when a random roll lands below the configured
//! chance AND the current 100ms bucket is even. Odd buckets never flicker,
//! which keeps the effect twitchy rather than strobing.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Width of one flicker time bucket in milliseconds
pub const BUCKET_MS: f64 = 100.0;

#[derive(Debug)]
pub struct Flicker {
    rng: Pcg32,
    chance: f32,
}

impl Flicker {
    pub fn new(seed: u64, chance: f32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            chance,
        }
    }

    /// Roll once. Each draw pass that flickers independently calls this
    /// separately; passes that share a fate share one roll.
    pub fn suppressed(&mut self, time_ms: f64) -> bool {
        self.rng.random::<f32>() < self.chance && even_bucket(time_ms)
    }
}

/// True when the 100ms bucket containing `time_ms` is even
pub fn even_bucket(time_ms: f64) -> bool {
    ((time_ms / BUCKET_MS).floor() as i64) % 2 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_bucket() {
        assert!(even_bucket(0.0));
        assert!(even_bucket(99.9));
        assert!(!even_bucket(100.0));
        assert!(!even_bucket(199.9));
        assert!(even_bucket(200.0));
    }

    #[test]
    fn test_zero_chance_never_suppresses() {
        let mut flicker = Flicker::new(1, 0.0);
        for i in 0..100 {
            assert!(!flicker.suppressed(i as f64 * 50.0));
        }
    }

    #[test]
    fn test_full_chance_suppresses_even_buckets_only() {
        let mut flicker = Flicker::new(1, 1.0);
        assert!(flicker.suppressed(50.0));
        assert!(!flicker.suppressed(150.0));
        assert!(flicker.suppressed(250.0));
    }
}
