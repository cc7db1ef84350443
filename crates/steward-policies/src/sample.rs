//! The default arrival key sampler.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use steward_core::{KeySampler, RequestKey};

use crate::stat;

/// Samples keys from a truncated exponential distribution over the key
/// space, so a small set of hot keys dominates and caching has
/// something to work with.
pub struct ExponentialKeySampler {
    key_space: u64,
    slope: f64,
    rng: ChaCha8Rng,
}

impl ExponentialKeySampler {
    /// Default slope of the key popularity curve.
    pub const DEFAULT_SLOPE: f64 = 25.0;

    /// Sampler over `[0, key_space)` with the default slope.
    pub fn new(key_space: u64, seed: u64) -> Self {
        Self::with_slope(key_space, Self::DEFAULT_SLOPE, seed)
    }

    /// Sampler with an explicit popularity slope.
    pub fn with_slope(key_space: u64, slope: f64, seed: u64) -> Self {
        Self {
            key_space,
            slope,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl KeySampler for ExponentialKeySampler {
    fn sample(&mut self) -> RequestKey {
        let raw = stat::exponential(&mut self.rng, self.key_space as f64, self.slope);
        // Truncation keeps the key strictly inside the space.
        RequestKey((raw as u64).min(self.key_space.saturating_sub(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_stay_in_the_key_space() {
        let mut sampler = ExponentialKeySampler::new(1_000, 3);
        for _ in 0..10_000 {
            assert!(sampler.sample().0 < 1_000);
        }
    }

    #[test]
    fn same_seed_same_keys() {
        let mut a = ExponentialKeySampler::new(50_000, 9);
        let mut b = ExponentialKeySampler::new(50_000, 9);
        for _ in 0..500 {
            assert_eq!(a.sample(), b.sample());
        }
    }

    #[test]
    fn low_keys_dominate() {
        let mut sampler = ExponentialKeySampler::new(50_000, 11);
        let n = 10_000;
        let hot = (0..n).filter(|_| sampler.sample().0 < 5_000).count();
        assert!(hot > n / 2, "only {hot}/{n} samples in the hot decile");
    }
}
