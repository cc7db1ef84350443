//! The default stochastic dependency model.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use steward_core::{DependencyConfig, DependencyModel, DependencyOutcome, DependencySample, TickId};

use crate::stat;

/// Dependency with normally distributed latency, a hard timeout, and
/// an availability coin toss.
///
/// Latency is sampled from `N(mean, std)` and clamped at 0 to honor
/// the non-negative latency contract. Samples above `timeout` are
/// reported as timeouts at exactly the timeout latency; otherwise the
/// call succeeds with probability `availability`.
pub struct NormalDependency {
    config: DependencyConfig,
    rng: ChaCha8Rng,
}

impl NormalDependency {
    /// Build from a config and an RNG seed.
    pub fn new(config: DependencyConfig, seed: u64) -> Self {
        Self {
            config,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// The configured parameters.
    pub fn config(&self) -> &DependencyConfig {
        &self.config
    }
}

impl DependencyModel for NormalDependency {
    fn call(&mut self, _now: TickId) -> DependencySample {
        let t = stat::normal(&mut self.rng, self.config.mean, self.config.std).max(0.0);
        if t > self.config.timeout {
            return DependencySample {
                latency: self.config.timeout,
                outcome: DependencyOutcome::Timeout,
            };
        }
        let outcome = if stat::coin_toss(&mut self.rng, self.config.availability) {
            DependencyOutcome::Success
        } else {
            DependencyOutcome::Failure
        };
        DependencySample {
            latency: t,
            outcome,
        }
    }
}
