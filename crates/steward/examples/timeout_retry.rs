//! When do timeouts and retries pay off?
//!
//! Models a dependency whose latency is bimodal: a normal case and a
//! slow case (garbage-collection pauses, a bad host in the fleet). The
//! slow case never succeeds. For each slow-case mean, the experiment
//! compares a patient timeout (equal to `decay_max`, past which a
//! response is worth nothing anyway) against an aggressive one at two
//! standard deviations above the normal-case mean. Caching is disabled
//! so the effect of the timeout is isolated.

use std::error::Error;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use steward::policies::stat;
use steward::prelude::*;

const NORMAL_MEAN: f64 = 100.0;
const STD: f64 = 25.0;
const NORMAL_CASE_PROBABILITY: f64 = 0.75;
const TICKS: u64 = 50_000;

/// Two-case latency model. The normal case is mostly available; the
/// slow case always fails, so waiting for it is pure loss.
struct BimodalDependency {
    slow_mean: f64,
    timeout: f64,
    rng: ChaCha8Rng,
}

impl BimodalDependency {
    fn new(slow_mean: f64, timeout: f64, seed: u64) -> Self {
        Self {
            slow_mean,
            timeout,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl DependencyModel for BimodalDependency {
    fn call(&mut self, _now: TickId) -> DependencySample {
        let (mean, availability) = if stat::coin_toss(&mut self.rng, NORMAL_CASE_PROBABILITY) {
            (NORMAL_MEAN, 0.98)
        } else {
            (self.slow_mean, 0.0)
        };
        let t = stat::normal(&mut self.rng, mean, STD).max(0.0);
        if t > self.timeout {
            return DependencySample {
                latency: self.timeout,
                outcome: DependencyOutcome::Timeout,
            };
        }
        let outcome = if stat::coin_toss(&mut self.rng, availability) {
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

fn base_config() -> SimConfig {
    let mut config = SimConfig::default();
    config.server.ttl = 0;
    config.server.p1_max = 10;
    config.server.p2_max = 5;
    config.server.q1_max = 10;
    config.server.q2_max = 12;
    config.server.tries = 2;
    config.client.rate = 50;
    config.client.decay_k = 4.0;
    config.client.decay_max = 500.0;
    config
}

fn measure(slow_mean: f64, timeout: f64) -> Result<Summary, Box<dyn Error>> {
    let config = base_config();
    let mut hooks = steward::standard_hooks(&config);
    hooks.dependency = Box::new(BimodalDependency::new(slow_mean, timeout, config.seed));
    let mut engine = Engine::new(config, hooks)?;
    engine.warmup(2_000)?;
    let report = engine.run_experiment(TICKS)?;
    Ok(*report.all())
}

fn main() -> Result<(), Box<dyn Error>> {
    let decay_max = base_config().client.decay_max;
    let aggressive_timeout = NORMAL_MEAN + 2.0 * STD;

    println!("slow_mean, timeout_1, qos_1, latency_1, timeout_2, qos_2, latency_2");
    for slow_mean in [150.0, 200.0, 250.0, 300.0, 350.0, 400.0, 450.0, 500.0] {
        let patient = measure(slow_mean, decay_max)?;
        let aggressive = measure(slow_mean, aggressive_timeout)?;
        println!(
            "{slow_mean:.0}, {:.0}, {:.2}, {:.1}, {:.0}, {:.2}, {:.1}",
            decay_max,
            patient.qos,
            patient.latency,
            aggressive_timeout,
            aggressive.qos,
            aggressive.latency,
        );
    }
    Ok(())
}
