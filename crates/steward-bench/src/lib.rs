//! Benchmark profiles for the Steward simulation framework.
//!
//! Provides pre-built engine constructors shared by the Criterion
//! benches:
//!
//! - [`reference_engine`]: default configuration with the standard
//!   stochastic policy stack
//! - [`saturated_engine`]: arrivals every tick against a small server,
//!   exercising the rejection and abandonment paths

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use steward::standard_hooks;
use steward_engine::{Engine, SimConfig};

/// Default configuration, standard policies.
pub fn reference_engine(seed: u64) -> Engine {
    let mut config = SimConfig::default();
    config.seed = seed;
    let hooks = standard_hooks(&config);
    Engine::new(config, hooks).unwrap_or_else(|e| panic!("reference config invalid: {e}"))
}

/// Per-tick arrivals against a small server: queues stay full and the
/// rejection, retry, and abandonment paths all run every tick.
pub fn saturated_engine(seed: u64) -> Engine {
    let mut config = SimConfig::default();
    config.seed = seed;
    config.client.rate = 1;
    config.server.p2_max = 2;
    config.server.q1_max = 5;
    config.server.q2_max = 5;
    config.server.tries = 3;
    let hooks = standard_hooks(&config);
    Engine::new(config, hooks).unwrap_or_else(|e| panic!("saturated config invalid: {e}"))
}
