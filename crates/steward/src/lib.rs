//! Steward: discrete-tick simulation of graceful degradation in
//! request-serving systems.
//!
//! A simulated server admits client requests through a fast first
//! stage, then answers them from a bounded pool of calls to a slow,
//! unreliable dependency. A TTL cache and pluggable abandonment
//! policies decide how gracefully quality degrades when the dependency
//! struggles. This facade crate re-exports the public API from the
//! Steward sub-crates; for most users, adding `steward` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use steward::prelude::*;
//!
//! let config = SimConfig::default();
//! let hooks = steward::standard_hooks(&config);
//! let mut engine = Engine::new(config, hooks).unwrap();
//!
//! engine.warmup(500).unwrap();
//! let report = engine.run_experiment(2_000).unwrap();
//! println!("{report}");
//! assert!(report.all().count > 0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `steward-core` | IDs, requests, queues, cache, policy traits |
//! | [`policies`] | `steward-policies` | Default stochastic policy implementations |
//! | [`engine`] | `steward-engine` | The tick scheduler, reports, and metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and policy traits (`steward-core`).
///
/// Contains the request record, queues, the TTL cache, configuration
/// structs, and the traits behind every pluggable behavior
/// ([`types::DependencyModel`], [`types::AbandonPolicy`],
/// [`types::ResponseClassifier`], [`types::QosScorer`]).
pub use steward_core as types;

/// Default policy implementations (`steward-policies`).
///
/// Seeded, reproducible implementations of every policy trait:
/// [`policies::NormalDependency`], [`policies::DefaultAbandon`],
/// [`policies::CacheAwareClassifier`], [`policies::SigmoidScorer`],
/// [`policies::ExponentialKeySampler`], plus the
/// [`policies::DependencyHistory`] observer for adaptive experiments.
pub use steward_policies as policies;

/// The simulation engine (`steward-engine`).
///
/// [`engine::Engine`] owns all state and advances it tick by tick;
/// [`engine::Report`] renders run outcomes.
pub use steward_engine as engine;

use steward_engine::{Hooks, SimConfig};

/// The standard policy stack for a configuration: normal-latency
/// dependency, cache-or-retries-exhausted abandonment, cache-aware
/// classification, sigmoid QoS scoring, and exponential key sampling.
///
/// The dependency model and key sampler draw from distinct streams
/// derived from `config.seed`, so two engines built from equal
/// configurations replay identically.
pub fn standard_hooks(config: &SimConfig) -> Hooks {
    Hooks {
        configure: Box::new(steward_policies::NoConfigure),
        dependency: Box::new(steward_policies::NormalDependency::new(
            config.dependency.clone(),
            config.seed,
        )),
        abandon: Box::new(steward_policies::DefaultAbandon),
        classifier: Box::new(steward_policies::CacheAwareClassifier),
        qos: Box::new(steward_policies::SigmoidScorer),
        sampler: Box::new(steward_policies::ExponentialKeySampler::new(
            config.client.key_space,
            config.seed.wrapping_add(1),
        )),
        observers: Vec::new(),
    }
}

/// Common imports for typical Steward usage.
///
/// ```rust
/// use steward::prelude::*;
/// ```
///
/// This imports the engine, its configuration and report types, the
/// core request and response types, and every policy trait needed to
/// plug in custom behavior.
pub mod prelude {
    // Core types
    pub use steward_core::{
        ClientConfig, DependencyConfig, Request, RequestId, RequestKey, ResponseType,
        ServerConfig, StageId, TickId,
    };

    // Policy traits and their vocabulary
    pub use steward_core::{
        AbandonPolicy, Abandonment, ConfigureHook, DependencyModel, DependencyObserver,
        DependencyOutcome, DependencySample, EvictionPolicy, KeySampler, PolicyView, QosScorer,
        ResponseClassifier,
    };

    // Errors
    pub use steward_core::{QueueError, StepError};
    pub use steward_engine::ConfigError;

    // Engine
    pub use steward_engine::{
        CacheReport, Engine, Hooks, Report, SimConfig, Summary, TickMetrics,
    };
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn standard_stack_runs_end_to_end() {
        let config = SimConfig::default();
        let hooks = crate::standard_hooks(&config);
        let mut engine = Engine::new(config, hooks).unwrap();
        let report = engine.run_experiment(1_000).unwrap();
        assert!(report.all().count > 0);
        assert!(report.cache().is_some());
    }

    #[test]
    fn standard_stack_is_reproducible() {
        let config = SimConfig::default();
        let mut a = Engine::new(config.clone(), crate::standard_hooks(&config)).unwrap();
        let mut b = Engine::new(config.clone(), crate::standard_hooks(&config)).unwrap();
        a.run(1_500).unwrap();
        b.run(1_500).unwrap();
        assert_eq!(a.stats(), b.stats());
    }
}
