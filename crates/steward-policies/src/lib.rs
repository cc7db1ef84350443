//! Default policy implementations for the Steward simulation framework.
//!
//! Every pluggable trait in `steward-core` has a documented default
//! here: the normal-latency dependency model, the
//! reneg-on-cache-hit-or-exhaustion abandonment rule, the cache-aware
//! response classifier, the sigmoid QoS scorer, and the truncated
//! exponential key sampler. All stochastic defaults draw from seeded
//! ChaCha8 streams, so identical seeds reproduce identical runs.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod abandon;
pub mod classify;
pub mod configure;
pub mod dependency;
pub mod history;
pub mod qos;
pub mod sample;
pub mod stat;

pub use abandon::DefaultAbandon;
pub use classify::CacheAwareClassifier;
pub use configure::NoConfigure;
pub use dependency::NormalDependency;
pub use history::{DependencyHistory, HistoryRecorder};
pub use qos::SigmoidScorer;
pub use sample::ExponentialKeySampler;
