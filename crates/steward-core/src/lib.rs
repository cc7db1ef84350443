//! Core types and traits for the Steward simulation framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Steward workspace:
//! typed IDs, the simulated clock, the request record and its slab
//! store, the stage queues, the freshness cache, the decay math, the
//! configuration surface, and the pluggable policy traits.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cache;
pub mod clock;
pub mod config;
pub mod error;
pub mod id;
pub mod math;
pub mod queue;
pub mod request;
pub mod traits;

pub use cache::{Cache, NoEviction};
pub use clock::Clock;
pub use config::{ClientConfig, DependencyConfig, ServerConfig};
pub use error::{QueueError, StepError};
pub use id::{RequestId, RequestKey, StageId, TickId};
pub use math::sigmoid;
pub use queue::Queue;
pub use request::{Request, RequestStore, ResponseType};
pub use traits::{
    AbandonPolicy, Abandonment, ConfigureHook, DependencyModel, DependencyObserver,
    DependencyOutcome, DependencySample, EvictionPolicy, KeySampler, PolicyView, QosScorer,
    ResponseClassifier,
};
