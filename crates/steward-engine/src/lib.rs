//! The Steward simulation engine.
//!
//! [`Engine`] advances a two-stage request-processing model one tick
//! at a time: arrivals queue for a fast admission stage, admitted
//! requests queue again for a bounded pool of dependency callers, and
//! a shared cache lets requests that abandon the wait still answer
//! usefully. All behavior beyond the schedule itself is injected
//! through [`Hooks`].
//!
//! Construction validates the configuration up front; stepping is then
//! infallible apart from internal invariant violations surfaced as
//! [`StepError`](steward_core::StepError).

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod config;
mod engine;
mod metrics;
mod pool;
mod report;
mod stats;

pub use config::{ConfigError, SimConfig};
pub use engine::{Engine, Hooks};
pub use metrics::TickMetrics;
pub use report::{CacheReport, Report};
pub use stats::Summary;
