//! The policy-injection surface.
//!
//! Experiment drivers plug behavior into the engine by implementing
//! these traits rather than mutating shared state. Each has a default
//! implementation in `steward-policies`.

use indexmap::IndexMap;

use crate::config::{ClientConfig, ServerConfig};
use crate::id::{RequestKey, TickId};
use crate::request::{Request, ResponseType};

// ── Shared context ───────────────────────────────────────────────

/// Read-only view handed to policies that need engine context.
#[derive(Clone, Copy, Debug)]
pub struct PolicyView<'a> {
    /// The current tick.
    pub now: TickId,
    /// Server capacities and caching knobs.
    pub server: &'a ServerConfig,
    /// Client load and QoS valuation knobs.
    pub client: &'a ClientConfig,
}

impl PolicyView<'_> {
    /// Whether the request currently holds a fresh cache observation,
    /// under this view's TTL.
    pub fn cache_hit(&self, request: &Request) -> bool {
        request.cache_hit(self.now, self.server.ttl)
    }
}

// ── Dependency model ─────────────────────────────────────────────

/// What a single dependency call produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DependencyOutcome {
    /// The call succeeded; the result is cacheable.
    Success,
    /// The call failed outright.
    Failure,
    /// The call exceeded the dependency timeout.
    Timeout,
}

/// One sampled dependency call: how long it took and how it ended.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DependencySample {
    /// Simulated call latency in ticks. Never negative.
    pub latency: f64,
    /// How the call ended.
    pub outcome: DependencyOutcome,
}

/// Produces `(latency, outcome)` samples for simulated dependency calls.
///
/// Called exactly once per stage-2 worker start; once sampled, the call
/// always runs to its completion tick.
pub trait DependencyModel {
    /// Sample one call.
    fn call(&mut self, now: TickId) -> DependencySample;
}

/// Measurement hook invoked by the engine immediately after every
/// dependency call is sampled, decoupling observation from behavior.
pub trait DependencyObserver {
    /// Record one sample.
    fn observe(&mut self, sample: &DependencySample);
}

// ── Abandonment ──────────────────────────────────────────────────

/// Per-tick decision for a request waiting in the stage-2 queue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Abandonment {
    /// Leave the request queued.
    Wait,
    /// Remove the request from the queue and respond immediately.
    Reneg,
    /// Respond immediately but leave the request physically queued;
    /// it keeps consuming queue capacity until naturally dequeued, at
    /// which point completion is a guarded no-op.
    Split,
}

/// Decides, once per tick per queued request, whether to keep waiting
/// for the dependency.
pub trait AbandonPolicy {
    /// Decide for one request. The engine evaluates a snapshot of the
    /// queue taken at the start of the pass, so decisions do not see
    /// each other's mutations.
    fn decide(&mut self, request: &Request, view: &PolicyView<'_>) -> Abandonment;
}

// ── Classification and scoring ───────────────────────────────────

/// Chooses the terminal type for a non-live, non-rejected completion.
///
/// Implementations return [`ResponseType::Cached`] or
/// [`ResponseType::Fallback`].
pub trait ResponseClassifier {
    /// Classify one completing request.
    fn classify(&self, request: &Request, view: &PolicyView<'_>) -> ResponseType;
}

/// Maps a completed request to a quality score in `[0, 1]`.
pub trait QosScorer {
    /// Score one completed request.
    fn score(&self, request: &Request, view: &PolicyView<'_>) -> f64;
}

// ── Arrival shaping and hooks ────────────────────────────────────

/// Produces the identity key for each new arrival.
pub trait KeySampler {
    /// Sample one key.
    fn sample(&mut self) -> RequestKey;
}

/// Invoked once per tick before any other work, letting policies adapt
/// from accumulated history. Side effects only.
pub trait ConfigureHook {
    /// Run the per-tick adjustment.
    fn on_tick(&mut self, now: TickId);
}

/// Extension point run after every cache write. The default
/// implementation keeps the cache unbounded.
pub trait EvictionPolicy {
    /// Inspect and possibly shrink the entry map.
    fn evict(&mut self, entries: &mut IndexMap<RequestKey, TickId>);
}
