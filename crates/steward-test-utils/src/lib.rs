//! Deterministic policy stubs for Steward development.
//!
//! Every stub removes one source of randomness so tests can pin the
//! exact tick-by-tick behavior of the engine.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::VecDeque;

use steward_core::{
    AbandonPolicy, Abandonment, DependencyModel, DependencyOutcome, DependencySample, KeySampler,
    PolicyView, Request, RequestKey, ResponseClassifier, ResponseType, TickId,
};

// ── Dependency stubs ─────────────────────────────────────────────

/// Dependency that always returns the same sample.
#[derive(Clone, Copy, Debug)]
pub struct FixedDependency {
    pub latency: f64,
    pub outcome: DependencyOutcome,
}

impl FixedDependency {
    pub fn new(latency: f64, outcome: DependencyOutcome) -> Self {
        Self { latency, outcome }
    }

    /// A dependency that always succeeds after `latency` ticks.
    pub fn success(latency: f64) -> Self {
        Self::new(latency, DependencyOutcome::Success)
    }

    /// A dependency that always fails after `latency` ticks.
    pub fn failure(latency: f64) -> Self {
        Self::new(latency, DependencyOutcome::Failure)
    }
}

impl DependencyModel for FixedDependency {
    fn call(&mut self, _now: TickId) -> DependencySample {
        DependencySample {
            latency: self.latency,
            outcome: self.outcome,
        }
    }
}

/// Dependency that replays a scripted sequence of samples, then
/// repeats the final sample forever.
#[derive(Clone, Debug)]
pub struct ScriptedDependency {
    script: VecDeque<DependencySample>,
    last: DependencySample,
}

impl ScriptedDependency {
    /// Build from a non-empty script.
    ///
    /// # Panics
    ///
    /// Panics if the script is empty.
    pub fn new(script: Vec<DependencySample>) -> Self {
        assert!(!script.is_empty(), "script must not be empty");
        let last = *script.last().expect("non-empty script");
        Self {
            script: script.into(),
            last,
        }
    }
}

impl DependencyModel for ScriptedDependency {
    fn call(&mut self, _now: TickId) -> DependencySample {
        self.script.pop_front().unwrap_or(self.last)
    }
}

// ── Sampler stubs ────────────────────────────────────────────────

/// Sampler that always produces the same key.
#[derive(Clone, Copy, Debug)]
pub struct ConstSampler(pub RequestKey);

impl KeySampler for ConstSampler {
    fn sample(&mut self) -> RequestKey {
        self.0
    }
}

/// Sampler that cycles through a fixed key sequence.
#[derive(Clone, Debug)]
pub struct CycleSampler {
    keys: Vec<RequestKey>,
    next: usize,
}

impl CycleSampler {
    /// # Panics
    ///
    /// Panics if `keys` is empty.
    pub fn new(keys: Vec<RequestKey>) -> Self {
        assert!(!keys.is_empty(), "keys must not be empty");
        Self { keys, next: 0 }
    }
}

impl KeySampler for CycleSampler {
    fn sample(&mut self) -> RequestKey {
        let key = self.keys[self.next];
        self.next = (self.next + 1) % self.keys.len();
        key
    }
}

// ── Abandonment stubs ────────────────────────────────────────────

/// Never abandons.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysWait;

impl AbandonPolicy for AlwaysWait {
    fn decide(&mut self, _request: &Request, _view: &PolicyView<'_>) -> Abandonment {
        Abandonment::Wait
    }
}

/// Renegs on every decision.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysReneg;

impl AbandonPolicy for AlwaysReneg {
    fn decide(&mut self, _request: &Request, _view: &PolicyView<'_>) -> Abandonment {
        Abandonment::Reneg
    }
}

// ── Classifier stubs ─────────────────────────────────────────────

/// Classifier that ignores cache state and always answers the same type.
#[derive(Clone, Copy, Debug)]
pub struct ConstClassifier(pub ResponseType);

impl ResponseClassifier for ConstClassifier {
    fn classify(&self, _request: &Request, _view: &PolicyView<'_>) -> ResponseType {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_dependency_repeats_its_tail() {
        let mut dep = ScriptedDependency::new(vec![
            DependencySample {
                latency: 1.0,
                outcome: DependencyOutcome::Failure,
            },
            DependencySample {
                latency: 2.0,
                outcome: DependencyOutcome::Success,
            },
        ]);
        assert_eq!(dep.call(TickId(1)).latency, 1.0);
        assert_eq!(dep.call(TickId(2)).latency, 2.0);
        assert_eq!(dep.call(TickId(3)).latency, 2.0);
    }

    #[test]
    fn cycle_sampler_wraps() {
        let mut sampler = CycleSampler::new(vec![RequestKey(1), RequestKey(2)]);
        assert_eq!(sampler.sample(), RequestKey(1));
        assert_eq!(sampler.sample(), RequestKey(2));
        assert_eq!(sampler.sample(), RequestKey(1));
    }

    #[test]
    fn wait_and_reneg_stubs_are_constant() {
        let server = steward_core::ServerConfig::default();
        let client = steward_core::ClientConfig::default();
        let view = PolicyView {
            now: TickId(1),
            server: &server,
            client: &client,
        };
        let r = Request::new(RequestKey(1), TickId(0));
        assert_eq!(AlwaysWait.decide(&r, &view), Abandonment::Wait);
        assert_eq!(AlwaysReneg.decide(&r, &view), Abandonment::Reneg);
    }
}
