//! Dependency call history for adaptive policies.
//!
//! Measurement is decoupled from behavior: the engine notifies
//! [`DependencyObserver`]s after every dependency call, and a
//! [`HistoryRecorder`] appends each sample to a shared
//! [`DependencyHistory`]. Configure hooks and abandonment policies
//! hold their own handle to the same history and read moving
//! aggregates from it.

use std::cell::RefCell;
use std::rc::Rc;

use steward_core::{DependencyObserver, DependencyOutcome, DependencySample};

#[derive(Debug, Default)]
struct HistoryInner {
    latencies: Vec<f64>,
    errors: Vec<bool>,
}

/// Shared, cheaply clonable record of every observed dependency call.
///
/// Execution is single-threaded, so the handle is `Rc<RefCell<..>>`.
#[derive(Clone, Debug, Default)]
pub struct DependencyHistory {
    inner: Rc<RefCell<HistoryInner>>,
}

impl DependencyHistory {
    /// An empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// An observer that appends to this history; install it in the
    /// engine's observer list.
    pub fn recorder(&self) -> HistoryRecorder {
        HistoryRecorder {
            history: self.clone(),
        }
    }

    /// Number of observed calls.
    pub fn len(&self) -> usize {
        self.inner.borrow().latencies.len()
    }

    /// True iff no call has been observed.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Mean observed latency; 0 when nothing has been observed.
    pub fn mean_latency(&self) -> f64 {
        let inner = self.inner.borrow();
        if inner.latencies.is_empty() {
            return 0.0;
        }
        inner.latencies.iter().sum::<f64>() / inner.latencies.len() as f64
    }

    /// Fraction of observed calls that did not succeed; 0 when nothing
    /// has been observed.
    pub fn error_rate(&self) -> f64 {
        let inner = self.inner.borrow();
        if inner.errors.is_empty() {
            return 0.0;
        }
        inner.errors.iter().filter(|&&e| e).count() as f64 / inner.errors.len() as f64
    }

    /// Forget everything observed so far.
    pub fn clear(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.latencies.clear();
        inner.errors.clear();
    }

    fn push(&self, sample: &DependencySample) {
        let mut inner = self.inner.borrow_mut();
        inner.latencies.push(sample.latency);
        inner
            .errors
            .push(sample.outcome != DependencyOutcome::Success);
    }
}

/// Observer end of a [`DependencyHistory`].
#[derive(Clone, Debug)]
pub struct HistoryRecorder {
    history: DependencyHistory,
}

impl DependencyObserver for HistoryRecorder {
    fn observe(&mut self, sample: &DependencySample) {
        self.history.push(sample);
    }
}
