//! Transient worker records for the two processing stages.
//!
//! Workers are not threads: each is a pending logical operation bound
//! to exactly one request, tagged with the tick at which it resolves.

use steward_core::{DependencyOutcome, RequestId, TickId};

/// A stage-1 worker: cache lookup plus forward, resolved within the
/// tick it starts. The record only exists so the pool's occupancy
/// bounds per-tick admissions; it is discarded when the next tick
/// observes its completion.
#[derive(Clone, Copy, Debug)]
pub struct StageOneWorker {
    /// The request this worker served.
    pub request: RequestId,
}

/// A stage-2 worker: an in-flight dependency call. Once started it
/// always runs to `done_at`; there is no cancellation.
#[derive(Clone, Copy, Debug)]
pub struct StageTwoWorker {
    /// The request this worker serves.
    pub request: RequestId,
    /// How the sampled call will end.
    pub outcome: DependencyOutcome,
    /// Fractional completion tick: start tick plus sampled latency.
    pub done_at: f64,
}

impl StageTwoWorker {
    /// Whether the clock has reached this worker's completion tick.
    pub fn is_done(&self, now: TickId) -> bool {
        now.0 as f64 >= self.done_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_is_monotone() {
        let worker = StageTwoWorker {
            request: RequestId(0),
            outcome: DependencyOutcome::Success,
            done_at: 5.0 + 10.3,
        };
        assert!(!worker.is_done(TickId(15)));
        assert!(worker.is_done(TickId(16)));
        assert!(worker.is_done(TickId(100)));
    }

    #[test]
    fn zero_latency_resolves_at_its_start_tick() {
        let worker = StageTwoWorker {
            request: RequestId(0),
            outcome: DependencyOutcome::Failure,
            done_at: 7.0,
        };
        assert!(worker.is_done(TickId(7)));
        assert!(!worker.is_done(TickId(6)));
    }
}
