//! Per-tick counters for experiment introspection.

/// What happened during a single tick.
///
/// Reset at the start of every tick; consumers read the most recent
/// values from [`Engine::last_metrics`](crate::Engine::last_metrics).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickMetrics {
    /// New requests created this tick.
    pub arrivals: u32,
    /// Arrivals rejected because the arrival queue was full.
    pub rejected_arrivals: u32,
    /// Requests pulled from q1 into stage 1.
    pub p1_admissions: u32,
    /// Requests pulled from q2 into stage 2.
    pub p2_admissions: u32,
    /// Stage-2 workers harvested this tick.
    pub completions: u32,
    /// Harvested workers whose request was pushed back toward q2.
    pub retries: u32,
    /// Requests removed from q2 by a `reneg` decision.
    pub reneged: u32,
    /// Requests responded by a `split` decision.
    pub split: u32,
    /// Requests responded immediately because q2 was full at a
    /// forward or retry.
    pub forward_rejections: u32,
}
