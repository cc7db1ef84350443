//! Strongly-typed identifiers used throughout the workspace.

use std::fmt;

/// Monotonically increasing tick counter.
///
/// Incremented each time the simulation advances one step. Tick 0 is
/// the pre-run state; the first executed tick is `TickId(1)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TickId(pub u64);

impl fmt::Display for TickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TickId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// Index of a request in the [`RequestStore`](crate::request::RequestStore).
///
/// Requests are allocated sequentially on arrival; queues and worker
/// pools hold `RequestId`s rather than owning the records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u32);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identity key carried by a request, drawn from the configured key space.
///
/// Cache entries are addressed by key, so two requests with the same key
/// share cache freshness.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestKey(pub u64);

impl fmt::Display for RequestKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RequestKey {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// The two processing stages a request passes through.
///
/// `Q1` feeds the stage-1 (cache lookup) pool, `Q2` feeds the stage-2
/// (dependency call) pool. Used as the key into each request's
/// per-stage wait and position bookkeeping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StageId {
    /// Queue feeding the stage-1 pool.
    Q1,
    /// Queue feeding the stage-2 pool.
    Q2,
}

impl StageId {
    /// Index into per-stage bookkeeping arrays.
    pub fn index(self) -> usize {
        match self {
            Self::Q1 => 0,
            Self::Q2 => 1,
        }
    }

    /// Short lowercase name used in reports.
    pub fn name(self) -> &'static str {
        match self {
            Self::Q1 => "q1",
            Self::Q2 => "q2",
        }
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_ordering() {
        assert!(TickId(1) < TickId(2));
        assert_eq!(TickId::from(7), TickId(7));
    }

    #[test]
    fn stage_indices_are_distinct() {
        assert_ne!(StageId::Q1.index(), StageId::Q2.index());
        assert_eq!(StageId::Q1.to_string(), "q1");
        assert_eq!(StageId::Q2.to_string(), "q2");
    }
}
