//! The per-arrival request record and its slab store.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::id::{RequestId, RequestKey, StageId, TickId};

// ── ResponseType ─────────────────────────────────────────────────

/// Terminal classification of a completed request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResponseType {
    /// Turned away at arrival because the arrival queue was full.
    Rejected,
    /// Answered by a successful dependency call.
    Live,
    /// Answered from a fresh cache entry.
    Cached,
    /// Answered by fallback behavior with no usable cache entry.
    Fallback,
}

impl ResponseType {
    /// All response types, in report order.
    pub const ALL: [ResponseType; 4] = [
        ResponseType::Rejected,
        ResponseType::Cached,
        ResponseType::Live,
        ResponseType::Fallback,
    ];

    /// Lowercase label used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Rejected => "rejected",
            Self::Live => "live",
            Self::Cached => "cached",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ── Request ──────────────────────────────────────────────────────

/// Per-stage queue bookkeeping: accumulated wait, live position, and
/// the tick of the current enqueue (if queued).
#[derive(Clone, Copy, Debug, Default)]
struct StageBook {
    wait: u64,
    position: Option<usize>,
    enqueued_at: Option<TickId>,
}

/// A single client request and everything measured about it.
///
/// Created on arrival, completed at most once. A request belongs to at
/// most one queue or worker pool at any tick; the completion fields
/// (`end_tick`, `response_type`, the responded flag) are private and
/// transition exactly once via [`Request::complete`].
#[derive(Clone, Debug)]
pub struct Request {
    /// Identity key, drawn from the configured key space.
    pub key: RequestKey,
    /// Tick of arrival.
    pub start_tick: TickId,
    /// Number of dependency attempts made so far.
    pub tries: u32,
    /// Total sampled dependency latency accumulated across attempts.
    pub dependency_time: f64,
    /// Last-observed cache write tick for this key, recorded by the
    /// stage-1 lookup. `None` if never observed (or a miss).
    pub cache_ts: Option<TickId>,
    end_tick: Option<TickId>,
    response_type: Option<ResponseType>,
    responded: bool,
    stages: [StageBook; 2],
}

impl Request {
    /// A fresh request arriving at `now`.
    pub fn new(key: RequestKey, now: TickId) -> Self {
        Self {
            key,
            start_tick: now,
            tries: 0,
            dependency_time: 0.0,
            cache_ts: None,
            end_tick: None,
            response_type: None,
            responded: false,
            stages: [StageBook::default(), StageBook::default()],
        }
    }

    /// Whether the request has been responded to.
    pub fn responded(&self) -> bool {
        self.responded
    }

    /// Completion tick, set iff the request has responded.
    pub fn end_tick(&self) -> Option<TickId> {
        self.end_tick
    }

    /// Terminal classification, set iff the request has responded.
    pub fn response_type(&self) -> Option<ResponseType> {
        self.response_type
    }

    /// Record the terminal response. Returns `false` (and changes
    /// nothing) if the request already responded: double completion
    /// is a guarded no-op, which is what makes the `split`
    /// abandonment outcome safe.
    pub fn complete(&mut self, now: TickId, response_type: ResponseType) -> bool {
        if self.responded {
            return false;
        }
        self.responded = true;
        self.end_tick = Some(now);
        self.response_type = Some(response_type);
        true
    }

    /// Arrival-to-response latency in ticks. `None` until responded.
    pub fn latency(&self) -> Option<u64> {
        self.end_tick.map(|end| end.0 - self.start_tick.0)
    }

    /// Age of the observed cache entry: measured against `end_tick`
    /// once responded, otherwise against `now`.
    pub fn cache_age(&self, now: TickId) -> Option<u64> {
        let reference = if self.responded {
            self.end_tick.unwrap_or(now)
        } else {
            now
        };
        self.cache_ts.map(|ts| reference.0.saturating_sub(ts.0))
    }

    /// Whether the observed cache entry is still fresh. Always false
    /// when `ttl == 0` (caching disabled) or nothing was observed.
    pub fn cache_hit(&self, now: TickId, ttl: u64) -> bool {
        if ttl == 0 {
            return false;
        }
        matches!(self.cache_age(now), Some(age) if age < ttl)
    }

    /// Accumulated wait time in the given stage's queue.
    pub fn queue_wait(&self, stage: StageId) -> u64 {
        self.stages[stage.index()].wait
    }

    /// Current position in the given stage's queue, `None` if not queued.
    pub fn queue_position(&self, stage: StageId) -> Option<usize> {
        self.stages[stage.index()].position
    }

    pub(crate) fn note_enqueued(&mut self, stage: StageId, now: TickId) {
        self.stages[stage.index()].enqueued_at = Some(now);
    }

    /// Normal dequeue: fold the time spent queued into the wait
    /// accumulator and clear position.
    pub(crate) fn note_dequeued(&mut self, stage: StageId, now: TickId) {
        let book = &mut self.stages[stage.index()];
        if let Some(at) = book.enqueued_at.take() {
            book.wait += now.0.saturating_sub(at.0);
        }
        book.position = None;
    }

    /// Abandonment removal: clear position without crediting wait.
    pub(crate) fn note_removed(&mut self, stage: StageId) {
        let book = &mut self.stages[stage.index()];
        book.enqueued_at = None;
        book.position = None;
    }

    pub(crate) fn set_position(&mut self, stage: StageId, position: usize) {
        self.stages[stage.index()].position = Some(position);
    }
}

// ── RequestStore ─────────────────────────────────────────────────

/// Slab of every request created during a run, addressed by [`RequestId`].
///
/// Queues, pools, and the completed list hold IDs into this store so a
/// single owner holds all request state.
#[derive(Clone, Debug, Default)]
pub struct RequestStore {
    requests: Vec<Request>,
}

impl RequestStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a request, returning its ID.
    pub fn insert(&mut self, request: Request) -> RequestId {
        let id = RequestId(self.requests.len() as u32);
        self.requests.push(request);
        id
    }

    /// Number of requests ever created.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Whether no requests have been created.
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Iterate over all requests in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Request> {
        self.requests.iter()
    }
}

impl Index<RequestId> for RequestStore {
    type Output = Request;

    fn index(&self, id: RequestId) -> &Request {
        &self.requests[id.0 as usize]
    }
}

impl IndexMut<RequestId> for RequestStore {
    fn index_mut(&mut self, id: RequestId) -> &mut Request {
        &mut self.requests[id.0 as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_is_one_shot() {
        let mut r = Request::new(RequestKey(7), TickId(3));
        assert!(r.complete(TickId(10), ResponseType::Live));
        assert!(!r.complete(TickId(99), ResponseType::Fallback));
        assert_eq!(r.end_tick(), Some(TickId(10)));
        assert_eq!(r.response_type(), Some(ResponseType::Live));
        assert_eq!(r.latency(), Some(7));
    }

    #[test]
    fn cache_age_uses_end_tick_once_responded() {
        let mut r = Request::new(RequestKey(1), TickId(0));
        r.cache_ts = Some(TickId(5));
        assert_eq!(r.cache_age(TickId(8)), Some(3));

        r.complete(TickId(10), ResponseType::Cached);
        // Responded: age is frozen at end_tick - cache_ts.
        assert_eq!(r.cache_age(TickId(100)), Some(5));
    }

    #[test]
    fn ttl_zero_is_never_a_hit() {
        let mut r = Request::new(RequestKey(1), TickId(0));
        r.cache_ts = Some(TickId(1));
        assert!(!r.cache_hit(TickId(1), 0));
        assert!(r.cache_hit(TickId(1), 10));
        assert!(!r.cache_hit(TickId(20), 10));
    }

    #[test]
    fn no_observation_is_never_a_hit() {
        let r = Request::new(RequestKey(1), TickId(0));
        assert!(!r.cache_hit(TickId(5), 1_000));
    }

    #[test]
    fn store_hands_out_sequential_ids() {
        let mut store = RequestStore::new();
        let a = store.insert(Request::new(RequestKey(1), TickId(0)));
        let b = store.insert(Request::new(RequestKey(2), TickId(0)));
        assert_eq!(a, RequestId(0));
        assert_eq!(b, RequestId(1));
        assert_eq!(store[b].key, RequestKey(2));
        assert_eq!(store.len(), 2);
    }
}
