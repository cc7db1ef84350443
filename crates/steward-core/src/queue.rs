//! Named FIFO queues with live position tracking.

use crate::error::QueueError;
use crate::id::{RequestId, StageId, TickId};
use crate::request::RequestStore;

/// FIFO sequence of requests feeding one processing stage.
///
/// The queue holds [`RequestId`]s; position and wait bookkeeping is
/// written back into the requests themselves. After any mutation, the
/// request at index `i` records position `i`. Queues are small, so the
/// O(n) position refresh per operation is acceptable.
#[derive(Debug)]
pub struct Queue {
    stage: StageId,
    items: Vec<RequestId>,
}

impl Queue {
    /// An empty queue for the given stage.
    pub fn new(stage: StageId) -> Self {
        Self {
            stage,
            items: Vec::new(),
        }
    }

    /// The stage this queue feeds.
    pub fn stage(&self) -> StageId {
        self.stage
    }

    /// Current members in queue order.
    pub fn items(&self) -> &[RequestId] {
        &self.items
    }

    /// Number of queued requests.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True iff the queue has no members.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True iff the queue is at or above `max`.
    pub fn full(&self, max: usize) -> bool {
        self.items.len() >= max
    }

    /// Append a request, recording its enqueue tick.
    pub fn enqueue(&mut self, id: RequestId, store: &mut RequestStore, now: TickId) {
        store[id].note_enqueued(self.stage, now);
        self.items.push(id);
        self.refresh_positions(store);
    }

    /// Remove and return the head, folding its time queued into the
    /// request's per-stage wait accumulator.
    ///
    /// Callers must check [`is_empty`](Queue::is_empty) first; an empty
    /// dequeue is a precondition violation and fails fast.
    pub fn dequeue(&mut self, store: &mut RequestStore, now: TickId) -> Result<RequestId, QueueError> {
        if self.items.is_empty() {
            return Err(QueueError::Empty { stage: self.stage });
        }
        let id = self.items.remove(0);
        store[id].note_dequeued(self.stage, now);
        self.refresh_positions(store);
        Ok(id)
    }

    /// Remove an arbitrary member (abandonment path). Does not credit
    /// wait time: the request did not complete a normal dequeue.
    /// Returns false if the request was not queued here.
    pub fn remove(&mut self, id: RequestId, store: &mut RequestStore) -> bool {
        match self.items.iter().position(|&member| member == id) {
            Some(index) => {
                self.items.remove(index);
                store[id].note_removed(self.stage);
                self.refresh_positions(store);
                true
            }
            None => false,
        }
    }

    /// Drop all members, clearing their positions.
    pub fn clear(&mut self, store: &mut RequestStore) {
        for &id in &self.items {
            store[id].note_removed(self.stage);
        }
        self.items.clear();
    }

    fn refresh_positions(&self, store: &mut RequestStore) {
        for (index, &id) in self.items.iter().enumerate() {
            store[id].set_position(self.stage, index);
        }
    }
}
