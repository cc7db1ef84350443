//! Error types for the simulation core.
//!
//! No exception-style control flow: capacity overflow and abandonment
//! are ordinary outcomes, not errors. The variants here cover genuine
//! precondition violations that a correct scheduler never triggers.

use std::error::Error;
use std::fmt;

use crate::id::StageId;

/// Errors from queue operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QueueError {
    /// `dequeue()` was called on an empty queue. Callers must check
    /// `is_empty()` first; hitting this is a scheduler bug.
    Empty {
        /// The stage whose queue was misused.
        stage: StageId,
    },
}

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { stage } => write!(f, "dequeue from empty queue {stage}"),
        }
    }
}

impl Error for QueueError {}

/// Errors from the engine while executing a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepError {
    /// A queue precondition was violated during the tick.
    Queue(QueueError),
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Queue(e) => write!(f, "queue: {e}"),
        }
    }
}

impl Error for StepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Queue(e) => Some(e),
        }
    }
}

impl From<QueueError> for StepError {
    fn from(e: QueueError) -> Self {
        Self::Queue(e)
    }
}
