//! Task identity and cooperative cancellation for dispatched commands.
//!
//! Every dispatch of a command type bumps a generation counter. The pair
//! `(command TypeId, generation)` is a [`TaskId`]; results tagged with an older
//! generation than the latest dispatch are stale and get dropped.

use std::any::TypeId;

use tokio_util::sync::CancellationToken;

/// Unique identifier for a dispatched command task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    type_id: TypeId,
    generation: u64,
}

impl TaskId {
    pub fn new(type_id: TypeId, generation: u64) -> Self {
        Self {
            type_id,
            generation,
        }
    }

    /// The command type that spawned the task.
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Higher generations are more recent dispatches.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Handle to a dispatched task with cooperative cancellation.
///
/// Cancelling does not abort the future; the command observes the token
/// (usually through `tokio::select!` on `cancelled()`) and returns early.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    pub(crate) id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    pub fn new(id: TaskId, cancel_token: CancellationToken) -> Self {
        Self { id, cancel_token }
    }

    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}
