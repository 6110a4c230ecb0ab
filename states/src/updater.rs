use std::any::TypeId;
use std::sync::Arc;

use flume::Sender;

use crate::{Compute, State, TaskId};

/// Called after every published update so the UI can schedule a frame.
pub(crate) type RepaintHook = Arc<dyn Fn() + Send + Sync>;

/// A value travelling from a command back to the [`StateCtx`](crate::StateCtx).
pub(crate) struct Update {
    pub(crate) type_id: TypeId,
    pub(crate) value: Box<dyn State>,
    pub(crate) origin: Option<TaskId>,
}

/// Publishes new compute values from any thread.
///
/// Values are queued and applied by `StateCtx::sync_computes` on the UI thread.
#[derive(Clone)]
pub struct Updater {
    send: Sender<Update>,
    repaint: Option<RepaintHook>,
}

impl std::fmt::Debug for Updater {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Updater")
            .field("repaint", &self.repaint.is_some())
            .finish_non_exhaustive()
    }
}

impl Updater {
    pub(crate) fn new(send: Sender<Update>, repaint: Option<RepaintHook>) -> Self {
        Self { send, repaint }
    }

    pub fn set<T: Compute>(&self, value: T) {
        self.publish(TypeId::of::<T>(), Box::new(value), None);
    }

    fn publish(&self, type_id: TypeId, value: Box<dyn State>, origin: Option<TaskId>) {
        let update = Update {
            type_id,
            value,
            origin,
        };
        if self.send.send(update).is_err() {
            log::warn!("state context is gone, dropping update");
            return;
        }
        if let Some(repaint) = &self.repaint {
            repaint();
        }
    }
}

/// An [`Updater`] bound to one command dispatch.
///
/// Values it publishes are discarded if the same command has been dispatched
/// again since, so a slow response can never overwrite a newer one.
#[derive(Debug, Clone)]
pub struct LatestOnlyUpdater {
    inner: Updater,
    task: TaskId,
}

impl LatestOnlyUpdater {
    pub(crate) fn new(inner: Updater, task: TaskId) -> Self {
        Self { inner, task }
    }

    pub fn set<T: Compute>(&self, value: T) {
        self.inner
            .publish(TypeId::of::<T>(), Box::new(value), Some(self.task));
    }

    pub fn task(&self) -> TaskId {
        self.task
    }
}
