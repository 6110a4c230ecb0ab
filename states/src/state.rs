use std::any::Any;

/// A value stored in [`StateCtx`](crate::StateCtx), keyed by its type.
///
/// States that commands need to read must return a clone from [`State::snapshot`];
/// everything else stays on the UI thread.
pub trait State: Any + Send {
    /// Clone taken when a command is dispatched. `None` keeps the state out of snapshots.
    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }
}

/// Helper for the common `snapshot` implementation.
pub fn snapshot_clone<T: Clone + Send + 'static>(value: &T) -> Option<Box<dyn Any + Send>> {
    Some(Box::new(value.clone()))
}
