use crate::State;

/// A cached result that is only ever replaced through an [`Updater`](crate::Updater).
///
/// UI code reads computes via `ctx.cached::<T>()`; commands publish new values.
pub trait Compute: State {}
