//! Typed state context shared by the business and UI layers.
//!
//! - [`State`]: plain values owned by the UI thread
//! - [`Compute`]: cached results replaced only through an [`Updater`]
//! - [`Command`]: manual-only async side effects, dispatched from the UI
//!
//! Each dispatch of a command type gets a new generation; updates from older
//! generations are dropped in [`StateCtx::sync_computes`].

mod command;
mod compute;
mod ctx;
mod error;
mod runtime;
mod snapshot;
mod state;
mod task;
mod updater;

pub use command::{Command, CommandFuture};
pub use compute::Compute;
pub use ctx::StateCtx;
pub use error::Error;
pub use runtime::StateRuntime;
pub use snapshot::CommandSnapshot;
pub use state::{State, snapshot_clone};
pub use task::{TaskHandle, TaskId};
pub use tokio_util::sync::CancellationToken;
pub use updater::{LatestOnlyUpdater, Updater};
