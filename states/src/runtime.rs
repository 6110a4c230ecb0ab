use std::sync::Arc;

use flume::{Receiver, Sender};

use crate::CommandFuture;
use crate::updater::{RepaintHook, Update, Updater};

/// Channel plumbing between commands and the state context.
pub struct StateRuntime {
    send: Sender<Update>,
    recv: Receiver<Update>,
    repaint: Option<RepaintHook>,
}

impl std::fmt::Debug for StateRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateRuntime")
            .field("pending", &self.recv.len())
            .field("repaint", &self.repaint.is_some())
            .finish()
    }
}

impl Default for StateRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl StateRuntime {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            send,
            recv,
            repaint: None,
        }
    }

    pub fn updater(&self) -> Updater {
        Updater::new(self.send.clone(), self.repaint.clone())
    }

    pub fn set_repaint_hook(&mut self, hook: impl Fn() + Send + Sync + 'static) {
        self.repaint = Some(Arc::new(hook));
    }

    pub(crate) fn drain(&self) -> impl Iterator<Item = Update> + '_ {
        self.recv.try_iter()
    }

    /// Runs a command future to completion in the background.
    ///
    /// Native: spawned on the ambient tokio runtime. Without one (plain unit tests,
    /// headless tools) a throwaway current-thread runtime is started on its own thread.
    #[cfg(not(target_arch = "wasm32"))]
    pub(crate) fn spawn(future: CommandFuture) {
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(future);
            }
            Err(_) => {
                std::thread::spawn(move || {
                    match tokio::runtime::Builder::new_current_thread()
                        .enable_all()
                        .build()
                    {
                        Ok(runtime) => runtime.block_on(future),
                        Err(err) => log::error!("failed to start command runtime: {err}"),
                    }
                });
            }
        }
    }

    /// Runs a command future on the JS event loop.
    #[cfg(target_arch = "wasm32")]
    pub(crate) fn spawn(future: CommandFuture) {
        wasm_bindgen_futures::spawn_local(future);
    }
}
