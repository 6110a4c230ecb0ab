use std::any::{Any, TypeId, type_name};
use std::collections::BTreeMap;

use tokio_util::sync::CancellationToken;

use crate::{
    Command, CommandSnapshot, Compute, Error, LatestOnlyUpdater, State, StateRuntime, TaskHandle,
    TaskId,
};

/// Typed registry of states, computes and commands for one UI.
///
/// Everything here lives on the UI thread. Commands run elsewhere and only talk
/// back through the runtime channel, which `sync_computes` drains once per frame.
#[derive(Default)]
pub struct StateCtx {
    runtime: StateRuntime,

    // states and computes share one storage, keyed by type
    storage: BTreeMap<TypeId, Box<dyn State>>,
    commands: BTreeMap<TypeId, Box<dyn Command>>,
    queue: Vec<(TypeId, &'static str)>,

    generations: BTreeMap<TypeId, u64>,
    tasks: BTreeMap<TypeId, TaskHandle>,
}

impl std::fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field("runtime", &self.runtime)
            .field("states", &self.storage.len())
            .field("commands", &self.commands.len())
            .field("queued", &self.queue.len())
            .field("generations", &self.generations)
            .finish()
    }
}

fn downcast_ref<T: State>(state: &dyn State) -> Option<&T> {
    let any: &dyn Any = state;
    any.downcast_ref::<T>()
}

fn downcast_mut<T: State>(state: &mut dyn State) -> Option<&mut T> {
    let any: &mut dyn Any = state;
    any.downcast_mut::<T>()
}

impl StateCtx {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        self.storage.insert(TypeId::of::<T>(), Box::new(state));
    }

    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        self.storage.insert(TypeId::of::<T>(), Box::new(compute));
    }

    pub fn record_command<C: Command>(&mut self, command: C) {
        self.commands.insert(TypeId::of::<C>(), Box::new(command));
    }

    pub fn try_state<T: State>(&self) -> Result<&T, Error> {
        self.storage
            .get(&TypeId::of::<T>())
            .and_then(|boxed| downcast_ref::<T>(boxed.as_ref()))
            .ok_or_else(Error::state_not_found::<T>)
    }

    /// # Panics
    /// Panics if `T` was never registered.
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>().unwrap_or_else(|err| panic!("{err}"))
    }

    /// # Panics
    /// Panics if `T` was never registered.
    pub fn state_mut<T: State>(&mut self) -> &mut T {
        self.storage
            .get_mut(&TypeId::of::<T>())
            .and_then(|boxed| downcast_mut::<T>(boxed.as_mut()))
            .unwrap_or_else(|| panic!("{}", Error::state_not_found::<T>()))
    }

    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        f(self.state_mut::<T>());
    }

    /// Latest value of a compute, `None` if it was never recorded.
    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.storage
            .get(&TypeId::of::<T>())
            .and_then(|boxed| downcast_ref::<T>(boxed.as_ref()))
    }

    pub fn set_repaint_hook(&mut self, hook: impl Fn() + Send + Sync + 'static) {
        self.runtime.set_repaint_hook(hook);
    }

    /// Queues a command; it runs on the next `flush_commands`.
    pub fn enqueue_command<C: Command>(&mut self) {
        self.queue.push((TypeId::of::<C>(), type_name::<C>()));
    }

    pub fn dispatch<C: Command>(&mut self) {
        self.enqueue_command::<C>();
        self.flush_commands();
    }

    /// Generation of the latest dispatch of `C`, zero if never dispatched.
    pub fn generation<C: Command>(&self) -> u64 {
        self.generations
            .get(&TypeId::of::<C>())
            .copied()
            .unwrap_or_default()
    }

    /// Spawns every queued command.
    ///
    /// Dispatching a command type again cancels the previous dispatch of that type
    /// and makes its pending updates stale.
    pub fn flush_commands(&mut self) {
        for (type_id, name) in std::mem::take(&mut self.queue) {
            if !self.commands.contains_key(&type_id) {
                log::error!("{}", Error::CommandNotFound { type_name: name });
                continue;
            }

            let generation = {
                let counter = self.generations.entry(type_id).or_default();
                *counter += 1;
                *counter
            };
            let task_id = TaskId::new(type_id, generation);

            if let Some(previous) = self.tasks.remove(&type_id) {
                previous.cancel();
                log::debug!(
                    "cancelled {name} (generation {})",
                    previous.id.generation()
                );
            }
            let token = CancellationToken::new();
            self.tasks
                .insert(type_id, TaskHandle::new(task_id, token.clone()));

            let snap = self.snapshot();
            let updater = LatestOnlyUpdater::new(self.runtime.updater(), task_id);

            if let Some(command) = self.commands.get(&type_id) {
                log::debug!("dispatching {name} (generation {generation})");
                StateRuntime::spawn(command.run(snap, updater, token));
            }
        }
    }

    /// Applies updates published by commands. Returns how many were applied.
    pub fn sync_computes(&mut self) -> usize {
        let updates: Vec<_> = self.runtime.drain().collect();
        let mut applied = 0;
        for update in updates {
            if let Some(origin) = update.origin
                && self.is_stale(origin)
            {
                log::debug!(
                    "dropping stale update from generation {}",
                    origin.generation()
                );
                continue;
            }
            self.storage.insert(update.type_id, update.value);
            applied += 1;
        }
        applied
    }

    fn is_stale(&self, origin: TaskId) -> bool {
        self.generations
            .get(&origin.type_id())
            .is_some_and(|latest| *latest != origin.generation())
    }

    fn snapshot(&self) -> CommandSnapshot {
        let mut snap = CommandSnapshot::new();
        for (id, state) in &self.storage {
            if let Some(cloned) = state.snapshot() {
                snap.insert_cloned(*id, cloned);
            }
        }
        snap
    }
}
