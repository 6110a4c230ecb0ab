use std::any::{Any, TypeId, type_name};
use std::collections::BTreeMap;

/// Owned copies of the states and computes a command may read.
///
/// Taken on the UI thread at dispatch time, then moved into the command future.
#[derive(Default)]
pub struct CommandSnapshot {
    inner: BTreeMap<TypeId, Box<dyn Any + Send>>,
}

impl CommandSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_cloned(&mut self, id: TypeId, value: Box<dyn Any + Send>) {
        self.inner.insert(id, value);
    }

    pub fn get<T: 'static>(&self) -> Option<&T> {
        self.inner
            .get(&TypeId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
    }

    /// # Panics
    /// Panics if `T` was not snapshotted, which means it is unregistered or opted out.
    pub fn state<T: 'static>(&self) -> &T {
        self.get::<T>()
            .unwrap_or_else(|| panic!("State snapshot for {} is missing", type_name::<T>()))
    }

    /// # Panics
    /// Panics if `T` was not snapshotted.
    pub fn compute<T: 'static>(&self) -> &T {
        self.get::<T>()
            .unwrap_or_else(|| panic!("Compute snapshot for {} is missing", type_name::<T>()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_inserted_value() {
        let mut snap = CommandSnapshot::new();
        snap.insert_cloned(TypeId::of::<String>(), Box::new("hello".to_owned()));

        assert_eq!(snap.get::<String>().map(String::as_str), Some("hello"));
        assert!(snap.get::<u32>().is_none());
    }

    #[test]
    #[should_panic(expected = "State snapshot for u32 is missing")]
    fn state_panics_when_missing() {
        let snap = CommandSnapshot::new();
        let _missing: &u32 = snap.state::<u32>();
    }
}
