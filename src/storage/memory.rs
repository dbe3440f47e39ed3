//! In-memory settings backend.

use std::sync::Mutex;

use serde_json::{Map, Value};

use super::{PrefStore, StoreResult};

/// In-memory settings backend.
///
/// Starts empty and loses its contents on drop. Intended for tests and
/// for wiring where persistence across runs is not wanted.
#[derive(Debug, Default)]
pub struct MemoryPrefStore {
    values: Mutex<Map<String, Value>>,
}

impl MemoryPrefStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PrefStore for MemoryPrefStore {
    fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        let values = self.values.lock().expect("settings map poisoned");
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> StoreResult<()> {
        let mut values = self.values.lock().expect("settings map poisoned");
        values.insert(key.to_string(), value);
        Ok(())
    }
}
