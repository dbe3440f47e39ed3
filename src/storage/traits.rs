//! Settings backend trait definition.

use serde_json::Value;

use super::StoreResult;

/// Key-value settings backend.
///
/// Implementations provide durable (or deliberately ephemeral) storage
/// for small per-user preference values, keyed by string. Individual
/// reads and writes are self-contained; the trait makes no cross-call
/// locking guarantees.
pub trait PrefStore: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> StoreResult<Option<Value>>;

    /// Write `value` under `key`, preserving all other keys.
    fn set(&self, key: &str, value: Value) -> StoreResult<()>;

    /// Read a boolean stored under `key`.
    ///
    /// Returns `None` when the key is absent or holds a non-boolean value.
    fn get_bool(&self, key: &str) -> StoreResult<Option<bool>> {
        Ok(self.get(key)?.and_then(|value| value.as_bool()))
    }

    /// Write a boolean under `key`.
    fn set_bool(&self, key: &str, value: bool) -> StoreResult<()> {
        self.set(key, Value::Bool(value))
    }
}
