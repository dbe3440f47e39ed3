//! Tutorial seen-flag store.

use serde_json::Value;
use tracing::warn;

use crate::storage::PrefStore;

/// Settings key recording that the user has seen the tutorial.
const SEEN_KEY: &str = "userSeenShowCase";

/// Records whether the user has seen the onboarding tutorial.
///
/// Wraps a settings backend. Callers never observe storage failures:
/// `mark_seen` has no failure path and `has_seen` collapses every
/// failure mode to the unseen default.
pub struct TutorialFlagStore {
    store: Box<dyn PrefStore>,
}

impl TutorialFlagStore {
    /// Create a flag store over the given settings backend.
    pub fn new(store: Box<dyn PrefStore>) -> Self {
        Self { store }
    }

    /// Mark the tutorial as seen.
    ///
    /// Durable once written: later runs over the same settings store see
    /// the flag. Idempotent.
    pub fn mark_seen(&self) {
        if let Err(err) = self.store.set(SEEN_KEY, Value::Bool(true)) {
            warn!("Failed to persist tutorial flag: {}", err);
        }
    }

    /// Whether the user has seen the tutorial.
    ///
    /// Returns `false` when the flag was never written, when the stored
    /// value is not a boolean, or when the backend fails.
    pub fn has_seen(&self) -> bool {
        match self.store.get(SEEN_KEY) {
            Ok(Some(Value::Bool(seen))) => seen,
            Ok(_) => false,
            Err(err) => {
                warn!("Failed to read tutorial flag: {}", err);
                false
            }
        }
    }
}
