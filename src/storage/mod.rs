//! Settings storage abstraction layer.
//!
//! Provides a trait-based key-value settings abstraction with implementations for:
//! - JSON settings files on the local filesystem (production)
//! - An in-memory map (tests, ephemeral wiring)

mod error;
mod local;
mod memory;
mod traits;

pub use error::{StoreError, StoreResult};
pub use local::LocalPrefStore;
pub use memory::MemoryPrefStore;
pub use traits::PrefStore;

use std::path::PathBuf;

/// Create a settings backend based on configuration.
pub fn create_store(config: StoreConfig) -> StoreResult<Box<dyn PrefStore>> {
    match config {
        StoreConfig::Local(path) => Ok(Box::new(LocalPrefStore::new(path))),
        StoreConfig::ForApp(app) => Ok(Box::new(LocalPrefStore::for_app(&app)?)),
        StoreConfig::Memory => Ok(Box::new(MemoryPrefStore::new())),
    }
}

/// Settings backend configuration.
#[derive(Debug, Clone)]
pub enum StoreConfig {
    /// JSON settings file at an explicit path.
    Local(PathBuf),
    /// JSON settings file in the per-user config directory of the named app.
    ForApp(String),
    /// In-memory storage, lost on drop.
    Memory,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::ForApp("prefstore".to_string())
    }
}
