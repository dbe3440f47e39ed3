//! Settings-file backend on the local filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};
use tracing::debug;

use super::{PrefStore, StoreError, StoreResult};

/// Name of the settings file inside an application's config directory.
const SETTINGS_FILE_NAME: &str = "settings.json";

/// JSON settings-file backend.
///
/// All values live in a single flat JSON object, pretty-printed so the
/// file stays hand-editable. Writes preserve keys owned by other parts
/// of the host application.
#[derive(Debug, Clone)]
pub struct LocalPrefStore {
    /// Full path of the settings file.
    path: PathBuf,
}

impl LocalPrefStore {
    /// Create a store backed by the given settings file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at the per-user config location for `app`
    /// (e.g. `~/.config/<app>/settings.json` on Linux).
    pub fn for_app(app: &str) -> StoreResult<Self> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            StoreError::InvalidPath("no per-user config directory on this platform".to_string())
        })?;
        Ok(Self::new(config_dir.join(app).join(SETTINGS_FILE_NAME)))
    }

    /// Path of the settings file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the settings object, treating a missing file as empty.
    fn load(&self) -> StoreResult<Map<String, Value>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(err) => return Err(StoreError::Io(err)),
        };

        serde_json::from_str(&contents).map_err(|source| StoreError::Malformed {
            path: self.path.clone(),
            source,
        })
    }
}

impl PrefStore for LocalPrefStore {
    fn get(&self, key: &str) -> StoreResult<Option<Value>> {
        Ok(self.load()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> StoreResult<()> {
        let mut values = self.load()?;
        values.insert(key.to_string(), value);

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(&values)
            .map_err(|source| StoreError::Malformed {
                path: self.path.clone(),
                source,
            })?;
        fs::write(&self.path, contents)?;

        debug!("Saved setting {} to {}", key, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn create_test_store() -> (LocalPrefStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = LocalPrefStore::new(temp_dir.path().join(SETTINGS_FILE_NAME));
        (store, temp_dir)
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let (store, _dir) = create_test_store();
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn test_set_and_get() {
        let (store, _dir) = create_test_store();

        store.set("language", json!("de")).unwrap();
        assert_eq!(store.get("language").unwrap(), Some(json!("de")));
    }

    #[test]
    fn test_for_app_path_shape() {
        // No config dir on exotic platforms; nothing to assert there.
        if dirs::config_dir().is_none() {
            return;
        }

        let store = LocalPrefStore::for_app("exampleapp").unwrap();
        assert!(store.path().ends_with("exampleapp/settings.json"));
    }

    #[test]
    fn test_set_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let store = LocalPrefStore::new(temp_dir.path().join("app").join(SETTINGS_FILE_NAME));

        store.set("flag", json!(true)).unwrap();
        assert_eq!(store.get("flag").unwrap(), Some(json!(true)));
    }

    #[test]
    fn test_set_preserves_other_keys() {
        let (store, _dir) = create_test_store();

        store.set("theme", json!("dark")).unwrap();
        store.set("flag", json!(true)).unwrap();

        assert_eq!(store.get("theme").unwrap(), Some(json!("dark")));
        assert_eq!(store.get("flag").unwrap(), Some(json!(true)));
    }

    #[test]
    fn test_persists_across_instances() {
        let (store, dir) = create_test_store();
        store.set("flag", json!(true)).unwrap();

        let reopened = LocalPrefStore::new(dir.path().join(SETTINGS_FILE_NAME));
        assert_eq!(reopened.get("flag").unwrap(), Some(json!(true)));
    }

    #[test]
    fn test_corrupt_file_errors_on_get() {
        let (store, _dir) = create_test_store();
        fs::write(store.path(), "not json").unwrap();

        assert!(matches!(
            store.get("flag"),
            Err(StoreError::Malformed { .. })
        ));
    }

    #[test]
    fn test_corrupt_file_is_not_clobbered_by_set() {
        let (store, _dir) = create_test_store();
        fs::write(store.path(), "not json").unwrap();

        assert!(matches!(
            store.set("flag", json!(true)),
            Err(StoreError::Malformed { .. })
        ));
        assert_eq!(fs::read_to_string(store.path()).unwrap(), "not json");
    }

    #[test]
    fn test_non_object_file_errors() {
        let (store, _dir) = create_test_store();
        fs::write(store.path(), "[1, 2, 3]").unwrap();

        assert!(matches!(
            store.get("flag"),
            Err(StoreError::Malformed { .. })
        ));
    }
}
