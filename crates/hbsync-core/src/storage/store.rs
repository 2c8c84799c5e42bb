use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use super::errors::StorageError;

/// A flat string key-value store that outlives a single run.
///
/// Stands in for the browser's local storage: values are opaque strings and
/// callers decide how to encode them.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory store. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a single JSON object on disk (`{ "key": "value", ... }`).
///
/// The file is read once on open and rewritten in full on every `set`.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
    load_error: Option<StorageError>,
}

impl FileStore {
    /// Open the store at the default location (see [`storage_file_path`]).
    pub fn open_default() -> Self {
        Self::open(storage_file_path())
    }

    /// Open the store at `path`.
    ///
    /// A missing file is an empty store. A corrupted or unreadable file is
    /// logged, remembered in [`FileStore::load_error`], and treated as empty.
    pub fn open(path: PathBuf) -> Self {
        if !path.exists() {
            return Self {
                path,
                entries: BTreeMap::new(),
                load_error: None,
            };
        }

        let (entries, load_error) = match std::fs::read_to_string(&path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(entries) => (entries, None),
                Err(e) => {
                    // ERROR (not warn): file exists but is corrupted, stored
                    // URL and process list are lost until the user resets it.
                    tracing::error!(
                        event = "core.storage.json_parse_failed",
                        path = %path.display(),
                        error = %e,
                        "Storage file exists but contains invalid JSON - saved state discarded"
                    );
                    (
                        BTreeMap::new(),
                        Some(StorageError::LoadCorrupted {
                            message: format!("{}. Delete {} to reset", e, path.display()),
                        }),
                    )
                }
            },
            Err(e) => {
                tracing::error!(
                    event = "core.storage.load_failed",
                    path = %path.display(),
                    error = %e
                );
                (
                    BTreeMap::new(),
                    Some(StorageError::LoadFailed {
                        message: format!("{}. Check permissions on {}", e, path.display()),
                    }),
                )
            }
        };

        Self {
            path,
            entries,
            load_error,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Why the file could not be loaded, if it existed but was unusable.
    pub fn load_error(&self) -> Option<&StorageError> {
        self.load_error.as_ref()
    }

    fn persist(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| StorageError::SaveFailed {
                message: format!("Failed to create directory ({}): {}", parent.display(), e),
            })?;
        }

        let json =
            serde_json::to_string_pretty(&self.entries).map_err(|e| StorageError::SaveFailed {
                message: format!("Failed to serialize storage: {}", e),
            })?;

        std::fs::write(&self.path, json).map_err(|e| StorageError::SaveFailed {
            message: format!(
                "Failed to write storage file ({}): {}",
                self.path.display(),
                e
            ),
        })?;

        tracing::debug!(
            event = "core.storage.saved",
            path = %self.path.display(),
            keys = self.entries.len()
        );

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }
}

/// Location of the storage file: `~/.hbsync/storage.json`.
///
/// `HBSYNC_STORE_FILE` overrides the location when set and non-empty. Falls
/// back to `./.hbsync/storage.json` if the home directory cannot be determined.
pub fn storage_file_path() -> PathBuf {
    if let Ok(path_str) = std::env::var("HBSYNC_STORE_FILE")
        && !path_str.is_empty()
    {
        return PathBuf::from(path_str);
    }

    match dirs::home_dir() {
        Some(home) => home.join(".hbsync").join("storage.json"),
        None => {
            tracing::error!(
                event = "core.storage.home_dir_not_found",
                fallback = ".",
                "Could not determine home directory - using current directory as fallback"
            );
            PathBuf::from(".").join(".hbsync").join("storage.json")
        }
    }
}

/// Test utilities for the file store.
///
/// Public so the CLI crate can serialize its own env-var tests.
#[doc(hidden)]
pub mod test_helpers {
    use std::sync::Mutex;

    /// Mutex to serialize tests that modify HBSYNC_STORE_FILE env var.
    pub static STORE_FILE_ENV_LOCK: Mutex<()> = Mutex::new(());

    /// RAII guard that removes HBSYNC_STORE_FILE env var on drop.
    pub struct StoreFileEnvGuard;

    impl StoreFileEnvGuard {
        pub fn new(path: &std::path::Path) -> Self {
            // SAFETY: Caller must hold STORE_FILE_ENV_LOCK to serialize access
            // from Rust test code.
            unsafe { std::env::set_var("HBSYNC_STORE_FILE", path) };
            Self
        }
    }

    impl Drop for StoreFileEnvGuard {
        fn drop(&mut self) {
            // SAFETY: Caller must hold STORE_FILE_ENV_LOCK throughout guard lifetime.
            unsafe { std::env::remove_var("HBSYNC_STORE_FILE") };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_helpers::*;
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_get_set() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("missing").unwrap(), None);

        store.set("key", "value").unwrap();
        assert_eq!(store.get("key").unwrap(), Some("value".to_string()));

        store.set("key", "other").unwrap();
        assert_eq!(store.get("key").unwrap(), Some("other".to_string()));
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::open(temp_dir.path().join("storage.json"));

        assert_eq!(store.get("anything").unwrap(), None);
        assert!(store.load_error().is_none());
    }

    #[test]
    fn test_file_store_set_persists_across_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("storage.json");

        let mut store = FileStore::open(path.clone());
        store.set("hb-slots-url", "https://node.example").unwrap();
        assert!(path.exists(), "Parent directory should be created");

        let reopened = FileStore::open(path);
        assert_eq!(
            reopened.get("hb-slots-url").unwrap(),
            Some("https://node.example".to_string())
        );
    }

    #[test]
    fn test_file_store_corrupted_json_is_empty_with_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        std::fs::write(&path, "{ this is not valid json }").unwrap();

        let store = FileStore::open(path);
        assert_eq!(store.get("hb-slots-url").unwrap(), None);
        let error = store.load_error().unwrap();
        assert!(matches!(error, StorageError::LoadCorrupted { .. }));
        assert!(error.to_string().contains("corrupted"));
    }

    #[test]
    fn test_file_store_unreadable_file_is_empty_with_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        // A directory where a file is expected causes a read error
        std::fs::create_dir_all(&path).unwrap();

        let store = FileStore::open(path);
        assert!(matches!(
            store.load_error(),
            Some(StorageError::LoadFailed { .. })
        ));
    }

    #[test]
    fn test_file_store_corrupted_file_is_overwritten_on_set() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("storage.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let mut store = FileStore::open(path.clone());
        store.set("k", "v").unwrap();

        let reopened = FileStore::open(path);
        assert!(reopened.load_error().is_none());
        assert_eq!(reopened.get("k").unwrap(), Some("v".to_string()));
    }

    #[test]
    fn test_storage_file_path_env_override() {
        let _lock = STORE_FILE_ENV_LOCK.lock().unwrap();

        let temp_dir = TempDir::new().unwrap();
        let custom_path = temp_dir.path().join("custom.json");
        let _guard = StoreFileEnvGuard::new(&custom_path);

        assert_eq!(storage_file_path(), custom_path);
    }

    #[test]
    fn test_storage_file_path_empty_env_var_uses_default() {
        let _lock = STORE_FILE_ENV_LOCK.lock().unwrap();

        // SAFETY: We hold STORE_FILE_ENV_LOCK to serialize test access
        unsafe { std::env::set_var("HBSYNC_STORE_FILE", "") };

        let path = storage_file_path();
        assert!(path.ends_with("storage.json"));
        assert!(path.to_string_lossy().contains(".hbsync"));

        // SAFETY: We hold STORE_FILE_ENV_LOCK to serialize test access
        unsafe { std::env::remove_var("HBSYNC_STORE_FILE") };
    }
}
