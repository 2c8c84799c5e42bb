use std::collections::HashSet;

use serde_json::Value;
use tracing::{error, warn};

use super::errors::StorageError;
use super::store::KeyValueStore;

/// Key holding the raw node URL string.
pub const URL_KEY: &str = "hb-slots-url";
/// Key holding the JSON array of tracked process ids.
pub const PROCESSES_KEY: &str = "hb-slots-processes";

/// Durable part of the dashboard: the node URL and the ordered process ids.
///
/// Slot values are never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredState {
    /// Node URL, or empty when unset.
    pub url: String,
    pub process_ids: Vec<String>,
}

/// Reads and writes [`StoredState`] through a [`KeyValueStore`].
#[derive(Debug)]
pub struct StorageAdapter<S> {
    store: S,
}

impl<S: KeyValueStore> StorageAdapter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the stored URL and process ids.
    ///
    /// Never fails: missing values yield defaults and malformed values are
    /// logged and discarded.
    pub fn load(&self) -> StoredState {
        let url = match self.store.get(URL_KEY) {
            Ok(url) => url.unwrap_or_default(),
            Err(e) => {
                error!(event = "core.storage.url_load_failed", error = %e);
                String::new()
            }
        };

        let process_ids = match self.store.get(PROCESSES_KEY) {
            Ok(Some(raw)) => parse_process_ids(&raw),
            Ok(None) => Vec::new(),
            Err(e) => {
                error!(event = "core.storage.processes_load_failed", error = %e);
                Vec::new()
            }
        };

        StoredState { url, process_ids }
    }

    pub fn save_url(&mut self, url: &str) -> Result<(), StorageError> {
        self.store.set(URL_KEY, url)
    }

    pub fn save_process_ids(&mut self, ids: &[String]) -> Result<(), StorageError> {
        let json = serde_json::to_string(ids).map_err(|source| StorageError::Serialize {
            key: PROCESSES_KEY.to_string(),
            source,
        })?;
        self.store.set(PROCESSES_KEY, &json)
    }
}

/// Parse the stored process list.
///
/// Accepts bare id strings and legacy record objects carrying an `id` field
/// (any slot fields in them are ignored). Unrecognized entries, empty ids and
/// repeated ids are dropped.
fn parse_process_ids(raw: &str) -> Vec<String> {
    let entries: Vec<Value> = match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(e) => {
            error!(
                event = "core.storage.processes_parse_failed",
                error = %e,
                "Saved process list is not a JSON array - discarding"
            );
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    let mut ids = Vec::with_capacity(entries.len());

    for (index, entry) in entries.into_iter().enumerate() {
        let id = match entry {
            Value::String(id) => id,
            Value::Object(mut fields) => match fields.remove("id") {
                Some(Value::String(id)) => id,
                _ => {
                    warn!(event = "core.storage.process_entry_skipped", index = index);
                    continue;
                }
            },
            _ => {
                warn!(event = "core.storage.process_entry_skipped", index = index);
                continue;
            }
        };

        if id.trim().is_empty() {
            warn!(event = "core.storage.process_entry_skipped", index = index);
            continue;
        }

        if seen.insert(id.clone()) {
            ids.push(id);
        } else {
            warn!(event = "core.storage.duplicate_process_dropped", process_id = %id);
        }
    }

    ids
}
