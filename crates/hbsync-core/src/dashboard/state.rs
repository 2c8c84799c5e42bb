use tracing::{error, info};

use super::errors::DashboardError;
use crate::registry::{ProcessRecord, ProcessRegistry, ProcessUpdate};
use crate::storage::{KeyValueStore, StorageAdapter};
use crate::view::{ProcessRow, TableControls, is_valid_url};

/// All dashboard state: committed node URL, tracked processes and the store
/// they are persisted to.
///
/// Structural changes (URL save, add, remove) write through to the store.
/// Write failures are logged and never returned. Slot updates stay in memory.
#[derive(Debug)]
pub struct Dashboard<S> {
    storage: StorageAdapter<S>,
    url: String,
    registry: ProcessRegistry,
}

impl<S: KeyValueStore> Dashboard<S> {
    /// Rehydrate from the store. Slot data always starts empty.
    pub fn load(storage: StorageAdapter<S>) -> Self {
        let stored = storage.load();
        let registry = ProcessRegistry::from_ids(stored.process_ids);

        info!(
            event = "core.dashboard.loaded",
            url_set = !stored.url.is_empty(),
            process_count = registry.len()
        );

        Self {
            storage,
            url: stored.url,
            registry,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn has_url(&self) -> bool {
        !self.url.is_empty()
    }

    pub fn registry(&self) -> &ProcessRegistry {
        &self.registry
    }

    pub fn storage(&self) -> &StorageAdapter<S> {
        &self.storage
    }

    /// Commit a new node URL.
    ///
    /// The empty string clears the URL. Anything else must be a well-formed
    /// absolute URL and is stored trimmed.
    ///
    /// # Errors
    /// Returns `DashboardError::InvalidUrl` when the URL is malformed; nothing
    /// is changed in that case.
    pub fn save_url(&mut self, url: &str) -> Result<(), DashboardError> {
        let url = url.trim();
        if !url.is_empty() && !is_valid_url(url) {
            return Err(DashboardError::InvalidUrl {
                url: url.to_string(),
            });
        }

        self.url = url.to_string();
        if let Err(e) = self.storage.save_url(&self.url) {
            error!(event = "core.dashboard.url_persist_failed", error = %e);
        }

        info!(event = "core.dashboard.url_saved", url = %self.url);
        Ok(())
    }

    /// Track a new process and persist the id list.
    ///
    /// # Errors
    /// Propagates the registry's rejection of empty or duplicate ids.
    pub fn add_process(&mut self, id: &str) -> Result<(), DashboardError> {
        self.registry.add(id)?;
        self.persist_ids();

        info!(event = "core.dashboard.process_added", process_id = id);
        Ok(())
    }

    /// Stop tracking a process. No-op (apart from the write) if it is unknown.
    pub fn remove_process(&mut self, id: &str) -> Option<ProcessRecord> {
        let removed = self.registry.remove(id);
        self.persist_ids();

        info!(
            event = "core.dashboard.process_removed",
            process_id = id,
            found = removed.is_some()
        );
        removed
    }

    /// Stop tracking every process. Returns how many were removed.
    pub fn remove_all(&mut self) -> usize {
        let count = self.registry.remove_all();
        self.persist_ids();

        info!(event = "core.dashboard.processes_cleared", count = count);
        count
    }

    /// Merge session-local fields into a record. Never persisted.
    pub fn update_process(&mut self, id: &str, update: &ProcessUpdate) -> bool {
        self.registry.update(id, update)
    }

    pub fn rows(&self) -> Vec<ProcessRow> {
        ProcessRow::all(&self.registry, self.has_url())
    }

    pub fn table_controls(&self) -> TableControls {
        TableControls::new(&self.registry, self.has_url())
    }

    fn persist_ids(&mut self) {
        let ids = self.registry.ids();
        if let Err(e) = self.storage.save_process_ids(&ids) {
            error!(
                event = "core.dashboard.processes_persist_failed",
                count = ids.len(),
                error = %e
            );
        }
    }
}
