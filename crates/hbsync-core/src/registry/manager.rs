use super::errors::RegistryError;
use super::types::{ProcessRecord, ProcessUpdate};

/// Ordered list of tracked processes with enforced invariants.
///
/// Key invariant: ids are unique. Order is insertion order. Persistence is the
/// caller's job (see [`crate::dashboard::Dashboard`]).
#[derive(Clone, Debug, Default)]
pub struct ProcessRegistry {
    /// Records in insertion order (private to enforce invariants).
    records: Vec<ProcessRecord>,
}

impl ProcessRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a registry from stored ids.
    ///
    /// Every record starts without slot data and not loading. Empty and
    /// repeated ids are skipped.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for id in ids {
            // Rejections are the filtering step here.
            let _ = registry.add(id);
        }
        registry
    }

    /// Append a new process.
    ///
    /// # Errors
    /// Returns `RegistryError::EmptyId` for an empty or whitespace-only id and
    /// `RegistryError::AlreadyExists` if the id is already tracked.
    pub fn add(&mut self, id: impl Into<String>) -> Result<(), RegistryError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(RegistryError::EmptyId);
        }
        if self.contains(&id) {
            return Err(RegistryError::AlreadyExists { id });
        }

        self.records.push(ProcessRecord::new(id));
        Ok(())
    }

    /// Remove a process by id. Returns the removed record, or `None` if absent.
    pub fn remove(&mut self, id: &str) -> Option<ProcessRecord> {
        let index = self.position(id)?;
        Some(self.records.remove(index))
    }

    /// Remove every process. Returns how many were removed.
    pub fn remove_all(&mut self) -> usize {
        let count = self.records.len();
        self.records.clear();
        count
    }

    /// Merge `update` into the record for `id`.
    ///
    /// Returns false (and creates nothing) if the id is not tracked.
    pub fn update(&mut self, id: &str, update: &ProcessUpdate) -> bool {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.apply(update);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, id: &str) -> Option<&ProcessRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ProcessRecord> {
        self.records.iter()
    }

    /// Tracked ids in insertion order.
    pub fn ids(&self) -> Vec<String> {
        self.records.iter().map(|r| r.id.clone()).collect()
    }

    /// Whether any record has a fetch in flight.
    pub fn any_loading(&self) -> bool {
        self.records.iter().any(|r| r.loading)
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }
}
