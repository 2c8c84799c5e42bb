use serde::Serialize;

/// A tracked process and its last-known slot values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessRecord {
    pub id: String,
    /// Slot the process has computed up to. `None` when not fetched or the fetch failed.
    pub current_slot: Option<u64>,
    /// Latest slot the node knows for the process.
    pub target_slot: Option<u64>,
    /// True only while a fetch for this id is in flight.
    pub loading: bool,
}

impl ProcessRecord {
    /// A record with no slot data, not loading.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            current_slot: None,
            target_slot: None,
            loading: false,
        }
    }

    /// Merge `update` into this record. Unset fields are left alone.
    pub fn apply(&mut self, update: &ProcessUpdate) {
        if let Some(current) = update.current_slot {
            self.current_slot = current;
        }
        if let Some(target) = update.target_slot {
            self.target_slot = target;
        }
        if let Some(loading) = update.loading {
            self.loading = loading;
        }
    }
}

/// Partial update for a [`ProcessRecord`].
///
/// The outer `Option` means "change this field"; slots may be changed to `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessUpdate {
    pub current_slot: Option<Option<u64>>,
    pub target_slot: Option<Option<u64>>,
    pub loading: Option<bool>,
}

impl ProcessUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = Some(loading);
        self
    }

    pub fn current_slot(mut self, slot: Option<u64>) -> Self {
        self.current_slot = Some(slot);
        self
    }

    pub fn target_slot(mut self, slot: Option<u64>) -> Self {
        self.target_slot = Some(slot);
        self
    }
}
