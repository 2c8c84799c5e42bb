use serde::Serialize;

use super::status::{SyncStatus, slot_cell};
use crate::registry::{ProcessRecord, ProcessRegistry};

/// One rendered table row with its per-row action states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessRow {
    pub id: String,
    pub current_slot: Option<u64>,
    pub target_slot: Option<u64>,
    /// Display text for the current slot cell.
    pub current: String,
    /// Display text for the target slot cell.
    pub target: String,
    pub status: SyncStatus,
    /// Refresh is disabled while the row is loading or the node URL is unset.
    pub can_refresh: bool,
    /// Remove is always available.
    pub can_remove: bool,
}

impl ProcessRow {
    pub fn new(record: &ProcessRecord, url_set: bool) -> Self {
        Self {
            id: record.id.clone(),
            current_slot: record.current_slot,
            target_slot: record.target_slot,
            current: slot_cell(record.loading, record.current_slot),
            target: slot_cell(record.loading, record.target_slot),
            status: SyncStatus::of(record),
            can_refresh: !record.loading && url_set,
            can_remove: true,
        }
    }

    /// Rows for the whole registry in display order.
    pub fn all(registry: &ProcessRegistry, url_set: bool) -> Vec<Self> {
        registry
            .iter()
            .map(|record| Self::new(record, url_set))
            .collect()
    }
}

/// Table-level action states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableControls {
    /// Needs a URL, at least one row, and no row loading.
    pub can_refresh_all: bool,
    /// Needs at least one row.
    pub can_remove_all: bool,
}

impl TableControls {
    pub fn new(registry: &ProcessRegistry, url_set: bool) -> Self {
        Self {
            can_refresh_all: url_set && !registry.is_empty() && !registry.any_loading(),
            can_remove_all: !registry.is_empty(),
        }
    }
}
