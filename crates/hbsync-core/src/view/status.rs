use serde::Serialize;

use crate::registry::ProcessRecord;

/// Sync status shown for one process row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    Loading,
    NoData,
    Synced,
    Behind,
}

impl SyncStatus {
    /// Derive the status from a record's fields. Pure; loading wins over everything.
    pub fn derive(loading: bool, current_slot: Option<u64>, target_slot: Option<u64>) -> Self {
        if loading {
            return SyncStatus::Loading;
        }
        match (current_slot, target_slot) {
            (Some(current), Some(target)) if current == target => SyncStatus::Synced,
            (Some(_), Some(_)) => SyncStatus::Behind,
            _ => SyncStatus::NoData,
        }
    }

    pub fn of(record: &ProcessRecord) -> Self {
        Self::derive(record.loading, record.current_slot, record.target_slot)
    }

    pub fn label(&self) -> &'static str {
        match self {
            SyncStatus::Loading => "Loading",
            SyncStatus::NoData => "No data",
            SyncStatus::Synced => "Synced",
            SyncStatus::Behind => "Behind",
        }
    }
}

impl std::fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Text for a slot cell: `...` while loading, `N/A` when absent.
pub fn slot_cell(loading: bool, slot: Option<u64>) -> String {
    if loading {
        return "...".to_string();
    }
    slot.map_or_else(|| "N/A".to_string(), |s| s.to_string())
}
