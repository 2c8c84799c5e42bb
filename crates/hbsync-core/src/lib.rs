//! hbsync-core: Core library for monitoring HyperBEAM process slot sync
//!
//! Tracks a set of process ids on one HyperBEAM node, polls each process's
//! current and target slot, and derives whether it is synced. Used by the
//! `hbsync` CLI.
//!
//! # Main Entry Points
//!
//! - [`dashboard`] - Owned dashboard state with write-through persistence
//! - [`sync`] - Refresh one or all processes
//! - [`slots`] - Slot endpoint polling
//! - [`storage`] - Persistent key-value store
//! - [`view`] - Row status and control state
//! - [`config`] - Configuration management

pub mod config;
pub mod dashboard;
pub mod errors;
pub mod events;
pub mod logging;
pub mod registry;
pub mod slots;
pub mod storage;
pub mod sync;
pub mod view;

// Re-export commonly used types at crate root for convenience
pub use config::HbSyncConfig;
pub use dashboard::{Dashboard, DashboardError};
pub use errors::HbSyncError;
pub use registry::{ProcessRecord, ProcessRegistry, ProcessUpdate, RegistryError};
pub use slots::{FetchError, HttpSlotSource, SlotReport, SlotSource};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageAdapter};
pub use sync::{Notice, NoticeLevel, Reconciler};
pub use view::{ProcessAdder, ProcessRow, SyncStatus, TableControls, UrlEditor};

// Re-export logging initialization
pub use logging::init_logging;
