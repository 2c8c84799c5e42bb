//! View models for the dashboard: derived row status, form drafts and which
//! actions are currently enabled. Rendering lives in the CLI crate.

pub mod controls;
pub mod forms;
pub mod status;

pub use controls::{ProcessRow, TableControls};
pub use forms::{ProcessAdder, UrlEditor, is_valid_url};
pub use status::{SyncStatus, slot_cell};
