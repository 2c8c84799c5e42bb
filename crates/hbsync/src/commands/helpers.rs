use tracing::warn;

use hbsync_core::storage::StorageAdapter;
use hbsync_core::{Dashboard, FileStore, HbSyncConfig, Notice, NoticeLevel};

/// Load config, falling back to defaults with a visible warning.
pub(crate) fn load_config_with_warning() -> HbSyncConfig {
    match HbSyncConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.hbsync/config.toml and ./.hbsync/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            HbSyncConfig::default()
        }
    }
}

/// Open the dashboard backed by the default storage file.
///
/// An unreadable storage file is reported and the dashboard starts empty.
pub(crate) fn open_dashboard() -> Dashboard<FileStore> {
    let store = FileStore::open_default();
    if let Some(e) = store.load_error() {
        eprintln!("⚠️  Warning: {}. Starting with empty state.", e);
        warn!(
            event = "cli.storage.load_failed",
            path = %store.path().display(),
            error = %e
        );
    }
    Dashboard::load(StorageAdapter::new(store))
}

/// Print notices to the terminal. Returns the first error-level notice.
pub(crate) fn report_notices(notices: &[Notice]) -> Option<&Notice> {
    for notice in notices {
        match notice.level() {
            NoticeLevel::Success => println!("✅ {}", notice),
            NoticeLevel::Warning => eprintln!("⚠️  {}", notice),
            NoticeLevel::Error => eprintln!("❌ {}", notice),
        }
    }
    first_error(notices)
}

pub(crate) fn first_error(notices: &[Notice]) -> Option<&Notice> {
    notices.iter().find(|n| n.level() == NoticeLevel::Error)
}
