//! # Configuration System
//!
//! Hierarchical TOML configuration system for hbsync.
//!
//! ## Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.hbsync/config.toml` (global user preferences)
//! 3. **Project config** - `./.hbsync/config.toml` (directory-specific overrides)
//!
//! ## Usage Example
//!
//! ```toml
//! # ~/.hbsync/config.toml
//! [http]
//! timeout_secs = 20
//! connect_timeout_secs = 3
//! user_agent = "hbsync-ops"
//! ```
//!
//! ## Loading Configuration
//!
//! ```rust,no_run
//! use hbsync_core::config::HbSyncConfig;
//!
//! fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = HbSyncConfig::load_hierarchy()?;
//!     let timeout = config.http.timeout();
//!     Ok(())
//! }
//! ```

pub mod defaults;
pub mod loading;
pub mod types;
pub mod validation;

pub use types::{HbSyncConfig, HttpConfig};
pub use validation::validate_config;

impl HbSyncConfig {
    /// Load configuration from the hierarchy of config files.
    ///
    /// See [`loading::load_hierarchy`] for details.
    pub fn load_hierarchy() -> Result<Self, Box<dyn std::error::Error>> {
        loading::load_hierarchy()
    }
}
