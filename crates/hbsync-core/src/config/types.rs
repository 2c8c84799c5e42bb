//! Configuration type definitions for hbsync.
//!
//! These types are deserialized from TOML config files.
//!
//! # Example Configuration
//!
//! ```toml
//! [http]
//! timeout_secs = 10
//! connect_timeout_secs = 5
//! ```

use serde::{Deserialize, Serialize};

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.hbsync/config.toml`
/// 2. Project config: `./.hbsync/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HbSyncConfig {
    /// Settings for the HTTP client used to poll the node
    #[serde(default)]
    pub http: HttpConfig,
}

/// HTTP client configuration for slot polling.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HttpConfig {
    /// Total request timeout in seconds.
    /// Default: 10 seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Connect timeout in seconds.
    /// Default: 5 seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub connect_timeout_secs: Option<u64>,

    /// User-Agent header sent with every request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}
