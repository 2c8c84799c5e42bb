//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.hbsync/config.toml`
//! 3. **Project config** - `./.hbsync/config.toml`

use crate::config::types::{HbSyncConfig, HttpConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;
use std::fs;
use std::path::Path;

/// Check if an error is a "file not found" error.
fn is_file_not_found(e: &(dyn std::error::Error + 'static)) -> bool {
    if let Some(io_err) = e.downcast_ref::<std::io::Error>() {
        return io_err.kind() == std::io::ErrorKind::NotFound;
    }

    let err_str = e.to_string();
    err_str.contains("No such file or directory") || err_str.contains("cannot find the path")
}

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be parsed, or if
/// validation fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<HbSyncConfig, Box<dyn std::error::Error>> {
    let mut config = HbSyncConfig::default();

    match load_user_config() {
        Ok(user_config) => config = merge_configs(config, user_config),
        Err(e) if !is_file_not_found(e.as_ref()) => return Err(e),
        Err(_) => {} // File not found - continue with defaults
    }

    match load_project_config() {
        Ok(project_config) => config = merge_configs(config, project_config),
        Err(e) if !is_file_not_found(e.as_ref()) => return Err(e),
        Err(_) => {}
    }

    validate_config(&config)?;

    Ok(config)
}

/// Load the user configuration from ~/.hbsync/config.toml.
fn load_user_config() -> Result<HbSyncConfig, Box<dyn std::error::Error>> {
    let home_dir = dirs::home_dir().ok_or("Could not find home directory")?;
    let config_path = home_dir.join(".hbsync").join("config.toml");
    load_config_file(&config_path)
}

/// Load the project configuration from ./.hbsync/config.toml.
fn load_project_config() -> Result<HbSyncConfig, Box<dyn std::error::Error>> {
    let config_path = std::env::current_dir()?.join(".hbsync").join("config.toml");
    load_config_file(&config_path)
}

/// Load a configuration file from the given path.
///
/// Read failures keep the underlying `io::Error` so a missing file can be told
/// apart from a broken one.
fn load_config_file(path: &Path) -> Result<HbSyncConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: HbSyncConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
            message: format!("'{}': {}", path.display(), e),
        })?;
    Ok(config)
}

/// Merge two configurations, with override_config taking precedence.
///
/// Optional fields in the override replace base values only if present.
pub fn merge_configs(base: HbSyncConfig, override_config: HbSyncConfig) -> HbSyncConfig {
    HbSyncConfig {
        http: HttpConfig {
            timeout_secs: override_config.http.timeout_secs.or(base.http.timeout_secs),
            connect_timeout_secs: override_config
                .http
                .connect_timeout_secs
                .or(base.http.connect_timeout_secs),
            user_agent: override_config.http.user_agent.or(base.http.user_agent),
        },
    }
}
