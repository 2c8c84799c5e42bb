use crate::config::types::HbSyncConfig;
use crate::errors::ConfigError;

/// Validate the merged configuration.
///
/// # Errors
///
/// Returns `ConfigError::InvalidConfiguration` when a timeout is zero or the
/// user agent is blank.
pub fn validate_config(config: &HbSyncConfig) -> Result<(), ConfigError> {
    if config.http.timeout_secs == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "http.timeout_secs must be greater than 0".to_string(),
        });
    }

    if config.http.connect_timeout_secs == Some(0) {
        return Err(ConfigError::InvalidConfiguration {
            message: "http.connect_timeout_secs must be greater than 0".to_string(),
        });
    }

    if let Some(agent) = &config.http.user_agent
        && agent.trim().is_empty()
    {
        return Err(ConfigError::InvalidConfiguration {
            message: "http.user_agent cannot be empty".to_string(),
        });
    }

    Ok(())
}
