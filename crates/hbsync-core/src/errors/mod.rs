use std::error::Error;

/// Base trait for all application errors
pub trait HbSyncError: Error + Send + Sync + 'static {
    /// Error code for programmatic handling
    fn error_code(&self) -> &'static str;

    /// Whether this error should be logged as an error or warning
    fn is_user_error(&self) -> bool {
        false
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config file: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

impl HbSyncError for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ConfigParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
