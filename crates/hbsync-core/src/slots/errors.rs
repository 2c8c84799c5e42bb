use crate::errors::HbSyncError;

/// Why a single slot request produced no value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {message}")]
    Client { message: String },

    #[error("Request timed out")]
    Timeout,

    #[error("Request failed: {message}")]
    Network { message: String },

    #[error("Node returned HTTP {status}")]
    Status { status: u16 },

    #[error("Response body is not valid JSON: {message}")]
    InvalidBody { message: String },

    #[error("Response carries no slot number: {body}")]
    MissingSlot { body: String },
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_builder() {
            FetchError::Client {
                message: e.to_string(),
            }
        } else {
            FetchError::Network {
                message: e.to_string(),
            }
        }
    }
}

impl HbSyncError for FetchError {
    fn error_code(&self) -> &'static str {
        match self {
            FetchError::Client { .. } => "FETCH_CLIENT_FAILED",
            FetchError::Timeout => "FETCH_TIMEOUT",
            FetchError::Network { .. } => "FETCH_NETWORK_ERROR",
            FetchError::Status { .. } => "FETCH_BAD_STATUS",
            FetchError::InvalidBody { .. } => "FETCH_INVALID_BODY",
            FetchError::MissingSlot { .. } => "FETCH_MISSING_SLOT",
        }
    }
}
