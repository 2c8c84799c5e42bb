use crate::errors::HbSyncError;
use crate::registry::RegistryError;

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("Invalid node URL '{url}': must be an absolute URL such as https://your-hb-node.com")]
    InvalidUrl { url: String },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl HbSyncError for DashboardError {
    fn error_code(&self) -> &'static str {
        match self {
            DashboardError::InvalidUrl { .. } => "DASHBOARD_INVALID_URL",
            DashboardError::Registry(e) => e.error_code(),
        }
    }

    fn is_user_error(&self) -> bool {
        match self {
            DashboardError::InvalidUrl { .. } => true,
            DashboardError::Registry(e) => e.is_user_error(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_error_invalid_url() {
        let err = DashboardError::InvalidUrl {
            url: "nope".to_string(),
        };
        assert!(err.to_string().contains("'nope'"));
        assert_eq!(err.error_code(), "DASHBOARD_INVALID_URL");
        assert!(err.is_user_error());
    }

    #[test]
    fn test_dashboard_error_delegates_to_registry() {
        let err = DashboardError::from(RegistryError::EmptyId);
        assert_eq!(err.error_code(), "PROCESS_EMPTY_ID");
        assert_eq!(err.to_string(), "Process ID cannot be empty");
    }
}
