use crate::errors::HbSyncError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Process ID cannot be empty")]
    EmptyId,

    #[error("Process ID '{id}' already exists")]
    AlreadyExists { id: String },
}

impl HbSyncError for RegistryError {
    fn error_code(&self) -> &'static str {
        match self {
            RegistryError::EmptyId => "PROCESS_EMPTY_ID",
            RegistryError::AlreadyExists { .. } => "PROCESS_ALREADY_EXISTS",
        }
    }

    fn is_user_error(&self) -> bool {
        true
    }
}
