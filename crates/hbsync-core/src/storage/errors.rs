use crate::errors::HbSyncError;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Failed to save storage: {message}")]
    SaveFailed { message: String },

    #[error("Storage file corrupted: {message}")]
    LoadCorrupted { message: String },

    #[error("Failed to read storage file: {message}")]
    LoadFailed { message: String },

    #[error("Failed to serialize value for key '{key}': {source}")]
    Serialize {
        key: String,
        source: serde_json::Error,
    },
}

impl HbSyncError for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            StorageError::SaveFailed { .. } => "STORAGE_SAVE_FAILED",
            StorageError::LoadCorrupted { .. } => "STORAGE_LOAD_CORRUPTED",
            StorageError::LoadFailed { .. } => "STORAGE_LOAD_FAILED",
            StorageError::Serialize { .. } => "STORAGE_SERIALIZE_FAILED",
        }
    }
}
