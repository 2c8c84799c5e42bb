pub mod adapter;
pub mod errors;
pub mod store;

pub use adapter::{PROCESSES_KEY, StorageAdapter, StoredState, URL_KEY};
pub use errors::StorageError;
pub use store::{FileStore, KeyValueStore, MemoryStore, storage_file_path};
