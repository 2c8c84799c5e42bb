pub mod errors;
pub mod manager;
pub mod types;

pub use errors::RegistryError;
pub use manager::ProcessRegistry;
pub use types::{ProcessRecord, ProcessUpdate};
