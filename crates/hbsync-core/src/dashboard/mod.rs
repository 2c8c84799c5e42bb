pub mod errors;
pub mod state;

pub use errors::DashboardError;
pub use state::Dashboard;
