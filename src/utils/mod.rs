pub mod errors;
pub mod format;
pub mod table;

pub use errors::DashboardError;
pub use table::Table;
