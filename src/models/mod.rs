//! Data models for dashboard commands and services
//!
//! Each model represents a unit of data flowing through the fetch →
//! normalize → fit → project pipeline or the view state built from it.

pub mod asset;
pub mod dashboard;
pub mod forecast;
pub mod series;

// Re-export commonly used types for convenience
pub use asset::AssetSummary;
pub use dashboard::{DashboardState, SeriesSnapshot};
pub use forecast::{Projection, RegressionFit, TrendDirection, TrendSummary};
pub use series::{PricePoint, SeriesPoint};
