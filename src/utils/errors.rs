//! User-facing error taxonomy for the dashboard

use thiserror::Error;

use crate::api::coingecko::ApiError;

/// Errors surfaced to the user as a banner line.
///
/// Network failures are caught at the fetch boundary and converted here;
/// they never propagate as panics.
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("Failed to fetch cryptocurrency list: {0}")]
    AssetListFetch(#[source] ApiError),

    #[error("Failed to fetch historical data for '{asset_id}': {source}")]
    SeriesFetch {
        asset_id: String,
        #[source]
        source: ApiError,
    },

    #[error("Failed to render chart: {0}")]
    ChartRender(String),

    #[error("{0}")]
    Usage(String),
}
