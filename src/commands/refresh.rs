use tracing::info;

use crate::api::coingecko::CoinGeckoClient;
use crate::models::DashboardState;
use crate::services::dashboard_service;
use crate::utils::DashboardError;

/// Re-run the fetch cycle for the currently selected asset
pub async fn execute(
    client: &CoinGeckoClient,
    state: &mut DashboardState,
) -> Result<(), DashboardError> {
    let asset_id = state.selected_asset.clone();
    info!("Refreshing series for {}", asset_id);
    dashboard_service::refresh_series(client, state, &asset_id).await?;
    super::print_summary(state);
    Ok(())
}
