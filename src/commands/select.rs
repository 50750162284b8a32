use tracing::info;

use crate::api::coingecko::CoinGeckoClient;
use crate::models::DashboardState;
use crate::services::dashboard_service;
use crate::utils::DashboardError;

/// Switch the selected asset and run a fetch cycle for it
pub async fn execute(
    client: &CoinGeckoClient,
    state: &mut DashboardState,
    args: &[&str],
) -> Result<(), DashboardError> {
    let asset_id = match args.first() {
        Some(id) => id.to_lowercase(),
        None => {
            return Err(DashboardError::Usage(
                "Usage: select <asset-id> (run 'assets' for the list)".to_string(),
            ))
        }
    };

    if !state.assets.is_empty() && state.asset_by_id(&asset_id).is_none() {
        println!("'{}' is not in the fetched asset list; trying it anyway.", asset_id);
    }

    info!("Selected asset changed to {}", asset_id);
    dashboard_service::refresh_series(client, state, &asset_id).await?;
    super::print_summary(state);
    Ok(())
}
