//! Fetch-cycle orchestration for the dashboard

use tracing::{debug, info, warn};

use crate::api::coingecko::CoinGeckoClient;
use crate::models::{DashboardState, PricePoint, SeriesSnapshot};
use crate::services::{forecast_service, series_service};
use crate::utils::errors::DashboardError;

/// Quote currency used across all market data requests
pub const VS_CURRENCY: &str = "usd";
/// Number of assets requested for the selector
pub const ASSET_LIST_LIMIT: u32 = 20;
/// Trailing days of price history requested per fetch
pub const LOOKBACK_DAYS: u32 = 30;

/// Fetch the selector contents. Called once at startup; a failure leaves
/// the selector empty rather than aborting the session.
pub async fn load_asset_list(
    client: &CoinGeckoClient,
    state: &mut DashboardState,
) -> Result<(), DashboardError> {
    let assets = client
        .list_top_assets(ASSET_LIST_LIMIT, VS_CURRENCY)
        .await
        .map_err(DashboardError::AssetListFetch)?;

    info!("Loaded {} assets for the selector", assets.len());
    state.set_assets(assets);
    Ok(())
}

/// Run one full fetch cycle for `asset_id`: fetch history, normalize, fit,
/// project, then replace the displayed snapshot. A response that arrives
/// after a newer fetch has been stamped is discarded, so the most recently
/// requested asset always wins.
pub async fn refresh_series(
    client: &CoinGeckoClient,
    state: &mut DashboardState,
    asset_id: &str,
) -> Result<(), DashboardError> {
    let generation = state.begin_series_fetch(asset_id);

    let points = client
        .get_daily_series(asset_id, VS_CURRENCY, LOOKBACK_DAYS)
        .await
        .map_err(|source| DashboardError::SeriesFetch {
            asset_id: asset_id.to_string(),
            source,
        })?;

    let snapshot = build_snapshot(asset_id, points);
    if !state.complete_series_fetch(generation, snapshot) {
        debug!(
            "Discarded stale response for {} (generation {})",
            asset_id, generation
        );
    }
    Ok(())
}

/// Normalize fetched points and derive the fit and projection for them.
///
/// An empty series skips the projector entirely; a degenerate one (fewer
/// than two points) yields a snapshot without a projection so no summary
/// card is rendered for it.
pub fn build_snapshot(asset_id: &str, points: Vec<PricePoint>) -> SeriesSnapshot {
    let series = series_service::normalize(&points);

    let (fit, projection) = if series.is_empty() {
        debug!("Empty series for {}; skipping projection", asset_id);
        (None, None)
    } else {
        match forecast_service::fit(&series) {
            Ok(fit) => {
                let projection = forecast_service::project(&fit, series.len());
                (Some(fit), Some(projection))
            }
            Err(e) => {
                warn!("Projection suppressed for {}: {}", asset_id, e);
                (None, None)
            }
        }
    };

    SeriesSnapshot {
        points,
        series,
        fit,
        projection,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn points_from_prices(prices: &[f64]) -> Vec<PricePoint> {
        prices
            .iter()
            .enumerate()
            .map(|(i, &price)| PricePoint {
                timestamp: Utc.timestamp_opt(1_700_000_000 + i as i64 * 86_400, 0).unwrap(),
                price,
            })
            .collect()
    }

    #[test]
    fn test_empty_series_skips_projection() {
        let snapshot = build_snapshot("bitcoin", Vec::new());
        assert!(snapshot.points.is_empty());
        assert!(snapshot.series.is_empty());
        assert!(snapshot.fit.is_none());
        assert!(snapshot.projection.is_none());
    }

    #[test]
    fn test_single_point_suppresses_projection() {
        let snapshot = build_snapshot("bitcoin", points_from_prices(&[42.0]));
        assert_eq!(snapshot.series.len(), 1);
        assert!(snapshot.fit.is_none());
        assert!(snapshot.projection.is_none());
    }

    #[test]
    fn test_linear_series_projects_next_step() {
        // price = 2 * index + 10, so the next step lands on 18
        let snapshot = build_snapshot("bitcoin", points_from_prices(&[10.0, 12.0, 14.0, 16.0]));
        let projection = snapshot.projection.unwrap();
        assert!((projection.predicted_price - 18.0).abs() < 1e-9);

        let fit = snapshot.fit.unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-9);
    }
}
