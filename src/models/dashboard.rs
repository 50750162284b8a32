//! Dashboard view state

use crate::models::{AssetSummary, PricePoint, Projection, RegressionFit, SeriesPoint};

/// Everything the dashboard currently displays.
///
/// Fetch cycles replace the series fields wholesale via [`SeriesSnapshot`];
/// nothing is mutated in place mid-cycle. `generation` tags each series
/// fetch so a slow response for a previously selected asset can never
/// overwrite data from a newer request.
#[derive(Debug, Default)]
pub struct DashboardState {
    pub assets: Vec<AssetSummary>,
    pub selected_asset: String,
    pub points: Vec<PricePoint>,
    pub series: Vec<SeriesPoint>,
    pub fit: Option<RegressionFit>,
    pub projection: Option<Projection>,
    generation: u64,
}

/// Outcome of one completed fetch cycle, applied as a single replacement
#[derive(Debug)]
pub struct SeriesSnapshot {
    pub points: Vec<PricePoint>,
    pub series: Vec<SeriesPoint>,
    pub fit: Option<RegressionFit>,
    pub projection: Option<Projection>,
}

impl DashboardState {
    pub fn new(default_asset: &str) -> Self {
        Self {
            selected_asset: default_asset.to_string(),
            ..Default::default()
        }
    }

    /// Replace the selector contents after the startup asset-list fetch
    pub fn set_assets(&mut self, assets: Vec<AssetSummary>) {
        self.assets = assets;
    }

    pub fn asset_by_id(&self, id: &str) -> Option<&AssetSummary> {
        self.assets.iter().find(|a| a.id == id)
    }

    /// Stamp a new series fetch for `asset_id`. The returned generation must
    /// be handed back to [`Self::complete_series_fetch`]; only the newest
    /// stamp wins.
    pub fn begin_series_fetch(&mut self, asset_id: &str) -> u64 {
        self.selected_asset = asset_id.to_string();
        self.generation += 1;
        self.generation
    }

    /// Apply a finished fetch cycle. Returns false (and changes nothing)
    /// when a newer fetch was stamped after this one started.
    pub fn complete_series_fetch(&mut self, generation: u64, snapshot: SeriesSnapshot) -> bool {
        if generation != self.generation {
            return false;
        }
        self.points = snapshot.points;
        self.series = snapshot.series;
        self.fit = snapshot.fit;
        self.projection = snapshot.projection;
        true
    }

    /// Price of the most recent observed point, if any data is loaded
    pub fn last_price(&self) -> Option<f64> {
        self.points.last().map(|p| p.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn snapshot_with_prices(prices: &[f64]) -> SeriesSnapshot {
        let points: Vec<PricePoint> = prices
            .iter()
            .enumerate()
            .map(|(i, &price)| PricePoint {
                timestamp: Utc.timestamp_opt(1_700_000_000 + i as i64 * 86_400, 0).unwrap(),
                price,
            })
            .collect();
        let series = points
            .iter()
            .enumerate()
            .map(|(index, p)| SeriesPoint { index, price: p.price })
            .collect();
        SeriesSnapshot {
            points,
            series,
            fit: None,
            projection: None,
        }
    }

    #[test]
    fn test_completed_fetch_replaces_snapshot() {
        let mut state = DashboardState::new("bitcoin");
        let generation = state.begin_series_fetch("bitcoin");
        assert!(state.complete_series_fetch(generation, snapshot_with_prices(&[1.0, 2.0])));
        assert_eq!(state.series.len(), 2);
        assert_eq!(state.last_price(), Some(2.0));
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut state = DashboardState::new("bitcoin");

        // Fetch for A is in flight when a fetch for B is issued
        let generation_a = state.begin_series_fetch("ethereum");
        let generation_b = state.begin_series_fetch("dogecoin");

        // B completes first, then A's slow response arrives
        assert!(state.complete_series_fetch(generation_b, snapshot_with_prices(&[5.0, 6.0])));
        assert!(!state.complete_series_fetch(generation_a, snapshot_with_prices(&[100.0, 200.0])));

        // The displayed series must be B's
        assert_eq!(state.selected_asset, "dogecoin");
        assert_eq!(state.last_price(), Some(6.0));
        assert_eq!(state.series.len(), 2);
        assert_eq!(state.series[1].price, 6.0);
    }

    #[test]
    fn test_generation_increases_per_fetch() {
        let mut state = DashboardState::new("bitcoin");
        let first = state.begin_series_fetch("bitcoin");
        let second = state.begin_series_fetch("bitcoin");
        assert!(second > first);
    }
}
