use crate::models::DashboardState;
use crate::services::{chart_service, dashboard_service};
use crate::utils::DashboardError;

const CHART_WIDTH: u32 = 1024;
const CHART_HEIGHT: u32 = 600;

/// Render the current series to a PNG file
pub fn execute(state: &DashboardState, args: &[&str]) -> Result<(), DashboardError> {
    if state.points.is_empty() {
        return Err(DashboardError::Usage(
            "No price data loaded. Run 'select <asset-id>' or 'refresh' first.".to_string(),
        ));
    }

    let path = args.first().copied().unwrap_or("chart.png");

    let name = match state.asset_by_id(&state.selected_asset) {
        Some(asset) => asset.name.clone(),
        None => state.selected_asset.clone(),
    };
    let caption = format!("{} {}d price (USD)", name, dashboard_service::LOOKBACK_DAYS);

    chart_service::render_chart(
        &state.points,
        state.fit.as_ref(),
        &caption,
        path,
        CHART_WIDTH,
        CHART_HEIGHT,
    )
    .map_err(DashboardError::ChartRender)?;

    println!("Chart written to {}", path);
    Ok(())
}
