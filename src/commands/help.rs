use crate::services::dashboard_service::{ASSET_LIST_LIMIT, LOOKBACK_DAYS};
use crate::utils::DashboardError;

pub fn execute() -> Result<(), DashboardError> {
    println!("📖 Trendcast commands:");
    println!(
        "  assets          List the fetched assets (top {} by market cap)",
        ASSET_LIST_LIMIT
    );
    println!(
        "  select <id>     Switch asset and fetch its {}-day history",
        LOOKBACK_DAYS
    );
    println!("  refresh         Re-fetch history for the selected asset");
    println!("  chart [path]    Render the current series to a PNG (default: chart.png)");
    println!("  help            Show this message");
    println!("  quit            Exit");
    Ok(())
}
