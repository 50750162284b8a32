pub mod assets;
pub mod chart;
pub mod help;
pub mod refresh;
pub mod select;

use tracing::error;

use crate::api::coingecko::CoinGeckoClient;
use crate::models::{DashboardState, TrendDirection};
use crate::services::forecast_service;
use crate::utils::format;

/// Outcome of one dispatched input line
pub enum CommandOutcome {
    Continue,
    Quit,
}

/// Parse one input line and run the matching command.
pub async fn handle_line(
    client: &CoinGeckoClient,
    state: &mut DashboardState,
    line: &str,
) -> CommandOutcome {
    let parts: Vec<&str> = line.split_whitespace().collect();
    if parts.is_empty() {
        return CommandOutcome::Continue;
    }

    let command = parts[0];
    let args = &parts[1..];

    let result = match command {
        "assets" | "list" => assets::execute(state),
        "select" | "s" => select::execute(client, state, args).await,
        "refresh" | "r" => refresh::execute(client, state).await,
        "chart" => chart::execute(state, args),
        "help" | "?" => help::execute(),
        "quit" | "exit" => return CommandOutcome::Quit,
        _ => {
            println!("Unknown command '{}'. Type 'help' for the command list.", command);
            return CommandOutcome::Continue;
        }
    };

    if let Err(e) = result {
        error!("Command {} failed: {}", command, e);
        println!("⚠️  {}", e);
    }

    CommandOutcome::Continue
}

/// Print the post-fetch view: current price plus the projection card when
/// one was produced for this cycle. Degenerate or empty series get a notice
/// instead of a card.
pub(crate) fn print_summary(state: &DashboardState) {
    let current_price = match state.last_price() {
        Some(price) => price,
        None => {
            println!("No price data available for '{}'.", state.selected_asset);
            return;
        }
    };

    let header = match state.asset_by_id(&state.selected_asset) {
        Some(asset) => format!("{} ({})", asset.name, asset.symbol.to_uppercase()),
        None => state.selected_asset.clone(),
    };

    println!();
    println!("  {} ({} daily closes)", header, state.series.len());
    if let Some(asset) = state.asset_by_id(&state.selected_asset) {
        println!("  icon: {}", asset.image_url);
    }

    match &state.projection {
        Some(projection) => {
            let summary = forecast_service::summarize(current_price, projection);
            let indicator = match summary.direction {
                TrendDirection::Up => "▲",
                TrendDirection::Down => "▼",
            };
            println!("  Current price:    {}", format::usd(summary.current_price));
            println!("  Predicted price:  {}", format::usd(summary.predicted_price));
            println!(
                "  Predicted change: {} {}",
                indicator,
                format::percent(summary.percent_change)
            );
            println!("  Based on historical price trends; not financial advice.");
        }
        None => {
            println!("  Current price:    {}", format::usd(current_price));
            println!("  Projection unavailable for this series.");
        }
    }
    println!();
}
