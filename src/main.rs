use std::io::{self, BufRead, Write};

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

mod api;
mod commands;
mod models;
mod services;
mod utils;

use api::coingecko::CoinGeckoClient;
use commands::CommandOutcome;
use models::DashboardState;
use services::dashboard_service;

const DEFAULT_ASSET: &str = "bitcoin";

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("trendcast=debug".parse().unwrap()),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("📈 Starting Trendcast...");
    info!("  Crypto price dashboard with linear trend projection");

    let api_key = std::env::var("COINGECKO_API_KEY").ok();
    let client = match std::env::var("COINGECKO_BASE_URL") {
        Ok(base_url) => CoinGeckoClient::with_base_url(base_url, api_key),
        Err(_) => CoinGeckoClient::new(api_key),
    };

    let mut state = DashboardState::new(DEFAULT_ASSET);

    if let Err(e) = dashboard_service::load_asset_list(&client, &mut state).await {
        error!("Asset list fetch failed: {}", e);
        println!("⚠️  {}", e);
        println!("The selector is empty; 'select <asset-id>' still works with known ids.");
    }

    // Initial fetch cycle for the default asset, like the page load
    match dashboard_service::refresh_series(&client, &mut state, DEFAULT_ASSET).await {
        Ok(()) => commands::print_summary(&state),
        Err(e) => {
            warn!("Initial series fetch failed: {}", e);
            println!("⚠️  {}", e);
        }
    }

    println!("Type 'help' for commands.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                error!("Failed to read input: {}", e);
                break;
            }
            None => break,
        };

        match commands::handle_line(&client, &mut state, &line).await {
            CommandOutcome::Continue => {}
            CommandOutcome::Quit => break,
        }
    }

    info!("Shutting down");
}
