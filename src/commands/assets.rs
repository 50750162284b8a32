use crate::models::DashboardState;
use crate::utils::{DashboardError, Table};

/// List the fetched assets as a selector table
pub fn execute(state: &DashboardState) -> Result<(), DashboardError> {
    if state.assets.is_empty() {
        println!("No assets available. The asset list fetch may have failed at startup.");
        return Ok(());
    }

    let mut table = Table::new(vec!["ID", "Symbol", "Name"]);
    for asset in &state.assets {
        let symbol = asset.symbol.to_uppercase();
        table.add_row(vec![asset.id.as_str(), symbol.as_str(), asset.name.as_str()]);
    }

    println!("{}", table.render());
    println!("Selected: {}", state.selected_asset);
    Ok(())
}
