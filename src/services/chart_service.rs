//! Price chart rendering

use chrono::{DateTime, Utc};
use plotters::prelude::*;

use crate::models::{PricePoint, RegressionFit};

/// Render the price history as a PNG line chart at `path`.
///
/// X axis is calendar time, Y axis is the quoted price. When a regression
/// fit is supplied the fitted trend line is overlaid in a second color.
pub fn render_chart(
    points: &[PricePoint],
    fit: Option<&RegressionFit>,
    caption: &str,
    path: &str,
    width: u32,
    height: u32,
) -> Result<(), String> {
    if points.len() < 2 {
        return Err("Not enough price data to render a chart (minimum 2 points required).".to_string());
    }

    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| format!("Failed to fill canvas: {}", e))?;

    // Find price range
    let min_price = points.iter().map(|p| p.price).fold(f64::INFINITY, f64::min);
    let max_price = points
        .iter()
        .map(|p| p.price)
        .fold(f64::NEG_INFINITY, f64::max);

    // Add some padding to the price range; 1e-8 floor keeps a flat series
    // from collapsing the axis
    let price_range = (max_price - min_price).max(1e-8);
    let padding = price_range * 0.1;
    let y_min = (min_price - padding).max(0.0);
    let y_max = max_price + padding;

    // Get time range
    let x_min = points[0].timestamp;
    let x_max = points[points.len() - 1].timestamp;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 40.0).into_font())
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| format!("Failed to build chart: {}", e))?;

    chart
        .configure_mesh()
        .y_desc("USD")
        .x_desc("Date")
        .x_label_formatter(&|ts: &DateTime<Utc>| ts.format("%m/%d").to_string())
        .draw()
        .map_err(|e| format!("Failed to draw mesh: {}", e))?;

    chart
        .draw_series(LineSeries::new(
            points.iter().map(|p| (p.timestamp, p.price)),
            &BLUE,
        ))
        .map_err(|e| format!("Failed to draw price line: {}", e))?;

    if let Some(fit) = fit {
        let trend = points
            .iter()
            .enumerate()
            .map(|(i, p)| (p.timestamp, fit.slope * i as f64 + fit.intercept));
        chart
            .draw_series(LineSeries::new(trend, &RED))
            .map_err(|e| format!("Failed to draw trend line: {}", e))?;
    }

    root.present()
        .map_err(|e| format!("Failed to render chart: {}", e))?;

    Ok(())
}
