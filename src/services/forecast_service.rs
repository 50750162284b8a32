//! Linear trend fitting and one-step projection

use thiserror::Error;

use crate::models::{Projection, RegressionFit, SeriesPoint, TrendDirection, TrendSummary};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ForecastError {
    /// Fewer than two points, or a zero denominator in the closed-form
    /// solution; no finite trend line exists for such input.
    #[error("Cannot fit a trend line to {points} data point(s); at least 2 are required")]
    DegenerateSeries { points: usize },
}

/// Fit an ordinary least-squares line over `(index, price)` pairs.
///
/// Degenerate input is rejected up front instead of letting a division by
/// zero produce NaN that would flow into the rendered summary.
pub fn fit(series: &[SeriesPoint]) -> Result<RegressionFit, ForecastError> {
    let n = series.len();
    if n < 2 {
        return Err(ForecastError::DegenerateSeries { points: n });
    }

    let nf = n as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    for point in series {
        let x = point.index as f64;
        sum_x += x;
        sum_y += point.price;
        sum_xy += x * point.price;
        sum_xx += x * x;
    }

    let denominator = nf * sum_xx - sum_x * sum_x;
    if denominator.abs() < 1e-12 {
        return Err(ForecastError::DegenerateSeries { points: n });
    }

    let slope = (nf * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / nf;
    if !slope.is_finite() || !intercept.is_finite() {
        return Err(ForecastError::DegenerateSeries { points: n });
    }

    Ok(RegressionFit { slope, intercept })
}

/// Extrapolate exactly one index step past the last observed point.
///
/// With 0-based indices the last observed point sits at `observed_len - 1`,
/// so the projection is evaluated at `x = observed_len`.
pub fn project(fit: &RegressionFit, observed_len: usize) -> Projection {
    let next_index = observed_len as f64;
    Projection {
        predicted_price: fit.slope * next_index + fit.intercept,
    }
}

/// Build the summary card values from the last observed and predicted price.
/// The indicator points up only for a strictly positive change.
pub fn summarize(current_price: f64, projection: &Projection) -> TrendSummary {
    let predicted_price = projection.predicted_price;
    let percent_change = (predicted_price - current_price) / current_price * 100.0;
    let direction = if percent_change > 0.0 {
        TrendDirection::Up
    } else {
        TrendDirection::Down
    };
    TrendSummary {
        current_price,
        predicted_price,
        percent_change,
        direction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn series_from_prices(prices: &[f64]) -> Vec<SeriesPoint> {
        prices
            .iter()
            .enumerate()
            .map(|(index, &price)| SeriesPoint { index, price })
            .collect()
    }

    #[test]
    fn test_exact_fit_on_known_line() {
        // price = 2 * index + 10
        let series = series_from_prices(&[10.0, 12.0, 14.0, 16.0]);
        let fit = fit(&series).unwrap();

        assert!((fit.slope - 2.0).abs() < TOLERANCE);
        assert!((fit.intercept - 10.0).abs() < TOLERANCE);

        let projection = project(&fit, series.len());
        assert!((projection.predicted_price - 18.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_fit_on_noisy_series_is_finite() {
        let series = series_from_prices(&[100.0, 103.5, 99.2, 107.8, 105.1, 110.0]);
        let fit = fit(&series).unwrap();
        assert!(fit.slope.is_finite());
        assert!(fit.intercept.is_finite());

        let projection = project(&fit, series.len());
        assert!(projection.predicted_price.is_finite());
    }

    #[test]
    fn test_single_point_is_degenerate() {
        let series = series_from_prices(&[42.0]);
        assert_eq!(
            fit(&series),
            Err(ForecastError::DegenerateSeries { points: 1 })
        );
    }

    #[test]
    fn test_empty_series_is_degenerate() {
        assert_eq!(fit(&[]), Err(ForecastError::DegenerateSeries { points: 0 }));
    }

    #[test]
    fn test_flat_series_projects_same_price() {
        let series = series_from_prices(&[50.0, 50.0, 50.0]);
        let fit = fit(&series).unwrap();
        let projection = project(&fit, series.len());
        assert!((projection.predicted_price - 50.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_positive_change_points_up() {
        let summary = summarize(100.0, &Projection { predicted_price: 110.0 });
        assert!((summary.percent_change - 10.0).abs() < TOLERANCE);
        assert_eq!(summary.direction, TrendDirection::Up);
    }

    #[test]
    fn test_negative_change_points_down() {
        let summary = summarize(100.0, &Projection { predicted_price: 90.0 });
        assert!((summary.percent_change + 10.0).abs() < TOLERANCE);
        assert_eq!(summary.direction, TrendDirection::Down);
    }

    #[test]
    fn test_zero_change_points_down() {
        let summary = summarize(100.0, &Projection { predicted_price: 100.0 });
        assert_eq!(summary.percent_change, 0.0);
        assert_eq!(summary.direction, TrendDirection::Down);
    }
}
