//! Trend projection models

/// Least-squares line fitted to a series: `price = slope * index + intercept`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionFit {
    pub slope: f64,
    pub intercept: f64,
}

/// One-step-ahead price projection derived from a fit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub predicted_price: f64,
}

/// Direction of the projected move, for the summary card indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Up,
    Down,
}

/// Summary card contents
#[derive(Debug, Clone)]
pub struct TrendSummary {
    pub current_price: f64,
    pub predicted_price: f64,
    pub percent_change: f64,
    pub direction: TrendDirection,
}
