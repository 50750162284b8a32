//! Series normalization

use crate::models::{PricePoint, SeriesPoint};

/// Convert raw chart points into a regression-ready series.
///
/// Element `i` of the output carries `index == i` with the price copied
/// unchanged, so the output always has the same length as the input.
/// Source ordering is trusted: duplicate timestamps are kept and
/// out-of-order input is not re-sorted.
pub fn normalize(points: &[PricePoint]) -> Vec<SeriesPoint> {
    points
        .iter()
        .enumerate()
        .map(|(index, point)| SeriesPoint {
            index,
            price: point.price,
        })
        .collect()
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
    fn test_length_and_indices_preserved() {
        let points = points_from_prices(&[10.0, 12.5, 11.75, 13.0]);
        let series = normalize(&points);

        assert_eq!(series.len(), points.len());
        for (i, point) in series.iter().enumerate() {
            assert_eq!(point.index, i);
            assert_eq!(point.price, points[i].price);
        }
    }

    #[test]
    fn test_empty_input() {
        let series = normalize(&[]);
        assert!(series.is_empty());
    }

    #[test]
    fn test_single_point() {
        let points = points_from_prices(&[42.0]);
        let series = normalize(&points);
        assert_eq!(series.len(), 1);
        assert_eq!(series[0].index, 0);
        assert_eq!(series[0].price, 42.0);
    }

    #[test]
    fn test_duplicate_timestamps_kept() {
        let timestamp = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let points = vec![
            PricePoint { timestamp, price: 5.0 },
            PricePoint { timestamp, price: 6.0 },
        ];
        let series = normalize(&points);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].price, 5.0);
        assert_eq!(series[1].price, 6.0);
    }
}
