use serde::Deserialize;
use thiserror::Error;

/// One entry from GET /coins/markets
#[derive(Debug, Clone, Deserialize)]
pub struct MarketAssetResponse {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub image: String,
}

/// Response from GET /coins/{id}/market_chart.
///
/// Timestamps arrive as epoch milliseconds in the first slot of each pair;
/// they are kept as f64 here because the API is not consistent about
/// emitting them as integers.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketChartResponse {
    pub prices: Vec<(f64, f64)>,
}

/// Comprehensive error type for API operations
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// 400 Bad Request
    #[error("Bad Request: {0}")]
    BadRequest(String),
    /// 401 Unauthorized
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    /// 403 Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),
    /// 404 Not Found
    #[error("Not Found: {0}")]
    NotFound(String),
    /// 429 Too Many Requests (rate limited)
    #[error("Rate Limited. Retry after {retry_after} s")]
    RateLimited { retry_after: u64 },
    /// 5xx Server Error
    #[error("Server Error ({0}): {1}")]
    ServerError(u16, String),
    /// Other HTTP errors
    #[error("HTTP Error ({0}): {1}")]
    HttpError(u16, String),
    /// Network/request error
    #[error("Request Error: {0}")]
    RequestError(String),
    /// Deserialization error
    #[error("Deserialization Error: {0}")]
    DeserializationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_market_asset() {
        let json = r#"{
            "id": "bitcoin",
            "symbol": "btc",
            "name": "Bitcoin",
            "image": "https://assets.coingecko.com/coins/images/1/large/bitcoin.png",
            "current_price": 43250.0,
            "market_cap": 846729274829
        }"#;
        let asset: MarketAssetResponse = serde_json::from_str(json).unwrap();
        assert_eq!(asset.id, "bitcoin");
        assert_eq!(asset.symbol, "btc");
        assert_eq!(asset.name, "Bitcoin");
        assert!(asset.image.ends_with("bitcoin.png"));
    }

    #[test]
    fn test_parse_market_chart() {
        let json = r#"{
            "prices": [[1711843200000, 69702.3], [1711929600000, 70587.9]],
            "market_caps": [],
            "total_volumes": []
        }"#;
        let chart: MarketChartResponse = serde_json::from_str(json).unwrap();
        assert_eq!(chart.prices.len(), 2);
        assert_eq!(chart.prices[0].0, 1711843200000.0);
        assert_eq!(chart.prices[1].1, 70587.9);
    }

    #[test]
    fn test_parse_market_chart_rejects_malformed_pairs() {
        let json = r#"{"prices": [[1711843200000]]}"#;
        assert!(serde_json::from_str::<MarketChartResponse>(json).is_err());
    }
}
