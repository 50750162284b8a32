use chrono::{DateTime, Utc};
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::Client as HttpClient;
use tracing::{debug, warn};

use super::models::{ApiError, MarketAssetResponse, MarketChartResponse};
use crate::models::{AssetSummary, PricePoint};

/// CoinGecko API client for market listings and historical prices
pub struct CoinGeckoClient {
    http_client: HttpClient,
    base_url: String,
    api_key: Option<String>,
}

impl CoinGeckoClient {
    const DEFAULT_BASE_URL: &'static str = "https://api.coingecko.com/api/v3";

    /// Create a new CoinGecko API client. The API key is optional; the free
    /// tier works without one but rate-limits harder.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: Self::DEFAULT_BASE_URL.to_string(),
            api_key,
        }
    }

    /// Create a new client with custom base URL (for testing)
    pub fn with_base_url(base_url: String, api_key: Option<String>) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url,
            api_key,
        }
    }

    /// Create default headers, including the demo API key when configured
    fn create_headers(&self) -> Result<HeaderMap, ApiError> {
        let mut headers = HeaderMap::new();
        if let Some(key) = &self.api_key {
            let value = HeaderValue::from_str(key)
                .map_err(|e| ApiError::RequestError(format!("Failed to create API key header: {}", e)))?;
            headers.insert("x-cg-demo-api-key", value);
        }
        Ok(headers)
    }

    /// Parse error response based on HTTP status code
    async fn handle_error_response(
        status: reqwest::StatusCode,
        response: reqwest::Response,
    ) -> ApiError {
        let status_code = status.as_u16();
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse().ok());
        let body_text = response.text().await.unwrap_or_default();

        match status_code {
            400 => {
                // Try to parse JSON error
                if let Ok(err_json) = serde_json::from_str::<serde_json::Value>(&body_text) {
                    let message = err_json
                        .get("error")
                        .and_then(|v| v.as_str())
                        .unwrap_or(&body_text);
                    ApiError::BadRequest(message.to_string())
                } else {
                    ApiError::BadRequest(body_text)
                }
            }
            401 => ApiError::Unauthorized(body_text),
            403 => ApiError::Forbidden(body_text),
            404 => ApiError::NotFound(body_text),
            429 => {
                let retry_after = retry_after.unwrap_or(60);
                warn!("Rate limited by CoinGecko, retry after {} s", retry_after);
                ApiError::RateLimited { retry_after }
            }
            500..=599 => ApiError::ServerError(status_code, body_text),
            _ => ApiError::HttpError(status_code, body_text),
        }
    }

    /// GET /coins/markets
    ///
    /// Lists the top assets by market capitalization in the given quote
    /// currency.
    ///
    /// # Arguments
    /// * `limit` - Number of assets per page (one page is fetched)
    /// * `vs_currency` - Quote currency, e.g. "usd"
    ///
    /// # Returns
    /// * `Ok(Vec<AssetSummary>)` - Asset summaries ordered by market cap
    /// * `Err(ApiError)` - Error with detailed error type
    pub async fn list_top_assets(
        &self,
        limit: u32,
        vs_currency: &str,
    ) -> Result<Vec<AssetSummary>, ApiError> {
        let url = format!("{}/coins/markets", self.base_url);
        let headers = self.create_headers()?;
        let per_page = limit.to_string();

        debug!("Fetching top {} assets by market cap", limit);

        let response = self
            .http_client
            .get(&url)
            .headers(headers)
            .query(&[
                ("vs_currency", vs_currency),
                ("order", "market_cap_desc"),
                ("per_page", per_page.as_str()),
                ("page", "1"),
                ("sparkline", "false"),
            ])
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        let assets = response
            .json::<Vec<MarketAssetResponse>>()
            .await
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))?;

        Ok(assets
            .into_iter()
            .map(|a| AssetSummary {
                id: a.id,
                symbol: a.symbol,
                name: a.name,
                image_url: a.image,
            })
            .collect())
    }

    /// GET /coins/{id}/market_chart
    ///
    /// Fetches a daily price time series for one asset over a trailing
    /// window, converting wire timestamps at the boundary so malformed
    /// payloads never reach the regression.
    ///
    /// # Arguments
    /// * `asset_id` - CoinGecko asset id, e.g. "bitcoin"
    /// * `vs_currency` - Quote currency, e.g. "usd"
    /// * `days` - Trailing days of history to request
    ///
    /// # Returns
    /// * `Ok(Vec<PricePoint>)` - Points ordered by ascending timestamp
    /// * `Err(ApiError)` - Error with detailed error type
    pub async fn get_daily_series(
        &self,
        asset_id: &str,
        vs_currency: &str,
        days: u32,
    ) -> Result<Vec<PricePoint>, ApiError> {
        let url = format!("{}/coins/{}/market_chart", self.base_url, asset_id);
        let headers = self.create_headers()?;
        let days = days.to_string();

        debug!("Fetching {}-day price history for {}", days, asset_id);

        let response = self
            .http_client
            .get(&url)
            .headers(headers)
            .query(&[
                ("vs_currency", vs_currency),
                ("days", days.as_str()),
                ("interval", "daily"),
            ])
            .send()
            .await
            .map_err(|e| ApiError::RequestError(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(Self::handle_error_response(status, response).await);
        }

        let chart = response
            .json::<MarketChartResponse>()
            .await
            .map_err(|e| ApiError::DeserializationError(format!("Failed to parse response: {}", e)))?;

        let mut points = Vec::with_capacity(chart.prices.len());
        for (millis, price) in chart.prices {
            if !millis.is_finite() {
                return Err(ApiError::DeserializationError(format!(
                    "Invalid timestamp in response: {}",
                    millis
                )));
            }
            let timestamp = DateTime::<Utc>::from_timestamp_millis(millis as i64).ok_or_else(|| {
                ApiError::DeserializationError(format!("Invalid timestamp in response: {}", millis))
            })?;
            if !price.is_finite() {
                return Err(ApiError::DeserializationError(format!(
                    "Non-finite price in response at {}",
                    timestamp
                )));
            }
            points.push(PricePoint { timestamp, price });
        }

        Ok(points)
    }
}
