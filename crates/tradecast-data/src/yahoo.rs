//! Yahoo Finance chart API client.

use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use serde::Deserialize;
use tradecast_core::error::DataError;
use tradecast_core::traits::DataSource;
use tradecast_core::types::{Bar, LookbackPeriod};

/// Yahoo Finance query host.
const BASE_URL: &str = "https://query1.finance.yahoo.com";

/// The chart endpoint rejects requests without a browser-ish user agent.
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) tradecast/0.1";

/// HTTP client for the v8 chart endpoint.
#[derive(Debug, Clone)]
pub struct YahooClient {
    client: Client,
    base_url: String,
}

/// Response envelope from the chart endpoint.
#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    /// Bar timestamps in Unix seconds.
    timestamp: Option<Vec<i64>>,
    indicators: ChartIndicators,
}

#[derive(Debug, Deserialize)]
struct ChartIndicators {
    quote: Vec<ChartQuote>,
}

#[derive(Debug, Deserialize)]
struct ChartQuote {
    open: Vec<Option<f64>>,
    high: Vec<Option<f64>>,
    low: Vec<Option<f64>>,
    close: Vec<Option<f64>>,
    volume: Vec<Option<f64>>,
}

impl YahooClient {
    /// Create a client against the public Yahoo endpoint.
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    /// Create a client with a custom base URL (for tests).
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch daily bars for a symbol over the given period.
    ///
    /// Rows with any missing component are skipped. The result is ordered
    /// oldest first; an empty vector means the provider had no rows.
    async fn fetch_daily(
        &self,
        symbol: &str,
        period: LookbackPeriod,
    ) -> Result<Vec<Bar>, DataError> {
        let url = format!(
            "{}/v8/finance/chart/{}?range={}&interval=1d",
            self.base_url, symbol, period
        );

        let response = self
            .client
            .get(&url)
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .map_err(|e| DataError::ConnectionError(e.to_string()))?;

        if response.status() == StatusCode::TOO_MANY_REQUESTS {
            return Err(DataError::RateLimited);
        }
        if !response.status().is_success() {
            return Err(DataError::Provider(format!(
                "chart request failed with status {}",
                response.status()
            )));
        }

        let body: ChartResponse = response
            .json()
            .await
            .map_err(|e| DataError::ParseError(e.to_string()))?;

        if let Some(error) = body.chart.error {
            return Err(DataError::Provider(error.description));
        }

        let result = match body.chart.result.and_then(|mut r| {
            if r.is_empty() {
                None
            } else {
                Some(r.remove(0))
            }
        }) {
            Some(result) => result,
            None => return Ok(Vec::new()),
        };

        let timestamps = result.timestamp.unwrap_or_default();
        let quote = match result.indicators.quote.into_iter().next() {
            Some(quote) => quote,
            None => return Ok(Vec::new()),
        };

        let mut bars = Vec::with_capacity(timestamps.len());
        for (i, &ts) in timestamps.iter().enumerate() {
            let components = (
                quote.open.get(i).copied().flatten(),
                quote.high.get(i).copied().flatten(),
                quote.low.get(i).copied().flatten(),
                quote.close.get(i).copied().flatten(),
                quote.volume.get(i).copied().flatten(),
            );
            if let (Some(open), Some(high), Some(low), Some(close), Some(volume)) = components {
                bars.push(Bar::new(ts * 1000, open, high, low, close, volume));
            }
        }

        Ok(bars)
    }
}

impl Default for YahooClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DataSource for YahooClient {
    async fn fetch_bars(
        &self,
        symbol: &str,
        period: LookbackPeriod,
    ) -> Result<Vec<Bar>, DataError> {
        self.fetch_daily(symbol, period).await
    }

    fn name(&self) -> &str {
        "yahoo"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn chart_body(timestamps: &[i64], closes: &[f64]) -> serde_json::Value {
        let opens: Vec<f64> = closes.iter().map(|c| c - 0.5).collect();
        let highs: Vec<f64> = closes.iter().map(|c| c + 1.0).collect();
        let lows: Vec<f64> = closes.iter().map(|c| c - 1.0).collect();
        let volumes: Vec<f64> = closes.iter().map(|_| 1000.0).collect();
        serde_json::json!({
            "chart": {
                "result": [{
                    "timestamp": timestamps,
                    "indicators": {
                        "quote": [{
                            "open": opens,
                            "high": highs,
                            "low": lows,
                            "close": closes,
                            "volume": volumes
                        }]
                    }
                }],
                "error": null
            }
        })
    }

    #[tokio::test]
    async fn test_parses_chart_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v8/finance/chart/TEST.NS"))
            .and(query_param("range", "6mo"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(chart_body(&[86_400, 172_800], &[10.0, 11.0])),
            )
            .mount(&server)
            .await;

        let client = YahooClient::with_base_url(&server.uri());
        let bars = client
            .fetch_bars("TEST.NS", LookbackPeriod::SixMonths)
            .await
            .unwrap();

        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].timestamp, 86_400_000);
        assert_eq!(bars[1].close, 11.0);
    }

    #[tokio::test]
    async fn test_rate_limit_maps_to_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(429))
            .mount(&server)
            .await;

        let client = YahooClient::with_base_url(&server.uri());
        let result = client.fetch_bars("TEST.NS", LookbackPeriod::SixMonths).await;

        assert!(matches!(result, Err(DataError::RateLimited)));
    }

    #[tokio::test]
    async fn test_null_components_are_skipped() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "chart": {
                "result": [{
                    "timestamp": [86_400, 172_800],
                    "indicators": {
                        "quote": [{
                            "open": [10.0, null],
                            "high": [11.0, 12.0],
                            "low": [9.0, 10.0],
                            "close": [10.5, 11.5],
                            "volume": [1000.0, 2000.0]
                        }]
                    }
                }],
                "error": null
            }
        });
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let client = YahooClient::with_base_url(&server.uri());
        let bars = client
            .fetch_bars("TEST.NS", LookbackPeriod::SixMonths)
            .await
            .unwrap();

        assert_eq!(bars.len(), 1);
        assert_eq!(bars[0].close, 10.5);
    }

    #[tokio::test]
    async fn test_provider_error_body() {
        let server = MockServer::start().await;
        let body = serde_json::json!({
            "chart": { "result": null, "error": { "description": "No data found" } }
        });
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let client = YahooClient::with_base_url(&server.uri());
        let result = client.fetch_bars("TEST.NS", LookbackPeriod::OneYear).await;

        assert!(matches!(result, Err(DataError::Provider(_))));
    }
}
