//! Exchange graph API client for OHLC candles.
//!
//! Only the public, unauthenticated candle endpoint is wrapped here.
//! Request signing, balances and order placement are not part of this
//! crate.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use signal_core::error::DataError;
use signal_core::traits::MarketDataProvider;
use signal_core::types::{Bar, Timeframe};
use std::time::Duration;
use tracing::{debug, warn};

use crate::{tail, OhlcResponse};

/// Connection settings for the graph API.
///
/// Built once at startup and handed to [`GraphApiClient::new`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Base URL of the graph API
    pub graph_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            graph_url: "https://graph-api.btcturk.com".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Graph API client.
pub struct GraphApiClient {
    config: ProviderConfig,
    client: Client,
}

impl GraphApiClient {
    /// Create a client from explicit configuration.
    pub fn new(config: ProviderConfig) -> Result<Self, DataError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| DataError::ConnectionError(e.to_string()))?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    fn ohlc_url(&self) -> String {
        format!("{}/api/v1/ohlcs", self.config.graph_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl MarketDataProvider for GraphApiClient {
    async fn fetch_bars(
        &self,
        symbol: &str,
        timeframe: Timeframe,
        count: usize,
    ) -> Result<Vec<Bar>, DataError> {
        if symbol.trim().is_empty() {
            return Err(DataError::SymbolNotFound(symbol.to_string()));
        }

        let url = self.ohlc_url();
        debug!(%url, symbol, %timeframe, count, "fetching candles");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("pair", symbol.to_string()),
                ("resolution", timeframe.as_str().to_string()),
                ("count", count.to_string()),
            ])
            .send()
            .await
            .map_err(|e| DataError::ConnectionError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(symbol, %status, "graph API returned an error");
            return Err(DataError::ConnectionError(format!(
                "API error: {}",
                status
            )));
        }

        let body: OhlcResponse = response
            .json()
            .await
            .map_err(|e| DataError::ParseError(e.to_string()))?;

        let bars = tail(body.into_bars()?, count);
        debug!(symbol, bars = bars.len(), "received candles");
        Ok(bars)
    }

    fn name(&self) -> &str {
        "graph-api"
    }
}
