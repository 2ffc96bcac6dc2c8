//! Binance REST client used for symbol discovery.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use super::dto::response::ExchangeInfoResponse;
use super::settings::BinanceConfig;
use crate::domain::Symbol;
use crate::error::Result;
use crate::port::outbound::exchange::SymbolSource;

/// HTTP client for the Binance futures REST API.
pub struct BinanceClient {
    http: HttpClient,
    base_url: String,
    retry_max_attempts: u32,
    retry_backoff_ms: u64,
}

impl BinanceClient {
    /// Create a client with default HTTP settings and no retries.
    #[must_use]
    pub fn new(base_url: String) -> Self {
        Self {
            http: HttpClient::new(),
            base_url,
            retry_max_attempts: 1,
            retry_backoff_ms: 0,
        }
    }

    #[must_use]
    pub fn from_config(config: &BinanceConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.http.timeout_ms))
            .connect_timeout(Duration::from_millis(config.http.connect_timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            retry_max_attempts: config.http.retry_max_attempts,
            retry_backoff_ms: config.http.retry_backoff_ms,
        }
    }

    async fn get_with_retry<T>(&self, url: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let mut attempt = 0;
        let max_attempts = self.retry_max_attempts.max(1);

        loop {
            attempt += 1;
            let response = match self.http.get(url).send().await {
                Ok(response) => response,
                Err(err) => {
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(err.into());
                    }
                    self.backoff(attempt, max_attempts, &err).await;
                    continue;
                }
            };

            let response = response.error_for_status()?;

            match response.json::<T>().await {
                Ok(parsed) => return Ok(parsed),
                Err(err) => {
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(err.into());
                    }
                    self.backoff(attempt, max_attempts, &err).await;
                }
            }
        }
    }

    fn should_retry(err: &reqwest::Error) -> bool {
        err.is_timeout() || err.is_connect()
    }

    async fn backoff(&self, attempt: u32, max_attempts: u32, err: &reqwest::Error) {
        warn!(
            attempt,
            max_attempts,
            error = %err,
            "HTTP request failed, retrying"
        );
        if self.retry_backoff_ms > 0 {
            sleep(Duration::from_millis(self.retry_backoff_ms)).await;
        }
    }

    /// Fetch the raw exchange info document.
    pub async fn exchange_info(&self) -> Result<ExchangeInfoResponse> {
        let url = format!("{}/fapi/v1/exchangeInfo", self.base_url);
        info!(url = %url, "Fetching exchange info");
        self.get_with_retry(&url).await
    }
}

/// Keep trading symbols in exchange order, dropping repeats.
#[must_use]
pub fn tradeable_symbols(response: ExchangeInfoResponse) -> Vec<Symbol> {
    let mut seen = HashSet::new();
    let mut symbols = Vec::new();

    for entry in response.symbols {
        if !entry.is_trading() {
            continue;
        }
        if !seen.insert(entry.symbol.clone()) {
            warn!(symbol = %entry.symbol, "Duplicate symbol in exchange info, skipping");
            continue;
        }
        symbols.push(Symbol::from(entry.symbol));
    }

    symbols
}

#[async_trait]
impl SymbolSource for BinanceClient {
    async fn fetch_symbols(&self) -> Result<Vec<Symbol>> {
        let response = self.exchange_info().await?;
        let total = response.symbols.len();
        let symbols = tradeable_symbols(response);
        debug!(total, trading = symbols.len(), "Filtered exchange symbols");
        Ok(symbols)
    }

    fn exchange_name(&self) -> &'static str {
        "Binance"
    }
}
