//! Binance exchange configuration.

use serde::Deserialize;

/// Binance endpoints and stream parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct BinanceConfig {
    /// Aggregated-stream WebSocket endpoint.
    #[serde(default = "default_ws_url")]
    pub ws_url: String,
    /// REST base URL used for symbol discovery.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Kline interval subscribed for every symbol (e.g. `5m`).
    #[serde(default = "default_kline_interval")]
    pub kline_interval: String,
    /// HTTP client settings for the REST API.
    #[serde(default)]
    pub http: BinanceHttpConfig,
}

fn default_ws_url() -> String {
    "wss://fstream.binance.com/stream".into()
}

fn default_api_url() -> String {
    "https://fapi.binance.com".into()
}

fn default_kline_interval() -> String {
    "5m".into()
}

impl Default for BinanceConfig {
    fn default() -> Self {
        Self {
            ws_url: default_ws_url(),
            api_url: default_api_url(),
            kline_interval: default_kline_interval(),
            http: BinanceHttpConfig::default(),
        }
    }
}

/// Binance HTTP client configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BinanceHttpConfig {
    /// Request timeout in milliseconds.
    #[serde(default = "default_http_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_http_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    /// Maximum number of attempts for timeouts and connect failures.
    #[serde(default = "default_http_retry_max_attempts")]
    pub retry_max_attempts: u32,
    /// Backoff between retries in milliseconds.
    #[serde(default = "default_http_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

const fn default_http_timeout_ms() -> u64 {
    10_000
}

const fn default_http_connect_timeout_ms() -> u64 {
    5_000
}

const fn default_http_retry_max_attempts() -> u32 {
    3
}

const fn default_http_retry_backoff_ms() -> u64 {
    1_000
}

impl Default for BinanceHttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_http_timeout_ms(),
            connect_timeout_ms: default_http_connect_timeout_ms(),
            retry_max_attempts: default_http_retry_max_attempts(),
            retry_backoff_ms: default_http_retry_backoff_ms(),
        }
    }
}
