//! Streaming connection configuration.

use std::time::Duration;

use serde::Deserialize;

/// Sharding, rotation and reconnect settings for the connection pool.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionConfig {
    /// Maximum symbols multiplexed on one connection.
    #[serde(default = "default_max_symbols_per_connection")]
    pub max_symbols_per_connection: usize,
    /// Age after which a healthy connection is replaced (seconds).
    #[serde(default = "default_rotation_period_secs")]
    pub rotation_period_secs: u64,
    /// Delay before reconnecting after a failure (milliseconds).
    #[serde(default = "default_reconnect_backoff_ms")]
    pub reconnect_backoff_ms: u64,
    /// Upper bound on a single dial including the handshake (milliseconds).
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

const fn default_max_symbols_per_connection() -> usize {
    100
}

const fn default_rotation_period_secs() -> u64 {
    12 * 60 * 60
}

const fn default_reconnect_backoff_ms() -> u64 {
    5_000
}

const fn default_connect_timeout_ms() -> u64 {
    45_000
}

impl ConnectionConfig {
    #[must_use]
    pub fn rotation_period(&self) -> Duration {
        Duration::from_secs(self.rotation_period_secs)
    }

    #[must_use]
    pub fn reconnect_backoff(&self) -> Duration {
        Duration::from_millis(self.reconnect_backoff_ms)
    }

    #[must_use]
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            max_symbols_per_connection: default_max_symbols_per_connection(),
            rotation_period_secs: default_rotation_period_secs(),
            reconnect_backoff_ms: default_reconnect_backoff_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }
}
