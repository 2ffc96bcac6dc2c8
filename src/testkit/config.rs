//! Canonical test configurations.
//!
//! Single source of truth for config structs used across tests.

use crate::infrastructure::config::connection::ConnectionConfig;
use crate::infrastructure::config::settings::Config;

/// Connection config with the given shard size and millisecond backoff.
///
/// Rotation is left at one hour so it never fires unless a test asks for it;
/// the dial timeout is three seconds.
pub fn connection(max_symbols_per_connection: usize, reconnect_backoff_ms: u64) -> ConnectionConfig {
    ConnectionConfig {
        max_symbols_per_connection,
        rotation_period_secs: 3_600,
        reconnect_backoff_ms,
        connect_timeout_ms: 3_000,
    }
}

/// Full application config with Telegram disabled.
pub fn app() -> Config {
    let mut config = Config::default();
    config.telegram.enabled = false;
    config.connection = connection(100, 5_000);
    config
}
