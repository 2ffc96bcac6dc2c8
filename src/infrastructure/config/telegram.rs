//! Telegram notification configuration.
//!
//! Only switches live here. The bot token and chat ID are read from the
//! environment when the notifier is built.

use serde::Deserialize;

const fn default_true() -> bool {
    true
}

/// Telegram notification configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct TelegramAppConfig {
    /// Enable telegram notifications.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Send surge alerts.
    #[serde(default = "default_true")]
    pub notify_surges: bool,
    /// Send heartbeat messages.
    #[serde(default = "default_true")]
    pub notify_heartbeats: bool,
}

impl Default for TelegramAppConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            notify_surges: default_true(),
            notify_heartbeats: default_true(),
        }
    }
}
