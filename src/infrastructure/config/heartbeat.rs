//! Heartbeat configuration.

use std::time::Duration;

use serde::Deserialize;

/// Periodic liveness message settings.
#[derive(Debug, Clone, Deserialize)]
pub struct HeartbeatConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Seconds between heartbeats; the first one fires one period after start.
    #[serde(default = "default_period_secs")]
    pub period_secs: u64,
}

const fn default_true() -> bool {
    true
}

const fn default_period_secs() -> u64 {
    15 * 60
}

impl HeartbeatConfig {
    #[must_use]
    pub fn period(&self) -> Duration {
        Duration::from_secs(self.period_secs)
    }
}

impl Default for HeartbeatConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            period_secs: default_period_secs(),
        }
    }
}
