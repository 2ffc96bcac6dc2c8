//! Surge detector configuration.

use serde::Deserialize;

/// Surge detection settings.
#[derive(Debug, Clone, Deserialize)]
pub struct DetectorConfig {
    /// Minimum percentage rise over one closed interval that counts as a surge.
    #[serde(default = "default_surge_threshold_percent")]
    pub surge_threshold_percent: f64,
}

const fn default_surge_threshold_percent() -> f64 {
    10.0
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            surge_threshold_percent: default_surge_threshold_percent(),
        }
    }
}
