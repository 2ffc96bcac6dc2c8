//! Per-event surge rule.

use std::sync::Arc;

use tracing::debug;

use crate::domain::surge::percent_change;
use crate::domain::{KlineEvent, Surge, SurgeRecord};

use super::store::SurgeStore;

/// Flags closed intervals whose price rose at least `threshold_percent`.
///
/// Stateless across calls apart from the last-value write into the injected
/// [`SurgeStore`]. There is no debouncing: a symbol surging in two
/// consecutive intervals is reported twice.
#[derive(Debug, Clone)]
pub struct SurgeDetector {
    threshold_percent: f64,
    store: Arc<SurgeStore>,
}

impl SurgeDetector {
    #[must_use]
    pub fn new(threshold_percent: f64, store: Arc<SurgeStore>) -> Self {
        Self {
            threshold_percent,
            store,
        }
    }

    #[must_use]
    pub fn threshold_percent(&self) -> f64 {
        self.threshold_percent
    }

    #[must_use]
    pub fn store(&self) -> &Arc<SurgeStore> {
        &self.store
    }

    /// Evaluate one kline event.
    ///
    /// In-progress intervals, events with defaulted prices and events whose
    /// change is undefined (zero open) never produce a surge and never touch
    /// the store.
    pub fn evaluate(&self, event: &KlineEvent) -> Option<Surge> {
        if !event.is_closed {
            return None;
        }
        if event.prices_defaulted {
            debug!(symbol = %event.symbol, "Skipping closed kline with defaulted prices");
            return None;
        }

        let change_percent = percent_change(event.open, event.close)?;
        if change_percent < self.threshold_percent {
            return None;
        }

        let surge = Surge {
            symbol: event.symbol.clone(),
            open: event.open,
            close: event.close,
            change_percent,
            event_time: event.event_time,
        };
        self.store.upsert(surge.symbol.clone(), SurgeRecord::from(&surge));

        Some(surge)
    }
}
