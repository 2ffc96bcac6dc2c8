//! Notifier port for event notifications.
//!
//! This module defines the trait for sending notifications about detected
//! surges and process liveness. Delivery is best-effort: implementations log
//! their own failures and never report them back to the caller.

use crate::domain::Surge;

use super::exchange::PoolStats;

/// Events that can trigger notifications.
#[derive(Debug, Clone)]
pub enum Event {
    /// A closed interval crossed the surge threshold.
    SurgeDetected(SurgeEvent),
    /// Periodic liveness signal.
    Heartbeat(HeartbeatEvent),
}

/// Surge detection event.
#[derive(Debug, Clone)]
pub struct SurgeEvent {
    /// The symbol that surged.
    pub symbol: String,
    /// Interval open price.
    pub open: f64,
    /// Interval close price.
    pub close: f64,
    /// Percentage change over the interval.
    pub change_percent: f64,
    /// Threshold the change was compared against.
    pub threshold_percent: f64,
}

impl SurgeEvent {
    /// Build an event from a detected surge.
    #[must_use]
    pub fn new(surge: &Surge, threshold_percent: f64) -> Self {
        Self {
            symbol: surge.symbol.to_string(),
            open: surge.open,
            close: surge.close,
            change_percent: surge.change_percent,
            threshold_percent,
        }
    }
}

/// Heartbeat event.
///
/// Proves the process is alive; the pool snapshot is informational and says
/// nothing about whether data is flowing right now.
#[derive(Debug, Clone)]
pub struct HeartbeatEvent {
    /// Number of symbols being monitored.
    pub symbols: usize,
    /// Seconds since the heartbeat emitter started.
    pub uptime_secs: u64,
    /// Pool counters at the time of the tick.
    pub stats: PoolStats,
}

/// Trait for notification handlers.
///
/// `notify` must not block on network I/O; implementations that deliver
/// remotely queue the event and send it from a background task.
pub trait Notifier: Send + Sync {
    /// Handle an event notification.
    fn notify(&self, event: Event);
}

/// Registry of notifiers that broadcasts each event to all of them.
pub struct NotifierRegistry {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl NotifierRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            notifiers: Vec::new(),
        }
    }

    /// Register a notifier.
    pub fn register(&mut self, notifier: Box<dyn Notifier>) {
        self.notifiers.push(notifier);
    }

    /// Notify all registered notifiers.
    pub fn notify_all(&self, event: Event) {
        for notifier in &self.notifiers {
            notifier.notify(event.clone());
        }
    }

    /// Number of registered notifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    /// Check if registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }
}

impl Default for NotifierRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// A no-op notifier for testing or when notifications are disabled.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _event: Event) {}
}

/// A logging notifier that logs events via tracing.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, event: Event) {
        use tracing::info;
        match event {
            Event::SurgeDetected(e) => {
                info!(
                    symbol = %e.symbol,
                    open = e.open,
                    close = e.close,
                    change_percent = e.change_percent,
                    threshold_percent = e.threshold_percent,
                    "Surge detected"
                );
            }
            Event::Heartbeat(e) => {
                info!(
                    symbols = e.symbols,
                    uptime_secs = e.uptime_secs,
                    shards = e.stats.shards,
                    active_connections = e.stats.active_connections,
                    frames = e.stats.frames_received,
                    "Heartbeat: still running"
                );
            }
        }
    }
}
