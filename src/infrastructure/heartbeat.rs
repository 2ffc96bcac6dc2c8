//! Periodic liveness notifications.
//!
//! The heartbeat proves the process is running. It is driven by its own
//! timer and never looks at connection health before firing; the pool
//! snapshot it carries is informational only.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info};

use crate::infrastructure::exchange::pool::PoolCounters;
use crate::infrastructure::orchestration::shutdown::shutdown_requested;
use crate::port::outbound::notifier::{Event, HeartbeatEvent, NotifierRegistry};

/// Sends a heartbeat through the notifiers once per period.
pub struct HeartbeatEmitter {
    period: Duration,
    symbols: usize,
    counters: Arc<PoolCounters>,
    notifiers: Arc<NotifierRegistry>,
}

impl HeartbeatEmitter {
    /// # Panics
    ///
    /// Panics if `period` is zero.
    #[must_use]
    pub fn new(
        period: Duration,
        symbols: usize,
        counters: Arc<PoolCounters>,
        notifiers: Arc<NotifierRegistry>,
    ) -> Self {
        assert!(!period.is_zero(), "heartbeat period must be > 0");
        Self {
            period,
            symbols,
            counters,
            notifiers,
        }
    }

    pub fn spawn(self, shutdown: watch::Receiver<bool>) -> JoinHandle<()> {
        tokio::spawn(self.run(shutdown))
    }

    /// Tick until shutdown. The first heartbeat fires one period after start.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        let started = Instant::now();
        let mut ticker = interval_at(started + self.period, self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(period_secs = self.period.as_secs(), "Heartbeat started");

        loop {
            tokio::select! {
                biased;
                () = shutdown_requested(&mut shutdown) => break,
                _ = ticker.tick() => self.beat(started.elapsed()),
            }
        }

        debug!("Heartbeat stopped");
    }

    fn beat(&self, uptime: Duration) {
        self.notifiers.notify_all(Event::Heartbeat(HeartbeatEvent {
            symbols: self.symbols,
            uptime_secs: uptime.as_secs(),
            stats: self.counters.snapshot(),
        }));
    }
}
