//! Connection pool internal state types.
//!
//! Provides the shared counters updated by workers and supervisors and read
//! by [`ShardManager::stats`](super::ShardManager::stats) and the heartbeat.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};

use crate::port::outbound::exchange::PoolStats;

/// Shared counters updated atomically by worker and supervisor tasks.
///
/// Written with relaxed ordering; values are only read for diagnostics.
#[derive(Debug, Default)]
pub struct PoolCounters {
    pub(super) shards: AtomicUsize,
    pub(super) active_connections: AtomicUsize,
    pub(super) rotations: AtomicU64,
    pub(super) reconnects: AtomicU64,
    pub(super) dial_failures: AtomicU64,
    pub(super) frames_received: AtomicU64,
    pub(super) decode_failures: AtomicU64,
    pub(super) surges_detected: AtomicU64,
    pub(super) worker_restarts: AtomicU64,
}

impl PoolCounters {
    /// Create a new set of zeroed counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take a point-in-time snapshot.
    #[must_use]
    pub fn snapshot(&self) -> PoolStats {
        PoolStats {
            shards: self.shards.load(Ordering::Relaxed),
            active_connections: self.active_connections.load(Ordering::Relaxed),
            total_rotations: self.rotations.load(Ordering::Relaxed),
            total_reconnects: self.reconnects.load(Ordering::Relaxed),
            dial_failures: self.dial_failures.load(Ordering::Relaxed),
            frames_received: self.frames_received.load(Ordering::Relaxed),
            decode_failures: self.decode_failures.load(Ordering::Relaxed),
            surges_detected: self.surges_detected.load(Ordering::Relaxed),
            worker_restarts: self.worker_restarts.load(Ordering::Relaxed),
        }
    }

    pub(super) fn incr(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }
}

/// Marks one connection as open for as long as it lives.
///
/// Decrements `active_connections` on drop, including when the worker
/// task unwinds.
pub(super) struct ActiveConnection<'a> {
    counters: &'a PoolCounters,
}

impl<'a> ActiveConnection<'a> {
    pub(super) fn open(counters: &'a PoolCounters) -> Self {
        counters.active_connections.fetch_add(1, Ordering::Relaxed);
        Self { counters }
    }
}

impl Drop for ActiveConnection<'_> {
    fn drop(&mut self) {
        self.counters
            .active_connections
            .fetch_sub(1, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_connection_guard_balances_counter() {
        let counters = PoolCounters::new();
        {
            let _a = ActiveConnection::open(&counters);
            let _b = ActiveConnection::open(&counters);
            assert_eq!(counters.snapshot().active_connections, 2);
        }
        assert_eq!(counters.snapshot().active_connections, 0);
    }

    #[test]
    fn snapshot_reflects_increments() {
        let counters = PoolCounters::new();
        PoolCounters::incr(&counters.rotations);
        PoolCounters::incr(&counters.frames_received);
        PoolCounters::incr(&counters.frames_received);

        let stats = counters.snapshot();
        assert_eq!(stats.total_rotations, 1);
        assert_eq!(stats.frames_received, 2);
        assert_eq!(stats.dial_failures, 0);
    }
}
