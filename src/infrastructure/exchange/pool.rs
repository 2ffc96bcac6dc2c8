//! Sharded connection pool for the kline stream.
//!
//! The symbol universe is split once at startup into contiguous shards of at
//! most `max_symbols_per_connection` symbols. Each shard gets one
//! [`ConnectionWorker`] running under its own supervisor task.
//!
//! # Architecture
//!
//! - **Worker**: owns the shard's connection, handles reconnects and
//!   rotation, and feeds every frame through the shared [`FrameHandler`].
//! - **Supervisor**: relaunches the worker after the reconnect backoff if its
//!   task panics or returns before shutdown. Shards never share a failure.
//! - **Shutdown**: a `watch` channel owned by the [`ShardManager`]; every
//!   worker observes it at each suspension point.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use crate::application::orchestration::FrameHandler;
use crate::domain::{partition, Shard, Symbol};
use crate::error::{ConfigError, Error, Result};
use crate::infrastructure::config::connection::ConnectionConfig;
use crate::infrastructure::orchestration::shutdown::{is_shutdown, shutdown_requested};
use crate::port::outbound::exchange::{MarketDataStream, PoolStats};

mod state;
mod worker;

pub use state::PoolCounters;
pub use worker::{ConnectionWorker, WorkerContext};

/// Factory function for creating new data stream instances.
///
/// Called once per connection attempt; each stream serves one connection.
pub type StreamFactory = Arc<dyn Fn() -> Box<dyn MarketDataStream> + Send + Sync>;

/// Partitions symbols into shards and supervises one worker per shard.
pub struct ShardManager {
    config: ConnectionConfig,
    ctx: WorkerContext,
    shutdown_tx: watch::Sender<bool>,
    supervisors: Vec<JoinHandle<()>>,
}

impl ShardManager {
    /// Create a manager. No connection is opened until [`start`](Self::start).
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid:
    /// - `max_symbols_per_connection` must be > 0
    /// - `rotation_period_secs` must be > 0
    /// - `reconnect_backoff_ms` must be > 0
    /// - `connect_timeout_ms` must be > 0
    #[must_use = "returns Result that must be checked"]
    pub fn new(
        config: ConnectionConfig,
        factory: StreamFactory,
        handler: Arc<FrameHandler>,
    ) -> Result<Self> {
        Self::validate_config(&config)?;

        let (shutdown_tx, _) = watch::channel(false);
        let ctx = WorkerContext {
            factory,
            handler,
            counters: Arc::new(PoolCounters::new()),
            rotation_period: config.rotation_period(),
            reconnect_backoff: config.reconnect_backoff(),
            connect_timeout: config.connect_timeout(),
        };

        Ok(Self {
            config,
            ctx,
            shutdown_tx,
            supervisors: Vec::new(),
        })
    }

    fn validate_config(config: &ConnectionConfig) -> Result<()> {
        let invalid = |field: &'static str, reason: &str| -> Error {
            ConfigError::InvalidValue {
                field,
                reason: reason.to_string(),
            }
            .into()
        };

        if config.max_symbols_per_connection == 0 {
            return Err(invalid("max_symbols_per_connection", "must be > 0"));
        }
        if config.rotation_period_secs == 0 {
            return Err(invalid("rotation_period_secs", "must be > 0"));
        }
        if config.reconnect_backoff_ms == 0 {
            return Err(invalid("reconnect_backoff_ms", "must be > 0"));
        }
        if config.connect_timeout_ms == 0 {
            return Err(invalid("connect_timeout_ms", "must be > 0"));
        }
        Ok(())
    }

    /// Partition `symbols` and launch one supervised worker per shard.
    ///
    /// Returns the number of shards started.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSymbols`] for an empty universe, or a connection
    /// error if the manager was already started.
    pub fn start(&mut self, symbols: &[Symbol]) -> Result<usize> {
        if !self.supervisors.is_empty() {
            return Err(Error::Connection("shard manager already started".into()));
        }
        if symbols.is_empty() {
            return Err(Error::NoSymbols);
        }

        let shards = partition(symbols, self.config.max_symbols_per_connection);
        info!(
            symbols = symbols.len(),
            shards = shards.len(),
            per_shard = self.config.max_symbols_per_connection,
            rotation_secs = self.config.rotation_period_secs,
            "Starting connection shards"
        );

        self.ctx
            .counters
            .shards
            .store(shards.len(), Ordering::Relaxed);

        for shard in shards {
            info!(
                shard = shard.index(),
                symbols = shard.len(),
                first = %shard.symbols()[0],
                "Spawning"
            );
            self.supervisors.push(tokio::spawn(supervise(
                shard,
                self.ctx.clone(),
                self.shutdown_tx.subscribe(),
            )));
        }

        Ok(self.supervisors.len())
    }

    /// Runtime statistics for observability.
    #[must_use]
    pub fn stats(&self) -> PoolStats {
        self.ctx.counters.snapshot()
    }

    /// Shared counters, for readers that outlive a borrow of the manager.
    #[must_use]
    pub fn counters(&self) -> Arc<PoolCounters> {
        Arc::clone(&self.ctx.counters)
    }

    /// A receiver for the manager's shutdown signal.
    #[must_use]
    pub fn shutdown_signal(&self) -> watch::Receiver<bool> {
        self.shutdown_tx.subscribe()
    }

    /// Raise shutdown and wait for every supervisor to finish.
    pub async fn shutdown(&mut self) {
        self.shutdown_tx.send_replace(true);

        let supervisors = std::mem::take(&mut self.supervisors);
        let count = supervisors.len();
        for handle in supervisors {
            if let Err(e) = handle.await {
                warn!(error = %e, "Supervisor task failed during shutdown");
            }
        }

        info!(shards = count, "Connection shards stopped");
    }
}

impl Drop for ShardManager {
    fn drop(&mut self) {
        self.shutdown_tx.send_replace(true);
        for handle in &self.supervisors {
            handle.abort();
        }
    }
}

/// Keep a worker alive for `shard` until shutdown.
async fn supervise(shard: Shard, ctx: WorkerContext, mut shutdown: watch::Receiver<bool>) {
    let index = shard.index();

    loop {
        let worker = ConnectionWorker::new(shard.clone(), ctx.clone(), shutdown.clone());
        let result = tokio::spawn(worker.run()).await;

        if is_shutdown(&shutdown) {
            break;
        }

        match result {
            Ok(()) => warn!(shard = index, "Worker exited before shutdown"),
            Err(e) if e.is_panic() => error!(shard = index, "Worker panicked"),
            Err(e) => error!(shard = index, error = %e, "Worker task failed"),
        }

        PoolCounters::incr(&ctx.counters.worker_restarts);
        debug!(
            shard = index,
            backoff_ms = ctx.reconnect_backoff.as_millis() as u64,
            "Restarting worker after backoff"
        );

        tokio::select! {
            biased;
            () = shutdown_requested(&mut shutdown) => break,
            () = sleep(ctx.reconnect_backoff) => {}
        }
    }
}
