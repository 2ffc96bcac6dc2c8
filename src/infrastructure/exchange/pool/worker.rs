//! Per-shard connection worker.
//!
//! A [`ConnectionWorker`] owns the single streaming connection for one shard
//! and cycles `connect -> read -> close` until shutdown:
//!
//! - **Dial failure**: log, wait the fixed backoff, dial again. A dial that
//!   has not completed within `connect_timeout` counts as a failure.
//! - **Read error or peer close**: close the handle, wait the backoff, dial again.
//! - **Rotation**: after `rotation_period` the healthy connection is closed
//!   and replaced immediately.
//!
//! The rotation timer lives inside the session's `select!`, so it is dropped
//! with the session and can never fire against a newer connection.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time::{sleep, timeout};
use tracing::{debug, info, warn};

use crate::application::orchestration::{FrameHandler, FrameOutcome};
use crate::domain::Shard;
use crate::error::Error;
use crate::infrastructure::orchestration::shutdown::shutdown_requested;
use crate::port::outbound::exchange::{MarketDataStream, StreamMessage};

use super::state::{ActiveConnection, PoolCounters};
use super::StreamFactory;

/// Everything a worker needs besides its shard and the shutdown signal.
///
/// Cloned into every worker a supervisor launches.
#[derive(Clone)]
pub struct WorkerContext {
    pub factory: StreamFactory,
    pub handler: Arc<FrameHandler>,
    pub counters: Arc<PoolCounters>,
    pub rotation_period: Duration,
    pub reconnect_backoff: Duration,
    pub connect_timeout: Duration,
}

/// Why a connected session ended.
#[derive(Debug, PartialEq, Eq)]
enum SessionEnd {
    Rotated,
    Disconnected(String),
    Shutdown,
}

/// Long-lived task serving one shard.
pub struct ConnectionWorker {
    shard: Shard,
    ctx: WorkerContext,
    shutdown: watch::Receiver<bool>,
}

impl ConnectionWorker {
    #[must_use]
    pub fn new(shard: Shard, ctx: WorkerContext, shutdown: watch::Receiver<bool>) -> Self {
        Self {
            shard,
            ctx,
            shutdown,
        }
    }

    /// Run until shutdown is raised. Never returns early on transport errors.
    pub async fn run(mut self) {
        let shard = self.shard.index();
        debug!(shard, symbols = self.shard.len(), "Connection worker starting");

        loop {
            let mut stream = (self.ctx.factory)();
            let dial_timeout = self.ctx.connect_timeout;

            let connected = tokio::select! {
                biased;
                () = shutdown_requested(&mut self.shutdown) => break,
                result = timeout(dial_timeout, stream.connect(self.shard.symbols())) => {
                    result.unwrap_or_else(|_| {
                        Err(Error::Connection(format!(
                            "connect timed out after {}ms",
                            dial_timeout.as_millis()
                        )))
                    })
                }
            };

            if let Err(e) = connected {
                PoolCounters::incr(&self.ctx.counters.dial_failures);
                warn!(
                    shard,
                    exchange = stream.exchange_name(),
                    error = %e,
                    backoff_ms = self.ctx.reconnect_backoff.as_millis() as u64,
                    "Connection attempt failed"
                );
                if !self.backoff().await {
                    break;
                }
                continue;
            }

            info!(shard, symbols = self.shard.len(), "Connected");

            let end = {
                let counters = Arc::clone(&self.ctx.counters);
                let _active = ActiveConnection::open(&counters);
                let end = self.run_session(stream.as_mut()).await;
                stream.close().await;
                end
            };

            match end {
                SessionEnd::Shutdown => break,
                SessionEnd::Rotated => {
                    PoolCounters::incr(&self.ctx.counters.rotations);
                    info!(
                        shard,
                        age_secs = self.ctx.rotation_period.as_secs(),
                        "Rotating connection"
                    );
                }
                SessionEnd::Disconnected(reason) => {
                    PoolCounters::incr(&self.ctx.counters.reconnects);
                    warn!(
                        shard,
                        reason = %reason,
                        backoff_ms = self.ctx.reconnect_backoff.as_millis() as u64,
                        "Connection lost, reconnecting after backoff"
                    );
                    if !self.backoff().await {
                        break;
                    }
                }
            }
        }

        info!(shard, "Connection worker stopped");
    }

    /// Read frames until the connection drops, the rotation fires or shutdown.
    async fn run_session(&mut self, stream: &mut dyn MarketDataStream) -> SessionEnd {
        let rotation = sleep(self.ctx.rotation_period);
        tokio::pin!(rotation);

        loop {
            tokio::select! {
                biased;
                () = shutdown_requested(&mut self.shutdown) => return SessionEnd::Shutdown,
                () = &mut rotation => return SessionEnd::Rotated,
                message = stream.next_message() => match message {
                    Some(StreamMessage::Frame(raw)) => self.process_frame(&raw),
                    Some(StreamMessage::Disconnected { reason }) => {
                        return SessionEnd::Disconnected(reason);
                    }
                    None => return SessionEnd::Disconnected("stream ended".into()),
                },
            }
        }
    }

    fn process_frame(&self, raw: &[u8]) {
        let counters = &self.ctx.counters;
        PoolCounters::incr(&counters.frames_received);

        match self.ctx.handler.handle_frame(raw) {
            FrameOutcome::Surge(_) => PoolCounters::incr(&counters.surges_detected),
            FrameOutcome::Dropped => PoolCounters::incr(&counters.decode_failures),
            FrameOutcome::NoSurge | FrameOutcome::Ignored => {}
        }
    }

    /// Sleep the reconnect backoff. Returns false if shutdown arrived first.
    async fn backoff(&mut self) -> bool {
        tokio::select! {
            biased;
            () = shutdown_requested(&mut self.shutdown) => false,
            () = sleep(self.ctx.reconnect_backoff) => true,
        }
    }
}
