//! Mock [`MarketDataStream`] implementations for testing.
//!
//! - [`ScriptedStream`] - Pre-loaded connect results and messages.
//!   Best for: error handling, reconnection logic, rotation timing.
//!
//! - [`ChannelStream`] - Channel-backed stream with external control handle.
//!   Best for: integration tests needing precise, on-demand frame delivery.
//!
//! Every double records into a shared [`StreamProbe`] so a test can observe
//! all connections a factory produced.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::time::Instant;

use crate::domain::Symbol;
use crate::error::{Error, Result};
use crate::infrastructure::exchange::pool::StreamFactory;
use crate::port::outbound::exchange::{MarketDataStream, StreamMessage};

// ---------------------------------------------------------------------------
// StreamProbe
// ---------------------------------------------------------------------------

/// Shared record of connect and close calls across stream instances.
#[derive(Debug, Default)]
pub struct StreamProbe {
    connects: AtomicU32,
    closes: AtomicU32,
    connect_times: Mutex<Vec<Instant>>,
    connected_symbols: Mutex<Vec<Vec<Symbol>>>,
}

impl StreamProbe {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn record_connect(&self, symbols: &[Symbol]) {
        self.connects.fetch_add(1, Ordering::SeqCst);
        self.connect_times.lock().push(Instant::now());
        self.connected_symbols.lock().push(symbols.to_vec());
    }

    fn record_close(&self) {
        self.closes.fetch_add(1, Ordering::SeqCst);
    }

    /// How many times `connect()` was called, successful or not.
    pub fn connect_count(&self) -> u32 {
        self.connects.load(Ordering::SeqCst)
    }

    /// How many connected streams were closed.
    pub fn close_count(&self) -> u32 {
        self.closes.load(Ordering::SeqCst)
    }

    /// Tokio instants of every connect attempt, in order.
    pub fn connect_times(&self) -> Vec<Instant> {
        self.connect_times.lock().clone()
    }

    /// Symbol lists passed to every connect attempt, in order.
    pub fn connected_symbols(&self) -> Vec<Vec<Symbol>> {
        self.connected_symbols.lock().clone()
    }
}

// ---------------------------------------------------------------------------
// ScriptedStream
// ---------------------------------------------------------------------------

/// A mock stream with a scripted connect result and a fixed message queue.
///
/// Once the queue is drained the stream either stays quiet forever (the
/// default, like a healthy idle connection) or ends, per [`ending`](Self::ending).
pub struct ScriptedStream {
    connect_result: Option<Result<()>>,
    hang_on_connect: bool,
    messages: VecDeque<StreamMessage>,
    end_when_drained: bool,
    connected: bool,
    probe: Arc<StreamProbe>,
}

impl ScriptedStream {
    pub fn new() -> Self {
        Self {
            connect_result: None,
            hang_on_connect: false,
            messages: VecDeque::new(),
            end_when_drained: false,
            connected: false,
            probe: StreamProbe::new(),
        }
    }

    /// Make `connect()` fail with a connection error.
    pub fn failing(mut self, reason: &str) -> Self {
        self.connect_result = Some(Err(Error::Connection(reason.to_string())));
        self
    }

    /// Make `connect()` never complete, like a server that accepts TCP but
    /// never answers the handshake.
    pub fn hanging(mut self) -> Self {
        self.hang_on_connect = true;
        self
    }

    pub fn with_frames(mut self, frames: Vec<Vec<u8>>) -> Self {
        self.messages
            .extend(frames.into_iter().map(StreamMessage::Frame));
        self
    }

    /// Append a disconnect after the queued frames.
    pub fn then_disconnect(mut self, reason: &str) -> Self {
        self.messages.push_back(StreamMessage::Disconnected {
            reason: reason.to_string(),
        });
        self
    }

    /// Return `None` once the queue is drained instead of idling.
    pub fn ending(mut self) -> Self {
        self.end_when_drained = true;
        self
    }

    pub fn with_probe(mut self, probe: Arc<StreamProbe>) -> Self {
        self.probe = probe;
        self
    }

    pub fn probe(&self) -> Arc<StreamProbe> {
        Arc::clone(&self.probe)
    }
}

impl Default for ScriptedStream {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MarketDataStream for ScriptedStream {
    async fn connect(&mut self, symbols: &[Symbol]) -> Result<()> {
        self.probe.record_connect(symbols);
        if self.hang_on_connect {
            std::future::pending::<()>().await;
        }
        let result = self.connect_result.take().unwrap_or(Ok(()));
        self.connected = result.is_ok();
        result
    }

    async fn next_message(&mut self) -> Option<StreamMessage> {
        if !self.connected {
            return None;
        }
        if let Some(message) = self.messages.pop_front() {
            return Some(message);
        }
        if self.end_when_drained {
            return None;
        }
        std::future::pending().await
    }

    async fn close(&mut self) {
        if std::mem::take(&mut self.connected) {
            self.probe.record_close();
        }
    }

    fn exchange_name(&self) -> &'static str {
        "mock"
    }
}

/// Factory that hands out `streams` in order, then quiet healthy streams.
///
/// All streams report to `probe`.
pub fn sequence_factory(streams: Vec<ScriptedStream>, probe: Arc<StreamProbe>) -> StreamFactory {
    let queue = Mutex::new(VecDeque::from(streams));
    Arc::new(move || {
        let next = queue
            .lock()
            .pop_front()
            .unwrap_or_default();
        Box::new(next.with_probe(Arc::clone(&probe))) as Box<dyn MarketDataStream>
    })
}

/// Factory producing quiet healthy streams that report to `probe`.
pub fn idle_factory(probe: Arc<StreamProbe>) -> StreamFactory {
    sequence_factory(Vec::new(), probe)
}

// ---------------------------------------------------------------------------
// ChannelStream
// ---------------------------------------------------------------------------

/// A mock stream controlled externally via a [`ChannelStreamHandle`].
///
/// Messages sent into the handle are read by the consumer via
/// `next_message()`. Dropping the handle ends the stream.
pub struct ChannelStream {
    message_rx: tokio::sync::mpsc::Receiver<StreamMessage>,
    connected: bool,
    probe: Arc<StreamProbe>,
}

/// Control handle for a [`ChannelStream`].
pub struct ChannelStreamHandle {
    message_tx: tokio::sync::mpsc::Sender<StreamMessage>,
    probe: Arc<StreamProbe>,
}

impl ChannelStreamHandle {
    /// Deliver a raw frame.
    pub async fn send_frame(&self, frame: Vec<u8>) {
        let _ = self.message_tx.send(StreamMessage::Frame(frame)).await;
    }

    /// Simulate the peer dropping the connection.
    pub async fn disconnect(&self, reason: &str) {
        let _ = self
            .message_tx
            .send(StreamMessage::Disconnected {
                reason: reason.to_string(),
            })
            .await;
    }

    pub fn probe(&self) -> Arc<StreamProbe> {
        Arc::clone(&self.probe)
    }
}

/// Create a [`ChannelStream`] and its control [`ChannelStreamHandle`].
pub fn channel_stream(buffer: usize) -> (ChannelStream, ChannelStreamHandle) {
    let (tx, rx) = tokio::sync::mpsc::channel(buffer);
    let probe = StreamProbe::new();
    (
        ChannelStream {
            message_rx: rx,
            connected: false,
            probe: Arc::clone(&probe),
        },
        ChannelStreamHandle {
            message_tx: tx,
            probe,
        },
    )
}

#[async_trait]
impl MarketDataStream for ChannelStream {
    async fn connect(&mut self, symbols: &[Symbol]) -> Result<()> {
        self.probe.record_connect(symbols);
        self.connected = true;
        Ok(())
    }

    async fn next_message(&mut self) -> Option<StreamMessage> {
        if !self.connected {
            return None;
        }
        self.message_rx.recv().await
    }

    async fn close(&mut self) {
        if std::mem::take(&mut self.connected) {
            self.probe.record_close();
        }
    }

    fn exchange_name(&self) -> &'static str {
        "mock"
    }
}

/// Factory that serves one [`ChannelStream`], then quiet scripted streams.
///
/// Later connections report to the channel's probe as well.
pub fn channel_factory(stream: ChannelStream) -> StreamFactory {
    let probe = Arc::clone(&stream.probe);
    let first = Mutex::new(Some(stream));
    Arc::new(move || match first.lock().take() {
        Some(stream) => Box::new(stream) as Box<dyn MarketDataStream>,
        None => Box::new(ScriptedStream::new().with_probe(Arc::clone(&probe))),
    })
}
