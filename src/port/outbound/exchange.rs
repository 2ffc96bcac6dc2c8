//! Exchange ports for symbol discovery, market data streaming and decoding.
//!
//! These traits are the integration points with the exchange. The Binance
//! adapter implements all three; tests substitute scripted doubles.

use async_trait::async_trait;

use crate::domain::{Decoded, Symbol};
use crate::error::{DecodeError, Error};

/// Runtime statistics for the shard pool.
///
/// Used for observability (heartbeat messages, `check` output, logs).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Number of shards (one worker each).
    pub shards: usize,
    /// Number of workers that currently hold an open connection.
    pub active_connections: usize,
    /// Total number of age-based rotations.
    pub total_rotations: u64,
    /// Total number of reconnects after a read error or close.
    pub total_reconnects: u64,
    /// Total number of failed connection attempts.
    pub dial_failures: u64,
    /// Total number of frames received across all shards.
    pub frames_received: u64,
    /// Total number of frames dropped because they failed to decode.
    pub decode_failures: u64,
    /// Total number of surges detected.
    pub surges_detected: u64,
    /// Total number of worker tasks relaunched by their supervisor.
    pub worker_restarts: u64,
}

/// Fetches the tradeable symbol universe from an exchange.
#[async_trait]
pub trait SymbolSource: Send + Sync {
    /// Fetch every currently tradeable symbol, in exchange order, without duplicates.
    async fn fetch_symbols(&self) -> Result<Vec<Symbol>, Error>;

    /// Get the exchange name for logging/debugging.
    fn exchange_name(&self) -> &'static str;
}

/// Messages yielded by a market data stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamMessage {
    /// A raw data frame, still undecoded.
    Frame(Vec<u8>),
    /// The connection failed or was closed by the peer.
    Disconnected {
        /// The disconnection reason.
        reason: String,
    },
}

/// Real-time market data stream from an exchange.
///
/// One instance serves one connection; a fresh instance is created for every
/// connection attempt through a [`StreamFactory`](crate::infrastructure::exchange::pool::StreamFactory).
#[async_trait]
pub trait MarketDataStream: Send {
    /// Open a connection streaming klines for the given symbols.
    async fn connect(&mut self, symbols: &[Symbol]) -> Result<(), Error>;

    /// Receive the next message.
    ///
    /// Blocks until a frame arrives or the connection fails. Returns `None`
    /// when the stream has ended or was never connected.
    async fn next_message(&mut self) -> Option<StreamMessage>;

    /// Close the underlying transport. Safe to call more than once.
    async fn close(&mut self);

    /// Get the exchange name for logging/debugging.
    fn exchange_name(&self) -> &'static str;
}

/// Implement MarketDataStream for boxed trait objects to allow use with generic wrappers.
#[async_trait]
impl MarketDataStream for Box<dyn MarketDataStream> {
    async fn connect(&mut self, symbols: &[Symbol]) -> Result<(), Error> {
        (**self).connect(symbols).await
    }

    async fn next_message(&mut self) -> Option<StreamMessage> {
        (**self).next_message().await
    }

    async fn close(&mut self) {
        (**self).close().await;
    }

    fn exchange_name(&self) -> &'static str {
        (**self).exchange_name()
    }
}

/// Parses exchange-specific frames into domain events.
pub trait EventDecoder: Send + Sync {
    /// Decode a raw frame.
    ///
    /// Malformed frames yield a [`DecodeError`]; well-formed frames that carry
    /// no interval update yield [`Decoded::Ignored`].
    fn decode(&self, raw: &[u8]) -> Result<Decoded, DecodeError>;
}
