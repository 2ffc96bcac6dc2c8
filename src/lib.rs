//! Surgewatch - realtime kline surge detection for Binance USD-M futures.
//!
//! Streams closed klines for every tradeable perpetual over a sharded pool of
//! WebSocket connections and alerts when a single interval rises by at least
//! a configured percentage.
//!
//! # Architecture
//!
//! The crate follows a hexagonal layout:
//!
//! - **`domain`** - Symbols, kline events, shards and the percentage-change rule
//! - **`port`** - Traits for symbol discovery, streaming, decoding and notification
//! - **`application`** - Surge detection, the last-surge store and the frame pipeline
//! - **`adapter`** - Binance REST/WebSocket, Telegram and the CLI
//! - **`infrastructure`** - Configuration, the shard pool, heartbeat and runtime wiring
//!
//! # Data flow
//!
//! ```text
//! SymbolSource -> ShardManager -> N x ConnectionWorker
//!                                  frame -> EventDecoder -> SurgeDetector -> Notifier
//! HeartbeatEmitter --------------------------------------------------------> Notifier
//! ```
//!
//! # Features
//!
//! - `telegram` (default) - Deliver surge alerts and heartbeats to a Telegram chat
//! - `testkit` - Expose stream doubles and builders for integration tests
//!
//! # Example
//!
//! ```no_run
//! use surgewatch::infrastructure::config::settings::Config;
//! use surgewatch::infrastructure::orchestration::run_with_shutdown;
//!
//! # async fn example() -> surgewatch::error::Result<()> {
//! let config = Config::load("config.toml")?;
//! let (_tx, rx) = tokio::sync::watch::channel(false);
//! run_with_shutdown(config, rx).await
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
