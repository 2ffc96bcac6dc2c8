//! Exchange connection management.
//!
//! Exchange adapters implement [`crate::port::MarketDataStream`]; this module
//! spreads the symbol universe over as many of their connections as needed
//! and keeps each one alive.

pub mod pool;

pub use pool::{ConnectionWorker, PoolCounters, ShardManager, StreamFactory};
