//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`stream`] - Mock [`MarketDataStream`](crate::port::MarketDataStream)
//!   implementations: `ScriptedStream`, `ChannelStream`, plus factories.
//! - [`domain`] - Builders for symbols, kline events and raw frames.
//! - [`source`] - Static `SymbolSource`.
//! - [`config`] - Canonical test configurations.

pub mod config;
pub mod domain;
pub mod source;
pub mod stream;
