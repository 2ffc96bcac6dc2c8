//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Available Ports
//!
//! - [`SymbolSource`], [`MarketDataStream`], [`EventDecoder`] - Exchange integration
//! - [`Notifier`] - Event notifications (Telegram, logging, etc.)

pub mod outbound;

pub use outbound::exchange::{
    EventDecoder, MarketDataStream, PoolStats, StreamMessage, SymbolSource,
};
pub use outbound::notifier::{
    Event, HeartbeatEvent, LogNotifier, Notifier, NotifierRegistry, NullNotifier, SurgeEvent,
};
