//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the exchange (symbol discovery, streaming,
//! frame decoding) and notification delivery.

pub mod exchange;
pub mod notifier;
