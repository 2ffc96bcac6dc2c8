//! Binance data transfer objects.
//!
//! - WebSocket messages (combined-stream kline frames)
//! - REST API responses (exchange info)

pub mod message;
pub mod response;
