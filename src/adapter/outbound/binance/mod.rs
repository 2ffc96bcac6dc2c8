//! Binance USD-M futures integration.

pub mod client;
pub mod decode;
pub mod dto;
pub mod settings;
pub mod stream;
