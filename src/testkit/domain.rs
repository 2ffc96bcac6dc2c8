//! Builders for domain primitives used across tests.
//!
//! Provides concise factory functions for [`Symbol`], [`KlineEvent`] and raw
//! combined-stream frames so tests focus on assertions rather than
//! construction boilerplate.

use crate::domain::kline::KLINE_EVENT;
use crate::domain::{KlineEvent, Symbol};

/// Generate `n` symbols named `S0USDT`, `S1USDT`, ..., `S{n-1}USDT`.
pub fn make_symbols(n: usize) -> Vec<Symbol> {
    (0..n).map(|i| Symbol::new(format!("S{i}USDT"))).collect()
}

/// A decoded kline event with valid prices.
pub fn kline(symbol: &str, open: f64, close: f64, is_closed: bool) -> KlineEvent {
    KlineEvent {
        symbol: Symbol::from(symbol),
        event_type: KLINE_EVENT.to_string(),
        event_time: 1_700_000_000_000,
        open,
        close,
        is_closed,
        prices_defaulted: false,
    }
}

/// A combined-stream kline frame with prices rendered as JSON strings.
pub fn kline_frame(symbol: &str, open: &str, close: &str, is_closed: bool) -> Vec<u8> {
    let stream = symbol.to_lowercase();
    format!(
        r#"{{"stream":"{stream}@kline_5m","data":{{"e":"kline","E":1700000000000,"s":"{symbol}","k":{{"t":1699999700000,"T":1699999999999,"s":"{symbol}","i":"5m","o":"{open}","c":"{close}","h":"{close}","l":"{open}","v":"1000","x":{is_closed}}}}}}}"#
    )
    .into_bytes()
}

/// A closed kline frame rising from `open` to `close`.
pub fn closed_frame(symbol: &str, open: f64, close: f64) -> Vec<u8> {
    kline_frame(symbol, &open.to_string(), &close.to_string(), true)
}

/// A well-formed frame for an event type other than `kline`.
pub fn other_event_frame(symbol: &str, event_type: &str) -> Vec<u8> {
    format!(r#"{{"stream":"x","data":{{"e":"{event_type}","E":1,"s":"{symbol}"}}}}"#).into_bytes()
}
