//! Binance kline frame decoder.

use tracing::warn;

use super::dto::message::CombinedStreamMessage;
use crate::domain::kline::KLINE_EVENT;
use crate::domain::{Decoded, KlineEvent, Symbol};
use crate::error::DecodeError;
use crate::port::outbound::exchange::EventDecoder;

/// Decodes combined-stream frames into [`KlineEvent`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinanceDecoder;

impl BinanceDecoder {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl EventDecoder for BinanceDecoder {
    fn decode(&self, raw: &[u8]) -> Result<Decoded, DecodeError> {
        let message: CombinedStreamMessage =
            serde_json::from_slice(raw).map_err(DecodeError::Malformed)?;
        let data = message.data.ok_or(DecodeError::MissingField("data"))?;

        if data.event_type != KLINE_EVENT {
            return Ok(Decoded::Ignored {
                event_type: data.event_type,
            });
        }

        let symbol = data.symbol.ok_or(DecodeError::MissingField("s"))?;
        let kline = data.kline.ok_or(DecodeError::MissingField("k"))?;

        let open = parse_price(&symbol, "o", &kline.open);
        let close = parse_price(&symbol, "c", &kline.close);

        Ok(Decoded::Kline(KlineEvent {
            symbol: Symbol::from(symbol),
            event_type: data.event_type,
            event_time: data.event_time,
            open: open.unwrap_or(0.0),
            close: close.unwrap_or(0.0),
            is_closed: kline.is_closed,
            prices_defaulted: open.is_none() || close.is_none(),
        }))
    }
}

/// Parse a decimal price string, logging when it has to be defaulted.
fn parse_price(symbol: &str, field: &'static str, raw: &str) -> Option<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            warn!(symbol, field, raw, "Unparseable price, defaulting to zero");
            None
        }
    }
}
