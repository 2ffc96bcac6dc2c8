//! Decoded kline (candlestick) events.

use super::id::Symbol;

/// Event type carried by interval (kline) updates.
pub const KLINE_EVENT: &str = "kline";

/// A single kline update decoded from the stream.
///
/// Transient: consumed by the detector and then dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct KlineEvent {
    /// Symbol the interval belongs to.
    pub symbol: Symbol,
    /// Raw event type (`"kline"` for every value produced by the decoder).
    pub event_type: String,
    /// Event time in epoch milliseconds.
    pub event_time: i64,
    /// Interval open price.
    pub open: f64,
    /// Interval close (or latest) price.
    pub close: f64,
    /// Whether the interval has closed.
    pub is_closed: bool,
    /// True when a price field failed to parse and was defaulted to zero.
    pub prices_defaulted: bool,
}

/// Result of decoding a frame.
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    /// An interval update ready for evaluation.
    Kline(KlineEvent),
    /// A well-formed frame with nothing to evaluate.
    Ignored {
        /// The event type that was skipped.
        event_type: String,
    },
}

impl Decoded {
    /// Returns the kline event, if this frame carried one.
    #[must_use]
    pub fn kline(&self) -> Option<&KlineEvent> {
        match self {
            Self::Kline(event) => Some(event),
            Self::Ignored { .. } => None,
        }
    }
}
