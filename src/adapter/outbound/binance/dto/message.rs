//! Binance combined-stream message types.
//!
//! Every frame on `/stream?streams=...` is wrapped in an envelope naming the
//! stream it came from:
//! ```json
//! {"stream":"btcusdt@kline_5m","data":{"e":"kline","E":1700000000000,"s":"BTCUSDT",
//!  "k":{"o":"100.0","c":"112.0","x":true}}}
//! ```

use serde::Deserialize;

/// Combined-stream envelope.
#[derive(Debug, Deserialize)]
pub struct CombinedStreamMessage {
    /// Stream name, e.g. `btcusdt@kline_5m`.
    #[serde(default)]
    pub stream: Option<String>,
    /// Event payload. Absent on control replies such as `{"result":null,"id":1}`.
    #[serde(default)]
    pub data: Option<StreamEventPayload>,
}

/// Event payload shared by every market stream.
#[derive(Debug, Deserialize)]
pub struct StreamEventPayload {
    #[serde(rename = "e")]
    pub event_type: String,
    #[serde(rename = "E", default)]
    pub event_time: i64,
    #[serde(rename = "s", default)]
    pub symbol: Option<String>,
    #[serde(rename = "k", default)]
    pub kline: Option<KlinePayload>,
}

/// Kline body. Prices are decimal strings.
#[derive(Debug, Deserialize)]
pub struct KlinePayload {
    #[serde(rename = "o")]
    pub open: String,
    #[serde(rename = "c")]
    pub close: String,
    #[serde(rename = "x")]
    pub is_closed: bool,
}
