//! Binance combined-stream WebSocket connection.
//!
//! One [`BinanceKlineStream`] serves one connection. The shard's symbols are
//! encoded in the URL (`?streams=a@kline_5m/b@kline_5m`), so no subscribe
//! message is sent after the handshake.

use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpStream;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};
use tracing::{debug, info, trace, warn};

use crate::domain::Symbol;
use crate::error::{Error, Result};
use crate::port::outbound::exchange::{MarketDataStream, StreamMessage};

/// Build the aggregated-stream URL for a set of symbols.
///
/// # Errors
///
/// Returns an error if `symbols` is empty; a connection without streams is
/// rejected by the server.
pub fn combined_stream_url(base: &str, symbols: &[Symbol], interval: &str) -> Result<String> {
    if symbols.is_empty() {
        return Err(Error::Connection("no symbols to stream".into()));
    }

    let streams: Vec<String> = symbols.iter().map(|s| s.kline_stream(interval)).collect();
    Ok(format!("{}?streams={}", base, streams.join("/")))
}

/// Binance kline stream implementing [`MarketDataStream`].
pub struct BinanceKlineStream {
    base_url: String,
    interval: String,
    ws: Option<WebSocketStream<MaybeTlsStream<TcpStream>>>,
}

impl BinanceKlineStream {
    /// Create a disconnected stream for the given endpoint and kline interval.
    #[must_use]
    pub fn new(base_url: impl Into<String>, interval: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            interval: interval.into(),
            ws: None,
        }
    }
}

#[async_trait]
impl MarketDataStream for BinanceKlineStream {
    async fn connect(&mut self, symbols: &[Symbol]) -> Result<()> {
        let url = combined_stream_url(&self.base_url, symbols, &self.interval)?;

        debug!(streams = symbols.len(), "Connecting to WebSocket");
        let (ws_stream, response) = connect_async(url.as_str()).await?;
        info!(
            status = %response.status(),
            streams = symbols.len(),
            "WebSocket connected"
        );

        self.ws = Some(ws_stream);
        Ok(())
    }

    async fn next_message(&mut self) -> Option<StreamMessage> {
        let ws = self.ws.as_mut()?;

        loop {
            match ws.next().await? {
                Ok(Message::Text(text)) => {
                    trace!(bytes = text.len(), "Received WebSocket text frame");
                    return Some(StreamMessage::Frame(text.into_bytes()));
                }
                Ok(Message::Binary(data)) => {
                    trace!(bytes = data.len(), "Received WebSocket binary frame");
                    return Some(StreamMessage::Frame(data));
                }
                Ok(Message::Ping(data)) => {
                    trace!("Received WebSocket ping");
                    if ws.send(Message::Pong(data)).await.is_err() {
                        return Some(StreamMessage::Disconnected {
                            reason: "Failed to send pong".into(),
                        });
                    }
                }
                Ok(Message::Close(frame)) => {
                    info!(frame = ?frame, "WebSocket closed by server");
                    return Some(StreamMessage::Disconnected {
                        reason: frame
                            .map(|f| f.reason.to_string())
                            .unwrap_or_else(|| "closed by server".into()),
                    });
                }
                Ok(_) => continue,
                Err(e) => {
                    warn!(error = %e, "WebSocket error");
                    return Some(StreamMessage::Disconnected {
                        reason: e.to_string(),
                    });
                }
            }
        }
    }

    async fn close(&mut self) {
        if let Some(mut ws) = self.ws.take() {
            if let Err(e) = ws.close(None).await {
                debug!(error = %e, "Error while closing WebSocket");
            }
        }
    }

    fn exchange_name(&self) -> &'static str {
        "Binance"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_url_joins_lowercased_streams() {
        let symbols = vec![Symbol::from("BTCUSDT"), Symbol::from("ETHUSDT")];
        let url = combined_stream_url("wss://fstream.binance.com/stream", &symbols, "5m").unwrap();

        assert_eq!(
            url,
            "wss://fstream.binance.com/stream?streams=btcusdt@kline_5m/ethusdt@kline_5m"
        );
    }

    #[test]
    fn combined_url_single_symbol_has_no_trailing_delimiter() {
        let url = combined_stream_url("wss://x/stream", &[Symbol::from("SOLUSDT")], "1m").unwrap();
        assert_eq!(url, "wss://x/stream?streams=solusdt@kline_1m");
    }

    #[test]
    fn combined_url_rejects_empty_shard() {
        assert!(combined_stream_url("wss://x/stream", &[], "5m").is_err());
    }

    #[tokio::test]
    async fn disconnected_stream_yields_nothing() {
        let mut stream = BinanceKlineStream::new("wss://x/stream", "5m");
        assert!(stream.next_message().await.is_none());
        stream.close().await;
        assert_eq!(stream.exchange_name(), "Binance");
    }
}
