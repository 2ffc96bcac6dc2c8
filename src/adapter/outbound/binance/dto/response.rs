//! Binance REST API response types.

use serde::Deserialize;

/// Status value of symbols open for trading.
pub const TRADING_STATUS: &str = "TRADING";

/// Response of `GET /fapi/v1/exchangeInfo` (only the fields we use).
#[derive(Debug, Deserialize)]
pub struct ExchangeInfoResponse {
    #[serde(default)]
    pub symbols: Vec<ExchangeSymbol>,
}

#[derive(Debug, Deserialize)]
pub struct ExchangeSymbol {
    pub symbol: String,
    pub status: String,
}

impl ExchangeSymbol {
    #[must_use]
    pub fn is_trading(&self) -> bool {
        self.status == TRADING_STATUS
    }
}
