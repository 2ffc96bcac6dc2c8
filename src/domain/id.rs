//! Domain identifier types with proper encapsulation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Exchange trading symbol (e.g. `BTCUSDT`) - newtype for type safety.
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Symbol(String);

impl Symbol {
    /// Create a new `Symbol` from a string.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    /// Get the symbol as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Stream name for this symbol's kline channel, e.g. `btcusdt@kline_5m`.
    #[must_use]
    pub fn kline_stream(&self, interval: &str) -> String {
        format!("{}@kline_{}", self.0.to_lowercase(), interval)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kline_stream_lowercases_symbol() {
        let symbol = Symbol::from("BTCUSDT");
        assert_eq!(symbol.kline_stream("5m"), "btcusdt@kline_5m");
    }

    #[test]
    fn display_keeps_original_case() {
        assert_eq!(Symbol::from("1000PEPEUSDT").to_string(), "1000PEPEUSDT");
    }
}
