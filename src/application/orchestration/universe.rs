//! Symbol universe loading.

use tracing::info;

use crate::domain::Symbol;
use crate::error::{Error, Result};
use crate::port::outbound::exchange::SymbolSource;

/// Fetch the tradeable universe once.
///
/// # Errors
///
/// Propagates the source's error, and returns [`Error::NoSymbols`] when the
/// source succeeds with an empty list. Both are fatal at startup.
pub async fn load_universe(source: &dyn SymbolSource) -> Result<Vec<Symbol>> {
    let symbols = source.fetch_symbols().await?;
    if symbols.is_empty() {
        return Err(Error::NoSymbols);
    }

    info!(
        exchange = source.exchange_name(),
        symbols = symbols.len(),
        "Loaded symbol universe"
    );
    Ok(symbols)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::source::StaticSymbolSource;

    #[tokio::test]
    async fn returns_symbols_in_source_order() {
        let source = StaticSymbolSource::new(vec!["ETHUSDT", "BTCUSDT"]);
        let symbols = load_universe(&source).await.unwrap();
        assert_eq!(symbols, vec![Symbol::from("ETHUSDT"), Symbol::from("BTCUSDT")]);
    }

    #[tokio::test]
    async fn empty_universe_is_fatal() {
        let source = StaticSymbolSource::new(Vec::<&str>::new());
        assert!(matches!(load_universe(&source).await, Err(Error::NoSymbols)));
    }

    #[tokio::test]
    async fn source_failure_propagates() {
        let source = StaticSymbolSource::failing("exchange unavailable");
        assert!(matches!(
            load_universe(&source).await,
            Err(Error::Connection(_))
        ));
    }
}
