//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

#[cfg(feature = "telegram")]
use tracing::warn;
use tracing::info;

use crate::adapter::outbound::binance::client::BinanceClient;
use crate::adapter::outbound::binance::decode::BinanceDecoder;
use crate::adapter::outbound::binance::stream::BinanceKlineStream;
#[cfg(feature = "telegram")]
use crate::adapter::outbound::notifier::telegram::notifier::{TelegramConfig, TelegramNotifier};
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::exchange::pool::StreamFactory;
use crate::port::outbound::exchange::{EventDecoder, MarketDataStream, SymbolSource};
use crate::port::outbound::notifier::{LogNotifier, NotifierRegistry};

/// Everything the runtime needs from the outside world.
///
/// Built from configuration by [`build_components`]; tests assemble one by
/// hand from the testkit doubles.
pub struct Components {
    pub symbol_source: Arc<dyn SymbolSource>,
    pub stream_factory: StreamFactory,
    pub decoder: Arc<dyn EventDecoder>,
    pub notifiers: Arc<NotifierRegistry>,
}

/// Wire the Binance adapters and the configured notifiers.
///
/// Must be called from within a tokio runtime when Telegram is enabled.
pub fn build_components(config: &Config) -> Components {
    let notifiers = Arc::new(build_notifier_registry(config));
    info!(notifiers = notifiers.len(), "Notifiers initialized");

    Components {
        symbol_source: build_symbol_source(config),
        stream_factory: build_stream_factory(config),
        decoder: Arc::new(BinanceDecoder::new()),
        notifiers,
    }
}

pub fn build_symbol_source(config: &Config) -> Arc<dyn SymbolSource> {
    Arc::new(BinanceClient::from_config(&config.binance))
}

/// A factory producing one unconnected Binance stream per call.
pub fn build_stream_factory(config: &Config) -> StreamFactory {
    let ws_url = config.binance.ws_url.clone();
    let interval = config.binance.kline_interval.clone();
    Arc::new(move || {
        Box::new(BinanceKlineStream::new(ws_url.clone(), interval.clone()))
            as Box<dyn MarketDataStream>
    })
}

/// Build notifier registry from configuration.
///
/// Always logs events; adds Telegram delivery when it is enabled and both
/// credentials are present in the environment.
#[cfg(feature = "telegram")]
pub fn build_notifier_registry(config: &Config) -> NotifierRegistry {
    let mut registry = NotifierRegistry::new();
    registry.register(Box::new(LogNotifier));

    if config.telegram.enabled {
        if let Some(tg_config) = TelegramConfig::from_env() {
            let tg_config = tg_config.with_app_config(&config.telegram);
            registry.register(Box::new(TelegramNotifier::new(tg_config)));
            info!("Telegram notifier enabled");
        } else {
            warn!("Telegram enabled but TELEGRAM_BOT_TOKEN or TELEGRAM_CHAT_ID not set");
        }
    }

    registry
}

/// Build notifier registry from configuration (non-telegram variant).
#[cfg(not(feature = "telegram"))]
pub fn build_notifier_registry(_config: &Config) -> NotifierRegistry {
    let mut registry = NotifierRegistry::new();
    registry.register(Box::new(LogNotifier));
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_telegram_registers_only_the_log_notifier() {
        let mut config = Config::default();
        config.telegram.enabled = false;
        assert_eq!(build_notifier_registry(&config).len(), 1);
    }

    #[test]
    fn stream_factory_yields_fresh_binance_streams() {
        let factory = build_stream_factory(&Config::default());
        let a = factory();
        let b = factory();
        assert_eq!(a.exchange_name(), "Binance");
        assert_eq!(b.exchange_name(), "Binance");
    }
}
