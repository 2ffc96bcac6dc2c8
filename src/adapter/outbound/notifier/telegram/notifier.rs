//! Telegram notifier.
//!
//! Provides the [`TelegramNotifier`] for sending surge alerts and heartbeats.
//! Messages are queued on an unbounded channel and delivered by a background
//! worker, so `notify` never waits on the network.
//!
//! Requires the `telegram` feature to be enabled.

use teloxide::prelude::*;
use teloxide::types::ParseMode;
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use crate::infrastructure::config::telegram::TelegramAppConfig;
use crate::port::{outbound::notifier::Event, outbound::notifier::Notifier};

use super::format::format_event_message;

/// Configuration for the Telegram notifier.
///
/// Credentials come from the environment; the switches come from the
/// `[telegram]` section of the config file.
#[derive(Clone)]
pub struct TelegramConfig {
    /// Bot API token obtained from BotFather.
    pub bot_token: String,
    /// Target chat ID for notifications.
    pub chat_id: i64,
    /// Send a message for every detected surge.
    pub notify_surges: bool,
    /// Send the periodic heartbeat message.
    pub notify_heartbeats: bool,
}

impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &"<redacted>")
            .field("chat_id", &self.chat_id)
            .field("notify_surges", &self.notify_surges)
            .field("notify_heartbeats", &self.notify_heartbeats)
            .finish()
    }
}

impl TelegramConfig {
    /// Create configuration from environment variables.
    ///
    /// Reads `TELEGRAM_BOT_TOKEN` and `TELEGRAM_CHAT_ID`. Returns `None` if
    /// either is missing or the chat ID is not an integer.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let bot_token = std::env::var("TELEGRAM_BOT_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty())?;
        let chat_id = std::env::var("TELEGRAM_CHAT_ID")
            .ok()
            .and_then(|s| s.trim().parse().ok())?;

        Some(Self {
            bot_token,
            chat_id,
            notify_surges: true,
            notify_heartbeats: true,
        })
    }

    /// Apply the notification switches from the application config.
    #[must_use]
    pub fn with_app_config(mut self, app: &TelegramAppConfig) -> Self {
        self.notify_surges = app.notify_surges;
        self.notify_heartbeats = app.notify_heartbeats;
        self
    }
}

/// Telegram notifier that sends messages to a chat.
pub struct TelegramNotifier {
    /// Channel sender for queuing outbound notifications.
    sender: mpsc::UnboundedSender<Event>,
}

impl TelegramNotifier {
    /// Create a new Telegram notifier and spawn the background worker.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn new(config: TelegramConfig) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        tokio::spawn(telegram_worker(config, receiver));
        Self { sender }
    }
}

impl Notifier for TelegramNotifier {
    fn notify(&self, event: Event) {
        if self.sender.send(event).is_err() {
            warn!("Telegram notifier channel closed");
        }
    }
}

/// Background worker that sends Telegram messages.
///
/// Failures are logged and the message is dropped; there is no retry.
async fn telegram_worker(config: TelegramConfig, mut receiver: mpsc::UnboundedReceiver<Event>) {
    let bot = Bot::new(&config.bot_token);
    let chat_id = ChatId(config.chat_id);

    info!(chat_id = config.chat_id, "Telegram notifier started");

    while let Some(event) = receiver.recv().await {
        let Some(text) = format_event_message(&event, &config) else {
            continue;
        };

        if let Err(e) = bot
            .send_message(chat_id, &text)
            .parse_mode(ParseMode::MarkdownV2)
            .await
        {
            error!(error = %e, "Failed to send Telegram message");
        }
    }

    warn!("Telegram notifier worker shutting down");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mutex to serialize tests that modify environment variables.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_from_env_missing_token() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::remove_var("TELEGRAM_BOT_TOKEN");
        std::env::remove_var("TELEGRAM_CHAT_ID");

        assert!(TelegramConfig::from_env().is_none());
    }

    #[test]
    fn test_from_env_missing_chat_id() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("TELEGRAM_BOT_TOKEN", "test-token");
        std::env::remove_var("TELEGRAM_CHAT_ID");

        assert!(TelegramConfig::from_env().is_none());

        std::env::remove_var("TELEGRAM_BOT_TOKEN");
    }

    #[test]
    fn test_from_env_invalid_chat_id() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("TELEGRAM_BOT_TOKEN", "test-token");
        std::env::set_var("TELEGRAM_CHAT_ID", "not-a-number");

        assert!(TelegramConfig::from_env().is_none());

        std::env::remove_var("TELEGRAM_BOT_TOKEN");
        std::env::remove_var("TELEGRAM_CHAT_ID");
    }

    #[test]
    fn test_from_env_blank_token() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("TELEGRAM_BOT_TOKEN", "  ");
        std::env::set_var("TELEGRAM_CHAT_ID", "12345");

        assert!(TelegramConfig::from_env().is_none());

        std::env::remove_var("TELEGRAM_BOT_TOKEN");
        std::env::remove_var("TELEGRAM_CHAT_ID");
    }

    #[test]
    fn test_from_env_valid() {
        let _guard = ENV_LOCK.lock().unwrap();
        std::env::set_var("TELEGRAM_BOT_TOKEN", "test-token");
        std::env::set_var("TELEGRAM_CHAT_ID", "-100123");

        let config = TelegramConfig::from_env().unwrap();
        assert_eq!(config.bot_token, "test-token");
        assert_eq!(config.chat_id, -100123);
        assert!(config.notify_surges);
        assert!(config.notify_heartbeats);

        std::env::remove_var("TELEGRAM_BOT_TOKEN");
        std::env::remove_var("TELEGRAM_CHAT_ID");
    }

    #[test]
    fn test_debug_hides_token() {
        let config = TelegramConfig {
            bot_token: "123456:secret".into(),
            chat_id: 1,
            notify_surges: true,
            notify_heartbeats: true,
        };
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn test_app_config_switches_apply() {
        let config = TelegramConfig {
            bot_token: "t".into(),
            chat_id: 1,
            notify_surges: true,
            notify_heartbeats: true,
        };
        let app = TelegramAppConfig {
            notify_heartbeats: false,
            ..TelegramAppConfig::default()
        };

        let config = config.with_app_config(&app);
        assert!(config.notify_surges);
        assert!(!config.notify_heartbeats);
    }
}
