//! Telegram notification delivery.
//!
//! Provides Telegram bot integration for surge alerts and heartbeat messages.

mod format;

pub mod notifier;

pub use notifier::{TelegramConfig, TelegramNotifier};
