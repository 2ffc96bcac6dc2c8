//! Message formatting for Telegram notifications.

use crate::port::outbound::notifier::Event;

use super::notifier::TelegramConfig;

/// Format an event into a Telegram message, or None if the event should be skipped.
pub fn format_event_message(event: &Event, config: &TelegramConfig) -> Option<String> {
    match event {
        Event::SurgeDetected(e) if config.notify_surges => Some(format!(
            "🚀 *Surge Detected*\n\
            \n\
            📋 Symbol: `{}`\n\
            📈 Change: `{}`\n\
            🎯 Threshold: `{}`\n\
            🔓 Open: `{}`\n\
            🔒 Close: `{}`",
            escape_markdown(&e.symbol),
            escape_markdown(&format!("{:+.2}%", e.change_percent)),
            escape_markdown(&format!("{}%", e.threshold_percent)),
            escape_markdown(&e.open.to_string()),
            escape_markdown(&e.close.to_string()),
        )),
        Event::Heartbeat(e) if config.notify_heartbeats => Some(format!(
            "💓 *Heartbeat*\n\
            \n\
            ✅ Monitor is running\n\
            ⏱️ Uptime: `{}`\n\
            📋 Symbols: `{}`\n\
            🔌 Connections open: `{}/{}`",
            format_uptime(e.uptime_secs),
            e.symbols,
            e.stats.active_connections,
            e.stats.shards,
        )),
        _ => None,
    }
}

/// Render seconds as `1d 2h 3m`, dropping leading zero units.
pub fn format_uptime(secs: u64) -> String {
    let days = secs / 86_400;
    let hours = (secs % 86_400) / 3_600;
    let minutes = (secs % 3_600) / 60;

    match (days, hours) {
        (0, 0) => format!("{minutes}m"),
        (0, _) => format!("{hours}h {minutes}m"),
        _ => format!("{days}d {hours}h {minutes}m"),
    }
}

/// Escape special characters for Telegram `MarkdownV2`.
pub fn escape_markdown(text: &str) -> String {
    let special_chars = [
        '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
    ];
    let mut result = String::with_capacity(text.len() * 2);

    for c in text.chars() {
        if special_chars.contains(&c) {
            result.push('\\');
        }
        result.push(c);
    }

    result
}
