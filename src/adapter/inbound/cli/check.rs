//! Handler for the `check` command.
//!
//! Validates configuration, reports whether Telegram credentials are
//! present, and (unless offline) fetches the symbol universe to print the
//! shard plan. Never opens a stream connection.

use crate::adapter::inbound::cli::command::CheckArgs;
use crate::adapter::inbound::cli::output;
use crate::application::orchestration::universe::load_universe;
use crate::domain::{partition, Shard};
use crate::error::Result;
use crate::infrastructure::bootstrap::build_symbol_source;
use crate::infrastructure::config::settings::Config;

/// Execute the check command.
pub async fn execute(args: &CheckArgs) -> Result<()> {
    let config = args.config.load()?;

    output::section("Configuration Check");
    output::field("Config", args.config.describe());
    output::success("Configuration is valid");
    print_summary(&config);
    print_telegram_status(&config);

    if args.offline {
        output::success("Configuration check complete (offline)");
        return Ok(());
    }

    let source = build_symbol_source(&config);
    let symbols = load_universe(source.as_ref()).await?;
    let shards = partition(&symbols, config.connection.max_symbols_per_connection);

    output::section("Shard Plan");
    output::field("Symbols", symbols.len());
    output::field("Connections", shards.len());
    for shard in &shards {
        output::field(&format!("Shard {}", shard.index()), describe_shard(shard));
    }

    output::success("Check complete");
    Ok(())
}

fn print_summary(config: &Config) {
    output::section("Summary");
    output::field("Stream", &config.binance.ws_url);
    output::field("REST API", &config.binance.api_url);
    output::field("Interval", &config.binance.kline_interval);
    output::field(
        "Threshold",
        format!("{}%", config.detector.surge_threshold_percent),
    );
    output::field(
        "Per shard",
        config.connection.max_symbols_per_connection,
    );
    output::field(
        "Rotation",
        format!("{}s", config.connection.rotation_period_secs),
    );
    output::field(
        "Dial timeout",
        format!("{}ms", config.connection.connect_timeout_ms),
    );
    output::field(
        "Backoff",
        format!("{}ms", config.connection.reconnect_backoff_ms),
    );
    if config.heartbeat.enabled {
        output::field("Heartbeat", format!("{}s", config.heartbeat.period_secs));
    } else {
        output::field("Heartbeat", "disabled");
    }
}

fn print_telegram_status(config: &Config) {
    if !config.telegram.enabled {
        output::field("Telegram", "disabled");
        return;
    }

    let token_present = env_present("TELEGRAM_BOT_TOKEN");
    let chat_present = env_present("TELEGRAM_CHAT_ID");
    if token_present && chat_present {
        output::success("Telegram integration configured");
    } else {
        output::warning("Telegram enabled but environment variables are missing");
        if !token_present {
            output::field("Missing", "TELEGRAM_BOT_TOKEN");
        }
        if !chat_present {
            output::field("Missing", "TELEGRAM_CHAT_ID");
        }
    }
}

fn env_present(name: &str) -> bool {
    std::env::var(name).is_ok_and(|v| !v.trim().is_empty())
}

/// `N symbols (FIRST .. LAST)`.
fn describe_shard(shard: &Shard) -> String {
    match shard.symbols() {
        [] => "empty".to_string(),
        [only] => format!("1 symbol ({only})"),
        [first, .., last] => format!("{} symbols ({first} .. {last})", shard.len()),
    }
}
