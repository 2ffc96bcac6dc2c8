//! Handler for the `run` command.

use tokio::sync::watch;
use tracing::{info, warn};

use crate::adapter::inbound::cli::command::RunArgs;
use crate::adapter::inbound::cli::output;
use crate::error::Result;
use crate::infrastructure::orchestration::run_with_shutdown;

/// Execute the run command until Ctrl-C.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let mut config = args.config.load()?;
    if let Some(level) = &args.log_level {
        config.logging.level.clone_from(level);
    }
    if args.json_logs {
        config.logging.format = "json".into();
    }
    config.init_logging();

    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Config", args.config.describe());
    output::field("Interval", &config.binance.kline_interval);
    output::field(
        "Threshold",
        format!("{}%", config.detector.surge_threshold_percent),
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Ctrl-C received, shutting down");
                shutdown_tx.send_replace(true);
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for Ctrl-C; stop the process externally");
                std::future::pending::<()>().await;
            }
        }
    });

    run_with_shutdown(config, shutdown_rx).await
}
