//! Monitor runtime lifecycle.
//!
//! Startup is a single phase: load the symbol universe, start the shards and
//! the heartbeat. The runtime then idles until shutdown is raised and tears
//! everything down in order.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::info;

use crate::application::orchestration::universe::load_universe;
use crate::application::orchestration::FrameHandler;
use crate::application::surge::{SurgeDetector, SurgeStore};
use crate::error::Result;
use crate::infrastructure::bootstrap::{build_components, Components};
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::exchange::pool::ShardManager;
use crate::infrastructure::heartbeat::HeartbeatEmitter;

use super::shutdown::shutdown_requested;

/// Run the monitor against Binance until `shutdown` is raised.
///
/// # Errors
///
/// Returns an error if the symbol universe cannot be loaded or is empty.
/// Once streaming has started, no transport failure ends the run.
pub async fn run_with_shutdown(config: Config, shutdown: watch::Receiver<bool>) -> Result<()> {
    let components = build_components(&config);
    run_with_components(&config, components, shutdown).await
}

/// Run the monitor with explicitly provided components.
///
/// # Errors
///
/// See [`run_with_shutdown`].
pub async fn run_with_components(
    config: &Config,
    components: Components,
    mut shutdown: watch::Receiver<bool>,
) -> Result<()> {
    info!(
        threshold_percent = config.detector.surge_threshold_percent,
        interval = %config.binance.kline_interval,
        "Starting surgewatch"
    );

    let symbols = tokio::select! {
        biased;
        () = shutdown_requested(&mut shutdown) => {
            info!("Shutdown requested before streaming started");
            return Ok(());
        }
        result = load_universe(components.symbol_source.as_ref()) => result?,
    };

    let store = Arc::new(SurgeStore::new());
    let detector = SurgeDetector::new(config.detector.surge_threshold_percent, Arc::clone(&store));
    let handler = Arc::new(FrameHandler::new(
        components.decoder,
        detector,
        Arc::clone(&components.notifiers),
    ));

    let mut shards = ShardManager::new(
        config.connection.clone(),
        components.stream_factory,
        handler,
    )?;
    shards.start(&symbols)?;

    let heartbeat = config.heartbeat.enabled.then(|| {
        HeartbeatEmitter::new(
            config.heartbeat.period(),
            symbols.len(),
            shards.counters(),
            Arc::clone(&components.notifiers),
        )
        .spawn(shards.shutdown_signal())
    });

    info!(symbols = symbols.len(), "Monitoring for surges");

    shutdown_requested(&mut shutdown).await;
    info!("Shutdown signal received");

    shards.shutdown().await;
    if let Some(handle) = heartbeat {
        let _ = handle.await;
    }

    let stats = shards.stats();
    info!(
        frames = stats.frames_received,
        surges = stats.surges_detected,
        symbols_surged = store.len(),
        reconnects = stats.total_reconnects,
        rotations = stats.total_rotations,
        "surgewatch stopped"
    );

    Ok(())
}
