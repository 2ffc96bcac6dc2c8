//! Whole-runtime tests with in-memory symbol source, streams and notifiers.

mod harness;

use std::sync::Arc;
use std::time::Duration;

use harness::recording_notifier::RecordingNotifier;
use surgewatch::adapter::outbound::binance::decode::BinanceDecoder;
use surgewatch::error::Error;
use surgewatch::infrastructure::bootstrap::Components;
use surgewatch::infrastructure::config::settings::Config;
use surgewatch::infrastructure::orchestration::run_with_components;
use surgewatch::port::NotifierRegistry;
use surgewatch::testkit;
use surgewatch::testkit::source::StaticSymbolSource;
use surgewatch::testkit::stream::{idle_factory, StreamProbe};
use tokio::sync::watch;

fn components(source: StaticSymbolSource, probe: &Arc<StreamProbe>) -> (Components, RecordingNotifier) {
    let recorder = RecordingNotifier::new();
    let mut registry = NotifierRegistry::new();
    registry.register(Box::new(recorder.clone()));

    let components = Components {
        symbol_source: Arc::new(source),
        stream_factory: idle_factory(Arc::clone(probe)),
        decoder: Arc::new(BinanceDecoder::new()),
        notifiers: Arc::new(registry),
    };
    (components, recorder)
}

fn config(heartbeat_secs: u64) -> Config {
    let mut config = testkit::config::app();
    config.heartbeat.period_secs = heartbeat_secs;
    config
}

fn universe(n: usize) -> StaticSymbolSource {
    StaticSymbolSource::new(testkit::domain::make_symbols(n))
}

#[tokio::test(start_paused = true)]
async fn runs_one_connection_per_shard_with_heartbeats_until_shutdown() {
    let probe = StreamProbe::new();
    let (components, recorder) = components(universe(250), &probe);
    let (tx, rx) = watch::channel(false);

    let run = tokio::spawn(async move { run_with_components(&config(60), components, rx).await });

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(probe.connect_count(), 3);
    assert!(recorder.heartbeats().is_empty(), "no heartbeat before one period");

    tokio::time::sleep(Duration::from_secs(60)).await;
    let beats = recorder.heartbeats();
    assert_eq!(beats.len(), 1);
    assert_eq!(beats[0].symbols, 250);
    assert_eq!(beats[0].stats.shards, 3);
    assert_eq!(beats[0].stats.active_connections, 3);

    tx.send_replace(true);
    run.await.unwrap().unwrap();

    assert_eq!(probe.close_count(), 3);
}

#[tokio::test(start_paused = true)]
async fn heartbeat_fires_even_when_every_connection_is_down() {
    let probe = StreamProbe::new();
    let recorder = RecordingNotifier::new();
    let mut registry = NotifierRegistry::new();
    registry.register(Box::new(recorder.clone()));
    let components = Components {
        symbol_source: Arc::new(universe(3)),
        stream_factory: testkit::stream::sequence_factory(
            (0..100)
                .map(|_| testkit::stream::ScriptedStream::new().failing("refused"))
                .collect(),
            Arc::clone(&probe),
        ),
        decoder: Arc::new(BinanceDecoder::new()),
        notifiers: Arc::new(registry),
    };
    let (tx, rx) = watch::channel(false);

    let run = tokio::spawn(async move { run_with_components(&config(30), components, rx).await });

    tokio::time::sleep(Duration::from_secs(31)).await;
    let beats = recorder.heartbeats();
    assert_eq!(beats.len(), 1);
    assert_eq!(beats[0].stats.active_connections, 0);
    assert!(beats[0].stats.dial_failures >= 6);

    tx.send_replace(true);
    run.await.unwrap().unwrap();
}

#[tokio::test]
async fn empty_universe_is_fatal_and_opens_nothing() {
    let probe = StreamProbe::new();
    let (components, _recorder) = components(universe(0), &probe);
    let (_tx, rx) = watch::channel(false);

    let result = run_with_components(&config(60), components, rx).await;

    assert!(matches!(result, Err(Error::NoSymbols)));
    assert_eq!(probe.connect_count(), 0);
}

#[tokio::test]
async fn symbol_fetch_failure_is_fatal() {
    let probe = StreamProbe::new();
    let (components, _recorder) =
        components(StaticSymbolSource::failing("503 Service Unavailable"), &probe);
    let (_tx, rx) = watch::channel(false);

    let result = run_with_components(&config(60), components, rx).await;

    assert!(matches!(result, Err(Error::Connection(_))));
    assert_eq!(probe.connect_count(), 0);
}

#[tokio::test]
async fn shutdown_before_start_returns_cleanly() {
    let probe = StreamProbe::new();
    let (components, _recorder) = components(universe(10), &probe);
    let (tx, rx) = watch::channel(false);
    tx.send_replace(true);

    run_with_components(&config(60), components, rx)
        .await
        .unwrap();

    assert_eq!(probe.connect_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn disabled_heartbeat_sends_nothing() {
    let probe = StreamProbe::new();
    let (components, recorder) = components(universe(5), &probe);
    let mut config = config(10);
    config.heartbeat.enabled = false;
    let (tx, rx) = watch::channel(false);

    let run = tokio::spawn(async move { run_with_components(&config, components, rx).await });

    tokio::time::sleep(Duration::from_secs(100)).await;
    assert!(recorder.heartbeats().is_empty());

    tx.send_replace(true);
    run.await.unwrap().unwrap();
}
