//! End-to-end frame pipeline: raw combined-stream frames through the
//! Binance decoder and the surge detector into the notifiers.

mod harness;

use std::sync::Arc;

use harness::recording_notifier::RecordingNotifier;
use surgewatch::adapter::outbound::binance::decode::BinanceDecoder;
use surgewatch::application::orchestration::{FrameHandler, FrameOutcome};
use surgewatch::application::surge::{SurgeDetector, SurgeStore};
use surgewatch::domain::Symbol;
use surgewatch::port::NotifierRegistry;
use surgewatch::testkit::domain::{closed_frame, kline_frame, other_event_frame};

fn pipeline(threshold: f64) -> (FrameHandler, Arc<SurgeStore>, RecordingNotifier) {
    let store = Arc::new(SurgeStore::new());
    let recorder = RecordingNotifier::new();
    let mut registry = NotifierRegistry::new();
    registry.register(Box::new(recorder.clone()));

    let handler = FrameHandler::new(
        Arc::new(BinanceDecoder::new()),
        SurgeDetector::new(threshold, Arc::clone(&store)),
        Arc::new(registry),
    );
    (handler, store, recorder)
}

#[test]
fn twelve_percent_close_is_reported_and_stored() {
    let (handler, store, recorder) = pipeline(10.0);

    let outcome = handler.handle_frame(&closed_frame("BTCUSDT", 100.0, 112.0));
    assert!(matches!(outcome, FrameOutcome::Surge(_)));

    let surges = recorder.surges();
    assert_eq!(surges.len(), 1);
    assert_eq!(surges[0].symbol, "BTCUSDT");
    assert!((surges[0].change_percent - 12.0).abs() < 1e-9);
    assert!((surges[0].threshold_percent - 10.0).abs() < f64::EPSILON);

    let record = store.get(&Symbol::from("BTCUSDT")).unwrap();
    assert!((record.open - 100.0).abs() < f64::EPSILON);
    assert!((record.close - 112.0).abs() < f64::EPSILON);
}

#[test]
fn nine_percent_close_is_not_a_surge() {
    let (handler, store, recorder) = pipeline(10.0);

    assert_eq!(
        handler.handle_frame(&closed_frame("BTCUSDT", 100.0, 109.0)),
        FrameOutcome::NoSurge
    );
    assert_eq!(recorder.len(), 0);
    assert!(store.is_empty());
}

#[test]
fn open_interval_is_never_evaluated() {
    let (handler, _store, recorder) = pipeline(10.0);

    let frame = kline_frame("BTCUSDT", "100", "150", false);
    assert_eq!(handler.handle_frame(&frame), FrameOutcome::NoSurge);
    assert_eq!(recorder.len(), 0);
}

#[test]
fn exact_threshold_counts_as_surge() {
    let (handler, _store, recorder) = pipeline(10.0);

    handler.handle_frame(&kline_frame("ETHUSDT", "200", "220", true));
    assert_eq!(recorder.surges().len(), 1);
}

#[test]
fn zero_open_is_no_surge_without_fault() {
    let (handler, store, recorder) = pipeline(10.0);

    assert_eq!(
        handler.handle_frame(&kline_frame("NEWUSDT", "0", "5", true)),
        FrameOutcome::NoSurge
    );
    assert_eq!(recorder.len(), 0);
    assert!(store.is_empty());
}

#[test]
fn unparseable_price_cannot_trigger_a_surge() {
    let (handler, store, recorder) = pipeline(10.0);

    assert_eq!(
        handler.handle_frame(&kline_frame("BADUSDT", "abc", "1000", true)),
        FrameOutcome::NoSurge
    );
    assert_eq!(recorder.len(), 0);
    assert!(store.is_empty());
}

#[test]
fn malformed_and_foreign_frames_are_skipped() {
    let (handler, _store, recorder) = pipeline(10.0);

    assert_eq!(handler.handle_frame(b"{not json"), FrameOutcome::Dropped);
    assert_eq!(handler.handle_frame(br#"{"result":null,"id":1}"#), FrameOutcome::Dropped);
    assert_eq!(
        handler.handle_frame(&other_event_frame("BTCUSDT", "24hrTicker")),
        FrameOutcome::Ignored
    );
    assert_eq!(recorder.len(), 0);
}

#[test]
fn repeated_surges_are_all_reported_and_last_one_stored() {
    let (handler, store, recorder) = pipeline(5.0);

    handler.handle_frame(&closed_frame("SOLUSDT", 10.0, 11.0));
    handler.handle_frame(&closed_frame("SOLUSDT", 11.0, 13.2));

    assert_eq!(recorder.surges().len(), 2);
    let record = store.get(&Symbol::from("SOLUSDT")).unwrap();
    assert!((record.close - 13.2).abs() < 1e-9);
    assert_eq!(store.len(), 1);
}
