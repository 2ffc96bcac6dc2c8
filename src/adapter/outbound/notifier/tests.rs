use crate::port::{
    outbound::exchange::PoolStats, outbound::notifier::Event, outbound::notifier::HeartbeatEvent,
    outbound::notifier::LogNotifier, outbound::notifier::Notifier,
    outbound::notifier::NotifierRegistry, outbound::notifier::NullNotifier,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

struct CountingNotifier {
    count: Arc<AtomicUsize>,
}

impl Notifier for CountingNotifier {
    fn notify(&self, _event: Event) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }
}

fn heartbeat() -> Event {
    Event::Heartbeat(HeartbeatEvent {
        symbols: 10,
        uptime_secs: 900,
        stats: PoolStats::default(),
    })
}

#[test]
fn test_registry_notify_all() {
    let count = Arc::new(AtomicUsize::new(0));
    let mut registry = NotifierRegistry::new();

    registry.register(Box::new(CountingNotifier {
        count: count.clone(),
    }));
    registry.register(Box::new(CountingNotifier {
        count: count.clone(),
    }));

    registry.notify_all(heartbeat());

    assert_eq!(count.load(Ordering::SeqCst), 2);
}

#[test]
fn test_null_and_log_notifiers_accept_events() {
    NullNotifier.notify(heartbeat());
    LogNotifier.notify(heartbeat());
}

#[test]
fn test_registry_len_and_is_empty() {
    let mut registry = NotifierRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);

    registry.register(Box::new(NullNotifier));
    assert!(!registry.is_empty());
    assert_eq!(registry.len(), 1);
}
