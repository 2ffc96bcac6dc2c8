use std::sync::Arc;

use parking_lot::Mutex;
use surgewatch::port::{Event, HeartbeatEvent, Notifier, SurgeEvent};

/// Thread-safe event collector for notification assertions in tests.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    events: Arc<Mutex<Vec<Event>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn surges(&self) -> Vec<SurgeEvent> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                Event::SurgeDetected(s) => Some(s.clone()),
                Event::Heartbeat(_) => None,
            })
            .collect()
    }

    pub fn heartbeats(&self) -> Vec<HeartbeatEvent> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| match e {
                Event::Heartbeat(h) => Some(h.clone()),
                Event::SurgeDetected(_) => None,
            })
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, event: Event) {
        self.events.lock().push(event);
    }
}
