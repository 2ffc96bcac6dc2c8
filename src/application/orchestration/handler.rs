//! Frame handling shared by every connection worker.

use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::application::surge::SurgeDetector;
use crate::domain::{Decoded, Surge};
use crate::port::outbound::exchange::EventDecoder;
use crate::port::outbound::notifier::{Event, NotifierRegistry, SurgeEvent};

/// What happened to a single frame.
#[derive(Debug, Clone, PartialEq)]
pub enum FrameOutcome {
    /// The frame closed an interval above the threshold.
    Surge(Surge),
    /// A kline was evaluated and did not surge.
    NoSurge,
    /// A valid frame with nothing to evaluate.
    Ignored,
    /// The frame failed to decode and was dropped.
    Dropped,
}

/// Decodes frames, evaluates them and forwards surges to the notifiers.
///
/// Shared by all workers behind an `Arc`; holds no per-connection state.
pub struct FrameHandler {
    decoder: Arc<dyn EventDecoder>,
    detector: SurgeDetector,
    notifiers: Arc<NotifierRegistry>,
}

impl FrameHandler {
    #[must_use]
    pub fn new(
        decoder: Arc<dyn EventDecoder>,
        detector: SurgeDetector,
        notifiers: Arc<NotifierRegistry>,
    ) -> Self {
        Self {
            decoder,
            detector,
            notifiers,
        }
    }

    /// Process one raw frame. Never fails: undecodable frames are logged and dropped.
    pub fn handle_frame(&self, raw: &[u8]) -> FrameOutcome {
        let event = match self.decoder.decode(raw) {
            Ok(Decoded::Kline(event)) => event,
            Ok(Decoded::Ignored { event_type }) => {
                trace!(event_type = %event_type, "Ignoring non-kline frame");
                return FrameOutcome::Ignored;
            }
            Err(e) => {
                warn!(error = %e, bytes = raw.len(), "Dropping undecodable frame");
                return FrameOutcome::Dropped;
            }
        };

        match self.detector.evaluate(&event) {
            Some(surge) => {
                debug!(symbol = %surge.symbol, "Forwarding surge to notifiers");
                self.notifiers.notify_all(Event::SurgeDetected(SurgeEvent::new(
                    &surge,
                    self.detector.threshold_percent(),
                )));
                FrameOutcome::Surge(surge)
            }
            None => FrameOutcome::NoSurge,
        }
    }
}
