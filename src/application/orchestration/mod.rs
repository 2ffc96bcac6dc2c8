//! Per-frame flow (decode, evaluate, notify) and universe loading.

pub mod handler;
pub mod universe;

pub use handler::{FrameHandler, FrameOutcome};
