//! Surge detection: the threshold rule and the last-surge store.

pub mod detector;
pub mod store;

pub use detector::SurgeDetector;
pub use store::SurgeStore;
