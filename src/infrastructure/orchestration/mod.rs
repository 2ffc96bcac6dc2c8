//! Runtime orchestration: process lifecycle and shutdown signalling.

pub mod runtime;
pub mod shutdown;

pub use runtime::{run_with_components, run_with_shutdown};
