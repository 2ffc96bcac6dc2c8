//! Infrastructure configuration modules.

pub mod connection;
pub mod detector;
pub mod heartbeat;
pub mod logging;
pub mod settings;
pub mod telegram;
