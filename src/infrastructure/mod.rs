//! Infrastructure layer.
//!
//! Provides technical concerns that support the application without containing
//! business logic. This layer handles configuration, connection management,
//! and runtime resource coordination.
//!
//! # Submodules
//!
//! - [`bootstrap`] - Composition root for runtime wiring
//! - [`config`] - Configuration loading and validation
//! - [`exchange`] - Sharded connection pool
//! - [`heartbeat`] - Periodic liveness notifications
//! - [`orchestration`] - Runtime lifecycle and shutdown

pub mod bootstrap;
pub mod config;
pub mod exchange;
pub mod heartbeat;
pub mod orchestration;
