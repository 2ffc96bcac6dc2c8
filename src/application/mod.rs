//! Application services (use cases).
//!
//! These services apply the surge rule to decoded events and coordinate
//! the decoder and notifiers around it.

pub mod orchestration;
pub mod surge;
