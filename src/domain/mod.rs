//! Exchange-agnostic domain types.
//!
//! - [`id`] - `Symbol` newtype
//! - [`kline`] - decoded kline events
//! - [`shard`] - partitioning of the symbol universe
//! - [`surge`] - surge values and the percentage-change rule

pub mod id;
pub mod kline;
pub mod shard;
pub mod surge;

pub use id::Symbol;
pub use kline::{Decoded, KlineEvent};
pub use shard::{partition, Shard};
pub use surge::{Surge, SurgeRecord};
