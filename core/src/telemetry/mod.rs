//! telemetry/mod.rs
//! Counters, stage timers, and immutable snapshots for one stream call.
//!
//! Counters are plain owned values threaded through the loop; there is no
//! shared state between concurrent calls.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
