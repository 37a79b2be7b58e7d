//! telemetry/mod.rs
//! Counters, stage timers and immutable round-trip snapshots.
//!
//! - Counters are plain values filled in by the caller, never shared.
//! - Snapshots are built once at the end of a round trip and serialize to JSON.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
