//! compression/mod.rs
//! One-shot compression and decompression over in-memory buffers.
//!
//! - `Compressor` is the capability set; gzip, raw deflate and bzip2 adapters implement it.
//! - `CompressionCodec` offers the same calls through enum dispatch.
//! - Registry resolves codec IDs to adapters and describes each format.
//! - `round_trip` exercises one adapter end to end and reports telemetry.

pub mod constants;
pub mod types;
pub mod registry;
pub mod codecs;
pub mod verify;

pub use constants::*;
pub use types::*;
pub use registry::*;
pub use codecs::{Bzip2Compressor, DeflateCompressor, GzipCompressor};
pub use verify::*;
