//! codec-core
//!
//! Uniform one-shot interface over gzip, raw deflate and bzip2.
//! No streaming, no I/O, no shared state.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod utils;

pub mod compression;
pub mod telemetry;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::compression::{
        round_trip, Bzip2Compressor, CompressionCodec, CompressionError, Compressor,
        DeflateCompressor, ErrorKind, GzipCompressor,
    };
    pub use crate::telemetry::RoundTripSnapshot;
}
