//! compression/codecs/mod.rs
//! Codec adapters. Each one delegates to an existing library and only maps
//! its errors; none holds state between calls.

pub mod bzip2;
pub mod deflate;
pub mod gzip;

pub use self::bzip2::Bzip2Compressor;
pub use self::deflate::DeflateCompressor;
pub use self::gzip::GzipCompressor;
