//! constants.rs
//! Crate-wide defaults shared by the library and the demo driver.

/// Input the demo driver compresses when none is given.
pub const DEFAULT_DEMO_INPUT: &str = "Hello World!";

/// Codec names in declaration order, as accepted by `CompressionCodec::from_str`.
pub const CODEC_NAMES: &[&str] = &["gzip", "deflate", "bzip2"];
