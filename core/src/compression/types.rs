//! compression/types.rs
//! Codec identifiers, the error taxonomy and the `Compressor` capability set.
use std::fmt;
use std::str::FromStr;

use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::compression::constants::codec_ids;

/// FFI-safe enum for compression codec identifiers.
#[repr(u16)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, TryFromPrimitive, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionCodec {
    Gzip    = codec_ids::GZIP,
    Deflate = codec_ids::DEFLATE,
    Bzip2   = codec_ids::BZIP2,
}

impl CompressionCodec {
    pub const ALL: [CompressionCodec; 3] = [
        CompressionCodec::Gzip,
        CompressionCodec::Deflate,
        CompressionCodec::Bzip2,
    ];

    pub fn id(self) -> u16 {
        self as u16
    }

    pub fn name(self) -> &'static str {
        match self {
            CompressionCodec::Gzip    => "gzip",
            CompressionCodec::Deflate => "deflate",
            CompressionCodec::Bzip2   => "bzip2",
        }
    }

    pub fn verify(raw: u16) -> Result<Self, CompressionError> {
        Self::try_from_primitive(raw).map_err(|_| CompressionError::UnsupportedCodec { codec_id: raw })
    }

    /// Compress with this codec's adapter.
    pub fn compress(self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        use crate::compression::codecs::{Bzip2Compressor, DeflateCompressor, GzipCompressor};
        match self {
            CompressionCodec::Gzip    => GzipCompressor.compress(input),
            CompressionCodec::Deflate => DeflateCompressor.compress(input),
            CompressionCodec::Bzip2   => Bzip2Compressor.compress(input),
        }
    }

    /// Decompress with this codec's adapter.
    pub fn decompress(self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        use crate::compression::codecs::{Bzip2Compressor, DeflateCompressor, GzipCompressor};
        match self {
            CompressionCodec::Gzip    => GzipCompressor.decompress(input),
            CompressionCodec::Deflate => DeflateCompressor.decompress(input),
            CompressionCodec::Bzip2   => Bzip2Compressor.decompress(input),
        }
    }
}

impl fmt::Display for CompressionCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CompressionCodec {
    type Err = CompressionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gzip" | "gz"     => Ok(CompressionCodec::Gzip),
            "deflate" | "raw" => Ok(CompressionCodec::Deflate),
            "bzip2" | "bz2"   => Ok(CompressionCodec::Bzip2),
            _ => Err(CompressionError::UnknownCodecName { name: s.to_string() }),
        }
    }
}

/// Coarse classification of `CompressionError`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Encoding,
    Decoding,
    Resource,
    Registry,
    Verification,
}

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("codec {codec} encoding failed: {msg}")]
    EncodingFailure { codec: CompressionCodec, msg: String },

    #[error("codec {codec} decoding failed: {msg}")]
    DecodingFailure { codec: CompressionCodec, msg: String },

    #[error("codec {codec} resource failure: {msg}")]
    ResourceFailure { codec: CompressionCodec, msg: String },

    #[error("unsupported compression codec: 0x{codec_id:04x}")]
    UnsupportedCodec { codec_id: u16 },

    #[error("unknown codec name {name:?}, expected one of gzip, deflate, bzip2")]
    UnknownCodecName { name: String },

    #[error("codec {codec} round trip mismatch: crc32 {expected:08x} != {actual:08x}")]
    VerificationFailed { codec: CompressionCodec, expected: u32, actual: u32 },
}

impl CompressionError {
    pub fn kind(&self) -> ErrorKind {
        use CompressionError::*;
        match self {
            EncodingFailure { .. }    => ErrorKind::Encoding,
            DecodingFailure { .. }    => ErrorKind::Decoding,
            ResourceFailure { .. }    => ErrorKind::Resource,
            UnsupportedCodec { .. }
            | UnknownCodecName { .. } => ErrorKind::Registry,
            VerificationFailed { .. } => ErrorKind::Verification,
        }
    }

    /// The codec the failure belongs to, if any.
    pub fn codec(&self) -> Option<CompressionCodec> {
        use CompressionError::*;
        match self {
            EncodingFailure { codec, .. }
            | DecodingFailure { codec, .. }
            | ResourceFailure { codec, .. }
            | VerificationFailed { codec, .. } => Some(*codec),
            UnsupportedCodec { .. } | UnknownCodecName { .. } => None,
        }
    }

    pub(crate) fn encoding(codec: CompressionCodec, e: impl fmt::Display) -> Self {
        CompressionError::EncodingFailure { codec, msg: e.to_string() }
    }

    pub(crate) fn decoding(codec: CompressionCodec, e: impl fmt::Display) -> Self {
        CompressionError::DecodingFailure { codec, msg: e.to_string() }
    }

    pub(crate) fn resource(codec: CompressionCodec, e: impl fmt::Display) -> Self {
        CompressionError::ResourceFailure { codec, msg: e.to_string() }
    }
}

/// One-shot compress/decompress over in-memory buffers.
///
/// Implementors hold no cross-call state, so a single value may be shared
/// across threads and reused freely.
pub trait Compressor: Send + Sync {
    /// Which codec this adapter speaks.
    fn codec(&self) -> CompressionCodec;

    /// Encode `input` at library defaults.
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError>;

    /// Decode a buffer produced by the same codec's `compress`.
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError>;
}
