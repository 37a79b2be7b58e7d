//! compression/registry.rs
//! Codec registry and factory functions.

use crate::compression::codecs::{Bzip2Compressor, DeflateCompressor, GzipCompressor};
use crate::compression::constants::*;
use crate::compression::types::{CompressionCodec, CompressionError, Compressor};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodecInfo {
    pub codec: CompressionCodec,
    pub name: &'static str,
    pub extension: &'static str,
    /// Leading bytes every encoded buffer starts with; empty when the format has none.
    pub magic: &'static [u8],
    pub format: &'static str,
    pub default_level: u32,
}

pub fn info(codec: CompressionCodec) -> CodecInfo {
    match codec {
        CompressionCodec::Gzip => CodecInfo {
            codec,
            name: "gzip",
            extension: "gz",
            magic: GZIP_MAGIC,
            format: "RFC 1952",
            default_level: DEFAULT_LEVEL_GZIP,
        },
        CompressionCodec::Deflate => CodecInfo {
            codec,
            name: "deflate",
            extension: "deflate",
            magic: &[],
            format: "RFC 1951 (raw)",
            default_level: DEFAULT_LEVEL_DEFLATE,
        },
        CompressionCodec::Bzip2 => CodecInfo {
            codec,
            name: "bzip2",
            extension: "bz2",
            magic: BZIP2_MAGIC,
            format: "bzip2 (BZh)",
            default_level: DEFAULT_LEVEL_BZIP2,
        },
    }
}

pub fn resolve(codec_id: u16) -> Result<CodecInfo, CompressionError> {
    CompressionCodec::verify(codec_id).map(info)
}

pub fn all_codecs() -> [CompressionCodec; 3] {
    CompressionCodec::ALL
}

pub fn compressor_for(codec: CompressionCodec) -> Box<dyn Compressor> {
    match codec {
        CompressionCodec::Gzip    => Box::new(GzipCompressor::new()),
        CompressionCodec::Deflate => Box::new(DeflateCompressor::new()),
        CompressionCodec::Bzip2   => Box::new(Bzip2Compressor::new()),
    }
}

pub fn create_compressor(codec_id: u16) -> Result<Box<dyn Compressor>, CompressionError> {
    CompressionCodec::verify(codec_id).map(compressor_for)
}

/// Identify a buffer by its magic prefix. Raw deflate carries none and is
/// never reported.
pub fn sniff(data: &[u8]) -> Option<CompressionCodec> {
    all_codecs().into_iter().find(|&codec| {
        let magic = info(codec).magic;
        !magic.is_empty() && data.starts_with(magic)
    })
}
