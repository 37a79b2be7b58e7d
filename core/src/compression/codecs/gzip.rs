//! Gzip (RFC 1952) via flate2.

use std::io::{Read, Write};

use flate2::{bufread::GzDecoder, write::GzEncoder, Compression};
use tracing::debug;

use crate::compression::types::{CompressionCodec, CompressionError, Compressor};

const CODEC: CompressionCodec = CompressionCodec::Gzip;

/// Gzip-framed deflate: header, deflate body, CRC32 + ISIZE trailer.
#[derive(Copy, Clone, Debug, Default)]
pub struct GzipCompressor;

impl GzipCompressor {
    pub fn new() -> Self {
        Self
    }
}

impl Compressor for GzipCompressor {
    fn codec(&self) -> CompressionCodec {
        CODEC
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        let mut enc = GzEncoder::new(Vec::new(), Compression::default());
        enc.write_all(input)
            .map_err(|e| CompressionError::encoding(CODEC, e))?;
        let compressed = enc.finish()
            .map_err(|e| CompressionError::encoding(CODEC, e))?;

        debug!(codec = %CODEC, input = input.len(), output = compressed.len(), "compressed");
        Ok(compressed)
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        if input.is_empty() {
            return Err(CompressionError::decoding(CODEC, "empty input"));
        }

        let mut dec = GzDecoder::new(input);
        let mut decompressed = Vec::new();
        dec.read_to_end(&mut decompressed)
            .map_err(|e| CompressionError::decoding(CODEC, e))?;

        // Single member only: whatever the decoder left behind is foreign data.
        let rest = dec.into_inner();
        if !rest.is_empty() {
            return Err(CompressionError::decoding(
                CODEC,
                format!("{} trailing bytes after gzip member", rest.len()),
            ));
        }

        debug!(codec = %CODEC, input = input.len(), output = decompressed.len(), "decompressed");
        Ok(decompressed)
    }
}
