//! Raw deflate (RFC 1951, no zlib or gzip framing) via flate2.

use std::io::Write;

use flate2::{write::DeflateEncoder, Compression, Decompress, FlushDecompress, Status};
use tracing::debug;

use crate::compression::constants::DECODE_GROWTH_STEP;
use crate::compression::types::{CompressionCodec, CompressionError, Compressor};

const CODEC: CompressionCodec = CompressionCodec::Deflate;

/// Unframed deflate bitstream. Carries no checksum and no length; callers
/// needing integrity must add their own.
#[derive(Copy, Clone, Debug, Default)]
pub struct DeflateCompressor;

impl DeflateCompressor {
    pub fn new() -> Self {
        Self
    }
}

impl Compressor for DeflateCompressor {
    fn codec(&self) -> CompressionCodec {
        CODEC
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        let mut enc = DeflateEncoder::new(Vec::new(), Compression::default());
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

        // flate2's Read adapters report a cut-off stream as a short read, so
        // drive the inflater directly and insist on reaching the final block.
        let mut inflater = Decompress::new(false);
        let mut decompressed = Vec::with_capacity(input.len().saturating_mul(2));

        loop {
            let in_before = inflater.total_in() as usize;
            let out_before = inflater.total_out();
            decompressed.reserve(DECODE_GROWTH_STEP);

            let status = inflater
                .decompress_vec(&input[in_before..], &mut decompressed, FlushDecompress::None)
                .map_err(|e| CompressionError::decoding(CODEC, e))?;

            match status {
                Status::StreamEnd => break,
                _ => {
                    let stalled = inflater.total_in() as usize == in_before
                        && inflater.total_out() == out_before;
                    if stalled {
                        return Err(CompressionError::decoding(
                            CODEC,
                            "truncated stream: input ended before the final block",
                        ));
                    }
                }
            }
        }

        let consumed = inflater.total_in() as usize;
        if consumed != input.len() {
            return Err(CompressionError::decoding(
                CODEC,
                format!("{} trailing bytes after final block", input.len() - consumed),
            ));
        }

        debug!(codec = %CODEC, input = input.len(), output = decompressed.len(), "decompressed");
        Ok(decompressed)
    }
}
