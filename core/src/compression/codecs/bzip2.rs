//! bzip2 (`BZh` container, Burrows-Wheeler block sort) via the bzip2 crate.

use std::io::Write;

use bzip2::{write::BzEncoder, Compression, Decompress, Error as BzError, Status};
use tracing::debug;

use crate::compression::constants::DECODE_GROWTH_STEP;
use crate::compression::types::{CompressionCodec, CompressionError, Compressor};

const CODEC: CompressionCodec = CompressionCodec::Bzip2;

/// Standard bzip2 stream at the library's default block size.
#[derive(Copy, Clone, Debug, Default)]
pub struct Bzip2Compressor;

impl Bzip2Compressor {
    pub fn new() -> Self {
        Self
    }
}

fn map_decode_error(e: BzError) -> CompressionError {
    match e {
        BzError::Param => CompressionError::resource(CODEC, e),
        _ => CompressionError::decoding(CODEC, e),
    }
}

impl Compressor for Bzip2Compressor {
    fn codec(&self) -> CompressionCodec {
        CODEC
    }

    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, CompressionError> {
        let mut enc = BzEncoder::new(Vec::new(), Compression::default());
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

        let mut decoder = Decompress::new(false);
        let mut decompressed = Vec::with_capacity(input.len().saturating_mul(4));

        loop {
            let in_before = decoder.total_in() as usize;
            let out_before = decoder.total_out();
            decompressed.reserve(DECODE_GROWTH_STEP);

            let status = decoder
                .decompress_vec(&input[in_before..], &mut decompressed)
                .map_err(map_decode_error)?;

            match status {
                Status::StreamEnd => break,
                Status::MemNeeded => {
                    return Err(CompressionError::resource(CODEC, "decoder ran out of memory"));
                }
                _ => {
                    let stalled = decoder.total_in() as usize == in_before
                        && decoder.total_out() == out_before;
                    if stalled {
                        return Err(CompressionError::decoding(
                            CODEC,
                            "truncated stream: input ended before end-of-stream marker",
                        ));
                    }
                }
            }
        }

        let consumed = decoder.total_in() as usize;
        if consumed != input.len() {
            return Err(CompressionError::decoding(
                CODEC,
                format!("{} trailing bytes after end of stream", input.len() - consumed),
            ));
        }

        debug!(codec = %CODEC, input = input.len(), output = decompressed.len(), "decompressed");
        Ok(decompressed)
    }
}
