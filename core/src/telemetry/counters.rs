//! telemetry/counters.rs
//! Byte and call counters collected around codec calls.
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecCounters {
    pub calls_compress: u64,
    pub calls_decompress: u64,
    /// Bytes handed to `compress`.
    pub bytes_input: u64,
    /// Bytes produced by `compress` (and handed to `decompress`).
    pub bytes_compressed: u64,
    /// Bytes produced by `decompress`.
    pub bytes_output: u64,
}

impl CodecCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one `compress` call.
    pub fn add_compress(&mut self, input_len: usize, compressed_len: usize) {
        self.calls_compress += 1;
        self.bytes_input += input_len as u64;
        self.bytes_compressed += compressed_len as u64;
    }

    /// Record one `decompress` call. The compressed side was already counted
    /// by `add_compress`.
    pub fn add_decompress(&mut self, output_len: usize) {
        self.calls_decompress += 1;
        self.bytes_output += output_len as u64;
    }

    /// compressed / input; 0.0 when nothing was compressed. Not capped, small
    /// inputs grow under every framed format.
    pub fn compression_ratio(&self) -> f64 {
        if self.bytes_input > 0 {
            self.bytes_compressed as f64 / self.bytes_input as f64
        } else {
            0.0
        }
    }

    pub fn merge(&mut self, other: &CodecCounters) {
        *self += other.clone();
    }
}

impl AddAssign for CodecCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.calls_compress   += rhs.calls_compress;
        self.calls_decompress += rhs.calls_decompress;
        self.bytes_input      += rhs.bytes_input;
        self.bytes_compressed += rhs.bytes_compressed;
        self.bytes_output     += rhs.bytes_output;
    }
}
