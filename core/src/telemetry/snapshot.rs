//! telemetry/snapshot.rs
//! Immutable record of one compress/decompress round trip.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::compression::types::CompressionCodec;
use crate::telemetry::counters::CodecCounters;
use crate::telemetry::timers::{Stage, StageTimes, TelemetryTimer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundTripSnapshot {
    pub codec: CompressionCodec,
    pub bytes_input: u64,
    pub bytes_compressed: u64,
    pub bytes_output: u64,
    pub compression_ratio: f64,
    pub checksum_input: u32,
    pub checksum_output: u32,
    pub verified: bool,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
    /// The encoded buffer.
    pub compressed: Vec<u8>,
}

/// CRC32 pair taken over the original input and the decoded output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checksums {
    pub input: u32,
    pub output: u32,
}

impl RoundTripSnapshot {
    pub fn from(
        codec: CompressionCodec,
        counters: &CodecCounters,
        timer: &TelemetryTimer,
        checksums: Checksums,
        compressed: Vec<u8>,
    ) -> Self {
        Self {
            codec,
            bytes_input: counters.bytes_input,
            bytes_compressed: counters.bytes_compressed,
            bytes_output: counters.bytes_output,
            compression_ratio: counters.compression_ratio(),
            checksum_input: checksums.input,
            checksum_output: checksums.output,
            verified: checksums.input == checksums.output
                && counters.bytes_input == counters.bytes_output,
            elapsed: timer.elapsed(),
            stage_times: timer.stage_times.clone(),
            compressed,
        }
    }

    pub fn total_stage_time(&self) -> Duration {
        self.stage_times.total()
    }

    /// Internal invariants:
    /// - every stage was timed
    /// - stage times fit inside the elapsed time
    /// - `compressed` matches the recorded length
    pub fn sanity_check(&self) -> bool {
        self.stage_times.has_all(&[Stage::Compress, Stage::Decompress, Stage::Verify])
            && self.total_stage_time() <= self.elapsed
            && self.compressed.len() as u64 == self.bytes_compressed
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
