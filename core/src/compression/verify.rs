//! compression/verify.rs
//! End-to-end round trip through one adapter, with telemetry.

use tracing::{debug, warn};

use crate::compression::registry::{all_codecs, compressor_for};
use crate::compression::types::{CompressionCodec, CompressionError, Compressor};
use crate::telemetry::{Checksums, CodecCounters, RoundTripSnapshot, Stage, TelemetryTimer};
use crate::utils::compute_checksum;

/// Compress `input`, decompress the result and confirm the bytes survived.
///
/// Codec failures are returned as-is. A decoded buffer that differs from the
/// input is `VerificationFailed`.
pub fn round_trip(
    compressor: &dyn Compressor,
    input: &[u8],
) -> Result<RoundTripSnapshot, CompressionError> {
    let codec = compressor.codec();
    let mut counters = CodecCounters::new();
    let mut timer = TelemetryTimer::new();

    let compressed = timer.time(Stage::Compress, || compressor.compress(input))?;
    counters.add_compress(input.len(), compressed.len());

    let decompressed = timer.time(Stage::Decompress, || compressor.decompress(&compressed))?;
    counters.add_decompress(decompressed.len());

    let (checksums, identical) = timer.time(Stage::Verify, || {
        let checksums = Checksums {
            input: compute_checksum(input),
            output: compute_checksum(&decompressed),
        };
        (checksums, decompressed == input)
    });
    timer.finish();

    if !identical {
        warn!(codec = %codec, input = input.len(), output = decompressed.len(), "round trip mismatch");
        return Err(CompressionError::VerificationFailed {
            codec,
            expected: checksums.input,
            actual: checksums.output,
        });
    }

    let snapshot = RoundTripSnapshot::from(codec, &counters, &timer, checksums, compressed);
    debug!(
        codec = %codec,
        input = snapshot.bytes_input,
        compressed = snapshot.bytes_compressed,
        ratio = snapshot.compression_ratio,
        "round trip verified"
    );
    Ok(snapshot)
}

/// `round_trip` for every codec in declaration order. A failing codec does
/// not stop the others.
pub fn round_trip_all(
    input: &[u8],
) -> Vec<(CompressionCodec, Result<RoundTripSnapshot, CompressionError>)> {
    all_codecs()
        .into_iter()
        .map(|codec| (codec, round_trip(compressor_for(codec).as_ref(), input)))
        .collect()
}
