mod args;
mod printing;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use codec_core::compression::{compressor_for, round_trip, CompressionCodec, Compressor};
use codec_core::telemetry::CodecCounters;

use args::{Cli, OutputFormat};

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .init();
}

/// Compress then decompress with one codec, printing each result as it
/// arrives. Returns whether both steps succeeded.
fn run_text(codec: CompressionCodec, input: &[u8], totals: &mut CodecCounters) -> bool {
    let compressor = compressor_for(codec);

    let compressed = match compressor.compress(input) {
        Ok(data) => data,
        Err(e) => {
            printing::print_error(codec, "Compression", &e);
            return false;
        }
    };
    totals.add_compress(input.len(), compressed.len());
    printing::print_compressed(codec, &compressed);

    match compressor.decompress(&compressed) {
        Ok(data) => {
            totals.add_decompress(data.len());
            printing::print_decompressed(codec, &data);
            true
        }
        Err(e) => {
            printing::print_error(codec, "Decompression", &e);
            false
        }
    }
}

fn run_json(codecs: &[CompressionCodec], input: &[u8]) -> Result<bool> {
    let mut snapshots = Vec::with_capacity(codecs.len());
    let mut ok = true;
    for &codec in codecs {
        match round_trip(compressor_for(codec).as_ref(), input) {
            Ok(snapshot) => snapshots.push(snapshot),
            Err(e) => {
                printing::print_error(codec, "RoundTrip", &e);
                ok = false;
            }
        }
    }
    printing::print_json(&snapshots)?;
    Ok(ok)
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!(?cli);

    if cli.list_codecs {
        printing::print_codec_list();
        return Ok(ExitCode::SUCCESS);
    }

    let codecs = cli.selected_codecs();
    let input = cli.input.as_bytes();

    let ok = match cli.format {
        OutputFormat::Text => {
            let mut totals = CodecCounters::new();
            let mut ok = true;
            for &codec in &codecs {
                ok &= run_text(codec, input, &mut totals);
            }
            info!(
                codecs = codecs.len(),
                bytes_input = totals.bytes_input,
                bytes_compressed = totals.bytes_compressed,
                "done"
            );
            ok
        }
        OutputFormat::Json => run_json(&codecs, input)?,
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
