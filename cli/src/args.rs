use clap::{Parser, ValueEnum};

use codec_core::compression::CompressionCodec;
use codec_core::constants::DEFAULT_DEMO_INPUT;

/// Compress a string with gzip, raw deflate and bzip2, then decompress it again.
#[derive(Parser, Debug)]
#[command(name = "codec-demo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Codec to exercise (gzip, deflate, bzip2). Repeat to pick several.
    ///
    /// Defaults to all three, in that order.
    #[arg(short, long = "codec", value_name = "NAME")]
    pub codecs: Vec<CompressionCodec>,

    /// Text to compress
    #[arg(short, long, default_value = DEFAULT_DEMO_INPUT)]
    pub input: String,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Describe the available codecs and exit
    #[arg(long)]
    pub list_codecs: bool,

    /// More logging on stderr (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line with the compressed bytes, one with the decompressed text
    Text,
    /// Array of round-trip snapshots
    Json,
}

impl Cli {
    pub fn selected_codecs(&self) -> Vec<CompressionCodec> {
        if self.codecs.is_empty() {
            CompressionCodec::ALL.to_vec()
        } else {
            self.codecs.clone()
        }
    }
}
