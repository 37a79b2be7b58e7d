use codec_core::compression::{info, CompressionCodec};
use codec_core::telemetry::RoundTripSnapshot;
use codec_core::utils::format_byte_list;

pub fn print_compressed(codec: CompressionCodec, data: &[u8]) {
    println!("{codec}CompressedData:  {}", format_byte_list(data));
}

pub fn print_decompressed(codec: CompressionCodec, data: &[u8]) {
    println!("{codec}DecompressedData:  {}", String::from_utf8_lossy(data));
}

pub fn print_error(codec: CompressionCodec, stage: &str, err: &dyn std::fmt::Display) {
    eprintln!("{codec}{stage} error: {err}");
}

pub fn print_codec_list() {
    println!("{:<8} {:>6}  {:<6} {:<10} {:>5}  {}", "name", "id", "ext", "magic", "level", "format");
    for codec in CompressionCodec::ALL {
        let i = info(codec);
        let magic = if i.magic.is_empty() {
            "-".to_string()
        } else {
            i.magic.iter().map(|b| format!("{b:02x}")).collect::<Vec<_>>().join("")
        };
        println!(
            "{:<8} 0x{:04x}  {:<6} {:<10} {:>5}  {}",
            i.name,
            codec.id(),
            i.extension,
            magic,
            i.default_level,
            i.format
        );
    }
}

pub fn print_json(snapshots: &[RoundTripSnapshot]) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(snapshots)?);
    Ok(())
}
