use crc32fast::Hasher;

/// CRC32 (IEEE) of `data`, the same polynomial gzip uses in its trailer.
pub fn compute_checksum(data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}

/// Render bytes as `[31 139 8 ...]`, decimal and space separated.
pub fn format_byte_list(data: &[u8]) -> String {
    let body = data.iter()
        .map(|b| b.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    format!("[{}]", body)
}
