//! compression/constants.rs
//! Stable codec IDs, library default levels and format magic.

/// Stable codec IDs (u16) for wire/registry lookups.
pub mod codec_ids {
    pub const GZIP: u16    = 0x0001;
    pub const DEFLATE: u16 = 0x0002;
    pub const BZIP2: u16   = 0x0003;
}

/// Library default levels. Not configurable; recorded for reporting only.
pub const DEFAULT_LEVEL_GZIP: u32 = 6;
pub const DEFAULT_LEVEL_DEFLATE: u32 = 6;
pub const DEFAULT_LEVEL_BZIP2: u32 = 6;

/// RFC 1952 member header: ID1, ID2.
pub const GZIP_MAGIC: &[u8] = &[0x1F, 0x8B];
/// CM byte following the gzip magic (8 = deflate).
pub const GZIP_CM_DEFLATE: u8 = 0x08;
/// bzip2 stream header "BZh" (block size digit follows).
pub const BZIP2_MAGIC: &[u8] = b"BZh";

/// Output growth step for the incremental decoders.
pub const DECODE_GROWTH_STEP: usize = 32 * 1024;
