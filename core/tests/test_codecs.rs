#[cfg(test)]
mod tests {
    use codec_core::compression::{
        Bzip2Compressor, CompressionCodec, CompressionError, Compressor, DeflateCompressor,
        ErrorKind, GzipCompressor,
    };

    const HELLO: &[u8] = b"Hello World!";

    fn adapters() -> Vec<Box<dyn Compressor>> {
        vec![
            Box::new(GzipCompressor::new()),
            Box::new(DeflateCompressor::new()),
            Box::new(Bzip2Compressor::new()),
        ]
    }

    fn sample_text() -> Vec<u8> {
        b"the quick brown fox jumps over the lazy dog. ".repeat(256)
    }

    fn assert_decoding_failure(res: Result<Vec<u8>, CompressionError>, codec: CompressionCodec) {
        match res {
            Err(e) => {
                assert_eq!(e.kind(), ErrorKind::Decoding, "unexpected error kind: {e}");
                assert_eq!(e.codec(), Some(codec));
            }
            Ok(out) => panic!("{codec}: expected decoding failure, got {} bytes", out.len()),
        }
    }

    // --- Round trip ---

    #[test]
    fn hello_world_round_trips_through_every_codec() {
        for c in adapters() {
            let compressed = c.compress(HELLO).expect("compress");
            let decompressed = c.decompress(&compressed).expect("decompress");
            assert_eq!(decompressed, HELLO, "codec {}", c.codec());
        }
    }

    #[test]
    fn empty_input_round_trips_through_every_codec() {
        for c in adapters() {
            let compressed = c.compress(&[]).expect("compress");
            assert!(!compressed.is_empty(), "{}: empty stream still has framing", c.codec());
            let decompressed = c.decompress(&compressed).expect("decompress");
            assert!(decompressed.is_empty());
        }
    }

    #[test]
    fn larger_inputs_round_trip_and_shrink() {
        let data = sample_text();
        for c in adapters() {
            let compressed = c.compress(&data).unwrap();
            assert!(compressed.len() < data.len(), "{}: repetitive text should shrink", c.codec());
            assert_eq!(c.decompress(&compressed).unwrap(), data);
        }
    }

    #[test]
    fn binary_input_with_every_byte_value_round_trips() {
        let data: Vec<u8> = (0..=255u8).cycle().take(70_000).collect();
        for c in adapters() {
            let compressed = c.compress(&data).unwrap();
            assert_eq!(c.decompress(&compressed).unwrap(), data, "codec {}", c.codec());
        }
    }

    // --- Format tagging ---

    #[test]
    fn gzip_output_starts_with_magic_and_deflate_method() {
        let out = GzipCompressor.compress(HELLO).unwrap();
        assert_eq!(&out[..3], &[0x1F, 0x8B, 0x08]);
    }

    #[test]
    fn gzip_trailer_carries_crc32_and_length() {
        let out = GzipCompressor.compress(HELLO).unwrap();
        let n = out.len();
        let crc = u32::from_le_bytes(out[n - 8..n - 4].try_into().unwrap());
        let isize = u32::from_le_bytes(out[n - 4..].try_into().unwrap());
        assert_eq!(crc, codec_core::utils::compute_checksum(HELLO));
        assert_eq!(isize, HELLO.len() as u32);
    }

    #[test]
    fn bzip2_output_starts_with_bzh() {
        for input in [&b""[..], HELLO] {
            let out = Bzip2Compressor.compress(input).unwrap();
            assert_eq!(&out[..3], &[0x42, 0x5A, 0x68]);
            assert!(out[3].is_ascii_digit(), "block size digit follows the magic");
        }
    }

    #[test]
    fn deflate_output_is_unframed() {
        let out = DeflateCompressor.compress(HELLO).unwrap();
        assert_ne!(&out[..2], &[0x1F, 0x8B]);
        assert_ne!(&out[..2], &[0x78, 0x9C], "no zlib header either");
    }

    // --- Determinism ---

    #[test]
    fn compressing_twice_is_byte_identical() {
        let data = sample_text();
        for c in adapters() {
            assert_eq!(c.compress(&data).unwrap(), c.compress(&data).unwrap(), "codec {}", c.codec());
        }
    }

    // --- Cross-codec rejection ---

    #[test]
    fn gzip_rejects_deflate_stream() {
        let deflated = DeflateCompressor.compress(HELLO).unwrap();
        assert_decoding_failure(GzipCompressor.decompress(&deflated), CompressionCodec::Gzip);
    }

    #[test]
    fn deflate_rejects_gzip_stream() {
        let gz = GzipCompressor.compress(HELLO).unwrap();
        assert_decoding_failure(DeflateCompressor.decompress(&gz), CompressionCodec::Deflate);
    }

    #[test]
    fn bzip2_rejects_gzip_and_deflate_streams() {
        let gz = GzipCompressor.compress(HELLO).unwrap();
        let deflated = DeflateCompressor.compress(HELLO).unwrap();
        assert_decoding_failure(Bzip2Compressor.decompress(&gz), CompressionCodec::Bzip2);
        assert_decoding_failure(Bzip2Compressor.decompress(&deflated), CompressionCodec::Bzip2);
    }

    #[test]
    fn gzip_rejects_bzip2_stream() {
        let bz = Bzip2Compressor.compress(HELLO).unwrap();
        assert_decoding_failure(GzipCompressor.decompress(&bz), CompressionCodec::Gzip);
    }

    // --- Malformed input ---

    #[test]
    fn empty_buffer_is_a_decoding_failure_for_all() {
        for c in adapters() {
            assert_decoding_failure(c.decompress(&[]), c.codec());
        }
    }

    #[test]
    fn random_bytes_are_a_decoding_failure_for_all() {
        let junk = [0xFFu8; 32];
        for c in adapters() {
            assert_decoding_failure(c.decompress(&junk), c.codec());
        }
    }

    #[test]
    fn plain_text_is_rejected_by_framed_codecs() {
        let text = b"definitely not a compressed stream";
        assert_decoding_failure(GzipCompressor.decompress(text), CompressionCodec::Gzip);
        assert_decoding_failure(Bzip2Compressor.decompress(text), CompressionCodec::Bzip2);
    }

    #[test]
    fn truncated_streams_are_rejected() {
        let data = sample_text();
        for c in adapters() {
            let compressed = c.compress(&data).unwrap();
            let cut = &compressed[..compressed.len() / 2];
            assert_decoding_failure(c.decompress(cut), c.codec());
        }
    }

    #[test]
    fn gzip_missing_last_trailer_byte_is_rejected() {
        let compressed = GzipCompressor.compress(HELLO).unwrap();
        let cut = &compressed[..compressed.len() - 1];
        assert_decoding_failure(GzipCompressor.decompress(cut), CompressionCodec::Gzip);
    }

    #[test]
    fn gzip_corrupted_checksum_is_rejected() {
        let mut compressed = GzipCompressor.compress(HELLO).unwrap();
        let n = compressed.len();
        compressed[n - 8] ^= 0xFF;
        assert_decoding_failure(GzipCompressor.decompress(&compressed), CompressionCodec::Gzip);
    }

    #[test]
    fn trailing_garbage_is_rejected() {
        for c in adapters() {
            let mut compressed = c.compress(HELLO).unwrap();
            compressed.extend_from_slice(b"junk");
            assert_decoding_failure(c.decompress(&compressed), c.codec());
        }
    }

    // --- Dispatch ---

    #[test]
    fn enum_dispatch_matches_trait_dispatch() {
        for c in adapters() {
            let codec = c.codec();
            assert_eq!(codec.compress(HELLO).unwrap(), c.compress(HELLO).unwrap());
            let compressed = codec.compress(HELLO).unwrap();
            assert_eq!(codec.decompress(&compressed).unwrap(), HELLO);
        }
    }

    #[test]
    fn adapters_report_their_codec() {
        assert_eq!(GzipCompressor.codec(), CompressionCodec::Gzip);
        assert_eq!(DeflateCompressor.codec(), CompressionCodec::Deflate);
        assert_eq!(Bzip2Compressor.codec(), CompressionCodec::Bzip2);
    }

    #[test]
    fn adapters_are_shareable_across_threads() {
        let data = sample_text();
        let shared = adapters();
        std::thread::scope(|s| {
            for c in &shared {
                for i in 0..4 {
                    let data = &data;
                    s.spawn(move || {
                        let mut input = data.clone();
                        input.push(i as u8);
                        let compressed = c.compress(&input).unwrap();
                        assert_eq!(c.decompress(&compressed).unwrap(), input);
                    });
                }
            }
        });
    }
}
