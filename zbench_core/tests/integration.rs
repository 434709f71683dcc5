/// Integration test: runs the real codec panel through the benchmark runner.
///
/// Uses 10 000 bytes of deterministic pseudo-random data, the same shape as the
/// payload the CLI would download, and a small iteration count.
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;

use zbench_codecs::{default_registry, GzipCodec};
use zbench_core::runner::ratio_percent;
use zbench_core::{
    BenchError, Codec, CodecConfig, IntegrityKind, Payload, Phase, Report, Runner,
};

/// Generate `len` deterministic bytes using a simple LCG.
fn pseudo_random_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = seed;
    (0..len)
        .map(|_| {
            rng = rng
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            (rng >> 56) as u8
        })
        .collect()
}

fn runner(n: u32) -> Runner {
    Runner::new(NonZeroU32::new(n).unwrap())
}

/// Delegates to a real codec but flips one bit of every decompressed output.
struct CorruptingCodec(Arc<dyn Codec>);

impl Codec for CorruptingCodec {
    fn name(&self) -> &'static str {
        self.0.name()
    }

    fn compress(&self, raw: &[u8], level: i32) -> anyhow::Result<Vec<u8>> {
        self.0.compress(raw, level)
    }

    fn decompress(&self, compressed: &[u8]) -> anyhow::Result<Vec<u8>> {
        let mut raw = self.0.decompress(compressed)?;
        if let Some(b) = raw.first_mut() {
            *b ^= 0x01;
        }
        Ok(raw)
    }
}

#[test]
fn test_every_codec_produces_a_row() {
    let payload = Payload::new(pseudo_random_bytes(10_000, 0xC0FF_EE));
    let registry = default_registry();
    let results = runner(5).run_all(&payload, &registry).unwrap();

    assert_eq!(results.len(), registry.len());
    for (result, config) in results.iter().zip(&registry) {
        assert_eq!(result.name, config.name());
        assert_eq!(result.level, config.level());
        assert_eq!(result.original_size, 10_000);
        assert!(result.ratio > 0.0, "{} ratio should be positive", result.name);
        assert!(result.combined_avg >= result.compress_avg);
        assert!(result.combined_avg >= result.decompress_avg);
    }

    let report = Report::from_results(&results);
    assert_eq!(report.rows().len(), registry.len());
    for row in report.rows() {
        assert!(row[2].ends_with('%'));
        for cell in &row[3..] {
            assert!(!cell.is_empty());
        }
    }
}

#[test]
fn test_ratio_matches_compressed_length() {
    let payload = Payload::new(pseudo_random_bytes(4096, 42));
    for config in default_registry() {
        let result = runner(2).run(&payload, &config).unwrap();
        let expected_len = config.compress(&payload).unwrap().len();
        assert_eq!(result.compressed_size, expected_len, "{config}");
        assert_eq!(result.ratio, ratio_percent(expected_len, payload.len()));
    }
}

#[test]
fn test_combined_average_is_sum_of_phases() {
    let payload = Payload::new(pseudo_random_bytes(10_000, 9));
    for result in runner(3).run_all(&payload, &default_registry()).unwrap() {
        let sum = result.compress_avg + result.decompress_avg;
        let diff = sum.max(result.combined_avg) - sum.min(result.combined_avg);
        assert!(diff <= Duration::from_nanos(4), "{}: diff={diff:?}", result.name);
    }
}

#[test]
fn test_corrupted_decompress_aborts_run() {
    let payload = Payload::new(pseudo_random_bytes(10_000, 3));
    let mut registry = default_registry();
    registry.insert(
        1,
        CodecConfig::new(Arc::new(CorruptingCodec(Arc::new(GzipCodec))), 1),
    );

    let err = runner(2).run_all(&payload, &registry).unwrap_err();
    match err {
        BenchError::Integrity { name, level, kind } => {
            assert_eq!(name, "gzip");
            assert_eq!(level, 1);
            assert_eq!(
                kind,
                IntegrityKind::Mismatch {
                    expected_len: 10_000,
                    actual_len: 10_000
                }
            );
        }
        other => panic!("expected integrity error, got {other:?}"),
    }
}

#[test]
fn test_garbage_artifact_is_a_codec_error() {
    /// Emits bytes that are not a gzip stream.
    struct Garbage;

    impl Codec for Garbage {
        fn name(&self) -> &'static str {
            "garbage"
        }

        fn compress(&self, _raw: &[u8], _level: i32) -> anyhow::Result<Vec<u8>> {
            Ok(vec![0xFF; 16])
        }

        fn decompress(&self, compressed: &[u8]) -> anyhow::Result<Vec<u8>> {
            GzipCodec.decompress(compressed)
        }
    }

    let payload = Payload::new(pseudo_random_bytes(2048, 11));
    let config = CodecConfig::new(Arc::new(Garbage), 6);
    let err = runner(3).run(&payload, &config).unwrap_err();
    assert!(
        matches!(
            err,
            BenchError::Codec {
                name: "garbage",
                phase: Phase::Decompress,
                iteration: 0,
                ..
            }
        ),
        "got {err:?}"
    );
}
