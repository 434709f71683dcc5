use std::hint::black_box;
use std::num::NonZeroU32;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::codec::CodecConfig;
use crate::error::{BenchError, IntegrityKind, Phase};
use crate::payload::Payload;

/// Iterations per phase when the operator does not override it.
pub const DEFAULT_COUNT: u32 = 100;

/// Measurements for one [`CodecConfig`], produced after all its iterations.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    pub name: &'static str,
    pub level: i32,
    pub original_size: usize,
    pub compressed_size: usize,
    /// `compressed_size / original_size * 100`.
    pub ratio: f64,
    pub compress_avg: Duration,
    pub decompress_avg: Duration,
    pub combined_avg: Duration,
}

/// Fixed-count, wall-clock benchmark loop.
///
/// # Run contract
/// For each config: compress the payload `count` times, keep the first output,
/// then decompress that output `count` times and compare the first result with
/// the payload. Only the first output of each phase is kept, so a codec whose
/// output varies between calls is verified against its first call only.
///
/// Any failure is returned immediately. [`Runner::run_all`] stops at the first
/// failing config and returns no partial results.
#[derive(Debug, Clone, Copy)]
pub struct Runner {
    count: NonZeroU32,
}

impl Default for Runner {
    fn default() -> Self {
        Self {
            count: NonZeroU32::new(DEFAULT_COUNT).unwrap_or(NonZeroU32::MIN),
        }
    }
}

impl Runner {
    pub fn new(count: NonZeroU32) -> Self {
        Self { count }
    }

    #[inline]
    pub fn count(&self) -> u32 {
        self.count.get()
    }

    /// Benchmark every config in registry order.
    pub fn run_all(
        &self,
        payload: &Payload,
        registry: &[CodecConfig],
    ) -> Result<Vec<BenchmarkResult>, BenchError> {
        info!(
            codecs = registry.len(),
            count = self.count(),
            payload_bytes = payload.len(),
            "starting benchmark"
        );
        registry
            .iter()
            .map(|config| self.run(payload, config))
            .collect()
    }

    /// Benchmark a single config against `payload`.
    pub fn run(
        &self,
        payload: &Payload,
        config: &CodecConfig,
    ) -> Result<BenchmarkResult, BenchError> {
        let n = self.count();
        let name = config.name();
        let level = config.level();
        let raw = payload.as_bytes();

        // ── Compress phase ──────────────────────────────────────────────────
        let mut artifact: Option<Vec<u8>> = None;
        let t0 = Instant::now();
        for i in 0..n {
            let out = config
                .compress(raw)
                .map_err(|e| BenchError::codec(name, level, Phase::Compress, i, e))?;
            if artifact.is_none() {
                artifact = Some(out);
            } else {
                let _ = black_box(out);
            }
        }
        let compress_total = t0.elapsed();

        let artifact = artifact.unwrap_or_default();
        if artifact.is_empty() {
            return Err(BenchError::Integrity {
                name,
                level,
                kind: IntegrityKind::EmptyOutput,
            });
        }
        debug!(codec = name, level, bytes = artifact.len(), "compressed artifact");

        // ── Decompress phase ────────────────────────────────────────────────
        let mut restored: Option<Vec<u8>> = None;
        let t0 = Instant::now();
        for i in 0..n {
            let out = config
                .decompress(&artifact)
                .map_err(|e| BenchError::codec(name, level, Phase::Decompress, i, e))?;
            if restored.is_none() {
                restored = Some(out);
            } else {
                let _ = black_box(out);
            }
        }
        let decompress_total = t0.elapsed();

        let restored = restored.unwrap_or_default();
        if restored != raw {
            return Err(BenchError::Integrity {
                name,
                level,
                kind: IntegrityKind::Mismatch {
                    expected_len: raw.len(),
                    actual_len: restored.len(),
                },
            });
        }

        let result = BenchmarkResult {
            name,
            level,
            original_size: raw.len(),
            compressed_size: artifact.len(),
            ratio: ratio_percent(artifact.len(), raw.len()),
            compress_avg: compress_total / n,
            decompress_avg: decompress_total / n,
            combined_avg: (compress_total + decompress_total) / n,
        };
        info!(
            codec = name,
            level,
            ratio = result.ratio,
            compress = ?result.compress_avg,
            decompress = ?result.decompress_avg,
            "codec benchmarked"
        );
        Ok(result)
    }
}

/// `100 * compressed / original`, or zero for an empty original.
pub fn ratio_percent(compressed: usize, original: usize) -> f64 {
    if original == 0 {
        return 0.0;
    }
    100.0 * compressed as f64 / original as f64
}
