use lz4_flex::{compress_prepend_size, decompress_size_prepended};
use zbench_core::Codec;

/// LZ4 block codec with the raw length prepended.
///
/// Fastest decompression of the panel. `lz4_flex` exposes no level, so the
/// configured level is ignored.
pub struct Lz4Codec;

impl Codec for Lz4Codec {
    fn name(&self) -> &'static str {
        "lz4"
    }

    fn compress(&self, raw: &[u8], _level: i32) -> anyhow::Result<Vec<u8>> {
        Ok(compress_prepend_size(raw))
    }

    fn decompress(&self, compressed: &[u8]) -> anyhow::Result<Vec<u8>> {
        if compressed.is_empty() {
            return Ok(Vec::new());
        }
        let raw = decompress_size_prepended(compressed)
            .map_err(|e| anyhow::anyhow!("lz4 decompress error: {}", e))?;
        Ok(raw)
    }
}
