use zbench_core::Codec;

/// Zstandard single-frame codec.
///
/// The frame records its content size, so decompression needs no size hint.
///
/// Best for: high throughput on large inputs at a competitive ratio.
pub struct ZstdCodec;

impl Codec for ZstdCodec {
    fn name(&self) -> &'static str {
        "zstd"
    }

    fn compress(&self, raw: &[u8], level: i32) -> anyhow::Result<Vec<u8>> {
        let compressed = zstd::bulk::compress(raw, level)?;
        Ok(compressed)
    }

    fn decompress(&self, compressed: &[u8]) -> anyhow::Result<Vec<u8>> {
        if compressed.is_empty() {
            return Ok(Vec::new());
        }
        let raw = zstd::decode_all(compressed)?;
        Ok(raw)
    }
}
