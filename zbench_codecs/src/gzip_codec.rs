use std::io::{Read, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use zbench_core::Codec;

/// gzip (deflate) codec. Levels run 0–9.
pub struct GzipCodec;

impl Codec for GzipCodec {
    fn name(&self) -> &'static str {
        "gzip"
    }

    fn compress(&self, raw: &[u8], level: i32) -> anyhow::Result<Vec<u8>> {
        let level = u32::try_from(level.clamp(0, 9))?;
        let mut enc = GzEncoder::new(Vec::with_capacity(raw.len() / 2), Compression::new(level));
        enc.write_all(raw)?;
        Ok(enc.finish()?)
    }

    fn decompress(&self, compressed: &[u8]) -> anyhow::Result<Vec<u8>> {
        if compressed.is_empty() {
            return Ok(Vec::new());
        }
        let mut raw = Vec::with_capacity(compressed.len() * 4);
        GzDecoder::new(compressed).read_to_end(&mut raw)?;
        Ok(raw)
    }
}
