use std::io::{Read, Write};

use brotli::{CompressorWriter, Decompressor};
use zbench_core::Codec;

const BUFFER_SIZE: usize = 4096;

/// Window size exponent (4 MiB), the encoder's default.
const LG_WINDOW: u32 = 22;

/// Brotli codec. Quality runs 0–11; the high end trades a lot of compress time
/// for ratio.
pub struct BrotliCodec;

impl Codec for BrotliCodec {
    fn name(&self) -> &'static str {
        "br"
    }

    fn compress(&self, raw: &[u8], level: i32) -> anyhow::Result<Vec<u8>> {
        let quality = u32::try_from(level.clamp(0, 11))?;
        let mut w = CompressorWriter::new(Vec::new(), BUFFER_SIZE, quality, LG_WINDOW);
        w.write_all(raw)?;
        // into_inner finishes the stream.
        Ok(w.into_inner())
    }

    fn decompress(&self, compressed: &[u8]) -> anyhow::Result<Vec<u8>> {
        if compressed.is_empty() {
            return Ok(Vec::new());
        }
        let mut raw = Vec::new();
        Decompressor::new(compressed, BUFFER_SIZE).read_to_end(&mut raw)?;
        Ok(raw)
    }
}
