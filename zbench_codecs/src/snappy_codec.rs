use std::io::Read;

use zbench_core::Codec;

/// Snappy raw block format. No level.
pub struct SnappyCodec;

impl Codec for SnappyCodec {
    fn name(&self) -> &'static str {
        "snappy"
    }

    fn compress(&self, raw: &[u8], _level: i32) -> anyhow::Result<Vec<u8>> {
        Ok(snap::raw::Encoder::new().compress_vec(raw)?)
    }

    fn decompress(&self, compressed: &[u8]) -> anyhow::Result<Vec<u8>> {
        if compressed.is_empty() {
            return Ok(Vec::new());
        }
        Ok(snap::raw::Decoder::new().decompress_vec(compressed)?)
    }
}

/// Snappy framing format: chunked stream with per-chunk CRCs. No level.
pub struct SnappyFramedCodec;

impl Codec for SnappyFramedCodec {
    fn name(&self) -> &'static str {
        "snappy-framed"
    }

    fn compress(&self, raw: &[u8], _level: i32) -> anyhow::Result<Vec<u8>> {
        let mut out = Vec::with_capacity(raw.len() / 2 + 16);
        snap::read::FrameEncoder::new(raw).read_to_end(&mut out)?;
        Ok(out)
    }

    fn decompress(&self, compressed: &[u8]) -> anyhow::Result<Vec<u8>> {
        if compressed.is_empty() {
            return Ok(Vec::new());
        }
        let mut raw = Vec::with_capacity(compressed.len() * 2);
        snap::read::FrameDecoder::new(compressed).read_to_end(&mut raw)?;
        Ok(raw)
    }
}
