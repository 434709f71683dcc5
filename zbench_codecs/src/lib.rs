mod brotli_codec;
mod gzip_codec;
mod lz4_codec;
mod snappy_codec;
mod zstd_codec;

pub use brotli_codec::BrotliCodec;
pub use gzip_codec::GzipCodec;
pub use lz4_codec::Lz4Codec;
pub use snappy_codec::{SnappyCodec, SnappyFramedCodec};
pub use zstd_codec::ZstdCodec;

use std::sync::Arc;

use zbench_core::{Codec, CodecConfig};

/// The benchmark panel, in report order.
///
/// Editing this list is the only way to add or drop a codec. Codecs without a
/// level knob are listed at level 0.
pub fn default_registry() -> Vec<CodecConfig> {
    let gzip: Arc<dyn Codec> = Arc::new(GzipCodec);
    let brotli: Arc<dyn Codec> = Arc::new(BrotliCodec);

    vec![
        CodecConfig::new(gzip.clone(), 6),
        CodecConfig::new(gzip, 9),
        CodecConfig::new(brotli.clone(), 6),
        CodecConfig::new(brotli.clone(), 8),
        CodecConfig::new(brotli.clone(), 10),
        CodecConfig::new(brotli, 11),
        CodecConfig::new(Arc::new(Lz4Codec), 0),
        CodecConfig::new(Arc::new(SnappyCodec), 0),
        CodecConfig::new(Arc::new(SnappyFramedCodec), 0),
        CodecConfig::new(Arc::new(ZstdCodec), 3),
    ]
}
