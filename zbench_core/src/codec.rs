use std::fmt;
use std::sync::Arc;

/// Core compression abstraction.
///
/// Each `Codec` implementation:
/// - Wraps exactly one third-party compression library.
/// - Must be a lossless pair: `decompress(compress(x, level))` returns `x` for
///   any byte content, including the empty slice.
/// - Returns an empty vector when asked to decompress an empty slice instead
///   of failing.
pub trait Codec: Send + Sync {
    /// Short name shown in the report's `Name` column.
    fn name(&self) -> &'static str;

    /// Compress `raw` at `level`. Codecs without a level knob ignore it.
    fn compress(&self, raw: &[u8], level: i32) -> anyhow::Result<Vec<u8>>;

    /// Reverse of [`Codec::compress`].
    fn decompress(&self, compressed: &[u8]) -> anyhow::Result<Vec<u8>>;
}

/// One row of the benchmark panel: a codec bound to a level.
///
/// Identity is `(name, level)`. The registry may hold the same codec several
/// times at different levels; each entry is benchmarked and reported on its own.
#[derive(Clone)]
pub struct CodecConfig {
    codec: Arc<dyn Codec>,
    level: i32,
}

impl CodecConfig {
    pub fn new(codec: Arc<dyn Codec>, level: i32) -> Self {
        Self { codec, level }
    }

    pub fn name(&self) -> &'static str {
        self.codec.name()
    }

    pub fn level(&self) -> i32 {
        self.level
    }

    pub fn compress(&self, raw: &[u8]) -> anyhow::Result<Vec<u8>> {
        self.codec.compress(raw, self.level)
    }

    pub fn decompress(&self, compressed: &[u8]) -> anyhow::Result<Vec<u8>> {
        self.codec.decompress(compressed)
    }
}

impl fmt::Debug for CodecConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CodecConfig")
            .field("name", &self.name())
            .field("level", &self.level)
            .finish()
    }
}

impl fmt::Display for CodecConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name(), self.level)
    }
}
