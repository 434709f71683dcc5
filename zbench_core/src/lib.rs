pub mod codec;
pub mod error;
pub mod payload;
pub mod report;
pub mod runner;

pub use codec::{Codec, CodecConfig};
pub use error::{BenchError, FetchError, IntegrityKind, Phase};
pub use payload::Payload;
pub use report::Report;
pub use runner::{BenchmarkResult, Runner, DEFAULT_COUNT};
