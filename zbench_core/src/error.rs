use std::error::Error as StdError;
use std::fmt;
use std::io;

use thiserror::Error;

type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Which half of the round trip a codec failure happened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Compress,
    Decompress,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Compress => f.write_str("compress"),
            Phase::Decompress => f.write_str("decompress"),
        }
    }
}

/// Failure to obtain the benchmark payload.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: BoxError,
    },
    #[error("reading response body from {url} failed")]
    Body {
        url: String,
        #[source]
        source: BoxError,
    },
    #[error("{url} returned an empty body; nothing to benchmark")]
    EmptyBody { url: String },
}

/// Ways a codec can produce output that fails the round-trip gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityKind {
    /// Compression returned zero bytes for a non-empty payload.
    EmptyOutput,
    /// Decompressed bytes differ from the payload.
    Mismatch { expected_len: usize, actual_len: usize },
}

impl fmt::Display for IntegrityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntegrityKind::EmptyOutput => f.write_str("compressed output is empty"),
            IntegrityKind::Mismatch {
                expected_len,
                actual_len,
            } => write!(
                f,
                "decompressed output does not match the payload ({actual_len} bytes, expected {expected_len})"
            ),
        }
    }
}

/// Every fatal condition a benchmark run can hit.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("fetching payload")]
    Fetch(#[from] FetchError),
    #[error("{phase} failed for {name} (level {level}) on iteration {iteration}")]
    Codec {
        name: &'static str,
        level: i32,
        phase: Phase,
        iteration: u32,
        #[source]
        source: BoxError,
    },
    #[error("integrity check failed for {name} (level {level}): {kind}")]
    Integrity {
        name: &'static str,
        level: i32,
        kind: IntegrityKind,
    },
    #[error("terminal display error")]
    Display(#[from] io::Error),
}

impl BenchError {
    pub fn codec(
        name: &'static str,
        level: i32,
        phase: Phase,
        iteration: u32,
        source: anyhow::Error,
    ) -> Self {
        BenchError::Codec {
            name,
            level,
            phase,
            iteration,
            source: source.into(),
        }
    }
}
