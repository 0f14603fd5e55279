//! Error types for monge-gauss.
//!
//! Parameter and configuration problems are reported as values. Sample
//! sequences that cannot be summarised (empty, mismatched, non-finite)
//! are rejected explicitly instead of producing NaN statistics.

use std::path::PathBuf;

use thiserror::Error;

use crate::distributions::DistributionError;

/// Top-level error type for the transport pipeline.
#[derive(Debug, Error)]
pub enum TransportError {
    // ── Parameters ──────────────────────────────────────────────────────
    #[error(transparent)]
    InvalidParameters(#[from] DistributionError),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to read config file {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    // ── Samples ─────────────────────────────────────────────────────────
    #[error("cannot summarise an empty sample")]
    EmptySample,

    #[error("sample length mismatch: source has {source_len}, pushforward has {target_len}")]
    LengthMismatch {
        source_len: usize,
        target_len: usize,
    },

    #[error("{which} sample contains NaN or infinite values")]
    NonFiniteSample { which: &'static str },
}

/// Result type alias using [`TransportError`].
pub type Result<T> = std::result::Result<T, TransportError>;
