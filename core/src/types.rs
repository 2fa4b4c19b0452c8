//! types.rs
//! Stream-level error taxonomy.

use std::fmt;
use std::io;

use thiserror::Error;

use crate::config::ConfigError;
use crate::crypto::CryptoError;
use crate::headers::HeaderError;

/// Which part of a chunk a short read hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Header,
    Payload,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Header => write!(f, "header"),
            Section::Payload => write!(f, "payload"),
        }
    }
}

/// Unified stream error. Every variant is fatal to the current call.
#[derive(Debug, Error)]
pub enum StreamError {
    /// Header CRC mismatch or malformed header buffer.
    #[error("header error: {0}")]
    Header(#[from] HeaderError),

    /// Key size, randomness, or AEAD authentication failure.
    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),

    /// Input ended inside a header or payload.
    #[error("truncated {section}: expected {expected} bytes, got {actual}")]
    Truncated { section: Section, expected: u64, actual: u64 },

    /// Bounded decrypt stopped short of (or could not reach) its budget.
    #[error("decoded {consumed} bytes, expected {budget}")]
    BudgetMismatch { consumed: u64, budget: u64 },

    /// Rejected configuration.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Underlying reader/writer failure, propagated unchanged.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl StreamError {
    /// True for header CRC failures.
    pub fn is_integrity(&self) -> bool {
        matches!(self, StreamError::Header(HeaderError::InvalidCrc32 { .. }))
    }

    /// True for AEAD tag failures.
    pub fn is_authentication(&self) -> bool {
        matches!(self, StreamError::Crypto(CryptoError::TagMismatch))
    }

    /// True for unsupported key lengths.
    pub fn is_invalid_key(&self) -> bool {
        matches!(self, StreamError::Crypto(CryptoError::InvalidKeyLen { .. }))
    }
}

/// A failed stream call: the cause plus the output bytes already written.
///
/// The count is diagnostic only. Output written before a failure must be
/// discarded; there is no resume.
#[derive(Debug, Error)]
#[error("{error} ({written} bytes written before failure)")]
pub struct StreamFailure {
    pub written: u64,
    #[source]
    pub error: StreamError,
}

impl StreamFailure {
    pub fn new(written: u64, error: impl Into<StreamError>) -> Self {
        Self { written, error: error.into() }
    }

    pub fn error(&self) -> &StreamError {
        &self.error
    }

    pub fn into_error(self) -> StreamError {
        self.error
    }
}
