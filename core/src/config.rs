//! config.rs
//! Engine configuration.
//!
//! Chunk size only affects encryption; decryption follows whatever lengths
//! the headers declare.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE, MIN_CHUNK_SIZE};
use crate::crypto::CipherSuite;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("chunk size {requested} out of range {min}..={max}")]
    ChunkSize { requested: usize, min: usize, max: usize },

    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    /// Plaintext bytes per chunk; the final chunk may be shorter.
    pub chunk_size: usize,
    /// AEAD construction.
    pub cipher: CipherSuite,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            cipher: CipherSuite::AesGcm,
        }
    }
}

impl StreamConfig {
    pub fn new(chunk_size: usize, cipher: CipherSuite) -> Self {
        Self { chunk_size, cipher }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_cipher(mut self, cipher: CipherSuite) -> Self {
        self.cipher = cipher;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_CHUNK_SIZE..=MAX_CHUNK_SIZE).contains(&self.chunk_size) {
            return Err(ConfigError::ChunkSize {
                requested: self.chunk_size,
                min: MIN_CHUNK_SIZE,
                max: MAX_CHUNK_SIZE,
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON config. Missing fields take defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }
}
