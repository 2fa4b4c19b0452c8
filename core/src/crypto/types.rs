//! crypto/types.rs
//! Cipher suite registry, fixed sizes, and crypto-layer errors.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::key_lens;

/// Standard 12-byte nonce length for AES-GCM and ChaCha20-Poly1305.
pub const NONCE_LEN_12: usize = 12;

/// Fixed AEAD tag length (bytes).
pub const TAG_LEN: usize = 16;

/// AEAD construction used to seal chunks.
///
/// Nothing on the wire records the suite; encryptor and decryptor must be
/// configured alike.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CipherSuite {
    /// AES-GCM; key length selects AES-128 or AES-256.
    #[default]
    AesGcm,
    /// ChaCha20-Poly1305 with a 32-byte key.
    #[serde(rename = "chacha20_poly1305")]
    ChaCha20Poly1305,
}

impl CipherSuite {
    /// Key lengths this suite accepts.
    pub fn key_lens(&self) -> &'static [usize] {
        match self {
            CipherSuite::AesGcm => &[key_lens::AES128, key_lens::AES256],
            CipherSuite::ChaCha20Poly1305 => &[key_lens::CHACHA20],
        }
    }

    /// Nonce length required by the suite.
    pub fn nonce_len(&self) -> usize {
        NONCE_LEN_12
    }
}

impl fmt::Display for CipherSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherSuite::AesGcm => write!(f, "aes-gcm"),
            CipherSuite::ChaCha20Poly1305 => write!(f, "chacha20-poly1305"),
        }
    }
}

#[derive(Debug, Error)]
pub enum CryptoError {
    /// Key length not supported by the selected suite.
    #[error("invalid key length: actual={actual}, supported={supported:?}")]
    InvalidKeyLen { actual: usize, supported: &'static [usize] },

    /// Nonce length mismatch.
    #[error("invalid nonce length: expected={expected}, actual={actual}")]
    InvalidNonceLen { expected: usize, actual: usize },

    /// AEAD tag mismatch: tampered ciphertext or wrong key.
    #[error("message authentication failed")]
    TagMismatch,

    /// Secure randomness unavailable.
    #[error("random source unavailable: {0}")]
    RandomSource(#[from] rand::Error),

    /// Seal failed for a reason other than nonce length (oversized chunk).
    #[error("crypto failure: {0}")]
    Failure(String),
}
