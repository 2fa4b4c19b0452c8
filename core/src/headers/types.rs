//! headers/types.rs
//! Chunk header struct and header-level errors.

use thiserror::Error;

use crate::constants::{CRC_LEN, SIZE_LEN};

/// Encoded header length for an AEAD with `nonce_size`-byte nonces.
#[inline]
pub const fn header_len(nonce_size: usize) -> usize {
    nonce_size + SIZE_LEN + CRC_LEN
}

/// Decoded chunk header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkHeader {
    /// Nonce the following payload was sealed with.
    pub nonce: Vec<u8>,
    /// Exact number of ciphertext bytes (tag included) that follow.
    pub payload_len: u64,
}

impl ChunkHeader {
    pub fn new(nonce: &[u8], payload_len: u64) -> Self {
        Self { nonce: nonce.to_vec(), payload_len }
    }

    /// Encoded size of this header.
    pub fn encoded_len(&self) -> usize {
        header_len(self.nonce.len())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HeaderError {
    /// Buffer shorter than one encoded header.
    #[error("header buffer too short: have={have}, need={need}")]
    BufferTooShort { have: usize, need: usize },

    /// Stored CRC does not match `nonce || payload_len`.
    #[error("corrupt header or not an encrypted stream: stored crc {stored:#010x}, computed {computed:#010x}")]
    InvalidCrc32 { stored: u32, computed: u32 },
}
