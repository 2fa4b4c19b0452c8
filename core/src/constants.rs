//! constants.rs
//! Wire-format and sizing constants shared by every layer.

/// Default plaintext chunk size (64 MiB). The final chunk may be shorter.
pub const DEFAULT_CHUNK_SIZE: usize = 64 * (1 << 20);

/// Smallest accepted plaintext chunk size.
pub const MIN_CHUNK_SIZE: usize = 1;

/// Chunk size sanity bound (1 GiB).
pub const MAX_CHUNK_SIZE: usize = 1 << 30;

/// Width of the payload length field in a chunk header.
pub const SIZE_LEN: usize = 8;

/// Width of the CRC32 field in a chunk header.
pub const CRC_LEN: usize = 4;

/// Key lengths accepted by the AES-GCM suite.
pub mod key_lens {
    pub const AES128: usize = 16;
    pub const AES256: usize = 32;
    pub const CHACHA20: usize = 32;
}
