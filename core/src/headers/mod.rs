//! headers/mod.rs
//! Per-chunk header codec.
//!
//! Every ciphertext chunk in a container stream is preceded by a fixed-size
//! header:
//!
//! ```text
//! [ nonce (N) ][ payload_len (8, LE u64) ][ crc32 (4, LE u32) ]
//! ```
//!
//! The CRC covers `nonce || payload_len` only. Payload integrity is the
//! AEAD tag's job; the header never checksums ciphertext.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
