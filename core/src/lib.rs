//! chunkseal
//!
//! Streaming, chunked authenticated encryption. Arbitrarily large inputs are
//! split into bounded chunks, each sealed with AES-GCM (or ChaCha20-Poly1305)
//! under its own nonce and preceded by a CRC-checked header. Memory use is
//! bounded by the chunk size, not the stream size.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod config;
pub mod types;
pub mod utils;

pub mod headers;
pub mod crypto;
pub mod telemetry;

// Stream layer
pub mod stream;

pub use config::{ConfigError, StreamConfig};
pub use crypto::{random_aes128_key, random_aes256_key, random_key, CipherSuite, CryptoError};
pub use headers::HeaderError;
pub use stream::{decrypt, decrypt_n, encrypt, StreamCipher, StreamReport};
pub use types::{Section, StreamError, StreamFailure};

pub mod prelude {
    pub use crate::config::StreamConfig;
    pub use crate::crypto::{random_aes128_key, random_aes256_key, random_key, CipherSuite};
    pub use crate::stream::{decrypt, decrypt_n, encrypt, StreamCipher, StreamReport};
    pub use crate::types::{StreamError, StreamFailure};
}
