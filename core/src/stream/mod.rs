//! stream: chunked container encrypt/decrypt over `Read` / `Write`.
//!
//! Wire format, per chunk, in stream order:
//!
//! ```text
//! header:  nonce[N] || payload_len[8, LE] || crc32[4, LE] over (nonce || payload_len)
//! payload: ciphertext[payload_len]   (sealed chunk, tag included)
//! ```
//!
//! There is no container magic or trailer; end of stream is end of input.

pub mod io;
pub mod encrypt;
pub mod decrypt;
pub mod core;

pub use self::core::{decrypt, decrypt_n, encrypt, StreamCipher, StreamReport};
pub use self::io::{read_full, ReadOutcome};
