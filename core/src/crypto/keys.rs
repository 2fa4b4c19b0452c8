//! crypto/keys.rs
//! Random key generation helpers.
//!
//! Keys are caller-owned; nothing here persists them.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::constants::key_lens;
use crate::crypto::types::CryptoError;

const SUPPORTED_KEY_LENS: &[usize] = &[key_lens::AES128, key_lens::AES256];

/// Random key of `size` bytes. `size` must be 16 or 32.
pub fn random_key(size: usize) -> Result<Vec<u8>, CryptoError> {
    if !SUPPORTED_KEY_LENS.contains(&size) {
        return Err(CryptoError::InvalidKeyLen { actual: size, supported: SUPPORTED_KEY_LENS });
    }
    let mut key = vec![0u8; size];
    OsRng.try_fill_bytes(&mut key)?;
    Ok(key)
}

/// Random AES-128 key.
pub fn random_aes128_key() -> Result<Vec<u8>, CryptoError> {
    random_key(key_lens::AES128)
}

/// Random AES-256 key (also valid for ChaCha20-Poly1305).
pub fn random_aes256_key() -> Result<Vec<u8>, CryptoError> {
    random_key(key_lens::AES256)
}
