//! crypto/aead.rs
//! AEAD adapter: key -> block cipher -> AEAD mode.
//!
//! Design notes:
//! - AES-GCM takes 16- or 32-byte keys (AES-128 / AES-256); ChaCha20-Poly1305 takes 32.
//! - All suites use 12-byte nonces and 16-byte tags.
//! - No associated data is bound; each chunk is authenticated on its own.
//! - Tag verification fails closed: a failed open leaves no plaintext behind.

use aes_gcm::aead::{Aead, AeadInPlace, KeyInit};
use aes_gcm::{Aes128Gcm, Aes256Gcm, Nonce as AesNonce};
use chacha20poly1305::{ChaCha20Poly1305, Nonce as ChaNonce};

use crate::constants::key_lens;
use crate::crypto::types::{CipherSuite, CryptoError, NONCE_LEN_12, TAG_LEN};

/// Keyed AEAD context. One per encrypt/decrypt call; never shared mutably.
#[derive(Clone)]
pub enum AeadImpl {
    Aes128Gcm(Aes128Gcm),
    Aes256Gcm(Aes256Gcm),
    ChaCha(ChaCha20Poly1305),
}

impl AeadImpl {
    /// AES-GCM context; the key length picks the strength.
    pub fn new(key: &[u8]) -> Result<Self, CryptoError> {
        Self::with_suite(CipherSuite::AesGcm, key)
    }

    /// Build a context for `suite`, rejecting unsupported key lengths.
    pub fn with_suite(suite: CipherSuite, key: &[u8]) -> Result<Self, CryptoError> {
        let invalid = || CryptoError::InvalidKeyLen {
            actual: key.len(),
            supported: suite.key_lens(),
        };

        match (suite, key.len()) {
            (CipherSuite::AesGcm, key_lens::AES128) => {
                Aes128Gcm::new_from_slice(key).map(Self::Aes128Gcm).map_err(|_| invalid())
            }
            (CipherSuite::AesGcm, key_lens::AES256) => {
                Aes256Gcm::new_from_slice(key).map(Self::Aes256Gcm).map_err(|_| invalid())
            }
            (CipherSuite::ChaCha20Poly1305, key_lens::CHACHA20) => {
                ChaCha20Poly1305::new_from_slice(key).map(Self::ChaCha).map_err(|_| invalid())
            }
            _ => Err(invalid()),
        }
    }

    pub fn suite(&self) -> CipherSuite {
        match self {
            AeadImpl::Aes128Gcm(_) | AeadImpl::Aes256Gcm(_) => CipherSuite::AesGcm,
            AeadImpl::ChaCha(_) => CipherSuite::ChaCha20Poly1305,
        }
    }

    #[inline]
    pub fn nonce_size(&self) -> usize {
        NONCE_LEN_12
    }

    #[inline]
    pub fn tag_size(&self) -> usize {
        TAG_LEN
    }

    fn check_nonce(&self, nonce: &[u8]) -> Result<(), CryptoError> {
        if nonce.len() != self.nonce_size() {
            return Err(CryptoError::InvalidNonceLen {
                expected: self.nonce_size(),
                actual: nonce.len(),
            });
        }
        Ok(())
    }

    /// Seal `buf` in place: on return it holds `ciphertext || tag`.
    pub fn seal_in_place(&self, nonce: &[u8], buf: &mut Vec<u8>) -> Result<(), CryptoError> {
        self.check_nonce(nonce)?;

        let res = match self {
            AeadImpl::Aes128Gcm(c) => c.encrypt_in_place(AesNonce::from_slice(nonce), b"", buf),
            AeadImpl::Aes256Gcm(c) => c.encrypt_in_place(AesNonce::from_slice(nonce), b"", buf),
            AeadImpl::ChaCha(c) => c.encrypt_in_place(ChaNonce::from_slice(nonce), b"", buf),
        };
        res.map_err(|_| CryptoError::Failure(format!("{} seal failed", self.suite())))
    }

    /// Open `buf` in place: on success it holds the plaintext, on failure
    /// its contents are unspecified and must be discarded.
    pub fn open_in_place(&self, nonce: &[u8], buf: &mut Vec<u8>) -> Result<(), CryptoError> {
        self.check_nonce(nonce)?;

        if buf.len() < TAG_LEN {
            return Err(CryptoError::TagMismatch);
        }

        let res = match self {
            AeadImpl::Aes128Gcm(c) => c.decrypt_in_place(AesNonce::from_slice(nonce), b"", buf),
            AeadImpl::Aes256Gcm(c) => c.decrypt_in_place(AesNonce::from_slice(nonce), b"", buf),
            AeadImpl::ChaCha(c) => c.decrypt_in_place(ChaNonce::from_slice(nonce), b"", buf),
        };
        res.map_err(|_| CryptoError::TagMismatch)
    }

    /// Allocating seal: `plaintext.len() + TAG_LEN` bytes out.
    pub fn seal(&self, nonce: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
        self.check_nonce(nonce)?;

        let res = match self {
            AeadImpl::Aes128Gcm(c) => c.encrypt(AesNonce::from_slice(nonce), plaintext),
            AeadImpl::Aes256Gcm(c) => c.encrypt(AesNonce::from_slice(nonce), plaintext),
            AeadImpl::ChaCha(c) => c.encrypt(ChaNonce::from_slice(nonce), plaintext),
        };
        res.map_err(|_| CryptoError::Failure(format!("{} seal failed", self.suite())))
    }

    /// Allocating open.
    pub fn open(&self, nonce: &[u8], ciphertext_and_tag: &[u8]) -> Result<Vec<u8>, CryptoError> {
        self.check_nonce(nonce)?;

        if ciphertext_and_tag.len() < TAG_LEN {
            return Err(CryptoError::TagMismatch);
        }

        let res = match self {
            AeadImpl::Aes128Gcm(c) => c.decrypt(AesNonce::from_slice(nonce), ciphertext_and_tag),
            AeadImpl::Aes256Gcm(c) => c.decrypt(AesNonce::from_slice(nonce), ciphertext_and_tag),
            AeadImpl::ChaCha(c) => c.decrypt(ChaNonce::from_slice(nonce), ciphertext_and_tag),
        };
        res.map_err(|_| CryptoError::TagMismatch)
    }
}

impl std::fmt::Debug for AeadImpl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Key material stays out of debug output.
        let name = match self {
            AeadImpl::Aes128Gcm(_) => "Aes128Gcm",
            AeadImpl::Aes256Gcm(_) => "Aes256Gcm",
            AeadImpl::ChaCha(_) => "ChaCha20Poly1305",
        };
        f.debug_tuple("AeadImpl").field(&name).finish()
    }
}
