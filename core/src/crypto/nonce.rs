//! crypto/nonce.rs
//! Per-session nonce sequencing.
//!
//! One random nonce opens each encryption session; every following chunk
//! uses the previous nonce plus one, read as a little-endian integer over
//! the nonce's full width. Uniqueness within a session comes from the
//! counter, not from fresh randomness.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::crypto::types::CryptoError;

/// Fill `size` bytes from the OS CSPRNG.
pub fn random_nonce(size: usize) -> Result<Vec<u8>, CryptoError> {
    let mut nonce = vec![0u8; size];
    OsRng.try_fill_bytes(&mut nonce)?;
    Ok(nonce)
}

/// Add one to `nonce` as a little-endian unsigned integer, wrapping to zero
/// on overflow.
#[inline]
pub fn increment_le(nonce: &mut [u8]) {
    for byte in nonce.iter_mut() {
        let (next, carry) = byte.overflowing_add(1);
        *byte = next;
        if !carry {
            return;
        }
    }
}

/// Nonce counter exclusively owned by one encryption session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonceSequence {
    current: Vec<u8>,
    issued: u64,
}

impl NonceSequence {
    /// Start a session from a fresh random nonce.
    pub fn random(size: usize) -> Result<Self, CryptoError> {
        Ok(Self::starting_at(random_nonce(size)?))
    }

    /// Start a session from a known nonce.
    pub fn starting_at(nonce: Vec<u8>) -> Self {
        Self { current: nonce, issued: 0 }
    }

    /// Nonce for the next chunk to be sealed.
    #[inline]
    pub fn current(&self) -> &[u8] {
        &self.current
    }

    /// Number of times the sequence has been advanced.
    pub fn issued(&self) -> u64 {
        self.issued
    }

    /// Move on to the next nonce once a chunk has been sealed.
    #[inline]
    pub fn advance(&mut self) {
        increment_le(&mut self.current);
        self.issued = self.issued.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_carries_across_bytes() {
        let mut n = [0xFF, 0xFF, 0x00, 0x00];
        increment_le(&mut n);
        assert_eq!(n, [0x00, 0x00, 0x01, 0x00]);
    }

    #[test]
    fn increment_wraps_at_full_width() {
        let mut n = [0xFF; 12];
        increment_le(&mut n);
        assert_eq!(n, [0x00; 12]);
    }

    #[test]
    fn increment_matches_u64_low_half() {
        let mut n = [0u8; 12];
        n[..8].copy_from_slice(&0x0123_4567_89AB_CDEFu64.to_le_bytes());
        increment_le(&mut n);
        assert_eq!(&n[..8], &0x0123_4567_89AB_CDF0u64.to_le_bytes());
        assert_eq!(&n[8..], &[0u8; 4]);
    }
}
