//! utils.rs
//! Checksum and log-formatting helpers shared across modules.

use crc32fast::Hasher;

/// CRC32 (IEEE) over `data`.
#[inline]
pub fn compute_crc32(data: &[u8]) -> u32 {
    let mut hasher = Hasher::new();
    hasher.update(data);
    hasher.finalize()
}

/// Lowercase hex rendering used in log fields.
pub fn hex_short(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crc32_matches_ieee_check_value() {
        // Standard CRC-32/IEEE check value for "123456789".
        assert_eq!(compute_crc32(b"123456789"), 0xCBF4_3926);
    }

    #[test]
    fn crc32_of_empty_is_zero() {
        assert_eq!(compute_crc32(&[]), 0);
    }
}
