//! headers/encode.rs
//!
//! Header encoding. Field order must match `decode.rs` exactly.

use byteorder::{ByteOrder, LittleEndian};

use crate::constants::SIZE_LEN;
use crate::headers::types::{header_len, ChunkHeader};
use crate::utils::compute_crc32;

/// Pack `nonce || payload_len || crc32(nonce || payload_len)`.
///
/// Pure function of its inputs; cannot fail.
#[inline]
pub fn pack_header(nonce: &[u8], payload_len: u64) -> Vec<u8> {
    let mut out = vec![0u8; header_len(nonce.len())];
    pack_header_into(nonce, payload_len, &mut out);
    out
}

/// Same as [`pack_header`] but writes into a caller-owned buffer of exactly
/// `header_len(nonce.len())` bytes, so the encrypt loop can reuse it.
#[inline]
pub fn pack_header_into(nonce: &[u8], payload_len: u64, out: &mut [u8]) {
    let n = nonce.len();
    let crc_off = n + SIZE_LEN;
    debug_assert_eq!(out.len(), header_len(n), "header buffer has wrong length");

    out[..n].copy_from_slice(nonce);                                 // 0..N      nonce
    LittleEndian::write_u64(&mut out[n..crc_off], payload_len);     // N..N+8    payload length
    let crc = compute_crc32(&out[..crc_off]);
    LittleEndian::write_u32(&mut out[crc_off..], crc);              // N+8..N+12 crc32
}

impl ChunkHeader {
    /// Encode this header to its wire form.
    pub fn encode(&self) -> Vec<u8> {
        pack_header(&self.nonce, self.payload_len)
    }
}
