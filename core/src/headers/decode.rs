//! headers/decode.rs
//!
//! Header decoding and integrity check.
//!
//! A CRC mismatch is the primary signal that the input is corrupt or is not
//! a container stream at all (wrong format, wrong offset).

use byteorder::{ByteOrder, LittleEndian};

use crate::constants::SIZE_LEN;
use crate::headers::types::{header_len, ChunkHeader, HeaderError};
use crate::utils::compute_crc32;

/// Borrowing view of a verified header; avoids copying the nonce in the
/// decrypt loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderView<'a> {
    pub nonce: &'a [u8],
    pub payload_len: u64,
}

impl HeaderView<'_> {
    pub fn to_header(&self) -> ChunkHeader {
        ChunkHeader::new(self.nonce, self.payload_len)
    }
}

/// Split `buf` into nonce and payload length and verify the trailing CRC.
///
/// Only the first `header_len(nonce_size)` bytes of `buf` are examined.
#[inline]
pub fn unpack_header(buf: &[u8], nonce_size: usize) -> Result<HeaderView<'_>, HeaderError> {
    let need = header_len(nonce_size);
    if buf.len() < need {
        return Err(HeaderError::BufferTooShort { have: buf.len(), need });
    }

    let crc_off = nonce_size + SIZE_LEN;
    let nonce = &buf[..nonce_size];
    let payload_len = LittleEndian::read_u64(&buf[nonce_size..crc_off]);
    let stored = LittleEndian::read_u32(&buf[crc_off..need]);
    let computed = compute_crc32(&buf[..crc_off]);

    if stored != computed {
        return Err(HeaderError::InvalidCrc32 { stored, computed });
    }

    Ok(HeaderView { nonce, payload_len })
}

impl ChunkHeader {
    /// Decode and verify an owned header.
    pub fn decode(buf: &[u8], nonce_size: usize) -> Result<Self, HeaderError> {
        unpack_header(buf, nonce_size).map(|v| v.to_header())
    }
}
