//! telemetry/counters.rs
//! Mutable counters collected while a stream is processed.
//!
//! Converted into an immutable `TelemetrySnapshot` when the call ends.

use serde::{Deserialize, Serialize};

#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryCounters {
    /// Chunks sealed or opened.
    pub chunks: u64,
    /// Header bytes written (encrypt) or consumed (decrypt).
    pub bytes_header: u64,
    /// Plaintext bytes read (encrypt) or recovered (decrypt).
    pub bytes_plaintext: u64,
    /// Ciphertext payload bytes, tags included.
    pub bytes_ciphertext: u64,
    /// Total bytes pulled from the input stream.
    pub bytes_consumed: u64,
    /// Total bytes pushed to the output stream.
    pub bytes_written: u64,
}

impl TelemetryCounters {
    /// Record one sealed chunk.
    pub fn add_encrypt_chunk(&mut self, header_len: usize, pt_len: usize, ct_len: usize) {
        self.chunks += 1;
        self.bytes_header += header_len as u64;
        self.bytes_plaintext += pt_len as u64;
        self.bytes_ciphertext += ct_len as u64;
    }

    /// Record one opened chunk.
    pub fn add_decrypt_chunk(&mut self, header_len: usize, ct_len: usize, pt_len: usize) {
        self.chunks += 1;
        self.bytes_header += header_len as u64;
        self.bytes_ciphertext += ct_len as u64;
        self.bytes_plaintext += pt_len as u64;
    }

    /// Bytes pulled from the input stream.
    #[inline]
    pub fn add_consumed(&mut self, n: usize) {
        self.bytes_consumed += n as u64;
    }

    /// Bytes accepted by the output stream.
    #[inline]
    pub fn add_written(&mut self, n: usize) {
        self.bytes_written += n as u64;
    }

    /// Framing overhead: headers plus AEAD tags.
    pub fn overhead_bytes(&self) -> u64 {
        self.bytes_header + self.bytes_ciphertext.saturating_sub(self.bytes_plaintext)
    }
}
