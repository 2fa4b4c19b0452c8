//! stream/encrypt.rs
//! Chunked stream encryption.
//!
//! Each plaintext chunk of up to `chunk_size` bytes is sealed with the
//! session's current nonce and written as `header || ciphertext`. The nonce
//! is advanced after every chunk. An empty input yields an empty output.

use std::io::{Read, Write};

use tracing::{debug, trace};

use crate::crypto::{AeadImpl, NonceSequence, TAG_LEN};
use crate::headers::{header_len, pack_header_into};
use crate::stream::io::{read_full, ReadOutcome};
use crate::telemetry::{Stage, TelemetryCounters, TelemetryTimer};
use crate::types::StreamError;
use crate::utils::hex_short;

/// Encrypt `reader` into `writer` until the reader is exhausted.
///
/// Output byte counts land in `counters.bytes_written` as each write
/// completes, so the caller can report them on failure.
pub fn encrypt_chunks<R, W>(
    reader: &mut R,
    writer: &mut W,
    aead: &AeadImpl,
    chunk_size: usize,
    counters: &mut TelemetryCounters,
    timer: &mut TelemetryTimer,
) -> Result<(), StreamError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let nonce_size = aead.nonce_size();
    let mut nonces = NonceSequence::random(nonce_size)?;

    debug!(
        chunk_size,
        cipher = %aead.suite(),
        nonce = %hex_short(nonces.current()),
        "encrypt session start"
    );

    // Reused across chunks; seal grows it by one tag at most.
    let mut chunk: Vec<u8> = Vec::with_capacity(chunk_size + TAG_LEN);
    let mut header = vec![0u8; header_len(nonce_size)];

    loop {
        chunk.resize(chunk_size, 0);

        let outcome = timer.measure(Stage::Read, || read_full(reader, &mut chunk))?;
        let pt_len = match outcome {
            ReadOutcome::Full => chunk_size,
            ReadOutcome::Partial(n) => n,
            ReadOutcome::Eof => break,
        };
        chunk.truncate(pt_len);
        counters.add_consumed(pt_len);

        timer.measure(Stage::Seal, || aead.seal_in_place(nonces.current(), &mut chunk))?;
        pack_header_into(nonces.current(), chunk.len() as u64, &mut header);

        timer.measure(Stage::Write, || writer.write_all(&header))?;
        counters.add_written(header.len());
        timer.measure(Stage::Write, || writer.write_all(&chunk))?;
        counters.add_written(chunk.len());

        counters.add_encrypt_chunk(header.len(), pt_len, chunk.len());
        trace!(
            chunk = nonces.issued(),
            nonce = %hex_short(nonces.current()),
            plaintext_len = pt_len,
            payload_len = chunk.len(),
            "sealed chunk"
        );

        nonces.advance();
    }

    debug!(
        chunks = counters.chunks,
        bytes_written = counters.bytes_written,
        "encrypt session done"
    );
    Ok(())
}
