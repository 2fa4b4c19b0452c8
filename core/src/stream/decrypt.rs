//! stream/decrypt.rs
//! Chunked stream decryption with an optional input byte budget.
//!
//! Loop states: await header -> integrity check -> await payload ->
//! authenticate -> write plaintext -> await header | done. Any error aborts
//! the whole call.
//!
//! With a budget (`max_len > 0`) the loop stops before any header or payload
//! that would overrun it, and the bytes consumed must then equal the budget
//! exactly. Bytes past the budget are never read.

use std::io::{Read, Write};

use tracing::{debug, trace, warn};

use crate::crypto::AeadImpl;
use crate::headers::{header_len, unpack_header};
use crate::stream::io::{read_full, read_payload, ReadOutcome};
use crate::telemetry::{Stage, TelemetryCounters, TelemetryTimer};
use crate::types::{Section, StreamError};
use crate::utils::hex_short;

/// Decrypt container chunks from `reader` into `writer`.
///
/// `max_len == 0` consumes until end of input.
pub fn decrypt_chunks<R, W>(
    reader: &mut R,
    writer: &mut W,
    aead: &AeadImpl,
    max_len: u64,
    counters: &mut TelemetryCounters,
    timer: &mut TelemetryTimer,
) -> Result<(), StreamError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let nonce_size = aead.nonce_size();
    let hlen = header_len(nonce_size);
    let bounded = max_len > 0;

    debug!(cipher = %aead.suite(), max_len, "decrypt session start");

    let mut header = vec![0u8; hlen];
    let mut payload: Vec<u8> = Vec::new();
    let mut consumed: u64 = 0;

    loop {
        if bounded && consumed + hlen as u64 > max_len {
            break;
        }

        // Headers are atomic: a clean EOF here ends the stream, a partial one is fatal.
        match timer.measure(Stage::Read, || read_full(reader, &mut header))? {
            ReadOutcome::Full => {}
            ReadOutcome::Eof => break,
            ReadOutcome::Partial(n) => {
                return Err(StreamError::Truncated {
                    section: Section::Header,
                    expected: hlen as u64,
                    actual: n as u64,
                });
            }
        }
        consumed += hlen as u64;
        counters.add_consumed(hlen);

        let view = timer.measure(Stage::Validate, || unpack_header(&header, nonce_size))?;

        if bounded && consumed.saturating_add(view.payload_len) > max_len {
            break;
        }

        timer.measure(Stage::Read, || read_payload(reader, view.payload_len, &mut payload))?;
        let ct_len = payload.len();
        consumed += ct_len as u64;
        counters.add_consumed(ct_len);

        timer.measure(Stage::Open, || aead.open_in_place(view.nonce, &mut payload))?;

        timer.measure(Stage::Write, || writer.write_all(&payload))?;
        counters.add_written(payload.len());

        counters.add_decrypt_chunk(hlen, ct_len, payload.len());
        trace!(
            chunk = counters.chunks - 1,
            nonce = %hex_short(view.nonce),
            payload_len = ct_len,
            plaintext_len = payload.len(),
            "opened chunk"
        );
    }

    if bounded && consumed != max_len {
        warn!(consumed, max_len, "bounded decrypt ended off budget");
        return Err(StreamError::BudgetMismatch { consumed, budget: max_len });
    }

    debug!(
        chunks = counters.chunks,
        bytes_consumed = consumed,
        bytes_written = counters.bytes_written,
        "decrypt session done"
    );
    Ok(())
}
