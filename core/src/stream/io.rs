//! stream/io.rs
//! Read primitives with explicit end-of-stream reporting.

use std::io::{self, ErrorKind, Read};

use crate::types::{Section, StreamError};

/// Initial payload reservation cap. Larger payloads grow the buffer as
/// bytes actually arrive.
const PAYLOAD_RESERVE_CAP: usize = 64 * (1 << 20) + 16;

/// Result of trying to fill a fixed-size buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    /// Buffer completely filled.
    Full,
    /// Input ended after this many bytes (0 < n < len).
    Partial(usize),
    /// Input ended before any byte was read.
    Eof,
}

/// Fill `buf` from `r`, retrying on `Interrupted`, until it is full or the
/// reader reports end of stream.
///
/// Callers decide what a `Partial` means: a final plaintext chunk is fine,
/// a half header is not.
pub fn read_full<R: Read + ?Sized>(r: &mut R, buf: &mut [u8]) -> io::Result<ReadOutcome> {
    let mut off = 0;

    while off < buf.len() {
        match r.read(&mut buf[off..]) {
            Ok(0) => break,
            Ok(n) => off += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(match off {
        n if n == buf.len() => ReadOutcome::Full,
        0 => ReadOutcome::Eof,
        n => ReadOutcome::Partial(n),
    })
}

/// Read exactly `len` payload bytes into `buf` (cleared first).
///
/// The buffer grows with delivered bytes, so a forged length cannot force
/// a large up-front allocation.
pub fn read_payload<R: Read + ?Sized>(
    r: &mut R,
    len: u64,
    buf: &mut Vec<u8>,
) -> Result<(), StreamError> {
    buf.clear();
    let want = usize::try_from(len).unwrap_or(usize::MAX).min(PAYLOAD_RESERVE_CAP);
    buf.reserve(want);

    let got = (&mut *r).take(len).read_to_end(buf)? as u64;
    if got != len {
        return Err(StreamError::Truncated {
            section: Section::Payload,
            expected: len,
            actual: got,
        });
    }
    Ok(())
}
