//! stream/core.rs
//! Public API: configured engine plus the plain `encrypt` / `decrypt` /
//! `decrypt_n` entry points.

use std::io::{Read, Write};

use crate::config::StreamConfig;
use crate::crypto::AeadImpl;
use crate::stream::decrypt::decrypt_chunks;
use crate::stream::encrypt::encrypt_chunks;
use crate::telemetry::{TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
use crate::types::{StreamError, StreamFailure};

/// Outcome of a successful stream call.
#[derive(Debug, Clone, PartialEq)]
pub struct StreamReport {
    /// Bytes written to the output stream.
    pub bytes_written: u64,
    pub telemetry: TelemetrySnapshot,
}

/// Keyed, configured engine. Holds no per-stream state, so one instance can
/// serve any number of sequential calls, and clones can run concurrently.
#[derive(Debug, Clone)]
pub struct StreamCipher {
    aead: AeadImpl,
    config: StreamConfig,
}

impl StreamCipher {
    /// Validate `config` and key the AEAD for `config.cipher`.
    pub fn new(key: &[u8], config: StreamConfig) -> Result<Self, StreamError> {
        config.validate()?;
        let aead = AeadImpl::with_suite(config.cipher, key)?;
        Ok(Self { aead, config })
    }

    /// AES-GCM engine with the default 64 MiB chunk size.
    pub fn with_key(key: &[u8]) -> Result<Self, StreamError> {
        Self::new(key, StreamConfig::default())
    }

    pub fn config(&self) -> &StreamConfig {
        &self.config
    }

    pub fn nonce_size(&self) -> usize {
        self.aead.nonce_size()
    }

    /// Encrypt all of `reader` into `writer` as a container stream.
    pub fn encrypt<R, W>(&self, reader: &mut R, writer: &mut W) -> Result<StreamReport, StreamFailure>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        let mut counters = TelemetryCounters::default();
        let mut timer = TelemetryTimer::new();

        encrypt_chunks(reader, writer, &self.aead, self.config.chunk_size, &mut counters, &mut timer)
            .map_err(|e| StreamFailure::new(counters.bytes_written, e))?;

        Ok(finish(counters, timer))
    }

    /// Decrypt a container stream until end of input.
    pub fn decrypt<R, W>(&self, reader: &mut R, writer: &mut W) -> Result<StreamReport, StreamFailure>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        self.decrypt_n(reader, writer, 0)
    }

    /// Decrypt at most `max_len` input bytes (headers included). A non-zero
    /// budget must be consumed exactly; zero means unbounded.
    pub fn decrypt_n<R, W>(
        &self,
        reader: &mut R,
        writer: &mut W,
        max_len: u64,
    ) -> Result<StreamReport, StreamFailure>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        let mut counters = TelemetryCounters::default();
        let mut timer = TelemetryTimer::new();

        decrypt_chunks(reader, writer, &self.aead, max_len, &mut counters, &mut timer)
            .map_err(|e| StreamFailure::new(counters.bytes_written, e))?;

        Ok(finish(counters, timer))
    }
}

fn finish(counters: TelemetryCounters, mut timer: TelemetryTimer) -> StreamReport {
    timer.finish();
    StreamReport {
        bytes_written: counters.bytes_written,
        telemetry: TelemetrySnapshot::from(&counters, &timer),
    }
}

/// Encrypt `reader` into `writer` with AES-GCM (16- or 32-byte `key`).
/// Returns the number of bytes written.
pub fn encrypt<R, W>(reader: &mut R, writer: &mut W, key: &[u8]) -> Result<u64, StreamFailure>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let engine = StreamCipher::with_key(key).map_err(|e| StreamFailure::new(0, e))?;
    engine.encrypt(reader, writer).map(|r| r.bytes_written)
}

/// Decrypt a whole container stream. Returns plaintext bytes written.
pub fn decrypt<R, W>(reader: &mut R, writer: &mut W, key: &[u8]) -> Result<u64, StreamFailure>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    decrypt_n(reader, writer, key, 0)
}

/// Decrypt with an input budget of `max_len` bytes (0 = until end of input).
pub fn decrypt_n<R, W>(
    reader: &mut R,
    writer: &mut W,
    key: &[u8],
    max_len: u64,
) -> Result<u64, StreamFailure>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    let engine = StreamCipher::with_key(key).map_err(|e| StreamFailure::new(0, e))?;
    engine.decrypt_n(reader, writer, max_len).map(|r| r.bytes_written)
}
