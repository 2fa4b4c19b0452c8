// End-to-end encrypt/decrypt over in-memory streams.

#[cfg(test)]
mod tests {
    use std::io::{self, Cursor, Read, Write};

    use chunkseal::{
        decrypt, encrypt, random_aes128_key, random_aes256_key, CipherSuite, HeaderError,
        Section, StreamCipher, StreamConfig, StreamError,
    };
    use proptest::prelude::*;

    const HEADER_LEN: usize = 24;
    const TAG_LEN: usize = 16;

    fn engine(key: &[u8], chunk_size: usize) -> StreamCipher {
        StreamCipher::new(key, StreamConfig::default().with_chunk_size(chunk_size)).unwrap()
    }

    fn seal(engine: &StreamCipher, plain: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        let report = engine.encrypt(&mut Cursor::new(plain), &mut out).unwrap();
        assert_eq!(report.bytes_written, out.len() as u64);
        out
    }

    fn open(engine: &StreamCipher, crypt: &[u8]) -> Result<Vec<u8>, StreamError> {
        let mut out = Vec::new();
        engine
            .decrypt(&mut Cursor::new(crypt), &mut out)
            .map_err(|f| f.into_error())?;
        Ok(out)
    }

    fn expected_len(plain_len: usize, chunk_size: usize) -> usize {
        let chunks = plain_len.div_ceil(chunk_size);
        plain_len + chunks * (HEADER_LEN + TAG_LEN)
    }

    // --- Fixed scenarios ---

    #[test]
    fn vanilla_plaintext_is_57_bytes() {
        let key = random_aes128_key().unwrap();
        let mut out = Vec::new();
        let n = encrypt(&mut Cursor::new(b"Vanilla Plaintext"), &mut out, &key).unwrap();
        assert_eq!(n, 57);
        assert_eq!(out.len(), 57);
    }

    #[test]
    fn roundtrip_with_free_functions_aes128_and_aes256() {
        let plain = b"The quick brown fox jumps over the lazy dog 1234567890 times";
        for key in [random_aes128_key().unwrap(), random_aes256_key().unwrap()] {
            let mut crypt = Vec::new();
            encrypt(&mut Cursor::new(&plain[..]), &mut crypt, &key).unwrap();

            let mut back = Vec::new();
            let n = decrypt(&mut Cursor::new(&crypt), &mut back, &key).unwrap();
            assert_eq!(n, plain.len() as u64);
            assert_eq!(back, plain);
        }
    }

    #[test]
    fn empty_input_gives_empty_container() {
        let key = random_aes128_key().unwrap();
        let mut crypt = Vec::new();
        assert_eq!(encrypt(&mut io::empty(), &mut crypt, &key).unwrap(), 0);
        assert!(crypt.is_empty());

        let mut back = Vec::new();
        assert_eq!(decrypt(&mut Cursor::new(&crypt), &mut back, &key).unwrap(), 0);
        assert!(back.is_empty());
    }

    #[test]
    fn roundtrip_sub_exact_and_multi_chunk_sizes() {
        let key = random_aes256_key().unwrap();
        let chunk = 64;
        let e = engine(&key, chunk);

        for len in [1usize, 63, 64, 65, 128, 64 * 5 + 17] {
            let plain: Vec<u8> = (0..len).map(|i| (i * 31 % 251) as u8).collect();
            let crypt = seal(&e, &plain);
            assert_eq!(crypt.len(), expected_len(len, chunk), "len {len}");
            assert_eq!(open(&e, &crypt).unwrap(), plain, "len {len}");
        }
    }

    #[test]
    fn exact_chunk_multiple_has_no_trailing_empty_chunk() {
        let key = random_aes128_key().unwrap();
        let e = engine(&key, 16);
        let crypt = seal(&e, &[0x42u8; 48]);
        assert_eq!(crypt.len(), 3 * (HEADER_LEN + 16 + TAG_LEN));
    }

    #[test]
    fn chacha_suite_roundtrips() {
        let key = random_aes256_key().unwrap();
        let cfg = StreamConfig::new(100, CipherSuite::ChaCha20Poly1305);
        let e = StreamCipher::new(&key, cfg).unwrap();
        let plain = vec![0x5Au8; 1000];
        let crypt = seal(&e, &plain);
        assert_eq!(open(&e, &crypt).unwrap(), plain);

        // Same key, other suite: headers pass, tags do not.
        let aes = engine(&key, 100);
        assert!(open(&aes, &crypt).unwrap_err().is_authentication());
    }

    // --- Key validation ---

    #[test]
    fn invalid_key_sizes_fail_both_directions() {
        for len in [15usize, 17] {
            let key = vec![0u8; len];
            let mut out = Vec::new();

            let err = encrypt(&mut Cursor::new(b"data"), &mut out, &key).unwrap_err();
            assert!(err.error().is_invalid_key());
            assert_eq!(err.written, 0);

            let err = decrypt(&mut Cursor::new(b"data"), &mut out, &key).unwrap_err();
            assert!(err.error().is_invalid_key());
            assert!(out.is_empty());
        }
    }

    // --- Corruption ---

    #[test]
    fn non_container_input_is_integrity_error() {
        let key = random_aes128_key().unwrap();
        let mut out = Vec::new();
        let err = decrypt(&mut Cursor::new(b"Totally invalid encrypted input"), &mut out, &key)
            .unwrap_err();
        assert!(err.error().is_integrity(), "got {err}");
    }

    #[test]
    fn every_flipped_bit_is_caught() {
        let key = random_aes128_key().unwrap();
        let e = engine(&key, 8);
        let crypt = seal(&e, b"twelve bytes");

        // Two chunks: [hdr 24][ct 24][hdr 24][ct 20]
        let mut header_ranges = vec![0..HEADER_LEN];
        header_ranges.push(HEADER_LEN + 24..HEADER_LEN * 2 + 24);

        for pos in 0..crypt.len() {
            let mut bad = crypt.clone();
            bad[pos] ^= 0x01;
            let err = open(&e, &bad).unwrap_err();
            if header_ranges.iter().any(|r| r.contains(&pos)) {
                assert!(err.is_integrity(), "byte {pos}: {err}");
            } else {
                assert!(err.is_authentication(), "byte {pos}: {err}");
            }
        }
    }

    #[test]
    fn wrong_key_is_authentication_error() {
        let e = engine(&[1u8; 16], 1024);
        let crypt = seal(&e, b"secret");
        let other = engine(&[2u8; 16], 1024);
        assert!(open(&other, &crypt).unwrap_err().is_authentication());
    }

    #[test]
    fn truncated_payload_is_fatal() {
        let e = engine(&[1u8; 16], 1024);
        let crypt = seal(&e, b"some plaintext here");
        let cut = &crypt[..crypt.len() - 3];
        match open(&e, cut) {
            Err(StreamError::Truncated { section: Section::Payload, expected, actual }) => {
                assert_eq!(expected, actual + 3);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn partial_header_is_fatal() {
        let e = engine(&[1u8; 16], 4);
        let crypt = seal(&e, b"abcdefgh");
        let first_chunk = HEADER_LEN + 4 + TAG_LEN;
        let cut = &crypt[..first_chunk + 10];
        assert!(matches!(
            open(&e, cut),
            Err(StreamError::Truncated { section: Section::Header, expected: 24, actual: 10 })
        ));
    }

    #[test]
    fn failure_reports_bytes_already_written() {
        let e = engine(&[1u8; 16], 4);
        let mut crypt = seal(&e, b"abcdefgh");
        let last = crypt.len() - 1;
        crypt[last] ^= 0xFF;

        let mut out = Vec::new();
        let err = e.decrypt(&mut Cursor::new(&crypt), &mut out).unwrap_err();
        assert!(err.error().is_authentication());
        assert_eq!(err.written, 4);
        assert_eq!(out, b"abcd");
    }

    #[test]
    fn crc_valid_header_with_huge_length_is_truncation_not_oom() {
        let e = engine(&[1u8; 16], 16);
        let hdr = chunkseal::headers::pack_header(&[0u8; 12], u64::MAX / 2);
        match open(&e, &hdr) {
            Err(StreamError::Truncated { section: Section::Payload, actual: 0, .. }) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn header_error_surfaces_typed() {
        let e = engine(&[1u8; 16], 16);
        let mut crypt = seal(&e, b"x");
        crypt[0] ^= 1;
        assert!(matches!(
            open(&e, &crypt),
            Err(StreamError::Header(HeaderError::InvalidCrc32 { .. }))
        ));
    }

    // --- I/O errors ---

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "reader gone"))
        }
    }

    struct FailAfter {
        budget: usize,
        sink: Vec<u8>,
    }

    impl Write for FailAfter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            if self.sink.len() + buf.len() > self.budget {
                return Err(io::Error::new(io::ErrorKind::Other, "disk full"));
            }
            self.sink.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn reader_errors_propagate_unchanged() {
        let key = random_aes128_key().unwrap();
        let err = encrypt(&mut FailingReader, &mut Vec::new(), &key).unwrap_err();
        match err.into_error() {
            StreamError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::BrokenPipe),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn writer_errors_propagate_with_count() {
        let e = engine(&[1u8; 16], 4);
        let mut w = FailAfter { budget: 50, sink: Vec::new() };
        let err = e.encrypt(&mut Cursor::new(b"abcdefgh"), &mut w).unwrap_err();
        // First chunk is 24 + 20 = 44 bytes; the second header does not fit.
        assert_eq!(err.written, 44);
        assert!(matches!(err.error(), StreamError::Io(_)));
    }

    // --- Properties ---

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn roundtrip_any_data_any_chunk_size(
            plain in proptest::collection::vec(any::<u8>(), 0..2048),
            chunk in 1usize..300,
        ) {
            let e = engine(&[0x33u8; 32], chunk);
            let crypt = seal(&e, &plain);
            prop_assert_eq!(crypt.len(), expected_len(plain.len(), chunk));
            prop_assert_eq!(open(&e, &crypt).unwrap(), plain);
        }
    }
}
