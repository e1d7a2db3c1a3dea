use notary::domain::{
    fingerprint, fingerprint_file, fingerprint_reader, Fingerprint, NotarizationReceipt,
    NotarizationRecord,
};
use std::io::{self, Read};

const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

#[cfg(test)]
mod hasher_tests {
    use super::*;

    #[test]
    fn test_empty_input_matches_known_vector() {
        assert_eq!(fingerprint(b"").to_hex(), EMPTY_SHA256);
    }

    #[test]
    fn test_abc_matches_known_vector() {
        assert_eq!(
            fingerprint(b"abc").to_hex(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_fingerprint_is_deterministic() {
        let content = b"same content";
        assert_eq!(fingerprint(content), fingerprint(content));
    }

    #[test]
    fn test_different_content_different_fingerprint() {
        assert_ne!(fingerprint(b"content one"), fingerprint(b"content two"));
    }

    #[test]
    fn test_fingerprint_file_matches_bytes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        io::Write::write_all(&mut file, b"file on disk").unwrap();

        let from_file = fingerprint_file(file.path()).unwrap();
        assert_eq!(from_file, fingerprint(b"file on disk"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = fingerprint_file(dir.path().join("absent.pdf"));
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "disk gone"))
        }
    }

    #[test]
    fn test_unreadable_source_fails_fast() {
        assert!(fingerprint_reader(FailingReader).is_err());
    }
}

#[cfg(test)]
mod record_tests {
    use super::*;

    #[test]
    fn test_record_serializes_fingerprint_as_hex() {
        let record = NotarizationRecord::new(fingerprint(b""), "alice", 1234567890);
        let json: serde_json::Value = serde_json::to_value(&record).unwrap();

        assert_eq!(json["fingerprint"], EMPTY_SHA256);
        assert_eq!(json["submitter"], "alice");
        assert_eq!(json["recorded_at"], 1234567890);
    }

    #[test]
    fn test_receipt_proof_format() {
        let fp = Fingerprint::from_hex(EMPTY_SHA256).unwrap();
        let record = NotarizationRecord::new(fp, "0x123", 1234567890);
        let receipt = NotarizationReceipt::new(&record, 12345);

        assert_eq!(receipt.proof, format!("sha256:{}@1234567890", EMPTY_SHA256));
        assert_eq!(receipt.block_number, 12345);
        assert_eq!(receipt.submitter, "0x123");
    }

    #[test]
    fn test_receipt_verification_link() {
        let record = NotarizationRecord::new(fingerprint(b""), "0x123", 1);
        let receipt = NotarizationReceipt::new(&record, 1);

        assert_eq!(
            receipt.verification_link("https://notary.example/"),
            format!("https://notary.example/verify?hash={}", EMPTY_SHA256)
        );
    }
}
