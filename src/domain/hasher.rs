//! Content hashing: turns document bytes into a [`Fingerprint`].

use super::fingerprint::Fingerprint;
use sha2::{Digest, Sha256};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

const READ_CHUNK: usize = 64 * 1024;

/// SHA-256 fingerprint of an in-memory byte sequence. Total over all
/// inputs, including the empty one.
pub fn fingerprint(content: &[u8]) -> Fingerprint {
    let digest = Sha256::digest(content);
    Fingerprint::from_bytes(digest.into())
}

/// Streams `reader` to the end and fingerprints what it produced.
///
/// Read failures are returned as-is; a partially read source never
/// yields a fingerprint.
pub fn fingerprint_reader<R: Read>(mut reader: R) -> io::Result<Fingerprint> {
    let mut hasher = Sha256::new();
    let mut buf = vec![0u8; READ_CHUNK];

    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        hasher.update(&buf[..n]);
    }

    Ok(Fingerprint::from_bytes(hasher.finalize().into()))
}

pub fn fingerprint_file<P: AsRef<Path>>(path: P) -> io::Result<Fingerprint> {
    let file = File::open(path)?;
    fingerprint_reader(file)
}
