use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Length in bytes of a SHA-256 digest
pub const FINGERPRINT_LEN: usize = 32;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FingerprintParseError {
    #[error("Invalid fingerprint length: expected 64 hex characters, got {0}")]
    InvalidLength(usize),

    #[error("Invalid fingerprint: contains non-hexadecimal characters")]
    InvalidHex,
}

/// Content fingerprint of a document: the SHA-256 digest of its bytes.
///
/// Renders as 64 lowercase hex characters. Parsing accepts either case
/// and an optional `0x` prefix, which is how ledger clients spell it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint([u8; FINGERPRINT_LEN]);

impl Fingerprint {
    pub const fn from_bytes(bytes: [u8; FINGERPRINT_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; FINGERPRINT_LEN] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn from_hex(s: &str) -> Result<Self, FingerprintParseError> {
        let s = s.trim();
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);

        if digits.len() != FINGERPRINT_LEN * 2 {
            return Err(FingerprintParseError::InvalidLength(digits.len()));
        }

        let mut bytes = [0u8; FINGERPRINT_LEN];
        hex::decode_to_slice(digits, &mut bytes).map_err(|_| FingerprintParseError::InvalidHex)?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({})", self.to_hex())
    }
}

impl FromStr for Fingerprint {
    type Err = FingerprintParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Fingerprint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Fingerprint {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(de::Error::custom)
    }
}
