use super::fingerprint::Fingerprint;
use super::record::NotarizationRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotarizationReceipt {
    pub fingerprint: Fingerprint,
    pub submitter: String,
    pub notarized_at: i64,
    pub block_number: u64,
    pub proof: String,
}

impl NotarizationReceipt {
    pub fn new(record: &NotarizationRecord, block_number: u64) -> Self {
        let proof = format!("sha256:{}@{}", record.fingerprint, record.recorded_at);

        Self {
            fingerprint: record.fingerprint,
            submitter: record.submitter.clone(),
            notarized_at: record.recorded_at,
            block_number,
            proof,
        }
    }

    pub fn verify_path(&self) -> String {
        verify_path(&self.fingerprint)
    }

    /// Public verification URL, the one a certificate QR code points at.
    pub fn verification_link(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.verify_path())
    }
}

/// Path of the public verification page for `fingerprint`
pub fn verify_path(fingerprint: &Fingerprint) -> String {
    format!("/verify?hash={}", fingerprint)
}
