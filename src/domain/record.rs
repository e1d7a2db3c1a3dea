use super::fingerprint::Fingerprint;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Proof that a fingerprint was recorded by `submitter` at `recorded_at`
/// (seconds since epoch, assigned by the recording authority).
///
/// Stores hand out copies of these; a record never changes once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotarizationRecord {
    pub fingerprint: Fingerprint,
    pub submitter: String,
    pub recorded_at: i64,
}

impl NotarizationRecord {
    pub fn new(fingerprint: Fingerprint, submitter: &str, recorded_at: i64) -> Self {
        Self {
            fingerprint,
            submitter: submitter.to_string(),
            recorded_at,
        }
    }

    /// `None` when the timestamp is outside chrono's representable range.
    pub fn recorded_at_utc(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.recorded_at, 0).single()
    }
}
