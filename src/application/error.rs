use crate::domain::{Fingerprint, FingerprintParseError, NotarizationRecord};
use crate::infrastructure::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotarizationError {
    #[error("Failed to read document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid fingerprint: {0}")]
    InvalidFingerprint(#[from] FingerprintParseError),

    #[error(
        "Document already notarized by {} at {}",
        .0.submitter,
        .0.recorded_at
    )]
    AlreadyNotarized(Box<NotarizationRecord>),

    #[error("Record store unavailable during {operation} of {fingerprint}: {reason}")]
    Unavailable {
        operation: &'static str,
        fingerprint: Fingerprint,
        reason: String,
    },

    #[error("Record store failed during {operation} of {fingerprint}: {reason}")]
    Backend {
        operation: &'static str,
        fingerprint: Fingerprint,
        reason: String,
    },
}

impl NotarizationError {
    /// Wraps a store failure with the operation and key it hit.
    pub(crate) fn from_store(
        err: StoreError,
        operation: &'static str,
        fingerprint: Fingerprint,
    ) -> Self {
        match err {
            StoreError::AlreadyExists(record) => Self::AlreadyNotarized(record),
            StoreError::Unavailable(reason) => Self::Unavailable {
                operation,
                fingerprint,
                reason,
            },
            StoreError::Backend(reason) => Self::Backend {
                operation,
                fingerprint,
                reason,
            },
        }
    }

    /// Only an unavailable store is worth retrying.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable { .. })
    }

    /// A duplicate submission is an outcome, not a failure.
    pub fn is_informational(&self) -> bool {
        matches!(self, Self::AlreadyNotarized(_))
    }

    pub fn existing_record(&self) -> Option<&NotarizationRecord> {
        match self {
            Self::AlreadyNotarized(record) => Some(record),
            _ => None,
        }
    }
}
