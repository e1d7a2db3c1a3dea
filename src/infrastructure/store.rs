use crate::domain::{Fingerprint, NotarizationRecord};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Fingerprint {} already recorded", .0.fingerprint)]
    AlreadyExists(Box<NotarizationRecord>),

    #[error("Record store unavailable: {0}")]
    Unavailable(String),

    #[error("Record store error: {0}")]
    Backend(String),
}

/// Owner of the fingerprint -> record mapping.
///
/// Each fingerprint moves at most once from unrecorded to recorded.
/// `try_insert` is the only mutation and must be atomic: when several
/// callers race on one fingerprint, exactly one gets `Ok` and the rest get
/// `AlreadyExists` carrying the winner's record. `lookup` must never
/// report a fingerprint that was not committed.
pub trait RecordStore: Send + Sync {
    fn try_insert(
        &self,
        fingerprint: Fingerprint,
        submitter: &str,
        recorded_at: i64,
    ) -> Result<NotarizationRecord, StoreError>;

    fn lookup(&self, fingerprint: &Fingerprint) -> Result<Option<NotarizationRecord>, StoreError>;

    fn count(&self) -> Result<usize, StoreError>;
}
