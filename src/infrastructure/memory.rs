use super::store::{RecordStore, StoreError};
use crate::domain::{Fingerprint, NotarizationRecord};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

/// Process-local record store.
///
/// Check-and-insert runs under the entry lock of the fingerprint's shard,
/// so unrelated fingerprints only contend when they share a shard. Inserts
/// are visible to `lookup` as soon as `try_insert` returns.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    records: DashMap<Fingerprint, NotarizationRecord>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn try_insert(
        &self,
        fingerprint: Fingerprint,
        submitter: &str,
        recorded_at: i64,
    ) -> Result<NotarizationRecord, StoreError> {
        match self.records.entry(fingerprint) {
            Entry::Occupied(existing) => {
                Err(StoreError::AlreadyExists(Box::new(existing.get().clone())))
            }
            Entry::Vacant(slot) => {
                let record = NotarizationRecord::new(fingerprint, submitter, recorded_at);
                slot.insert(record.clone());
                Ok(record)
            }
        }
    }

    fn lookup(&self, fingerprint: &Fingerprint) -> Result<Option<NotarizationRecord>, StoreError> {
        Ok(self.records.get(fingerprint).map(|r| r.value().clone()))
    }

    fn count(&self) -> Result<usize, StoreError> {
        Ok(self.records.len())
    }
}
