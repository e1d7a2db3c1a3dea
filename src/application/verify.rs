use super::error::NotarizationError;
use super::service::NotarizationService;
use crate::domain::{fingerprint, fingerprint_reader, Fingerprint, NotarizationRecord};
use crate::infrastructure::StoreError;
use std::io::Read;

impl NotarizationService {
    /// Looks up a fingerprint. `Ok(None)` means "never notarized".
    pub fn verify(
        &self,
        fingerprint: &Fingerprint,
    ) -> Result<Option<NotarizationRecord>, NotarizationError> {
        let found = self
            .store
            .lookup(fingerprint)
            .map_err(|e| NotarizationError::from_store(e, "verify", *fingerprint))?;

        tracing::debug!(
            fingerprint = %fingerprint,
            found = found.is_some(),
            "verification lookup"
        );
        Ok(found)
    }

    pub fn verify_file(
        &self,
        content: &[u8],
    ) -> Result<Option<NotarizationRecord>, NotarizationError> {
        self.verify(&fingerprint(content))
    }

    /// Streams `reader`, then verifies its fingerprint. Read errors come
    /// back as [`NotarizationError::Io`].
    pub fn verify_reader<R: Read>(
        &self,
        reader: R,
    ) -> Result<Option<NotarizationRecord>, NotarizationError> {
        let fp = fingerprint_reader(reader)?;
        self.verify(&fp)
    }

    /// Verifies a textual fingerprint (64 hex characters, `0x` optional).
    pub fn verify_hex(
        &self,
        content_hash: &str,
    ) -> Result<Option<NotarizationRecord>, NotarizationError> {
        let fp = Fingerprint::from_hex(content_hash)?;
        self.verify(&fp)
    }

    /// Number of notarized fingerprints.
    pub fn count(&self) -> Result<usize, StoreError> {
        self.store.count()
    }
}
