use super::error::NotarizationError;
use super::service::NotarizationService;
use crate::domain::{fingerprint, NotarizationRecord};

impl NotarizationService {
    /// Records `content` for `submitter`, timestamped by the service clock.
    ///
    /// A fingerprint that is already recorded yields
    /// [`NotarizationError::AlreadyNotarized`] with the original record.
    pub fn notarize(
        &self,
        content: &[u8],
        submitter: &str,
    ) -> Result<NotarizationRecord, NotarizationError> {
        self.notarize_at(content, submitter, self.clock.now())
    }

    /// Like [`notarize`](Self::notarize), with the timestamp assigned by the
    /// recording authority (e.g. the block time of a ledger input).
    pub fn notarize_at(
        &self,
        content: &[u8],
        submitter: &str,
        recorded_at: i64,
    ) -> Result<NotarizationRecord, NotarizationError> {
        let fp = fingerprint(content);

        match self.store.try_insert(fp, submitter, recorded_at) {
            Ok(record) => {
                tracing::info!(
                    fingerprint = %fp,
                    submitter,
                    recorded_at,
                    "document notarized"
                );
                Ok(record)
            }
            Err(e) => {
                let err = NotarizationError::from_store(e, "notarize", fp);
                if err.is_informational() {
                    tracing::info!(fingerprint = %fp, submitter, "document already notarized");
                } else {
                    tracing::warn!(fingerprint = %fp, error = %err, "notarization failed");
                }
                Err(err)
            }
        }
    }
}
