use crate::domain::{Clock, SystemClock};
use crate::infrastructure::RecordStore;

/// Front door of the notary: notarize documents once, verify them forever.
///
/// Holds no session state; the submitter is passed into every call.
/// Only [`notarize`](Self::notarize) and
/// [`notarize_at`](Self::notarize_at) write; every `verify*` call is a
/// pure read and needs no credentials.
pub struct NotarizationService {
    pub(super) store: Box<dyn RecordStore>,
    pub(super) clock: Box<dyn Clock>,
}

impl NotarizationService {
    pub fn new(store: Box<dyn RecordStore>) -> Self {
        Self::with_clock(store, Box::new(SystemClock::new()))
    }

    pub fn with_clock(store: Box<dyn RecordStore>, clock: Box<dyn Clock>) -> Self {
        Self { store, clock }
    }
}
