pub mod application;
pub mod config;
pub mod domain;
pub mod handlers;
pub mod infrastructure;

// Re-export commonly used types
pub use application::{NotarizationError, NotarizationService};
pub use domain::{fingerprint, Fingerprint, NotarizationReceipt, NotarizationRecord};
pub use infrastructure::{InMemoryRecordStore, RecordStore, SqliteRecordStore, StoreError};
