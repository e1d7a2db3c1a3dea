pub mod cartesi;
pub mod database;
pub mod memory;
pub mod store;

pub use database::SqliteRecordStore;
pub use memory::InMemoryRecordStore;
pub use store::{RecordStore, StoreError};

use crate::config::{NotaryConfig, StoreBackend};

/// Builds the store selected by `config`.
///
/// An unopenable SQLite file is an error rather than a silent switch to
/// memory; a volatile store must be asked for with `NOTARY_STORE=memory`.
pub fn open_store(config: &NotaryConfig) -> Result<Box<dyn RecordStore>, StoreError> {
    match config.store {
        StoreBackend::Memory => {
            tracing::warn!("using in-memory record store; records are lost on restart");
            Ok(Box::new(InMemoryRecordStore::new()))
        }
        StoreBackend::Sqlite => Ok(Box::new(SqliteRecordStore::new(&config.db_path)?)),
    }
}
