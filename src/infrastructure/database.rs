use super::store::{RecordStore, StoreError};
use crate::domain::{Fingerprint, NotarizationRecord};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};
use std::sync::{Mutex, MutexGuard};

/// SQLite-backed record store.
///
/// All statements go through one connection behind a mutex, and the
/// `INSERT OR IGNORE` plus change-count check happens while holding it,
/// which makes check-and-insert atomic. Reads are consistent with every
/// insert that has returned.
pub struct SqliteRecordStore {
    conn: Mutex<Connection>,
}

impl SqliteRecordStore {
    pub fn new(path: &str) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(classify)?;
        Self::init_schema(&conn)?;
        tracing::debug!(path, "opened sqlite record store");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub fn new_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(classify)?;
        Self::init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn init_schema(conn: &Connection) -> Result<(), StoreError> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS notarizations (
                fingerprint TEXT PRIMARY KEY NOT NULL,
                submitter TEXT NOT NULL,
                recorded_at INTEGER NOT NULL
            )",
            [],
        )
        .map_err(classify)?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_recorded_at ON notarizations(recorded_at)",
            [],
        )
        .map_err(classify)?;

        Ok(())
    }

    fn connection(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn
            .lock()
            .map_err(|_| StoreError::Unavailable("connection lock poisoned".to_string()))
    }

    fn select(
        conn: &Connection,
        fingerprint: &Fingerprint,
    ) -> Result<Option<NotarizationRecord>, StoreError> {
        let row = conn
            .query_row(
                "SELECT fingerprint, submitter, recorded_at
                 FROM notarizations
                 WHERE fingerprint = ?1",
                params![fingerprint.to_hex()],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, i64>(2)?,
                    ))
                },
            )
            .optional()
            .map_err(classify)?;

        row.map(|(hash, submitter, recorded_at)| {
            let stored = Fingerprint::from_hex(&hash)
                .map_err(|e| StoreError::Backend(format!("malformed row {}: {}", hash, e)))?;
            Ok(NotarizationRecord::new(stored, &submitter, recorded_at))
        })
        .transpose()
    }
}

impl RecordStore for SqliteRecordStore {
    fn try_insert(
        &self,
        fingerprint: Fingerprint,
        submitter: &str,
        recorded_at: i64,
    ) -> Result<NotarizationRecord, StoreError> {
        let conn = self.connection()?;

        let inserted = conn
            .execute(
                "INSERT OR IGNORE INTO notarizations (fingerprint, submitter, recorded_at)
                 VALUES (?1, ?2, ?3)",
                params![fingerprint.to_hex(), submitter, recorded_at],
            )
            .map_err(classify)?;

        if inserted == 0 {
            let existing = Self::select(&conn, &fingerprint)?.ok_or_else(|| {
                StoreError::Backend(format!("insert of {} ignored but no row found", fingerprint))
            })?;
            return Err(StoreError::AlreadyExists(Box::new(existing)));
        }

        Ok(NotarizationRecord::new(fingerprint, submitter, recorded_at))
    }

    fn lookup(&self, fingerprint: &Fingerprint) -> Result<Option<NotarizationRecord>, StoreError> {
        let conn = self.connection()?;
        Self::select(&conn, fingerprint)
    }

    fn count(&self) -> Result<usize, StoreError> {
        let conn = self.connection()?;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM notarizations", [], |row| row.get(0))
            .map_err(classify)?;

        Ok(count as usize)
    }
}

/// Busy, locked, unopenable or I/O-failing databases are worth retrying;
/// anything else is reported as a backend fault.
fn classify(err: rusqlite::Error) -> StoreError {
    match &err {
        rusqlite::Error::SqliteFailure(e, _) => match e.code {
            ErrorCode::DatabaseBusy
            | ErrorCode::DatabaseLocked
            | ErrorCode::CannotOpen
            | ErrorCode::SystemIoFailure
            | ErrorCode::DiskFull => StoreError::Unavailable(err.to_string()),
            _ => StoreError::Backend(err.to_string()),
        },
        _ => StoreError::Backend(err.to_string()),
    }
}
