//! Cinseal Storage Layer
//!
//! Implements the RecordStore trait using SQLite.
//!
//! # Architecture
//!
//! - A single `files` table holding filename, CIN, encrypted PDF and password
//! - The schema is created on open if absent
//! - Databases written before `batch_id`/`created_at` existed are upgraded in place
//! - Append-only: the store exposes no update or delete
//!
//! # Examples
//!
//! ```no_run
//! use cinseal_store::SqliteStore;
//!
//! let store = SqliteStore::new("files.db").unwrap();
//! println!("{} records", store.count().unwrap());
//! ```

#![warn(missing_docs)]

use cinseal_domain::traits::RecordStore;
use cinseal_domain::{BatchId, FileRecord, RecordId};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// A stored row, including the encrypted bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRecord {
    /// Row id
    pub id: RecordId,

    /// Source filename
    pub filename: String,

    /// Extracted CIN
    pub cin: String,

    /// Open password (always the CIN)
    pub password: String,

    /// Encrypted PDF bytes
    pub protected_pdf: Vec<u8>,

    /// Run that produced the row; absent for rows from older databases
    pub batch_id: Option<BatchId>,

    /// Insertion time, seconds since the Unix epoch
    pub created_at: u64,
}

/// A stored row without its encrypted bytes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSummary {
    /// Row id
    pub id: RecordId,

    /// Source filename
    pub filename: String,

    /// Extracted CIN
    pub cin: String,

    /// Size of the encrypted PDF in bytes
    pub size_bytes: u64,

    /// Run that produced the row
    pub batch_id: Option<BatchId>,

    /// Insertion time, seconds since the Unix epoch
    pub created_at: u64,
}

/// SQLite-based implementation of RecordStore
///
/// # Thread Safety
///
/// SQLite connections are not thread-safe. The pipeline owns its store and
/// writes from a single task; each thread should have its own SqliteStore.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database at the given path
    ///
    /// Use `:memory:` for an in-memory database (useful for testing).
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use cinseal_store::SqliteStore;
    ///
    /// let store = SqliteStore::new("files.db").unwrap();
    /// ```
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let mut store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Initialize the database schema
    fn initialize_schema(&mut self) -> Result<(), StoreError> {
        let schema = include_str!("schema.sql");
        self.conn.execute_batch(schema)?;
        self.upgrade_legacy_columns()?;
        self.conn
            .execute_batch("CREATE INDEX IF NOT EXISTS idx_files_batch ON files(batch_id);")?;
        Ok(())
    }

    /// Add columns missing from tables created by earlier versions
    fn upgrade_legacy_columns(&mut self) -> Result<(), StoreError> {
        let mut stmt = self.conn.prepare("PRAGMA table_info(files)")?;
        let columns = stmt
            .query_map([], |row| row.get::<_, String>(1))?
            .collect::<Result<Vec<_>, _>>()?;
        drop(stmt);

        if !columns.iter().any(|c| c == "batch_id") {
            info!("Upgrading files table: adding batch_id");
            self.conn
                .execute_batch("ALTER TABLE files ADD COLUMN batch_id BLOB;")?;
        }
        if !columns.iter().any(|c| c == "created_at") {
            info!("Upgrading files table: adding created_at");
            self.conn
                .execute_batch("ALTER TABLE files ADD COLUMN created_at INTEGER NOT NULL DEFAULT 0;")?;
        }
        Ok(())
    }

    /// Number of stored records
    pub fn count(&self) -> Result<u64, StoreError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM files", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    /// Fetch a record with its encrypted bytes
    pub fn get_record(&self, id: RecordId) -> Result<Option<StoredRecord>, StoreError> {
        let record = self
            .conn
            .query_row(
                "SELECT id, filename, cin, password, protected_pdf, batch_id, created_at
                 FROM files WHERE id = ?1",
                params![id.value()],
                |row| {
                    let batch_bytes: Option<Vec<u8>> = row.get(5)?;
                    let batch_id = Self::decode_batch_id(batch_bytes, 5)?;
                    Ok(StoredRecord {
                        id: RecordId::from_value(row.get(0)?),
                        filename: row.get(1)?,
                        cin: row.get(2)?,
                        password: row.get(3)?,
                        protected_pdf: row.get(4)?,
                        batch_id,
                        created_at: row.get::<_, i64>(6)? as u64,
                    })
                },
            )
            .optional()?;

        Ok(record)
    }

    /// List all records, oldest first, without their encrypted bytes
    pub fn list_records(&self) -> Result<Vec<RecordSummary>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, filename, cin, length(protected_pdf), batch_id, created_at
             FROM files ORDER BY id",
        )?;

        let records = stmt
            .query_map([], |row| {
                let batch_bytes: Option<Vec<u8>> = row.get(4)?;
                let batch_id = Self::decode_batch_id(batch_bytes, 4)?;
                Ok(RecordSummary {
                    id: RecordId::from_value(row.get(0)?),
                    filename: row.get(1)?,
                    cin: row.get(2)?,
                    size_bytes: row.get::<_, i64>(3)? as u64,
                    batch_id,
                    created_at: row.get::<_, i64>(5)? as u64,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(records)
    }

    /// Convert BatchId to bytes for storage
    fn batch_id_to_bytes(id: BatchId) -> Vec<u8> {
        id.value().to_be_bytes().to_vec()
    }

    /// Convert bytes to BatchId
    fn bytes_to_batch_id(bytes: &[u8]) -> Result<BatchId, StoreError> {
        let arr: [u8; 16] = bytes.try_into().map_err(|_| {
            StoreError::InvalidData(format!(
                "Expected 16 bytes for BatchId, got {}",
                bytes.len()
            ))
        })?;
        Ok(BatchId::from_value(u128::from_be_bytes(arr)))
    }

    fn decode_batch_id(bytes: Option<Vec<u8>>, column: usize) -> rusqlite::Result<Option<BatchId>> {
        bytes
            .map(|b| {
                Self::bytes_to_batch_id(&b).map_err(|e| {
                    rusqlite::Error::FromSqlConversionFailure(
                        column,
                        rusqlite::types::Type::Blob,
                        Box::new(e),
                    )
                })
            })
            .transpose()
    }

    fn now_secs() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs() as i64)
            .unwrap_or(0)
    }
}

impl RecordStore for SqliteStore {
    type Error = StoreError;

    fn append(&mut self, record: &FileRecord) -> Result<RecordId, Self::Error> {
        self.conn.execute(
            "INSERT INTO files (filename, cin, protected_pdf, password, batch_id, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                &record.filename,
                record.identifier().as_str(),
                record.protected_bytes(),
                record.password(),
                Self::batch_id_to_bytes(record.batch_id),
                Self::now_secs(),
            ],
        )?;

        let id = RecordId::from_value(self.conn.last_insert_rowid());
        debug!("Stored record {} for {}", id, record.filename);
        Ok(id)
    }
}
