//! File record module - what the record store persists per processed file

use crate::{BatchId, Cin, ProtectedDocument};
use std::fmt;

/// Row identifier assigned by the record store
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(i64);

impl RecordId {
    /// Wrap a raw store row id
    pub fn from_value(value: i64) -> Self {
        Self(value)
    }

    /// Get the raw row id
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The persisted tuple for one successfully protected file
///
/// The password is not stored separately: it is always the CIN the document
/// was protected with. Records are append-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Name of the source file (not a path)
    pub filename: String,

    /// Encrypted document and the CIN it was protected with
    pub document: ProtectedDocument,

    /// Run that produced this record
    pub batch_id: BatchId,
}

impl FileRecord {
    /// Create a record for a protected document
    pub fn new(filename: impl Into<String>, document: ProtectedDocument, batch_id: BatchId) -> Self {
        Self {
            filename: filename.into(),
            document,
            batch_id,
        }
    }

    /// The extracted identifier
    pub fn identifier(&self) -> &Cin {
        self.document.cin()
    }

    /// The open password, which is the identifier
    pub fn password(&self) -> &str {
        self.document.cin().as_str()
    }

    /// The encrypted document bytes
    pub fn protected_bytes(&self) -> &[u8] {
        self.document.bytes()
    }
}
