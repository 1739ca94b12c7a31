//! Error types for pipeline operations

use std::path::PathBuf;
use thiserror::Error;

/// Why a single file was skipped
///
/// Never aborts a batch; each variant ends up in the file's
/// [`BatchOutcome::Skipped`](crate::BatchOutcome::Skipped).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FileError {
    /// The text contains no identifier
    #[error("No CIN found in {filename}")]
    NotFoundIdentifier {
        /// Source filename
        filename: String,
    },

    /// The text contains more than one identifier
    #[error("Multiple CINs found in {filename} ({count} matches)")]
    AmbiguousIdentifier {
        /// Source filename
        filename: String,
        /// Number of matches
        count: usize,
    },

    /// The file could not be read or its text could not be extracted
    #[error("Unreadable document: {0}")]
    UnreadableDocument(String),

    /// Encryption failed
    #[error("Protection failed: {0}")]
    ProtectionError(String),

    /// The record could not be persisted
    #[error("Storage failed: {0}")]
    StoreError(String),

    /// Neither transport delivered the mail
    #[error("Delivery failed: {0}")]
    TransportError(String),
}

/// Errors that abort a whole run
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The input folder is missing or cannot be listed
    #[error("Cannot read folder {}: {source}", path.display())]
    FolderUnreadable {
        /// Folder that was requested
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
