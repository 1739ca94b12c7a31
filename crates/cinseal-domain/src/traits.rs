//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the pipeline and its collaborators.
//! Infrastructure implementations live in other crates.

use crate::{Cin, FileRecord, Notification, ProtectedDocument, RecordId};
use std::future::Future;

/// Trait for turning raw document bytes into text
///
/// Implemented by the infrastructure layer (cinseal-pdf)
pub trait TextExtractor {
    /// Error type for extraction; corrupt, encrypted or non-PDF input
    type Error;

    /// Extract the full text of a document
    fn extract_text(&self, bytes: &[u8]) -> Result<String, Self::Error>;
}

/// Trait for applying password-based encryption to a document
///
/// Implemented by the infrastructure layer (cinseal-pdf)
pub trait DocumentProtector {
    /// Error type for protection operations
    type Error;

    /// Encrypt a document so that opening it requires `password`
    fn protect(&self, bytes: &[u8], password: &Cin) -> Result<ProtectedDocument, Self::Error>;
}

/// Trait for durably recording processed files
///
/// Implemented by the infrastructure layer (cinseal-store)
pub trait RecordStore {
    /// Error type for store operations
    type Error;

    /// Append a record; records are never updated or deleted
    fn append(&mut self, record: &FileRecord) -> Result<RecordId, Self::Error>;
}

/// Trait for delivering notifications
///
/// Implemented by the infrastructure layer (cinseal-notifier)
pub trait Notifier {
    /// Error type for delivery operations
    type Error;

    /// Deliver a notification, returning once it was accepted or finally failed
    fn send(
        &self,
        notification: &Notification,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}
