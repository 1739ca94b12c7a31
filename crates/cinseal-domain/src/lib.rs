//! Cinseal Domain Layer
//!
//! This crate contains the core value objects and trait interfaces for Cinseal.
//! Apart from `uuid` it has no external dependencies, and every other crate in
//! the workspace depends upon it.
//!
//! ## Key Concepts
//!
//! - **CIN**: The identifying code found in a document, also used as its password
//! - **Extraction Result**: Found / not found / ambiguous classification of a text
//! - **Protected Document**: Encrypted bytes tagged with the CIN that unlocks them
//! - **File Record**: The persisted tuple of filename, CIN, encrypted bytes and password
//! - **Notification**: An outbound mail carrying a protected document
//!
//! ## Architecture
//!
//! - Pure value objects only
//! - Infrastructure implementations (PDF, SQLite, SMTP) live in other crates
//! - Trait definitions for all external interactions

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod batch;
pub mod cin;
pub mod document;
pub mod extraction;
pub mod notification;
pub mod record;
pub mod traits;

// Re-exports for convenience
pub use batch::BatchId;
pub use cin::Cin;
pub use document::ProtectedDocument;
pub use extraction::ExtractionResult;
pub use notification::{MailAttachment, Notification};
pub use record::{FileRecord, RecordId};
