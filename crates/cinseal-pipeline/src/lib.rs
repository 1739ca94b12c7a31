//! Cinseal Pipeline
//!
//! Batch orchestration: every PDF in a folder is searched for its CIN,
//! encrypted with it, recorded and mailed.
//!
//! # Overview
//!
//! For each accepted file the [`FolderPipeline`] runs, in order:
//!
//! 1. **Read + extract text** via a [`TextExtractor`](cinseal_domain::traits::TextExtractor)
//! 2. **Identify** with [`IdentifierExtractor`](cinseal_extractor::IdentifierExtractor)
//! 3. **Protect** via a [`DocumentProtector`](cinseal_domain::traits::DocumentProtector)
//! 4. **Record** via a [`RecordStore`](cinseal_domain::traits::RecordStore)
//! 5. **Notify** via a [`Notifier`](cinseal_domain::traits::Notifier)
//!
//! Any step failing turns into a [`FileError`] for that file alone; the run
//! itself fails only when the folder cannot be listed.
//!
//! # Outcomes
//!
//! | Situation | Outcome |
//! |-----------|---------|
//! | Name does not end in `.pdf` | not listed |
//! | No identifier in text | `Skipped(NotFoundIdentifier)` |
//! | Several identifiers | `Skipped(AmbiguousIdentifier)` |
//! | Read/parse, encrypt, store or mail failure | `Skipped(..)` |
//! | Every step done | `Succeeded { identifier }` |
//!
//! # Configuration
//!
//! ```toml
//! [pipeline]
//! extension = "pdf"
//!
//! [pipeline.template]
//! subject_prefix = "Protected PDF: "
//! greeting = "Dear recipient,"
//! signoff = "Best regards"
//! ```
//!
//! # Preview
//!
//! [`scan_folder`] lists and extracts without side effects, for checking a
//! folder before sending anything.

#![warn(missing_docs)]

mod config;
mod error;
mod pipeline;
mod report;
mod scan;

pub use config::{MailTemplate, PipelineConfig};
pub use error::{FileError, PipelineError};
pub use pipeline::FolderPipeline;
pub use report::{BatchOutcome, BatchReport, FileOutcome};
pub use scan::{list_candidates, scan_folder, Candidate, ScanEntry, ScanOutcome};
