//! Error types for PDF operations

use thiserror::Error;

/// Errors that can occur while reading or protecting a PDF
#[derive(Error, Debug)]
pub enum PdfError {
    /// The bytes could not be parsed as a PDF
    #[error("Failed to load PDF: {0}")]
    Load(String),

    /// The input is already password protected
    #[error("PDF is already encrypted")]
    AlreadyEncrypted,

    /// Text could not be extracted
    #[error("Failed to extract text: {0}")]
    Extraction(String),

    /// Encryption could not be applied
    #[error("Encryption failed: {0}")]
    Encryption(String),

    /// The protected document could not be serialized
    #[error("Failed to save PDF: {0}")]
    Save(String),
}
