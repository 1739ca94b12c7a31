//! Text extraction backed by pdf-extract

use crate::PdfError;
use cinseal_domain::traits::TextExtractor;
use std::panic::{self, AssertUnwindSafe};
use tracing::debug;

/// Extracts the full text of a PDF
///
/// `pdf-extract` can panic on malformed input; panics are caught and reported
/// as [`PdfError::Extraction`] so a single bad file cannot take down a batch.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

impl PdfTextExtractor {
    /// Create a new extractor
    pub fn new() -> Self {
        Self
    }
}

impl TextExtractor for PdfTextExtractor {
    type Error = PdfError;

    fn extract_text(&self, bytes: &[u8]) -> Result<String, Self::Error> {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem(bytes)
        }));

        let text = match outcome {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => return Err(PdfError::Extraction(e.to_string())),
            Err(payload) => {
                let reason = payload
                    .downcast_ref::<&str>()
                    .map(|s| s.to_string())
                    .or_else(|| payload.downcast_ref::<String>().cloned())
                    .unwrap_or_else(|| "parser panicked".to_string());
                return Err(PdfError::Extraction(reason));
            }
        };

        debug!("Extracted {} chars from {} bytes", text.len(), bytes.len());
        Ok(text)
    }
}
