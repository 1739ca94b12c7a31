//! Cinseal Extractor
//!
//! Finds the single identifying code (CIN) in a document's text.
//!
//! # Overview
//!
//! A CIN is either one uppercase letter followed by six digits or two uppercase
//! letters followed by five digits. The extractor scans the whole text for
//! CIN-shaped substrings and classifies the result:
//!
//! - no match → [`ExtractionResult::NotFound`]
//! - one match → [`ExtractionResult::Found`] with the verbatim substring
//! - several matches → [`ExtractionResult::Ambiguous`] with the count
//!
//! Several candidates are never resolved by picking one: the document is
//! rejected instead.
//!
//! # Architecture
//!
//! ```text
//! PDF bytes → TextExtractor → text → IdentifierExtractor → ExtractionResult
//! ```
//!
//! The extractor works on plain text only, so it can be exercised without any
//! document-loading machinery.
//!
//! # Example Usage
//!
//! ```
//! use cinseal_extractor::IdentifierExtractor;
//! use cinseal_domain::ExtractionResult;
//!
//! let extractor = IdentifierExtractor::new();
//!
//! let result = extractor.extract("Customer: AB12345, issued 2024");
//! assert!(matches!(result, ExtractionResult::Found(ref cin) if cin.as_str() == "AB12345"));
//!
//! let result = extractor.extract("A123456 and C654321");
//! assert_eq!(result, ExtractionResult::Ambiguous(2));
//! ```

#![warn(missing_docs)]

mod extractor;

#[cfg(test)]
mod tests;

pub use cinseal_domain::ExtractionResult;
pub use extractor::{extract, IdentifierExtractor, CIN_PATTERN};
