//! Cinseal PDF Layer
//!
//! Implements the `TextExtractor` and `DocumentProtector` traits from
//! `cinseal-domain` on top of `pdf-extract` and `lopdf`.
//!
//! # Components
//!
//! - [`PdfTextExtractor`]: Full-text extraction; corrupt, encrypted or non-PDF
//!   input is reported as an error rather than a panic
//! - [`PdfProtector`]: Re-encrypts a document with AES-128, using the CIN as
//!   both owner and user password
//! - [`ProtectionPolicy`]: The permission set written into the encryption dictionary
//!
//! # Examples
//!
//! ```no_run
//! use cinseal_domain::Cin;
//! use cinseal_domain::traits::{DocumentProtector, TextExtractor};
//! use cinseal_pdf::{PdfProtector, PdfTextExtractor};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let bytes = std::fs::read("statement.pdf")?;
//! let text = PdfTextExtractor::new().extract_text(&bytes)?;
//!
//! let cin = Cin::parse("A123456")?;
//! let protected = PdfProtector::default().protect(&bytes, &cin)?;
//! std::fs::write("statement.protected.pdf", protected.bytes())?;
//! # let _ = text;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod error;
mod policy;
mod protector;
mod text;

pub use error::PdfError;
pub use policy::ProtectionPolicy;
pub use protector::PdfProtector;
pub use text::PdfTextExtractor;
