//! Core IdentifierExtractor implementation

use cinseal_domain::{Cin, ExtractionResult};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Unanchored CIN pattern: `A123456` or `AB12345`, ASCII digits only
///
/// Matches are found anywhere in the text, including inside longer
/// alphanumeric runs.
pub const CIN_PATTERN: &str = "[A-Z][0-9]{6}|[A-Z]{2}[0-9]{5}";

static CIN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(CIN_PATTERN).expect("CIN pattern is a valid regex"));

/// Scans document text for CIN-shaped substrings
#[derive(Debug, Clone, Copy)]
pub struct IdentifierExtractor {
    pattern: &'static Regex,
}

impl IdentifierExtractor {
    /// Create an extractor using the shared compiled pattern
    pub fn new() -> Self {
        Self {
            pattern: &CIN_REGEX,
        }
    }

    /// Classify a text by the number of CIN matches it contains
    pub fn extract(&self, text: &str) -> ExtractionResult {
        let candidates = self.candidates(text);
        debug!("Found {} CIN candidate(s) in {} chars", candidates.len(), text.len());
        ExtractionResult::from_matches(candidates)
    }

    /// All non-overlapping matches, left to right
    pub fn candidates(&self, text: &str) -> Vec<Cin> {
        self.pattern
            .find_iter(text)
            .filter_map(|m| Cin::parse(m.as_str()).ok())
            .collect()
    }

    /// Number of non-overlapping matches
    pub fn count(&self, text: &str) -> usize {
        self.pattern.find_iter(text).count()
    }
}

impl Default for IdentifierExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify a text with the shared extractor
pub fn extract(text: &str) -> ExtractionResult {
    IdentifierExtractor::new().extract(text)
}
