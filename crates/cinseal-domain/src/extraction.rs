//! Extraction result module

use crate::Cin;

/// Classification of a text blob after scanning it for CINs
///
/// Produced once per document and never mutated. Only a text containing
/// exactly one match yields a [`Cin`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionResult {
    /// Exactly one CIN-shaped substring was found
    Found(Cin),

    /// No CIN-shaped substring was found
    NotFound,

    /// More than one CIN-shaped substring was found; carries the match count
    Ambiguous(usize),
}

impl ExtractionResult {
    /// Classify a match count, taking the identifier only when it is unique
    pub fn from_matches(mut matches: Vec<Cin>) -> Self {
        match matches.len() {
            0 => Self::NotFound,
            1 => matches.pop().map(Self::Found).unwrap_or(Self::NotFound),
            count => Self::Ambiguous(count),
        }
    }

    /// The identifier, if exactly one was found
    pub fn cin(&self) -> Option<&Cin> {
        match self {
            Self::Found(cin) => Some(cin),
            _ => None,
        }
    }

    /// Whether a unique identifier was found
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}
