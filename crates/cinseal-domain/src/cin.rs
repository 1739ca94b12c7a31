//! CIN module - the identifying code extracted from each document

use std::fmt;

/// Length of every CIN, regardless of shape
pub const CIN_LENGTH: usize = 7;

/// An identifying code found in a document's text
///
/// Two shapes are valid, both seven characters long:
/// - one uppercase ASCII letter followed by six ASCII digits (`A123456`)
/// - two uppercase ASCII letters followed by five ASCII digits (`AB12345`)
///
/// The same value serves as the record key and as the document's open password.
/// No case folding is ever applied.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cin(String);

impl Cin {
    /// Parse a whole token as a CIN
    ///
    /// Unlike text scanning, the token must match one of the two shapes exactly.
    ///
    /// # Examples
    ///
    /// ```
    /// use cinseal_domain::Cin;
    ///
    /// assert!(Cin::parse("A123456").is_ok());
    /// assert!(Cin::parse("AB12345").is_ok());
    /// assert!(Cin::parse("ab12345").is_err());
    /// assert!(Cin::parse("A12345678").is_err());
    /// ```
    ///
    /// # Errors
    /// Returns error if the token does not have one of the two CIN shapes
    pub fn parse(value: &str) -> Result<Self, String> {
        if value.len() != CIN_LENGTH {
            return Err(format!(
                "CIN must be {} characters, got {}: {:?}",
                CIN_LENGTH,
                value.len(),
                value
            ));
        }

        let letters = value.bytes().take_while(|b| b.is_ascii_uppercase()).count();
        let digits_ok = value.bytes().skip(letters).all(|b| b.is_ascii_digit());

        match (letters, digits_ok) {
            (1, true) | (2, true) => Ok(Self(value.to_string())),
            _ => Err(format!(
                "CIN must be one uppercase letter and six digits or two uppercase letters and five digits: {:?}",
                value
            )),
        }
    }

    /// Get the CIN as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of leading letters (1 or 2)
    pub fn prefix_len(&self) -> usize {
        self.0.bytes().take_while(|b| b.is_ascii_uppercase()).count()
    }
}

impl fmt::Display for Cin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Cin {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Cin {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}
