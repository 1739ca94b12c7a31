//! Protected document module

use crate::Cin;

/// Encrypted form of a source document
///
/// Created once per source file by a [`DocumentProtector`](crate::traits::DocumentProtector)
/// and never re-derived. Opening the bytes requires the tagged CIN as password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtectedDocument {
    cin: Cin,
    bytes: Vec<u8>,
}

impl ProtectedDocument {
    /// Tag encrypted bytes with the CIN used as their password
    pub fn new(cin: Cin, bytes: Vec<u8>) -> Self {
        Self { cin, bytes }
    }

    /// The CIN that unlocks this document
    pub fn cin(&self) -> &Cin {
        &self.cin
    }

    /// The encrypted bytes
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Size of the encrypted bytes
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the encrypted payload is empty
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
