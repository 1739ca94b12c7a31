//! Access permissions applied to protected documents

use lopdf::Permissions;

/// Permission set for protected documents
///
/// The defaults allow printing and deny modification, content extraction and
/// annotation changes. Form filling, accessibility extraction, assembly and
/// high-quality printing stay granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProtectionPolicy {
    /// Allow printing
    pub can_print: bool,

    /// Allow modifying the document contents
    pub can_modify: bool,

    /// Allow copying or extracting text and graphics
    pub can_extract_content: bool,

    /// Allow adding or modifying annotations
    pub can_modify_annotations: bool,
}

impl Default for ProtectionPolicy {
    fn default() -> Self {
        Self {
            can_print: true,
            can_modify: false,
            can_extract_content: false,
            can_modify_annotations: false,
        }
    }
}

impl ProtectionPolicy {
    /// Encryption key length in bits; fixed at 128 (AES-128)
    pub const KEY_LENGTH_BITS: usize = 128;

    /// Translate into the `/P` permission flags
    pub fn permissions(&self) -> Permissions {
        let mut permissions = Permissions::FILLABLE
            | Permissions::COPYABLE_FOR_ACCESSIBILITY
            | Permissions::ASSEMBLABLE
            | Permissions::PRINTABLE_IN_HIGH_QUALITY;

        if self.can_print {
            permissions |= Permissions::PRINTABLE;
        }
        if self.can_modify {
            permissions |= Permissions::MODIFIABLE;
        }
        if self.can_extract_content {
            permissions |= Permissions::COPYABLE;
        }
        if self.can_modify_annotations {
            permissions |= Permissions::ANNOTABLE;
        }

        permissions
    }
}
