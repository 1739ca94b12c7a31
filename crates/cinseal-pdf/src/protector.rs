//! Password protection backed by lopdf

use crate::{PdfError, ProtectionPolicy};
use cinseal_domain::traits::DocumentProtector;
use cinseal_domain::{Cin, ProtectedDocument};
use lopdf::encryption::crypt_filters::{Aes128CryptFilter, CryptFilter};
use lopdf::{Document, EncryptionState, EncryptionVersion, Object, StringFormat};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Name of the standard crypt filter in the encryption dictionary
const CRYPT_FILTER_NAME: &[u8] = b"StdCF";

/// Applies AES-128 encryption with the CIN as owner and user password
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfProtector {
    policy: ProtectionPolicy,
}

impl PdfProtector {
    /// Create a protector with a specific permission policy
    pub fn new(policy: ProtectionPolicy) -> Self {
        Self { policy }
    }

    /// The permission policy written into protected documents
    pub fn policy(&self) -> &ProtectionPolicy {
        &self.policy
    }

    /// Ensure the trailer carries a file identifier
    ///
    /// The encryption key is derived from the first `/ID` entry, so documents
    /// without one get a content digest.
    fn ensure_file_id(document: &mut Document, source: &[u8]) {
        if document.trailer.get(b"ID").is_ok() {
            return;
        }

        let digest = Sha256::digest(source);
        let id = digest[..16].to_vec();
        document.trailer.set(
            "ID",
            Object::Array(vec![
                Object::String(id.clone(), StringFormat::Hexadecimal),
                Object::String(id, StringFormat::Hexadecimal),
            ]),
        );
    }
}

impl DocumentProtector for PdfProtector {
    type Error = PdfError;

    fn protect(&self, bytes: &[u8], password: &Cin) -> Result<ProtectedDocument, Self::Error> {
        let mut document = Document::load_mem(bytes).map_err(|e| PdfError::Load(e.to_string()))?;

        if document.is_encrypted() {
            return Err(PdfError::AlreadyEncrypted);
        }

        Self::ensure_file_id(&mut document, bytes);

        let crypt_filter: Arc<dyn CryptFilter> = Arc::new(Aes128CryptFilter);
        let version = EncryptionVersion::V4 {
            document: &document,
            encrypt_metadata: true,
            crypt_filters: BTreeMap::from([(CRYPT_FILTER_NAME.to_vec(), crypt_filter)]),
            stream_filter: CRYPT_FILTER_NAME.to_vec(),
            string_filter: CRYPT_FILTER_NAME.to_vec(),
            owner_password: password.as_str(),
            user_password: password.as_str(),
            permissions: self.policy.permissions(),
        };

        let state = EncryptionState::try_from(version)
            .map_err(|e| PdfError::Encryption(e.to_string()))?;
        document
            .encrypt(&state)
            .map_err(|e| PdfError::Encryption(e.to_string()))?;

        let mut output = Vec::with_capacity(bytes.len());
        document
            .save_to(&mut output)
            .map_err(|e| PdfError::Save(e.to_string()))?;

        debug!(
            "Protected document: {} bytes in, {} bytes out",
            bytes.len(),
            output.len()
        );

        Ok(ProtectedDocument::new(password.clone(), output))
    }
}
