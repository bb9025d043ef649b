//! Re-encryption metadata.

use crate::Attachment;
use serde::{Deserialize, Serialize};

/// Freshly computed encryption triple for an attachment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReencryptionInfo {
    /// Combined AES + HMAC key
    pub key: Vec<u8>,
    /// SHA-256 digest of the resulting ciphertext
    pub digest: Vec<u8>,
    /// Initialization vector
    pub iv: Vec<u8>,
}

/// Outcome of the re-encryption routine.
///
/// The variant is the routine's explicit signal of which case applies; the
/// resolver never infers it from digest equality.
#[derive(Debug, Clone, PartialEq)]
pub enum Reencryptable {
    /// Re-encrypting reproduces the stored digest; `iv` is now populated.
    SameDigest(Attachment),
    /// A new key/digest/iv was generated and stored in `reencryption_info`.
    NewEncryptionInfo(Attachment),
}
