//! The attachment record supplied by the caller.

use crate::{MediaName, ReencryptionInfo};
use serde::{Deserialize, Serialize};

/// Content type used when a pointer carries none.
pub const APPLICATION_OCTET_STREAM: &str = "application/octet-stream";

/// Reference to a copy of the attachment on the backup tier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupLocatorInfo {
    /// Canonical media name of the blob
    pub media_name: MediaName,
    /// Backup CDN number, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cdn_number: Option<u32>,
}

/// Snapshot of an attachment record.
///
/// Stowage never owns attachments: the caller loads one, asks for a pointer,
/// and persists whatever updated copy comes back.
///
/// # Examples
///
/// ```
/// use stowage_core::Attachment;
///
/// let attachment = Attachment::default()
///     .with_size(100)
///     .with_path("ab/abcdef".to_string())
///     .with_key(vec![1; 64])
///     .with_digest(vec![2; 32]);
///
/// assert!(attachment.is_locally_saved());
/// assert!(attachment.is_decryptable());
/// assert!(!attachment.is_downloadable_from_transit_tier());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_setters::Setters)]
#[serde(rename_all = "camelCase", default)]
#[setters(prefix = "with_", strip_option)]
pub struct Attachment {
    /// MIME type of the plaintext
    pub content_type: String,
    /// Image/video width in pixels
    pub width: Option<u32>,
    /// Image/video height in pixels
    pub height: Option<u32>,
    /// Plaintext size in bytes; required for any resolution
    pub size: Option<u64>,
    /// Original file name
    pub file_name: Option<String>,
    /// User-supplied caption
    pub caption: Option<String>,
    /// Perceptual blur hash for placeholders
    pub blur_hash: Option<String>,
    /// Incremental MAC over the ciphertext chunks
    pub incremental_mac: Option<Vec<u8>>,
    /// Chunk size the incremental MAC was computed with
    pub chunk_size: Option<u32>,
    /// Path of the plaintext relative to the attachments directory
    pub path: Option<String>,
    /// On-disk format version of the local file
    pub version: Option<u32>,
    /// Key protecting the local-tier copy
    pub local_key: Option<Vec<u8>>,
    /// Remote encryption key
    pub key: Option<Vec<u8>>,
    /// Remote ciphertext digest
    pub digest: Option<Vec<u8>>,
    /// Initialization vector that reproduces `digest`
    pub iv: Option<Vec<u8>>,
    /// Transit tier upload key
    pub cdn_key: Option<String>,
    /// Transit tier CDN number
    pub cdn_number: Option<u32>,
    /// Transit upload time in milliseconds since the epoch
    pub upload_timestamp: Option<u64>,
    /// Previously validated backup tier reference
    pub backup_locator: Option<BackupLocatorInfo>,
    /// Fresh encryption triple when the original digest cannot be reproduced
    pub reencryption_info: Option<ReencryptionInfo>,
    /// Whether re-encrypting reproduces `digest` (unknown until checked)
    pub is_reencryptable_to_same_digest: Option<bool>,
    /// Where a pending download will be written
    pub download_path: Option<String>,
    /// Location of the copy inside a local backup
    pub local_backup_path: Option<String>,
    /// Set when a restored pointer carried no usable locator
    pub error: bool,
}

fn non_empty(bytes: &Option<Vec<u8>>) -> Option<&[u8]> {
    bytes.as_deref().filter(|b| !b.is_empty())
}

impl Attachment {
    /// Whether the plaintext is saved locally.
    pub fn is_locally_saved(&self) -> bool {
        self.path.as_deref().is_some_and(|path| !path.is_empty())
    }

    /// Whether both key and digest are known.
    pub fn is_decryptable(&self) -> bool {
        non_empty(&self.key).is_some() && non_empty(&self.digest).is_some()
    }

    /// Whether a restorer could fetch this from the transit tier.
    pub fn is_downloadable_from_transit_tier(&self) -> bool {
        self.is_decryptable()
            && self.cdn_key.as_deref().is_some_and(|key| !key.is_empty())
            && self.cdn_number.is_some()
    }

    /// Whether this carries a previously validated backup tier reference.
    pub fn is_downloadable_from_backup_tier(&self) -> bool {
        self.is_decryptable()
            && self
                .backup_locator
                .as_ref()
                .is_some_and(|locator| !locator.media_name.is_empty())
    }

    /// Whether re-encryption is known to reproduce the stored digest.
    pub fn is_reencryptable_to_same_digest(&self) -> bool {
        self.is_decryptable()
            && non_empty(&self.iv).is_some()
            && self.is_reencryptable_to_same_digest == Some(true)
    }

    /// Whether re-encryption is known to require the stored new triple.
    pub fn is_reencryptable_with_new_encryption_info(&self) -> bool {
        self.reencryption_info.is_some() && self.is_reencryptable_to_same_digest == Some(false)
    }

    /// The encryption triple an upload of this attachment must use.
    ///
    /// Returns `None` until reencryptability has been established.
    pub fn encryption_for_backup(&self) -> Option<ReencryptionInfo> {
        if self.is_reencryptable_to_same_digest() {
            return Some(ReencryptionInfo {
                key: self.key.clone().unwrap_or_default(),
                digest: self.digest.clone().unwrap_or_default(),
                iv: self.iv.clone().unwrap_or_default(),
            });
        }
        if self.is_reencryptable_with_new_encryption_info() {
            return self.reencryption_info.clone();
        }
        None
    }
}
