//! Wire-level file pointers.

use crate::{Attachment, MediaName};
use serde::{Deserialize, Serialize};

/// Locator for a copy on the transit tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttachmentLocator {
    /// Opaque transit upload key
    pub cdn_key: String,
    /// Transit CDN number
    pub cdn_number: u32,
    /// Encryption key
    pub key: Vec<u8>,
    /// Ciphertext digest
    pub digest: Vec<u8>,
    /// Upload time in milliseconds since the epoch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_timestamp: Option<u64>,
    /// Plaintext size in bytes
    pub size: u64,
}

/// Locator for a content-addressed copy on the backup tier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BackupLocator {
    /// Canonical media name
    pub media_name: MediaName,
    /// Backup CDN number, when already uploaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cdn_number: Option<u32>,
    /// Encryption key
    pub key: Vec<u8>,
    /// Ciphertext digest
    pub digest: Vec<u8>,
    /// Plaintext size in bytes
    pub size: u64,
    /// Transit fallback upload key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transit_cdn_key: Option<String>,
    /// Transit fallback CDN number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transit_cdn_number: Option<u32>,
}

/// Locator for a copy embedded in a local backup snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocalLocator {
    /// Canonical media name
    pub media_name: MediaName,
    /// Key protecting the local copy
    pub local_key: Vec<u8>,
    /// Remote encryption key
    pub remote_key: Vec<u8>,
    /// Remote ciphertext digest
    pub remote_digest: Vec<u8>,
    /// Plaintext size in bytes
    pub size: u64,
    /// Backup CDN number, when the remote copy is on the backup tier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_cdn_number: Option<u32>,
    /// Transit fallback upload key
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transit_cdn_key: Option<String>,
    /// Transit fallback CDN number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transit_cdn_number: Option<u32>,
}

/// Marker payload for a pointer nothing can be retrieved from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InvalidAttachmentLocator {}

/// Exactly one way of retrieving the file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locator {
    /// Transit tier copy
    #[serde(rename = "attachmentLocator")]
    Attachment(AttachmentLocator),
    /// Backup tier copy
    #[serde(rename = "backupLocator")]
    Backup(BackupLocator),
    /// Local backup copy
    #[serde(rename = "localLocator")]
    Local(LocalLocator),
    /// No retrieval is possible
    #[serde(rename = "invalidAttachmentLocator")]
    Invalid(InvalidAttachmentLocator),
}

impl Default for Locator {
    fn default() -> Self {
        Locator::Invalid(InvalidAttachmentLocator {})
    }
}

/// Portable description of how to retrieve and decrypt one attachment.
///
/// # Examples
///
/// ```
/// use stowage_core::{Attachment, FilePointer, Locator};
///
/// let attachment = Attachment::default()
///     .with_content_type("image/png".to_string())
///     .with_width(800);
///
/// let pointer = FilePointer::for_attachment(&attachment);
/// assert_eq!(pointer.content_type.as_deref(), Some("image/png"));
/// assert!(pointer.is_invalid());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilePointer {
    /// MIME type of the plaintext
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Width in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Height in pixels
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Original file name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// Caption
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Perceptual blur hash
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blur_hash: Option<String>,
    /// Incremental MAC for streamed verification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incremental_mac: Option<Vec<u8>>,
    /// Chunk size for the incremental MAC
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub incremental_mac_chunk_size: Option<u32>,
    /// The single populated locator
    #[serde(flatten)]
    pub locator: Locator,
}

impl FilePointer {
    /// Pointer carrying the attachment's common fields and an invalid locator.
    ///
    /// The incremental MAC is only copied when it is non-empty and has a
    /// chunk size; records with one but not the other are treated as absent.
    pub fn for_attachment(attachment: &Attachment) -> Self {
        let incremental_mac = attachment
            .incremental_mac
            .as_ref()
            .filter(|mac| !mac.is_empty())
            .zip(attachment.chunk_size.filter(|size| *size > 0));

        Self {
            content_type: Some(attachment.content_type.clone()).filter(|ct| !ct.is_empty()),
            width: attachment.width,
            height: attachment.height,
            file_name: attachment.file_name.clone(),
            caption: attachment.caption.clone(),
            blur_hash: attachment.blur_hash.clone(),
            incremental_mac: incremental_mac.map(|(mac, _)| mac.clone()),
            incremental_mac_chunk_size: incremental_mac.map(|(_, size)| size),
            locator: Locator::default(),
        }
    }

    /// Replace the locator, keeping the common fields.
    pub fn with_locator(mut self, locator: Locator) -> Self {
        self.locator = locator;
        self
    }

    /// Whether no retrieval is possible.
    pub fn is_invalid(&self) -> bool {
        matches!(self.locator, Locator::Invalid(_))
    }

    /// The backup locator, if that is the populated variant.
    pub fn backup_locator(&self) -> Option<&BackupLocator> {
        match &self.locator {
            Locator::Backup(locator) => Some(locator),
            _ => None,
        }
    }

    /// The transit locator, if that is the populated variant.
    pub fn attachment_locator(&self) -> Option<&AttachmentLocator> {
        match &self.locator {
            Locator::Attachment(locator) => Some(locator),
            _ => None,
        }
    }

    /// The local locator, if that is the populated variant.
    pub fn local_locator(&self) -> Option<&LocalLocator> {
        match &self.locator {
            Locator::Local(locator) => Some(locator),
            _ => None,
        }
    }
}

/// A resolved pointer plus the attachment the caller should persist, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPointer {
    /// Pointer to embed in the backup
    pub file_pointer: FilePointer,
    /// Attachment with normalized encryption metadata
    pub updated_attachment: Option<Attachment>,
}

impl ResolvedPointer {
    /// A pointer with no attachment update.
    pub fn new(file_pointer: FilePointer) -> Self {
        Self {
            file_pointer,
            updated_attachment: None,
        }
    }

    /// A pointer plus an updated attachment.
    pub fn with_update(file_pointer: FilePointer, updated_attachment: Attachment) -> Self {
        Self {
            file_pointer,
            updated_attachment: Some(updated_attachment),
        }
    }
}
