//! Upload job payloads handed to the upload subsystem.

use crate::MediaName;
use serde::{Deserialize, Serialize};

/// Transit tier copy the uploader can copy from instead of re-uploading.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitCdnInfo {
    /// Transit upload key
    pub cdn_key: String,
    /// Transit CDN number
    pub cdn_number: u32,
    /// Transit upload time in milliseconds since the epoch
    pub upload_timestamp: Option<u64>,
}

/// Payload of a backup tier upload job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupJobData {
    /// Path of the plaintext relative to the attachments directory
    pub path: String,
    /// MIME type of the plaintext
    pub content_type: String,
    /// Encryption key to upload with
    pub key: Vec<u8>,
    /// Digest the upload must reproduce
    pub digest: Vec<u8>,
    /// Initialization vector to upload with
    pub iv: Vec<u8>,
    /// Plaintext size in bytes
    pub size: u64,
    /// On-disk format version of the local file
    pub version: Option<u32>,
    /// Local-tier key, carried along for the local copy
    pub local_key: Option<Vec<u8>>,
    /// Transit copy, when one exists
    pub transit_cdn_info: Option<TransitCdnInfo>,
}

/// Job uploading an attachment to the backup tier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentBackupJob {
    /// Media name the upload will be stored under
    pub media_name: MediaName,
    /// When the owning message was received, in milliseconds since the epoch
    pub received_at: u64,
    /// Upload payload
    pub data: BackupJobData,
}

/// Payload of a local backup copy job.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalBackupJobData {
    /// Path of the plaintext relative to the attachments directory
    pub path: String,
    /// Plaintext size in bytes
    pub size: u64,
    /// Key protecting the local copy
    pub local_key: Vec<u8>,
}

/// Job copying an attachment into a local backup snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalAttachmentBackupJob {
    /// Media name the copy will be stored under
    pub media_name: MediaName,
    /// Copy payload
    pub data: LocalBackupJobData,
}
