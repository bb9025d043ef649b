//! The restoring side: turning pointers back into attachment records.

use std::path::{Path, PathBuf};
use stowage_core::{
    APPLICATION_OCTET_STREAM, Attachment, BackupLocatorInfo, FilePointer, Locator, MediaName,
};
use stowage_error::{InvariantError, StowageResult};

/// Options for [`attachment_from_pointer`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RestoreOptions {
    /// Snapshot directory of the local backup being restored, required for
    /// local locators
    pub local_backup_snapshot_dir: Option<PathBuf>,
}

impl RestoreOptions {
    /// Options for restoring from a local backup snapshot.
    pub fn for_snapshot(dir: impl Into<PathBuf>) -> Self {
        Self {
            local_backup_snapshot_dir: Some(dir.into()),
        }
    }
}

/// Location of a media file inside a local backup.
///
/// Snapshots share a `files` directory next to them, sharded by the first two
/// characters of the media name.
pub fn local_backup_path(media_name: &MediaName, snapshot_dir: &Path) -> PathBuf {
    let name = media_name.as_str();
    let shard = name.get(..2).unwrap_or(name);
    snapshot_dir.join("..").join("files").join(shard).join(name)
}

/// Build the attachment record a restore starts from.
///
/// Pointers without a usable locator produce an attachment with `error` set,
/// a zero size and no download path.
///
/// # Errors
///
/// A local locator restored without a snapshot directory is an invariant
/// violation.
#[tracing::instrument(skip_all)]
pub fn attachment_from_pointer(
    file_pointer: &FilePointer,
    options: &RestoreOptions,
) -> StowageResult<Attachment> {
    let mut common = Attachment {
        content_type: file_pointer
            .content_type
            .clone()
            .filter(|content_type| !content_type.is_empty())
            .unwrap_or_else(|| APPLICATION_OCTET_STREAM.to_string()),
        width: file_pointer.width,
        height: file_pointer.height,
        file_name: file_pointer.file_name.clone(),
        caption: file_pointer.caption.clone(),
        blur_hash: file_pointer.blur_hash.clone(),
        download_path: Some(new_download_path()),
        ..Attachment::default()
    };

    if let (Some(mac), Some(chunk_size)) = (
        file_pointer.incremental_mac.as_ref().filter(|mac| !mac.is_empty()),
        file_pointer.incremental_mac_chunk_size.filter(|size| *size > 0),
    ) {
        common.incremental_mac = Some(mac.clone());
        common.chunk_size = Some(chunk_size);
    }

    let attachment = match &file_pointer.locator {
        Locator::Attachment(locator) => Attachment {
            size: Some(locator.size),
            cdn_key: Some(locator.cdn_key.clone()).filter(|key| !key.is_empty()),
            cdn_number: Some(locator.cdn_number),
            key: non_empty(&locator.key),
            digest: non_empty(&locator.digest),
            upload_timestamp: locator.upload_timestamp.filter(|ts| *ts > 0),
            ..common
        },
        Locator::Backup(locator) => Attachment {
            size: Some(locator.size),
            cdn_key: locator.transit_cdn_key.clone(),
            cdn_number: locator.transit_cdn_number,
            key: non_empty(&locator.key),
            digest: non_empty(&locator.digest),
            backup_locator: (!locator.media_name.is_empty()).then(|| BackupLocatorInfo {
                media_name: locator.media_name.clone(),
                cdn_number: locator.cdn_number,
            }),
            ..common
        },
        Locator::Local(locator) => {
            let snapshot_dir = options.local_backup_snapshot_dir.as_deref().ok_or_else(|| {
                InvariantError::new("localBackupSnapshotDir is required for localLocator")
            })?;

            if locator.media_name.is_empty() {
                tracing::error!("Local locator missing media name");
                return Ok(error_attachment(common));
            }

            Attachment {
                size: Some(locator.size),
                cdn_key: locator.transit_cdn_key.clone(),
                cdn_number: locator.transit_cdn_number,
                key: non_empty(&locator.remote_key),
                digest: non_empty(&locator.remote_digest),
                local_backup_path: Some(
                    local_backup_path(&locator.media_name, snapshot_dir)
                        .to_string_lossy()
                        .into_owned(),
                ),
                local_key: non_empty(&locator.local_key),
                backup_locator: locator.backup_cdn_number.map(|cdn_number| BackupLocatorInfo {
                    media_name: locator.media_name.clone(),
                    cdn_number: Some(cdn_number),
                }),
                ..common
            }
        }
        Locator::Invalid(_) => error_attachment(common),
    };

    Ok(attachment)
}

fn error_attachment(common: Attachment) -> Attachment {
    Attachment {
        size: Some(0),
        error: true,
        download_path: None,
        ..common
    }
}

fn non_empty(bytes: &[u8]) -> Option<Vec<u8>> {
    (!bytes.is_empty()).then(|| bytes.to_vec())
}

/// Fresh relative path for a pending download, sharded like stored files.
fn new_download_path() -> String {
    let name = uuid::Uuid::new_v4().simple().to_string();
    format!("{}/{}", &name[..2], name)
}
