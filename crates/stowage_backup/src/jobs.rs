//! Upload job derivation.

use crate::FilePointerResolver;
use stowage_core::{
    Attachment, AttachmentBackupJob, BackupJobData, FilePointer, LocalAttachmentBackupJob,
    LocalBackupJobData, TransitCdnInfo,
};
use stowage_error::{InvariantError, StowageResult};

impl FilePointerResolver {
    /// Upload job placing the attachment on the backup tier, if one is needed.
    ///
    /// Returns `None` unless the pointer holds a backup locator whose media
    /// id is not yet on the backup tier. Pass the updated attachment from
    /// [`FilePointerResolver::resolve_pointer`] when there was one.
    ///
    /// # Errors
    ///
    /// Lookup failures propagate. An attachment without a local file, without
    /// established encryption info, or whose digest differs from the
    /// locator's is an invariant violation.
    #[tracing::instrument(skip(self, attachment, file_pointer))]
    pub async fn backup_job_for_pointer(
        &self,
        attachment: &Attachment,
        file_pointer: &FilePointer,
        received_at: u64,
    ) -> StowageResult<Option<AttachmentBackupJob>> {
        let Some(locator) = file_pointer.backup_locator() else {
            return Ok(None);
        };
        if locator.media_name.is_empty() {
            return Err(InvariantError::new("mediaName must exist on backupLocator").into());
        }

        if self.lookup(&locator.media_name).await?.is_in_backup_tier() {
            tracing::debug!(media_name = %locator.media_name, "Already on backup tier, no job");
            return Ok(None);
        }

        let path = attachment
            .path
            .clone()
            .filter(|path| !path.is_empty())
            .ok_or_else(|| {
                InvariantError::new("Attachment must be saved locally for it to be backed up")
            })?;

        let encryption = attachment
            .encryption_for_backup()
            .ok_or_else(|| InvariantError::new("Attachment must have established encryption info"))?;

        if locator.digest.is_empty() {
            return Err(InvariantError::new("digest must exist on backupLocator").into());
        }
        if encryption.digest != locator.digest {
            return Err(InvariantError::new("digest on job and backupLocator must match").into());
        }

        let transit_cdn_info = match (&locator.transit_cdn_key, locator.transit_cdn_number) {
            (Some(cdn_key), Some(cdn_number)) => Some(TransitCdnInfo {
                cdn_key: cdn_key.clone(),
                cdn_number,
                upload_timestamp: attachment.upload_timestamp,
            }),
            _ => None,
        };

        tracing::debug!(media_name = %locator.media_name, "Backup job needed");
        Ok(Some(AttachmentBackupJob {
            media_name: locator.media_name.clone(),
            received_at,
            data: BackupJobData {
                path,
                content_type: attachment.content_type.clone(),
                key: encryption.key,
                digest: encryption.digest,
                iv: encryption.iv,
                size: attachment.size.unwrap_or(locator.size),
                version: attachment.version,
                local_key: attachment.local_key.clone(),
                transit_cdn_info,
            },
        }))
    }
}

/// Copy job placing the attachment into a local backup snapshot.
///
/// Returns `None` unless the pointer holds a local locator.
///
/// # Errors
///
/// An attachment without a local file, or a local locator without a media
/// name or local key, is an invariant violation.
pub fn local_backup_job_for_pointer(
    attachment: &Attachment,
    file_pointer: &FilePointer,
) -> StowageResult<Option<LocalAttachmentBackupJob>> {
    let Some(locator) = file_pointer.local_locator() else {
        return Ok(None);
    };

    let path = attachment
        .path
        .clone()
        .filter(|path| !path.is_empty())
        .ok_or_else(|| InvariantError::new("Attachment must be saved locally for it to be backed up"))?;

    // TODO: skip files already present in the snapshot once local backups
    // share blobs by media name.

    if locator.media_name.is_empty() {
        return Err(InvariantError::new("mediaName must exist on localLocator").into());
    }
    if locator.local_key.is_empty() {
        return Err(InvariantError::new("localKey must exist on localLocator").into());
    }

    Ok(Some(LocalAttachmentBackupJob {
        media_name: locator.media_name.clone(),
        data: LocalBackupJobData {
            path,
            size: attachment.size.unwrap_or(locator.size),
            local_key: locator.local_key.clone(),
        },
    }))
}
