//! Pointers for backups kept on this device.

use crate::FilePointerResolver;
use std::sync::Arc;
use stowage_core::{Attachment, BackupLevel, LocalLocator, Locator, ResolvedPointer};
use stowage_error::{InvariantError, StowageResult};
use stowage_media::{LocalAttachmentStore, media_name_from_digest};

/// Turns remote pointers into local backup pointers.
///
/// The local store is injected so existence checks never reach for global
/// path helpers.
#[derive(Clone)]
pub struct LocalBackupResolver {
    resolver: FilePointerResolver,
    store: Arc<dyn LocalAttachmentStore>,
}

impl LocalBackupResolver {
    /// Create a local backup resolver on top of a remote resolver.
    pub fn new(resolver: FilePointerResolver, store: Arc<dyn LocalAttachmentStore>) -> Self {
        Self { resolver, store }
    }

    /// Resolve a pointer referencing the local backup copy.
    ///
    /// Resolves the remote pointer first. When the file has disappeared
    /// locally or the attachment has no local key, the remote pointer is
    /// returned as-is; otherwise backup and transit locators become local
    /// locators. Invalid locators pass through.
    ///
    /// # Errors
    ///
    /// Propagates errors from [`FilePointerResolver::resolve_pointer`].
    #[tracing::instrument(skip(self, attachment, level), fields(level = %level))]
    pub async fn resolve_local_pointer(
        &self,
        attachment: &Attachment,
        level: BackupLevel,
    ) -> StowageResult<ResolvedPointer> {
        let remote = self.resolver.resolve_pointer(attachment, level).await?;

        let missing_locally = match attachment.path.as_deref() {
            Some(path) if !path.is_empty() => !self.store.exists(path),
            _ => true,
        };
        let local_key = attachment
            .local_key
            .as_ref()
            .filter(|key| !key.is_empty() && !missing_locally);

        let Some(local_key) = local_key else {
            tracing::debug!(missing_locally, "Falling back to remote pointer");
            return Ok(remote);
        };

        let local_locator = match &remote.file_pointer.locator {
            Locator::Backup(locator) => {
                if locator.media_name.is_empty() {
                    return Err(InvariantError::new("BackupLocator must have mediaName").into());
                }
                LocalLocator {
                    media_name: locator.media_name.clone(),
                    local_key: local_key.clone(),
                    remote_key: locator.key.clone(),
                    remote_digest: locator.digest.clone(),
                    size: locator.size,
                    backup_cdn_number: locator.cdn_number,
                    transit_cdn_key: locator.transit_cdn_key.clone(),
                    transit_cdn_number: locator.transit_cdn_number,
                }
            }
            Locator::Attachment(locator) => {
                if locator.digest.is_empty() {
                    return Err(InvariantError::new("AttachmentLocator must have digest").into());
                }
                LocalLocator {
                    media_name: media_name_from_digest(&locator.digest)?,
                    local_key: local_key.clone(),
                    remote_key: locator.key.clone(),
                    remote_digest: locator.digest.clone(),
                    size: locator.size,
                    backup_cdn_number: None,
                    transit_cdn_key: Some(locator.cdn_key.clone()),
                    transit_cdn_number: Some(locator.cdn_number),
                }
            }
            Locator::Local(_) | Locator::Invalid(_) => return Ok(remote),
        };

        let ResolvedPointer {
            file_pointer,
            updated_attachment,
        } = remote;

        Ok(ResolvedPointer {
            file_pointer: file_pointer.with_locator(Locator::Local(local_locator)),
            updated_attachment,
        })
    }
}
