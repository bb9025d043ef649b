//! Pointer resolution for the transit and backup tiers.

use crate::Reencryptor;
use crate::redact::redact_digest;
use std::sync::Arc;
use stowage_core::{
    Attachment, AttachmentLocator, BackupCdnInfo, BackupLevel, BackupLocator, BackupLocatorInfo,
    FilePointer, Locator, MediaName, Reencryptable, ResolvedPointer,
};
use stowage_error::{InvariantError, StowageResult};
use stowage_media::{BackupCdnInfoLookup, MediaIdDeriver, media_name_from_digest};
use tracing::{debug, warn};

/// Resolves attachments into file pointers.
///
/// Holds the media id deriver and the two external collaborators the
/// decision tree may call: the tier-presence lookup and the re-encryption
/// routine. Cheap to clone and safe to share across tasks.
#[derive(Clone)]
pub struct FilePointerResolver {
    media_ids: MediaIdDeriver,
    cdn_info: Arc<dyn BackupCdnInfoLookup>,
    reencryptor: Arc<dyn Reencryptor>,
}

impl FilePointerResolver {
    /// Create a resolver.
    pub fn new(
        media_ids: MediaIdDeriver,
        cdn_info: Arc<dyn BackupCdnInfoLookup>,
        reencryptor: Arc<dyn Reencryptor>,
    ) -> Self {
        Self {
            media_ids,
            cdn_info,
            reencryptor,
        }
    }

    /// Resolve the pointer for an attachment at the given backup level.
    ///
    /// Arms are tried in order and the first match wins:
    ///
    /// 1. no size: invalid
    /// 2. not saved locally: the stored backup locator (paid only), else
    ///    transit, else invalid
    /// 3. saved locally, free: transit, else invalid
    /// 4. saved locally, paid: backup tier, re-encrypting if needed
    ///
    /// Missing data and re-encryption failures yield an invalid locator.
    ///
    /// # Errors
    ///
    /// Tier-presence lookup failures propagate, as do broken re-encryption
    /// contracts (a new-encryption outcome without reencryption info).
    #[tracing::instrument(
        skip(self, attachment, level),
        fields(digest = %redact_digest(attachment.digest.as_deref()), level = %level)
    )]
    pub async fn resolve_pointer(
        &self,
        attachment: &Attachment,
        level: BackupLevel,
    ) -> StowageResult<ResolvedPointer> {
        let pointer = FilePointer::for_attachment(attachment);

        let locator = match (attachment.size, attachment.is_locally_saved(), level) {
            (None, _, _) => {
                warn!("Attachment had nullish size, dropping");
                Locator::default()
            }
            // Undownloaded: the digest is unverified, so only a locator that
            // was validated in the past may reference the backup tier.
            (Some(size), false, BackupLevel::Paid)
                if attachment.is_downloadable_from_backup_tier() =>
            {
                debug!("Reusing stored backup locator for undownloaded attachment");
                Locator::Backup(stored_backup_locator(attachment, size))
            }
            (Some(size), false, _) if attachment.is_downloadable_from_transit_tier() => {
                Locator::Attachment(transit_locator(attachment, size))
            }
            (Some(_), false, _) => {
                warn!("Undownloaded attachment has no retrievable copy");
                Locator::default()
            }
            (Some(size), true, BackupLevel::Free)
                if attachment.is_downloadable_from_transit_tier() =>
            {
                Locator::Attachment(transit_locator(attachment, size))
            }
            (Some(_), true, BackupLevel::Free) => {
                warn!("Attachment is downloaded but we lack information to decrypt it");
                Locator::default()
            }
            (Some(size), true, BackupLevel::Paid) => {
                return self.resolve_for_backup_tier(attachment, size, pointer).await;
            }
        };

        Ok(ResolvedPointer::new(pointer.with_locator(locator)))
    }

    /// Locally saved attachment headed to (or already on) the backup tier.
    async fn resolve_for_backup_tier(
        &self,
        attachment: &Attachment,
        size: u64,
        pointer: FilePointer,
    ) -> StowageResult<ResolvedPointer> {
        let current_media_name = attachment
            .digest
            .as_deref()
            .filter(|digest| !digest.is_empty())
            .and_then(|digest| match media_name_from_digest(digest) {
                Ok(name) => Some(name),
                Err(e) => {
                    warn!(error = %e, "Stored digest is malformed, ignoring it");
                    None
                }
            });

        let current_cdn_info = match &current_media_name {
            Some(media_name) => self.lookup(media_name).await?,
            None => BackupCdnInfo::NotInBackupTier,
        };

        match (&current_media_name, current_cdn_info) {
            (Some(media_name), BackupCdnInfo::InBackupTier { cdn_number })
                if attachment.is_decryptable() =>
            {
                debug!(%media_name, cdn_number, "Attachment already on backup tier");
                let locator = BackupLocator {
                    media_name: media_name.clone(),
                    cdn_number: Some(cdn_number),
                    key: attachment.key.clone().unwrap_or_default(),
                    digest: attachment.digest.clone().unwrap_or_default(),
                    size,
                    transit_cdn_key: attachment.cdn_key.clone(),
                    transit_cdn_number: attachment.cdn_number,
                };
                return Ok(ResolvedPointer::new(
                    pointer.with_locator(Locator::Backup(locator)),
                ));
            }
            _ => {}
        }

        let reencryptable = match known_reencryptability(attachment) {
            Some(reencryptable) => reencryptable,
            None => match self.reencryptor.ensure_reencryptable(attachment).await {
                Ok(reencryptable) => reencryptable,
                Err(e) => {
                    warn!(error = %e, "Unable to ensure attachment is reencryptable");
                    return Ok(ResolvedPointer::new(pointer));
                }
            },
        };

        match reencryptable {
            Reencryptable::SameDigest(mut updated) => {
                updated.is_reencryptable_to_same_digest = Some(true);
                let digest = updated
                    .digest
                    .clone()
                    .filter(|digest| !digest.is_empty())
                    .ok_or_else(|| {
                        InvariantError::new("Attachment reencryptable to same digest has no digest")
                    })?;
                let media_name = media_name_from_digest(&digest)?;
                let cdn_number = if current_media_name.as_ref() == Some(&media_name) {
                    current_cdn_info.cdn_number()
                } else {
                    None
                };

                debug!(%media_name, "Attachment reencryptable to its original digest");
                let locator = BackupLocator {
                    media_name,
                    cdn_number,
                    key: updated.key.clone().unwrap_or_default(),
                    digest,
                    size,
                    transit_cdn_key: updated.cdn_key.clone(),
                    transit_cdn_number: updated.cdn_number,
                };
                Ok(ResolvedPointer::with_update(
                    pointer.with_locator(Locator::Backup(locator)),
                    updated,
                ))
            }
            Reencryptable::NewEncryptionInfo(mut updated) => {
                updated.is_reencryptable_to_same_digest = Some(false);
                let info = updated.reencryption_info.clone().ok_or_else(|| {
                    InvariantError::new(
                        "Reencryption info must exist if not reencryptable to original digest",
                    )
                })?;

                // The new triple becomes the attachment's own. The transit copy
                // was encrypted under the old one and no longer matches.
                updated.key = Some(info.key.clone());
                updated.digest = Some(info.digest.clone());
                updated.iv = Some(info.iv.clone());
                updated.cdn_key = None;
                updated.cdn_number = None;
                updated.upload_timestamp = None;

                // A new digest is a different object on the backup tier.
                let media_name = media_name_from_digest(&info.digest)?;
                let cdn_info = self.lookup(&media_name).await?;

                // A stored locator names the old blob; only the new one may be
                // referenced from now on.
                updated.backup_locator = cdn_info.cdn_number().map(|cdn_number| {
                    BackupLocatorInfo {
                        media_name: media_name.clone(),
                        cdn_number: Some(cdn_number),
                    }
                });

                debug!(%media_name, "Attachment needs new encryption info");
                let locator = BackupLocator {
                    media_name,
                    cdn_number: cdn_info.cdn_number(),
                    key: info.key,
                    digest: info.digest,
                    size,
                    transit_cdn_key: None,
                    transit_cdn_number: None,
                };
                Ok(ResolvedPointer::with_update(
                    pointer.with_locator(Locator::Backup(locator)),
                    updated,
                ))
            }
        }
    }

    pub(crate) async fn lookup(&self, media_name: &MediaName) -> StowageResult<BackupCdnInfo> {
        let media_id = self.media_ids.media_id(media_name)?;
        self.cdn_info.backup_cdn_info(&media_id).await
    }
}

/// Reencryptability already recorded on the attachment by an earlier pass.
fn known_reencryptability(attachment: &Attachment) -> Option<Reencryptable> {
    if attachment.is_reencryptable_to_same_digest() {
        Some(Reencryptable::SameDigest(attachment.clone()))
    } else if attachment.is_reencryptable_with_new_encryption_info() {
        Some(Reencryptable::NewEncryptionInfo(attachment.clone()))
    } else {
        None
    }
}

fn transit_locator(attachment: &Attachment, size: u64) -> AttachmentLocator {
    AttachmentLocator {
        cdn_key: attachment.cdn_key.clone().unwrap_or_default(),
        cdn_number: attachment.cdn_number.unwrap_or_default(),
        key: attachment.key.clone().unwrap_or_default(),
        digest: attachment.digest.clone().unwrap_or_default(),
        upload_timestamp: attachment.upload_timestamp,
        size,
    }
}

fn stored_backup_locator(attachment: &Attachment, size: u64) -> BackupLocator {
    let (media_name, cdn_number) = attachment
        .backup_locator
        .as_ref()
        .map(|locator| (locator.media_name.clone(), locator.cdn_number))
        .unwrap_or_default();

    BackupLocator {
        media_name,
        cdn_number,
        key: attachment.key.clone().unwrap_or_default(),
        digest: attachment.digest.clone().unwrap_or_default(),
        size,
        transit_cdn_key: attachment.cdn_key.clone(),
        transit_cdn_number: attachment.cdn_number,
    }
}
