//! Mock collaborators for the resolver.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use stowage_backup::Reencryptor;
use stowage_core::{Attachment, BackupCdnInfo, MediaId, Reencryptable, ReencryptionInfo};
use stowage_error::{
    BackupCdnError, BackupCdnErrorKind, ReencryptionError, ReencryptionErrorKind, StowageResult,
};
use stowage_media::{BackupCdnInfoLookup, InMemoryBackupCdnIndex};

/// Tier-presence lookup that counts calls and can be made to fail.
#[derive(Default)]
pub struct CountingCdnLookup {
    pub index: InMemoryBackupCdnIndex,
    calls: AtomicUsize,
    fail: bool,
}

impl CountingCdnLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BackupCdnInfoLookup for CountingCdnLookup {
    async fn backup_cdn_info(&self, media_id: &MediaId) -> StowageResult<BackupCdnInfo> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(BackupCdnError::new(BackupCdnErrorKind::Unavailable(
                "mock offline".to_string(),
            ))
            .into());
        }
        self.index.backup_cdn_info(media_id).await
    }
}

/// What the mock re-encryption routine answers.
#[derive(Debug, Clone)]
pub enum ReencryptBehavior {
    /// Re-encryption reproduces the digest with this iv
    SameDigest(Vec<u8>),
    /// Re-encryption needs this fresh triple
    NewInfo(ReencryptionInfo),
    /// The plaintext could not be read
    Fail,
}

/// Re-encryption routine that counts calls.
pub struct MockReencryptor {
    behavior: ReencryptBehavior,
    calls: AtomicUsize,
}

impl MockReencryptor {
    pub fn new(behavior: ReencryptBehavior) -> Self {
        Self {
            behavior,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Reencryptor for MockReencryptor {
    async fn ensure_reencryptable(&self, attachment: &Attachment) -> StowageResult<Reencryptable> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            ReencryptBehavior::SameDigest(iv) => Ok(Reencryptable::SameDigest(
                attachment.clone().with_iv(iv.clone()),
            )),
            ReencryptBehavior::NewInfo(info) => Ok(Reencryptable::NewEncryptionInfo(
                attachment.clone().with_reencryption_info(info.clone()),
            )),
            ReencryptBehavior::Fail => Err(ReencryptionError::new(ReencryptionErrorKind::Io(
                "mock unreadable".to_string(),
            ))
            .into()),
        }
    }
}
