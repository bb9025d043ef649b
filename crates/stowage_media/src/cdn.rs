//! Tier-presence lookups.

use std::collections::HashMap;
use stowage_core::{BackupCdnInfo, MediaId};
use stowage_error::StowageResult;
use tokio::sync::RwLock;

/// Answers whether a media id's blob already exists on the backup tier.
///
/// Implementations must be idempotent and side-effect free. Failures are
/// never guessed away by the caller: assuming "absent" duplicates uploads and
/// assuming "present" loses data on restore.
#[async_trait::async_trait]
pub trait BackupCdnInfoLookup: Send + Sync {
    /// Look up the backup tier state of one media id.
    ///
    /// # Errors
    ///
    /// Returns a `BackupCdnError` if the lookup backend cannot answer.
    async fn backup_cdn_info(&self, media_id: &MediaId) -> StowageResult<BackupCdnInfo>;
}

/// In-memory index of media ids known to be on the backup tier.
///
/// Useful when the caller has listed the backup tier up front and wants to
/// answer lookups without further round trips.
///
/// # Example
///
/// ```rust
/// use stowage_core::{BackupCdnInfo, MediaId};
/// use stowage_media::{BackupCdnInfoLookup, InMemoryBackupCdnIndex};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let index = InMemoryBackupCdnIndex::new();
/// let id = MediaId::new(vec![1; 15], "AQEBAQEBAQEBAQEBAQEB".to_string());
///
/// index.insert(&id, 3).await;
/// assert_eq!(
///     index.backup_cdn_info(&id).await?,
///     BackupCdnInfo::InBackupTier { cdn_number: 3 }
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct InMemoryBackupCdnIndex {
    entries: RwLock<HashMap<String, u32>>,
}

impl InMemoryBackupCdnIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that a media id is on the backup tier at the given CDN.
    #[tracing::instrument(skip(self, media_id), fields(media_id = %media_id))]
    pub async fn insert(&self, media_id: &MediaId, cdn_number: u32) {
        self.entries
            .write()
            .await
            .insert(media_id.as_str().to_string(), cdn_number);
        tracing::debug!("Recorded media on backup tier");
    }

    /// Forget a media id (for example after the backup tier expired it).
    pub async fn remove(&self, media_id: &MediaId) -> bool {
        self.entries.write().await.remove(media_id.as_str()).is_some()
    }

    /// Number of media ids in the index.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether the index is empty.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl BackupCdnInfoLookup for InMemoryBackupCdnIndex {
    async fn backup_cdn_info(&self, media_id: &MediaId) -> StowageResult<BackupCdnInfo> {
        let info = match self.entries.read().await.get(media_id.as_str()) {
            Some(cdn_number) => BackupCdnInfo::InBackupTier {
                cdn_number: *cdn_number,
            },
            None => BackupCdnInfo::NotInBackupTier,
        };
        Ok(info)
    }
}
