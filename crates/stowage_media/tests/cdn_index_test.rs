//! Tests for the in-memory backup tier index.

use stowage_core::BackupCdnInfo;
use stowage_media::{BackupCdnInfoLookup, InMemoryBackupCdnIndex, MediaIdDeriver, MediaRootKey};

#[tokio::test]
async fn test_unknown_media_not_in_backup_tier() {
    let index = InMemoryBackupCdnIndex::new();
    let deriver = MediaIdDeriver::new(MediaRootKey::from_bytes([1; 32]));
    let id = deriver.media_id_for_digest(&[5; 32]).unwrap();

    let info = index.backup_cdn_info(&id).await.unwrap();
    assert_eq!(info, BackupCdnInfo::NotInBackupTier);
    assert!(!info.is_in_backup_tier());
    assert!(info.cdn_number().is_none());
}

#[tokio::test]
async fn test_insert_and_remove() {
    let index = InMemoryBackupCdnIndex::new();
    let deriver = MediaIdDeriver::new(MediaRootKey::from_bytes([1; 32]));
    let id = deriver.media_id_for_digest(&[5; 32]).unwrap();

    index.insert(&id, 3).await;
    assert_eq!(index.len().await, 1);
    assert_eq!(index.backup_cdn_info(&id).await.unwrap().cdn_number(), Some(3));

    assert!(index.remove(&id).await);
    assert!(index.is_empty().await);
    assert!(!index.remove(&id).await);
}
