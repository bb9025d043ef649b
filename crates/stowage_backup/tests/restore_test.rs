//! Tests for turning pointers back into attachments.

mod test_utils;

use std::path::Path;
use stowage_backup::{RestoreOptions, attachment_from_pointer, local_backup_path};
use stowage_core::{
    APPLICATION_OCTET_STREAM, AttachmentLocator, BackupLocator, FilePointer, LocalLocator, Locator,
    MediaName,
};
use test_utils::*;

fn local_pointer(media_name: MediaName, backup_cdn_number: Option<u32>) -> FilePointer {
    FilePointer::default().with_locator(Locator::Local(LocalLocator {
        media_name,
        local_key: LOCAL_KEY.to_vec(),
        remote_key: KEY.to_vec(),
        remote_digest: DIGEST.to_vec(),
        size: 100,
        backup_cdn_number,
        transit_cdn_key: Some("transit-key".to_string()),
        transit_cdn_number: Some(3),
    }))
}

#[test]
fn test_transit_pointer_restores_transit_fields() {
    let pointer = FilePointer {
        content_type: Some("image/png".to_string()),
        caption: Some("sunset".to_string()),
        incremental_mac: Some(vec![1, 2, 3]),
        incremental_mac_chunk_size: Some(4096),
        ..FilePointer::default()
    }
    .with_locator(Locator::Attachment(AttachmentLocator {
        cdn_key: "transit-key".to_string(),
        cdn_number: 3,
        key: KEY.to_vec(),
        digest: Vec::new(),
        upload_timestamp: Some(0),
        size: 100,
    }));

    let attachment = attachment_from_pointer(&pointer, &RestoreOptions::default()).unwrap();

    assert_eq!(attachment.content_type, "image/png");
    assert_eq!(attachment.caption.as_deref(), Some("sunset"));
    assert_eq!(attachment.size, Some(100));
    assert_eq!(attachment.cdn_key.as_deref(), Some("transit-key"));
    assert_eq!(attachment.cdn_number, Some(3));
    assert_eq!(attachment.key, Some(KEY.to_vec()));
    assert!(attachment.digest.is_none());
    assert!(attachment.upload_timestamp.is_none());
    assert_eq!(attachment.incremental_mac, Some(vec![1, 2, 3]));
    assert_eq!(attachment.chunk_size, Some(4096));
    assert!(attachment.download_path.is_some());
    assert!(!attachment.error);
}

#[test]
fn test_backup_pointer_restores_backup_locator() {
    let pointer = FilePointer::default().with_locator(Locator::Backup(BackupLocator {
        media_name: name_of(&DIGEST),
        cdn_number: Some(2),
        key: KEY.to_vec(),
        digest: DIGEST.to_vec(),
        size: 100,
        transit_cdn_key: None,
        transit_cdn_number: None,
    }));

    let attachment = attachment_from_pointer(&pointer, &RestoreOptions::default()).unwrap();

    assert_eq!(attachment.content_type, APPLICATION_OCTET_STREAM);
    let backup = attachment.backup_locator.expect("Backup locator");
    assert_eq!(backup.media_name, name_of(&DIGEST));
    assert_eq!(backup.cdn_number, Some(2));
    assert!(attachment.cdn_key.is_none());
    assert_eq!(attachment.digest, Some(DIGEST.to_vec()));
}

#[test]
fn test_local_pointer_requires_snapshot_dir() {
    let pointer = local_pointer(name_of(&DIGEST), None);

    let err = attachment_from_pointer(&pointer, &RestoreOptions::default())
        .expect_err("Invariant violation");

    assert!(err.is_invariant_violation());
}

#[test]
fn test_local_pointer_restores_local_backup_path() {
    let options = RestoreOptions::for_snapshot("/backups/snapshot-1");
    let name = name_of(&DIGEST);

    let attachment = attachment_from_pointer(&local_pointer(name.clone(), None), &options).unwrap();

    let expected = Path::new("/backups/snapshot-1/../files")
        .join(&name.as_str()[..2])
        .join(name.as_str());
    assert_eq!(
        attachment.local_backup_path.as_deref(),
        Some(expected.to_string_lossy().as_ref())
    );
    assert_eq!(attachment.local_key, Some(LOCAL_KEY.to_vec()));
    assert_eq!(attachment.key, Some(KEY.to_vec()));
    assert!(attachment.backup_locator.is_none());

    let with_backup = attachment_from_pointer(&local_pointer(name.clone(), Some(2)), &options).unwrap();
    assert_eq!(with_backup.backup_locator.unwrap().cdn_number, Some(2));
}

#[test]
fn test_local_pointer_without_media_name_is_error_attachment() {
    let options = RestoreOptions::for_snapshot("/backups/snapshot-1");

    let attachment = attachment_from_pointer(&local_pointer(MediaName::default(), None), &options)
        .unwrap();

    assert!(attachment.error);
    assert_eq!(attachment.size, Some(0));
    assert!(attachment.download_path.is_none());
}

#[test]
fn test_invalid_pointer_is_error_attachment() {
    let pointer = FilePointer {
        file_name: Some("lost.bin".to_string()),
        ..FilePointer::default()
    };

    let attachment = attachment_from_pointer(&pointer, &RestoreOptions::default()).unwrap();

    assert!(attachment.error);
    assert_eq!(attachment.size, Some(0));
    assert_eq!(attachment.file_name.as_deref(), Some("lost.bin"));
    assert!(attachment.download_path.is_none());
}

#[test]
fn test_local_backup_path_shards_by_prefix() {
    let path = local_backup_path(&MediaName::new("abcdef"), Path::new("/snap"));
    assert_eq!(path, Path::new("/snap/../files/ab/abcdef"));
}
