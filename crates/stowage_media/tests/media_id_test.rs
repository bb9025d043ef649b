//! Tests for media name and media id derivation.

use stowage_core::{Attachment, BackupLocatorInfo, MediaName};
use stowage_error::StowageErrorKind;
use stowage_media::{
    MediaIdDeriver, MediaRootKey, media_name_for_attachment, media_name_from_digest,
};

fn root_key() -> MediaRootKey {
    let mut bytes = [0u8; 32];
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = i as u8;
    }
    MediaRootKey::from_bytes(bytes)
}

#[test]
fn test_media_name_is_lowercase_hex() {
    let name = media_name_from_digest(&[0xab; 32]).unwrap();
    assert_eq!(name.as_str(), "ab".repeat(32));
}

#[test]
fn test_media_id_known_vector() {
    let deriver = MediaIdDeriver::new(root_key());

    let id = deriver.media_id_for_digest(&[0xab; 32]).unwrap();
    assert_eq!(id.as_str(), "LGgeWpOSJJNP2JWK185L");
    assert_eq!(hex::encode(id.as_bytes()), "2c681e5a939224934fd8958ad7ce4b");

    // sha256("hello")
    let digest =
        hex::decode("2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824").unwrap();
    let id = deriver.media_id_for_digest(&digest).unwrap();
    assert_eq!(id.as_str(), "szqOIys7DlcDmiW09kKa");
}

#[test]
fn test_same_digest_same_id() {
    let a = MediaIdDeriver::new(root_key());
    let b = MediaIdDeriver::new(root_key());

    let digest = [0x42; 32];
    assert_eq!(
        a.media_id_for_digest(&digest).unwrap(),
        b.media_id_for_digest(&digest).unwrap()
    );
}

#[test]
fn test_different_digest_different_id() {
    let deriver = MediaIdDeriver::new(root_key());
    let first = deriver.media_id_for_digest(&[0x42; 32]).unwrap();
    let second = deriver.media_id_for_digest(&[0x43; 32]).unwrap();
    assert_ne!(first, second);
}

#[test]
fn test_root_key_scopes_ids() {
    let first = MediaIdDeriver::new(root_key());
    let second = MediaIdDeriver::new(MediaRootKey::from_bytes([9; 32]));

    let digest = [0x42; 32];
    assert_ne!(
        first.media_id_for_digest(&digest).unwrap(),
        second.media_id_for_digest(&digest).unwrap()
    );
}

#[test]
fn test_empty_digest_rejected() {
    let err = media_name_from_digest(&[]).unwrap_err();
    assert!(matches!(err.kind(), StowageErrorKind::MediaId(_)));
}

#[test]
fn test_undersized_digest_rejected() {
    let err = media_name_from_digest(&[1; 16]).unwrap_err();
    assert!(format!("{}", err).contains("must be 32 bytes, got 16"));
}

#[test]
fn test_empty_media_name_rejected() {
    let deriver = MediaIdDeriver::new(root_key());
    assert!(deriver.media_id(&MediaName::new("")).is_err());
}

#[test]
fn test_attachment_prefers_backup_locator_name() {
    let attachment = Attachment::default()
        .with_digest(vec![0x11; 32])
        .with_backup_locator(BackupLocatorInfo {
            media_name: MediaName::new("restored-name"),
            cdn_number: Some(3),
        });
    assert_eq!(
        media_name_for_attachment(&attachment).unwrap().as_str(),
        "restored-name"
    );

    let attachment = Attachment::default().with_digest(vec![0x11; 32]);
    assert_eq!(
        media_name_for_attachment(&attachment).unwrap().as_str(),
        "11".repeat(32)
    );
}

#[test]
fn test_root_key_from_hex() {
    let key = MediaRootKey::from_hex(&"00".repeat(32)).unwrap();
    assert_eq!(key, MediaRootKey::from_bytes([0; 32]));

    let err = MediaRootKey::from_hex("abcd").unwrap_err();
    assert!(matches!(err.kind(), StowageErrorKind::Config(_)));
    assert!(MediaRootKey::from_hex("zz").is_err());
    assert_eq!(format!("{:?}", key), "MediaRootKey([REDACTED])");
}
