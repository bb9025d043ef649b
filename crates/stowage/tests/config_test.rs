//! Tests for configuration loading and the builders it feeds.

use async_trait::async_trait;
use std::io::Write;
use std::sync::Arc;
use stowage::{
    Attachment, BackupLevel, InMemoryBackupCdnIndex, LocalAttachmentStore, Reencryptable,
    Reencryptor, StowageConfig, StowageErrorKind, StowageResult,
};
use tempfile::{NamedTempFile, TempDir};

const ROOT_KEY: &str = "000102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f";

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("Temp file");
    file.write_all(contents.as_bytes()).expect("Write config");
    file
}

/// Reencryptor that always reproduces the stored digest.
struct SameDigestReencryptor;

#[async_trait]
impl Reencryptor for SameDigestReencryptor {
    async fn ensure_reencryptable(&self, attachment: &Attachment) -> StowageResult<Reencryptable> {
        Ok(Reencryptable::SameDigest(
            attachment.clone().with_iv(vec![7; 16]),
        ))
    }
}

#[test]
fn test_from_file_reads_all_sections() {
    let file = write_config(&format!(
        r#"
[backup]
level = "paid"

[media]
root_key = "{ROOT_KEY}"

[storage]
attachments_dir = "/tmp/stowage-attachments"
local_backup_snapshot_dir = "/tmp/stowage-backup/snapshot-1"
"#
    ));

    let config = StowageConfig::from_file(file.path()).expect("Config loads");

    assert_eq!(*config.backup().level(), BackupLevel::Paid);
    assert_eq!(config.media().root_key().as_deref(), Some(ROOT_KEY));
    assert_eq!(
        config.storage().attachments_dir().to_str(),
        Some("/tmp/stowage-attachments")
    );
    assert!(config.media_root_key().is_ok());
    assert!(config.restore_options().local_backup_snapshot_dir.is_some());
}

#[test]
fn test_missing_sections_use_defaults() {
    let file = write_config("[backup]\nlevel = \"free\"\n");

    let config = StowageConfig::from_file(file.path()).expect("Config loads");

    assert_eq!(*config.backup().level(), BackupLevel::Free);
    assert!(config.media().root_key().is_none());
    assert_eq!(config.storage().attachments_dir().to_str(), Some("attachments"));
    assert!(config.restore_options().local_backup_snapshot_dir.is_none());
}

#[test]
fn test_unknown_level_is_config_error() {
    let file = write_config("[backup]\nlevel = \"platinum\"\n");

    let err = StowageConfig::from_file(file.path()).expect_err("Parse failure");

    assert!(matches!(err.kind(), StowageErrorKind::Config(_)));
}

#[test]
fn test_missing_file_is_config_error() {
    let err = StowageConfig::from_file("/nonexistent/stowage.toml").expect_err("Read failure");
    assert!(matches!(err.kind(), StowageErrorKind::Config(_)));
}

#[test]
fn test_root_key_validation() {
    let missing = StowageConfig::default();
    assert!(matches!(
        missing.media_root_key().unwrap_err().kind(),
        StowageErrorKind::Config(_)
    ));

    let short = StowageConfig::default().with_root_key("abcd");
    assert!(matches!(
        short.media_root_key().unwrap_err().kind(),
        StowageErrorKind::Config(_)
    ));

    let not_hex = StowageConfig::default().with_root_key("z".repeat(64));
    assert!(not_hex.media_root_key().is_err());
}

#[test]
fn test_bundled_defaults_load() {
    let config = StowageConfig::load().expect("Bundled defaults parse");
    assert!(!config.storage().attachments_dir().as_os_str().is_empty());
}

#[tokio::test]
async fn test_configured_resolver_targets_backup_tier() {
    let config = StowageConfig::default()
        .with_level(BackupLevel::Paid)
        .with_root_key(ROOT_KEY);
    let resolver = config
        .resolver(
            Arc::new(InMemoryBackupCdnIndex::new()),
            Arc::new(SameDigestReencryptor),
        )
        .expect("Resolver builds");

    let attachment = Attachment::default()
        .with_size(10)
        .with_path("ab/abab".to_string())
        .with_key(vec![1; 64])
        .with_digest(vec![0xab; 32]);

    let resolved = resolver
        .resolve_pointer(&attachment, *config.backup().level())
        .await
        .unwrap();

    let locator = resolved.file_pointer.backup_locator().expect("Backup locator");
    assert_eq!(locator.media_name.as_str(), "ab".repeat(32));
}

#[tokio::test]
async fn test_configured_local_resolver_uses_attachments_dir() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("ab")).unwrap();
    std::fs::write(dir.path().join("ab/abab"), b"plaintext").unwrap();

    let config = StowageConfig::default()
        .with_root_key(ROOT_KEY)
        .with_attachments_dir(dir.path());

    let store = config.attachment_store().unwrap();
    assert!(store.exists("ab/abab"));

    let local = config
        .local_resolver(
            Arc::new(InMemoryBackupCdnIndex::new()),
            Arc::new(SameDigestReencryptor),
        )
        .unwrap();

    let attachment = Attachment::default()
        .with_size(10)
        .with_path("ab/abab".to_string())
        .with_key(vec![1; 64])
        .with_digest(vec![0xab; 32])
        .with_local_key(vec![2; 64])
        .with_cdn_key("transit".to_string())
        .with_cdn_number(3);

    let resolved = local
        .resolve_local_pointer(&attachment, BackupLevel::Free)
        .await
        .unwrap();

    assert!(resolved.file_pointer.local_locator().is_some());
}
