//! Stowage configuration.
//!
//! Sources, lowest to highest precedence:
//! - Bundled defaults (include_str! from stowage.toml)
//! - `~/.config/stowage/stowage.toml`
//! - `./stowage.toml`

use config::{Config, File, FileFormat};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use stowage_backup::{FilePointerResolver, LocalBackupResolver, Reencryptor, RestoreOptions};
use stowage_core::BackupLevel;
use stowage_error::{ConfigError, StowageError, StowageResult};
use stowage_media::{BackupCdnInfoLookup, FileSystemAttachmentStore, MediaIdDeriver, MediaRootKey};
use tracing::{debug, instrument};

/// Which tier backups target.
///
/// ```toml
/// [backup]
/// level = "paid"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, Getters)]
pub struct BackupConfig {
    /// Backup level pointers are resolved for
    #[serde(default)]
    level: BackupLevel,
}

/// Media identifier settings.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, Getters)]
pub struct MediaConfig {
    /// Media root key as 64 hex characters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    root_key: Option<String>,
}

/// Local file locations.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Getters)]
pub struct StorageConfig {
    /// Directory holding attachment plaintext
    #[serde(default = "default_attachments_dir")]
    attachments_dir: PathBuf,

    /// Snapshot directory of a local backup being restored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    local_backup_snapshot_dir: Option<PathBuf>,
}

fn default_attachments_dir() -> PathBuf {
    PathBuf::from("attachments")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            attachments_dir: default_attachments_dir(),
            local_backup_snapshot_dir: None,
        }
    }
}

/// Complete Stowage configuration.
///
/// # Example
///
/// ```rust,ignore
/// use stowage::StowageConfig;
///
/// let config = StowageConfig::load()?;
/// let resolver = config.resolver(cdn_index, reencryptor)?;
/// let resolved = resolver.resolve_pointer(&attachment, *config.backup().level()).await?;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, Getters)]
pub struct StowageConfig {
    /// Backup tier selection
    #[serde(default)]
    backup: BackupConfig,

    /// Media identifier settings
    #[serde(default)]
    media: MediaConfig,

    /// Local file locations
    #[serde(default)]
    storage: StorageConfig,
}

impl StowageConfig {
    /// Load configuration from a specific file, without bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> StowageResult<Self> {
        debug!("Loading configuration from file");

        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                StowageError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                StowageError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any present source fails to parse.
    #[instrument]
    pub fn load() -> StowageResult<Self> {
        debug!("Loading configuration with precedence: current dir > home dir > bundled defaults");

        const DEFAULT_CONFIG: &str = include_str!("../../../stowage.toml");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/stowage/stowage.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("stowage").required(false));

        builder
            .build()
            .map_err(|e| {
                StowageError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                StowageError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Replace the backup level.
    pub fn with_level(mut self, level: BackupLevel) -> Self {
        self.backup.level = level;
        self
    }

    /// Replace the media root key.
    pub fn with_root_key(mut self, root_key: impl Into<String>) -> Self {
        self.media.root_key = Some(root_key.into());
        self
    }

    /// Replace the attachments directory.
    pub fn with_attachments_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage.attachments_dir = dir.into();
        self
    }

    /// The validated media root key.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the key is unset, not hex, or not 32 bytes.
    pub fn media_root_key(&self) -> StowageResult<MediaRootKey> {
        let encoded = self
            .media
            .root_key
            .as_deref()
            .ok_or_else(|| ConfigError::new("media.root_key is not set"))?;
        MediaRootKey::from_hex(encoded)
    }

    /// Open the attachment store under `storage.attachments_dir`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the directory cannot be created.
    pub fn attachment_store(&self) -> StowageResult<FileSystemAttachmentStore> {
        FileSystemAttachmentStore::new(&self.storage.attachments_dir)
    }

    /// Restore options for the configured snapshot directory.
    pub fn restore_options(&self) -> RestoreOptions {
        RestoreOptions {
            local_backup_snapshot_dir: self.storage.local_backup_snapshot_dir.clone(),
        }
    }

    /// Build a pointer resolver keyed by the configured media root key.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the media root key is missing or malformed.
    pub fn resolver(
        &self,
        cdn_info: Arc<dyn BackupCdnInfoLookup>,
        reencryptor: Arc<dyn Reencryptor>,
    ) -> StowageResult<FilePointerResolver> {
        let media_ids = MediaIdDeriver::new(self.media_root_key()?);
        Ok(FilePointerResolver::new(media_ids, cdn_info, reencryptor))
    }

    /// Build a local backup resolver over the configured attachment store.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` for a bad root key or `StorageError` if the
    /// attachments directory cannot be created.
    pub fn local_resolver(
        &self,
        cdn_info: Arc<dyn BackupCdnInfoLookup>,
        reencryptor: Arc<dyn Reencryptor>,
    ) -> StowageResult<LocalBackupResolver> {
        let resolver = self.resolver(cdn_info, reencryptor)?;
        let store = self.attachment_store()?;
        Ok(LocalBackupResolver::new(resolver, Arc::new(store)))
    }
}
