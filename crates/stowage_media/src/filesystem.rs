//! Filesystem-backed attachment store.

use crate::LocalAttachmentStore;
use std::path::{Component, Path, PathBuf};
use stowage_error::{StorageError, StorageErrorKind, StowageResult};

/// Attachment store rooted at a directory.
///
/// Attachments are addressed by paths relative to the root, typically
/// sharded by the first two characters of their name:
///
/// ```text
/// /var/stowage/attachments/
/// ├── ab/
/// │   └── abcdef123456...
/// └── 12/
///     └── 123456abcdef...
/// ```
#[derive(Debug, Clone)]
pub struct FileSystemAttachmentStore {
    base_path: PathBuf,
}

impl FileSystemAttachmentStore {
    /// Create a filesystem store.
    ///
    /// Creates the base directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created or accessed.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> StowageResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::info!(path = %base_path.display(), "Opened attachment store");
        Ok(Self { base_path })
    }

    /// Root directory of the store.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }
}

impl LocalAttachmentStore for FileSystemAttachmentStore {
    fn absolute_path(&self, relative: &str) -> StowageResult<PathBuf> {
        let relative_path = Path::new(relative);
        let escapes = relative.is_empty()
            || relative_path
                .components()
                .any(|component| !matches!(component, Component::Normal(_)));

        if escapes {
            return Err(StorageError::new(StorageErrorKind::InvalidPath(relative.to_string())).into());
        }

        Ok(self.base_path.join(relative_path))
    }
}
