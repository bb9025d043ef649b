//! Local attachment store trait.

use std::path::PathBuf;
use stowage_error::StowageResult;

/// Where attachment plaintexts live on this device.
///
/// Attachment records carry paths relative to the store; the store maps them
/// to absolute paths and answers existence checks.
pub trait LocalAttachmentStore: Send + Sync {
    /// Absolute path for a relative attachment path.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the relative path escapes the store.
    fn absolute_path(&self, relative: &str) -> StowageResult<PathBuf>;

    /// Whether the attachment's file exists.
    ///
    /// Paths that cannot be resolved count as missing.
    fn exists(&self, relative: &str) -> bool {
        self.absolute_path(relative)
            .map(|path| path.is_file())
            .unwrap_or(false)
    }
}
