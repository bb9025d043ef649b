//! File pointers stored as JSON on disk.

use std::path::Path;
use stowage_core::FilePointer;
use stowage_error::{JsonError, StorageError, StorageErrorKind, StowageResult};

/// Read a file pointer from a JSON file.
///
/// # Errors
///
/// Returns `StorageError` if the file cannot be read and `JsonError` if it is
/// not a file pointer.
#[tracing::instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn read_file_pointer(path: impl AsRef<Path>) -> StowageResult<FilePointer> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|e| {
        StorageError::new(StorageErrorKind::Read(format!("{}: {}", path.display(), e)))
    })?;

    let file_pointer = serde_json::from_str(&contents)
        .map_err(|e| JsonError::new(format!("Invalid file pointer JSON: {}", e)))?;
    Ok(file_pointer)
}

/// Render any serializable value as pretty JSON.
///
/// # Errors
///
/// Returns `JsonError` if the value cannot be serialized.
pub fn to_pretty_json<T: serde::Serialize>(value: &T) -> StowageResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| JsonError::new(format!("Failed to render JSON: {}", e)).into())
}
