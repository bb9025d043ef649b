//! Error types for the Stowage library.
//!
//! This crate provides the foundation error types used throughout the Stowage workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use stowage_error::{InvariantError, StowageResult};
//!
//! fn check_saved(path: Option<&str>) -> StowageResult<()> {
//!     if path.is_none() {
//!         Err(InvariantError::new("Attachment must be saved locally"))?
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_saved(None).is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cdn;
mod config;
mod error;
mod invariant;
mod json;
mod media_id;
mod reencryption;
mod storage;

pub use cdn::{BackupCdnError, BackupCdnErrorKind};
pub use config::ConfigError;
pub use error::{StowageError, StowageErrorKind, StowageResult};
pub use invariant::InvariantError;
pub use json::JsonError;
pub use media_id::{MediaIdError, MediaIdErrorKind};
pub use reencryption::{ReencryptionError, ReencryptionErrorKind};
pub use storage::{StorageError, StorageErrorKind};
