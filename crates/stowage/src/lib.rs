//! Stowage - attachment file pointers for backups
//!
//! Stowage decides how an attachment in a backup can be retrieved later: from
//! the short-lived transit tier, from the content-addressed backup tier, or
//! from a backup kept on this device. It also derives the upload jobs needed
//! to get an attachment onto the backup tier when it is not there yet.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use stowage::{BackupLevel, StowageConfig};
//!
//! let config = StowageConfig::load()?;
//! let resolver = config.resolver(cdn_index, reencryptor)?;
//!
//! let resolved = resolver.resolve_pointer(&attachment, BackupLevel::Paid).await?;
//! if let Some(updated) = &resolved.updated_attachment {
//!     repository.save(updated).await?;
//! }
//! ```
//!
//! # Architecture
//!
//! - `stowage_error` - Error types
//! - `stowage_core` - Attachments, file pointers, locators and jobs
//! - `stowage_media` - Media names and ids, tier-presence lookup, local store
//! - `stowage_backup` - Pointer resolution, local backups, jobs, restore
//!
//! This crate re-exports everything and adds configuration and logging setup.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod pointer_file;
mod telemetry;

pub use config::{BackupConfig, MediaConfig, StorageConfig, StowageConfig};
pub use pointer_file::{read_file_pointer, to_pretty_json};
pub use telemetry::{DEFAULT_FILTER, init_console_telemetry, init_console_telemetry_with};

pub use stowage_backup::{
    FilePointerResolver, LocalBackupResolver, Reencryptor, RestoreOptions, attachment_from_pointer,
    local_backup_job_for_pointer, local_backup_path,
};
pub use stowage_core::*;
pub use stowage_error::*;
pub use stowage_media::*;
