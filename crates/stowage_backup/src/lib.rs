//! File pointer resolution for attachment backups.
//!
//! Given an attachment record and a target backup tier, decide how a restorer
//! will retrieve the file, and what (if anything) must be uploaded first.
//!
//! # Operations
//!
//! - [`FilePointerResolver::resolve_pointer`] - attachment + tier -> pointer,
//!   plus an updated attachment when encryption metadata was normalized
//! - [`LocalBackupResolver::resolve_local_pointer`] - the same, localized for
//!   a backup snapshot on this device
//! - [`FilePointerResolver::backup_job_for_pointer`] - upload job for the
//!   backup tier, skipped when the blob is already there
//! - [`local_backup_job_for_pointer`] - copy job for a local snapshot
//! - [`attachment_from_pointer`] - the restoring side: pointer -> attachment
//!
//! # Example
//!
//! ```rust,ignore
//! use stowage_backup::FilePointerResolver;
//! use stowage_core::BackupLevel;
//!
//! let resolver = FilePointerResolver::new(media_ids, cdn_index, reencryptor);
//! let resolved = resolver.resolve_pointer(&attachment, BackupLevel::Paid).await?;
//! if let Some(updated) = &resolved.updated_attachment {
//!     repository.save(updated).await?;
//! }
//! let job = resolver
//!     .backup_job_for_pointer(
//!         resolved.updated_attachment.as_ref().unwrap_or(&attachment),
//!         &resolved.file_pointer,
//!         received_at,
//!     )
//!     .await?;
//! ```
//!
//! Resolution for one attachment must be serialized by the caller; two racing
//! resolutions may each re-encrypt and emit diverging media names.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod jobs;
mod local;
mod redact;
mod reencrypt;
mod resolver;
mod restore;

pub use jobs::local_backup_job_for_pointer;
pub use local::LocalBackupResolver;
pub use reencrypt::Reencryptor;
pub use resolver::FilePointerResolver;
pub use restore::{RestoreOptions, attachment_from_pointer, local_backup_path};
