//! Core data types for the Stowage attachment backup library.
//!
//! This crate provides the in-memory shapes shared by every Stowage crate:
//! the attachment record supplied by the caller, the wire-level
//! [`FilePointer`] with its mutually exclusive [`Locator`] variants, and the
//! upload job payloads handed to the upload subsystem.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod attachment;
mod backup_level;
mod cdn_info;
mod file_pointer;
mod job;
mod media;
mod reencryption;

pub use attachment::{APPLICATION_OCTET_STREAM, Attachment, BackupLocatorInfo};
pub use backup_level::BackupLevel;
pub use cdn_info::BackupCdnInfo;
pub use file_pointer::{
    AttachmentLocator, BackupLocator, FilePointer, InvalidAttachmentLocator, LocalLocator, Locator,
    ResolvedPointer,
};
pub use job::{
    AttachmentBackupJob, BackupJobData, LocalAttachmentBackupJob, LocalBackupJobData,
    TransitCdnInfo,
};
pub use media::{MediaId, MediaName};
pub use reencryption::{Reencryptable, ReencryptionInfo};
