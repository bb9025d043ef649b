//! Content-addressed media identifiers for Stowage.
//!
//! This crate turns attachment digests into the names and ids the backup tier
//! is keyed by, and defines the two lookups the resolver depends on:
//!
//! - **Media identifiers**: digest -> media name (hex) -> media id (HKDF under
//!   the media root key). Identical digests always map to identical ids, which
//!   is what lets uploads dedupe across devices and restores.
//! - **Tier presence**: [`BackupCdnInfoLookup`] answers whether a media id is
//!   already on the backup tier.
//! - **Local files**: [`LocalAttachmentStore`] answers whether an attachment's
//!   plaintext is on disk.
//!
//! # Example
//!
//! ```rust
//! use stowage_media::{MediaIdDeriver, MediaRootKey, media_name_from_digest};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let deriver = MediaIdDeriver::new(MediaRootKey::from_bytes([7; 32]));
//! let name = media_name_from_digest(&[0xab; 32])?;
//! let id = deriver.media_id(&name)?;
//! assert_eq!(id.as_bytes().len(), 15);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod cdn;
mod filesystem;
mod media_id;
mod store;

pub use cdn::{BackupCdnInfoLookup, InMemoryBackupCdnIndex};
pub use filesystem::FileSystemAttachmentStore;
pub use media_id::{
    DIGEST_LENGTH, MEDIA_ID_LENGTH, MediaIdDeriver, MediaRootKey, media_name_for_attachment,
    media_name_from_digest,
};
pub use store::LocalAttachmentStore;
