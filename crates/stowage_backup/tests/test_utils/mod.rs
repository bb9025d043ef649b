//! Test utilities for stowage_backup tests.
//!
//! Mock collaborators with call counters and attachment fixtures.

#![allow(dead_code)]

pub mod mocks;

#[allow(unused_imports)]
pub use mocks::{CountingCdnLookup, MockReencryptor, ReencryptBehavior};

use std::sync::Arc;
use stowage_backup::FilePointerResolver;
use stowage_core::{Attachment, MediaName};
use stowage_media::{MediaIdDeriver, MediaRootKey, media_name_from_digest};

/// Root key shared by every test resolver.
pub fn root_key() -> MediaRootKey {
    let mut bytes = [0u8; 32];
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = i as u8;
    }
    MediaRootKey::from_bytes(bytes)
}

/// Deriver for the shared root key.
pub fn deriver() -> MediaIdDeriver {
    MediaIdDeriver::new(root_key())
}

/// Resolver wired to the given mocks.
pub fn resolver(cdn: &Arc<CountingCdnLookup>, reencryptor: &Arc<MockReencryptor>) -> FilePointerResolver {
    FilePointerResolver::new(deriver(), cdn.clone(), reencryptor.clone())
}

/// Media name for a digest fixture.
pub fn name_of(digest: &[u8]) -> MediaName {
    media_name_from_digest(digest).expect("valid digest")
}

pub const KEY: [u8; 64] = [0x11; 64];
pub const DIGEST: [u8; 32] = [0x22; 32];
pub const IV: [u8; 16] = [0x33; 16];
pub const LOCAL_KEY: [u8; 64] = [0x44; 64];
pub const NEW_KEY: [u8; 64] = [0x55; 64];
pub const NEW_DIGEST: [u8; 32] = [0x66; 32];
pub const NEW_IV: [u8; 16] = [0x77; 16];

/// A downloaded attachment with key and digest but no transit copy.
pub fn downloaded() -> Attachment {
    Attachment::default()
        .with_content_type("image/jpeg".to_string())
        .with_width(640)
        .with_height(480)
        .with_size(100)
        .with_path("22/2222".to_string())
        .with_key(KEY.to_vec())
        .with_digest(DIGEST.to_vec())
        .with_version(2)
        .with_local_key(LOCAL_KEY.to_vec())
}

/// Add a transit tier copy to an attachment.
pub fn with_transit(attachment: Attachment) -> Attachment {
    attachment
        .with_cdn_key("transit-key".to_string())
        .with_cdn_number(3)
        .with_upload_timestamp(1_700_000_000_000)
}
