//! Media name and media id derivation.

use base64::Engine as _;
use hkdf::Hkdf;
use sha2::Sha256;
use stowage_core::{Attachment, MediaId, MediaName};
use stowage_error::{ConfigError, MediaIdError, MediaIdErrorKind, StowageResult};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Length of an attachment digest (SHA-256 over the ciphertext).
pub const DIGEST_LENGTH: usize = 32;

/// Length of a derived media id.
pub const MEDIA_ID_LENGTH: usize = 15;

const MEDIA_ROOT_KEY_LENGTH: usize = 32;

// Shared with every uploader and restorer; changing it orphans existing blobs.
const MEDIA_ID_INFO: &[u8] = b"20241007_SIGNAL_BACKUP_MEDIA_ID:";

/// Secret key all media ids of one account are derived under.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct MediaRootKey([u8; MEDIA_ROOT_KEY_LENGTH]);

impl MediaRootKey {
    /// Wrap raw key bytes.
    pub fn from_bytes(bytes: [u8; MEDIA_ROOT_KEY_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Parse a 64 character hex string.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the string is not hex or has the wrong length.
    pub fn from_hex(encoded: &str) -> StowageResult<Self> {
        let bytes = hex::decode(encoded.trim())
            .map_err(|e| ConfigError::new(format!("Media root key is not valid hex: {}", e)))?;
        let bytes: [u8; MEDIA_ROOT_KEY_LENGTH] = bytes.try_into().map_err(|bytes: Vec<u8>| {
            ConfigError::new(format!(
                "Media root key must be {} bytes, got {}",
                MEDIA_ROOT_KEY_LENGTH,
                bytes.len()
            ))
        })?;
        Ok(Self(bytes))
    }
}

impl std::fmt::Debug for MediaRootKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("MediaRootKey([REDACTED])")
    }
}

/// Canonical media name for a digest: its lowercase hex encoding.
///
/// # Errors
///
/// Returns an error if the digest is empty or not [`DIGEST_LENGTH`] bytes.
pub fn media_name_from_digest(digest: &[u8]) -> StowageResult<MediaName> {
    if digest.is_empty() {
        return Err(MediaIdError::new(MediaIdErrorKind::EmptyDigest).into());
    }
    if digest.len() != DIGEST_LENGTH {
        return Err(MediaIdError::new(MediaIdErrorKind::DigestLength {
            expected: DIGEST_LENGTH,
            actual: digest.len(),
        })
        .into());
    }
    Ok(MediaName::new(hex::encode(digest)))
}

/// Media name for an attachment.
///
/// A previously validated backup locator wins; otherwise the name is derived
/// from the digest.
pub fn media_name_for_attachment(attachment: &Attachment) -> StowageResult<MediaName> {
    if let Some(locator) = attachment
        .backup_locator
        .as_ref()
        .filter(|locator| !locator.media_name.is_empty())
    {
        return Ok(locator.media_name.clone());
    }
    media_name_from_digest(attachment.digest.as_deref().unwrap_or_default())
}

/// Derives media ids under one media root key.
#[derive(Debug, Clone)]
pub struct MediaIdDeriver {
    root_key: MediaRootKey,
}

impl MediaIdDeriver {
    /// Create a deriver for the given root key.
    pub fn new(root_key: MediaRootKey) -> Self {
        Self { root_key }
    }

    /// Media id for a media name.
    ///
    /// HKDF-SHA256 with no salt, info = label || media name, 15 bytes output.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty media name.
    pub fn media_id(&self, media_name: &MediaName) -> StowageResult<MediaId> {
        if media_name.is_empty() {
            return Err(MediaIdError::new(MediaIdErrorKind::MalformedMediaName(
                "media name is empty".to_string(),
            ))
            .into());
        }

        let hkdf = Hkdf::<Sha256>::new(None, &self.root_key.0);
        let mut bytes = [0u8; MEDIA_ID_LENGTH];
        hkdf.expand_multi_info(&[MEDIA_ID_INFO, media_name.as_str().as_bytes()], &mut bytes)
            .map_err(|e| {
                MediaIdError::new(MediaIdErrorKind::MalformedMediaName(format!(
                    "{}: {}",
                    media_name, e
                )))
            })?;

        let encoded = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(bytes);
        Ok(MediaId::new(bytes.to_vec(), encoded))
    }

    /// Media id for a digest, via its canonical media name.
    pub fn media_id_for_digest(&self, digest: &[u8]) -> StowageResult<MediaId> {
        self.media_id(&media_name_from_digest(digest)?)
    }
}
