//! Media name and media id newtypes.

use serde::{Deserialize, Serialize};

/// Canonical name of an encrypted blob on the backup tier.
///
/// For freshly uploaded attachments this is the lowercase hex encoding of the
/// attachment digest.
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct MediaName(String);

impl MediaName {
    /// Wrap an already-canonical media name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The media name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the name is empty (never valid on the wire).
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for MediaName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Key used against tier-presence lookups, derived from a [`MediaName`].
///
/// Carries both the raw bytes and their unpadded base64url rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
#[display("{}", encoded)]
pub struct MediaId {
    bytes: Vec<u8>,
    encoded: String,
}

impl MediaId {
    /// Build a media id from its bytes and string encoding.
    pub fn new(bytes: Vec<u8>, encoded: String) -> Self {
        Self { bytes, encoded }
    }

    /// Raw media id bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Unpadded base64url string form.
    pub fn as_str(&self) -> &str {
        &self.encoded
    }
}
