//! Top-level error wrapper types.

use crate::{
    BackupCdnError, ConfigError, InvariantError, JsonError, MediaIdError, ReencryptionError,
    StorageError,
};

/// Every error condition the Stowage crates can report.
///
/// # Examples
///
/// ```
/// use stowage_error::{StowageError, InvariantError};
///
/// let invariant = InvariantError::new("mediaName must exist");
/// let err: StowageError = invariant.into();
/// assert!(format!("{}", err).contains("Invariant Violation"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum StowageErrorKind {
    /// Media identifier derivation error
    #[from(MediaIdError)]
    MediaId(MediaIdError),
    /// Re-encryption routine failure
    #[from(ReencryptionError)]
    Reencryption(ReencryptionError),
    /// Tier-presence lookup failure
    #[from(BackupCdnError)]
    BackupCdn(BackupCdnError),
    /// Caller/resolver invariant violation
    #[from(InvariantError)]
    Invariant(InvariantError),
    /// Local attachment store error
    #[from(StorageError)]
    Storage(StorageError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// JSON encoding or decoding error
    #[from(JsonError)]
    Json(JsonError),
}

/// Stowage error with kind discrimination.
///
/// # Examples
///
/// ```
/// use stowage_error::{StowageErrorKind, StowageResult, ConfigError};
///
/// fn might_fail() -> StowageResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), StowageErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Stowage Error: {}", _0)]
pub struct StowageError(Box<StowageErrorKind>);

impl StowageError {
    /// Create a new error from a kind.
    pub fn new(kind: StowageErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StowageErrorKind {
        &self.0
    }

    /// Whether this error reports a broken caller/resolver invariant.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self.kind(), StowageErrorKind::Invariant(_))
    }
}

// Generic From implementation for any type that converts to StowageErrorKind
impl<T> From<T> for StowageError
where
    T: Into<StowageErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Stowage operations.
pub type StowageResult<T> = std::result::Result<T, StowageError>;
