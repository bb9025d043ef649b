//! Media identifier derivation errors.

/// Kinds of media identifier errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum MediaIdErrorKind {
    /// Digest was empty
    #[display("Digest is empty")]
    EmptyDigest,
    /// Digest had the wrong number of bytes
    #[display("Digest must be {} bytes, got {}", expected, actual)]
    DigestLength {
        /// Required digest length
        expected: usize,
        /// Length that was supplied
        actual: usize,
    },
    /// Media name is not a hex-encoded digest
    #[display("Malformed media name: {}", _0)]
    MalformedMediaName(String),
}

/// Media identifier error with location tracking.
///
/// # Examples
///
/// ```
/// use stowage_error::{MediaIdError, MediaIdErrorKind};
///
/// let err = MediaIdError::new(MediaIdErrorKind::EmptyDigest);
/// assert!(format!("{}", err).contains("empty"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Media Id Error: {} at line {} in {}", kind, line, file)]
pub struct MediaIdError {
    /// The kind of error that occurred
    pub kind: MediaIdErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl MediaIdError {
    /// Create a new media identifier error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: MediaIdErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
