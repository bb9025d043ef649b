//! Re-encryption error types.

/// Kinds of re-encryption failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ReencryptionErrorKind {
    /// Plaintext could not be read from disk
    #[display("Failed to read attachment: {}", _0)]
    Io(String),
    /// Encryption or digest computation failed
    #[display("Crypto failure: {}", _0)]
    Crypto(String),
    /// Source bytes were present but did not decrypt or verify
    #[display("Corrupt attachment: {}", _0)]
    Corrupt(String),
}

/// Re-encryption error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Reencryption Error: {} at line {} in {}", kind, line, file)]
pub struct ReencryptionError {
    /// The kind of error that occurred
    pub kind: ReencryptionErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ReencryptionError {
    /// Create a new re-encryption error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ReencryptionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
