//! Invariant violation errors.

/// A broken precondition between the resolver and its caller.
///
/// These are programmer errors (for example asking for an upload job for an
/// attachment that has no local file). They are returned immediately and are
/// never downgraded to an invalid locator.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Invariant Violation: {} at line {} in {}", message, line, file)]
pub struct InvariantError {
    /// Which invariant was violated
    pub message: String,
    /// Line number where the violation was detected
    pub line: u32,
    /// File where the violation was detected
    pub file: &'static str,
}

impl InvariantError {
    /// Create a new InvariantError with the given message at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use stowage_error::InvariantError;
    ///
    /// let err = InvariantError::new("digest on job and backupLocator must match");
    /// assert!(format!("{}", err).contains("Invariant Violation"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
