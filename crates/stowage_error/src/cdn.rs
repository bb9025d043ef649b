//! Backup tier presence lookup errors.

/// Kinds of tier-presence lookup failures.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum BackupCdnErrorKind {
    /// The lookup backend could not be reached
    #[display("Backup CDN lookup unavailable: {}", _0)]
    Unavailable(String),
    /// The lookup backend answered with something unusable
    #[display("Backup CDN lookup rejected: {}", _0)]
    Rejected(String),
}

/// Tier-presence lookup error with location tracking.
///
/// There is no safe default when a lookup fails, so these always propagate
/// to the caller.
///
/// # Examples
///
/// ```
/// use stowage_error::{BackupCdnError, BackupCdnErrorKind};
///
/// let err = BackupCdnError::new(BackupCdnErrorKind::Unavailable("timeout".to_string()));
/// assert!(format!("{}", err).contains("timeout"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Backup CDN Error: {} at line {} in {}", kind, line, file)]
pub struct BackupCdnError {
    /// The kind of error that occurred
    pub kind: BackupCdnErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl BackupCdnError {
    /// Create a new lookup error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: BackupCdnErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
