//! Backup tier entitlement levels.

use serde::{Deserialize, Serialize};

/// The backup tier a pointer is being resolved for.
///
/// Only [`BackupLevel::Paid`] may reference the content-addressed backup
/// tier; [`BackupLevel::Free`] restorers can only reach the transit tier.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum BackupLevel {
    /// No backup tier entitlement
    #[default]
    #[display("free")]
    Free,
    /// Paid entitlement to the backup tier
    #[display("paid")]
    Paid,
}

impl BackupLevel {
    /// Whether this level may reference the backup tier.
    pub fn is_paid(&self) -> bool {
        matches!(self, BackupLevel::Paid)
    }
}
