//! Tier-presence lookup results.

/// Answer from a tier-presence lookup for one media id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackupCdnInfo {
    /// The blob already exists on the backup tier
    InBackupTier {
        /// CDN number holding the blob
        cdn_number: u32,
    },
    /// The blob has not been uploaded to the backup tier
    NotInBackupTier,
}

impl BackupCdnInfo {
    /// Whether the blob is already on the backup tier.
    pub fn is_in_backup_tier(&self) -> bool {
        matches!(self, BackupCdnInfo::InBackupTier { .. })
    }

    /// CDN number, when present on the backup tier.
    pub fn cdn_number(&self) -> Option<u32> {
        match self {
            BackupCdnInfo::InBackupTier { cdn_number } => Some(*cdn_number),
            BackupCdnInfo::NotInBackupTier => None,
        }
    }
}
