//! Re-encryption routine interface.

use stowage_core::{Attachment, Reencryptable};
use stowage_error::StowageResult;

/// Establishes whether an attachment's ciphertext can be reproduced.
///
/// Implementations read the local plaintext and either confirm that
/// encrypting it again yields the stored digest (filling in the `iv`), or
/// generate a fresh key/digest/iv and store it in `reencryption_info`.
#[async_trait::async_trait]
pub trait Reencryptor: Send + Sync {
    /// Check or regenerate the attachment's encryption triple.
    ///
    /// # Errors
    ///
    /// Returns a `ReencryptionError` when the plaintext is unreadable or corrupt.
    async fn ensure_reencryptable(&self, attachment: &Attachment) -> StowageResult<Reencryptable>;
}
