//! Log redaction.

/// Log-safe label for a digest: `[REDACTED]` plus its last three hex characters.
pub(crate) fn redact_digest(digest: Option<&[u8]>) -> String {
    let encoded = hex::encode(digest.unwrap_or_default());
    let tail = encoded.len().saturating_sub(3);
    format!("[REDACTED]{}", &encoded[tail..])
}
