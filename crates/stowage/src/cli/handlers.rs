//! CLI command handlers.

use std::path::{Path, PathBuf};
use stowage::{
    ConfigError, LocalAttachmentStore, MediaIdDeriver, MediaRootKey, StowageConfig, StowageResult,
    attachment_from_pointer, media_name_from_digest, read_file_pointer, to_pretty_json,
};

/// Print the media name and id for a hex digest.
pub fn handle_media_id(
    config: &StowageConfig,
    digest: &str,
    root_key: Option<&str>,
) -> StowageResult<()> {
    let digest = hex::decode(digest)
        .map_err(|e| ConfigError::new(format!("Digest is not valid hex: {}", e)))?;

    let root_key = match root_key {
        Some(encoded) => MediaRootKey::from_hex(encoded)?,
        None => config.media_root_key()?,
    };

    let media_name = media_name_from_digest(&digest)?;
    let media_id = MediaIdDeriver::new(root_key).media_id(&media_name)?;

    println!("media name: {}", media_name);
    println!("media id:   {}", media_id);
    Ok(())
}

/// Print the attachment a restore would create from a pointer file.
pub fn handle_restore(
    config: &StowageConfig,
    pointer: &Path,
    snapshot: Option<PathBuf>,
) -> StowageResult<()> {
    let file_pointer = read_file_pointer(pointer)?;

    let mut options = config.restore_options();
    if snapshot.is_some() {
        options.local_backup_snapshot_dir = snapshot;
    }

    let attachment = attachment_from_pointer(&file_pointer, &options)?;
    let rendered = to_pretty_json(&attachment)?;

    println!("{}", rendered);
    Ok(())
}

/// Print where an attachment lives and whether it exists.
pub fn handle_locate(config: &StowageConfig, path: &str) -> StowageResult<()> {
    let store = config.attachment_store()?;
    let absolute = store.absolute_path(path)?;

    println!("{}", absolute.display());
    println!("exists: {}", store.exists(path));
    Ok(())
}
