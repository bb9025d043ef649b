//! Stowage CLI binary.
//!
//! Offline helpers around the Stowage library:
//! - Derive media names and ids for a digest
//! - Convert a serialized file pointer into the attachment a restore starts from
//! - Check whether an attachment's plaintext is in the local store

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    use cli::{Cli, Commands, handle_locate, handle_media_id, handle_restore};

    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "debug"
    } else {
        stowage::DEFAULT_FILTER
    };
    stowage::init_console_telemetry_with(default_filter)?;

    let config = match &cli.config {
        Some(path) => stowage::StowageConfig::from_file(path)?,
        None => stowage::StowageConfig::load()?,
    };

    match cli.command {
        Commands::MediaId { digest, root_key } => {
            handle_media_id(&config, &digest, root_key.as_deref())?;
        }

        Commands::Restore { pointer, snapshot } => {
            handle_restore(&config, &pointer, snapshot)?;
        }

        Commands::Locate { path } => {
            handle_locate(&config, &path)?;
        }
    }

    Ok(())
}
