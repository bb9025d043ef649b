//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Stowage - attachment file pointers for backups
#[derive(Parser, Debug)]
#[command(name = "stowage")]
#[command(about = "Attachment file pointer tools for backups", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file to use instead of the default search path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the media name and media id for a digest
    MediaId {
        /// Ciphertext digest as hex
        #[arg(long)]
        digest: String,

        /// Media root key as hex (overrides media.root_key)
        #[arg(long)]
        root_key: Option<String>,
    },

    /// Convert a JSON file pointer into a restored attachment record
    Restore {
        /// Path to the file pointer JSON
        #[arg(long)]
        pointer: PathBuf,

        /// Local backup snapshot directory (overrides storage.local_backup_snapshot_dir)
        #[arg(long)]
        snapshot: Option<PathBuf>,
    },

    /// Resolve an attachment path against the configured store
    Locate {
        /// Path relative to the attachments directory
        path: String,
    },
}
