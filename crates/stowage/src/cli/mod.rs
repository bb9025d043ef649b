//! Command-line interface module.

mod commands;
mod handlers;

pub use commands::{Cli, Commands};
pub use handlers::{handle_locate, handle_media_id, handle_restore};
