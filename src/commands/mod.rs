//! Command dispatch and handlers.

pub mod check;
pub mod resolve;

use crate::cli::Command;

/// Dispatch a parsed command to its handler.
///
/// A `.env` file in the working directory is loaded first so its variables
/// can override the site configuration. When `CANONICAL_RECORD` is set,
/// `resolve` records its lookups to that file.
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    if let Ok(path) = dotenvy::dotenv() {
        log::debug!("loaded environment from {}", path.display());
    }

    match command {
        Command::Resolve(args) => resolve::run(args),
        Command::Check { file, config } => check::run(file, config.as_deref()),
    }
}
