//! Canonical URL resolution for CMS content.
//!
//! [`resolver::resolve`] picks the single authoritative URL for a content
//! item from its metadata, the page being rendered, and the site's permalink
//! mode. Everything it needs from the surrounding CMS goes through the
//! [`ports`] traits, bundled in a [`context::ServiceContext`].

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod model;
pub mod ports;
pub mod resolver;

pub use error::{Error, Result};
pub use resolver::{resolve, resolve_canonical, CanonicalSource, Resolution};

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> std::result::Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}
