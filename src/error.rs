//! Error type shared by configuration, adapters, and commands.
//!
//! Canonical resolution itself never fails; these errors come from the
//! layers around it (reading files, parsing URLs and dates, config checks).

use std::path::PathBuf;

/// Errors raised outside the resolver.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A file could not be read or written.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        /// File that was being accessed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A YAML document could not be parsed or produced.
    #[error("failed to parse {context}: {source}")]
    Yaml {
        /// What was being parsed.
        context: String,
        /// Underlying YAML error.
        #[source]
        source: serde_yaml::Error,
    },

    /// A URL was malformed or not usable as a site home.
    #[error("invalid URL `{url}`: {reason}")]
    InvalidUrl {
        /// The offending input.
        url: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A date-archive period was malformed.
    #[error("invalid archive period `{0}`: expected YYYY, YYYY/MM or YYYY/MM/DD")]
    InvalidPeriod(String),

    /// Site configuration failed validation.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    pub(crate) fn yaml(context: impl Into<String>, source: serde_yaml::Error) -> Self {
        Self::Yaml { context: context.into(), source }
    }
}
