//! Date archive port.

/// Produces the URL of the date archive currently being viewed.
pub trait DateArchiveLinker: Send + Sync {
    /// Returns the archive's URL, or an empty string when unknown.
    fn date_archive_permalink(&self) -> String;
}
