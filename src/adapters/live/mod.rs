//! Live adapters computing URLs from the site configuration.

pub mod archive;
pub mod permalink;
pub mod url;

pub use archive::PeriodArchiveLinker;
pub use permalink::PermastructLookup;
pub use url::HomeUrlNormalizer;
