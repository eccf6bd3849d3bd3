//! Port traits for the lookups canonical resolution delegates to.
//!
//! Each trait is a boundary between the resolver and the surrounding CMS
//! (permalink computation, archive routing, home URL handling).
//! Implementations live in `src/adapters/`.

pub mod archive;
pub mod permalink;
pub mod url;

pub use archive::DateArchiveLinker;
pub use permalink::PermalinkLookup;
pub use url::UrlNormalizer;
