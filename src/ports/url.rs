//! Absolute URL port.

/// Turns request paths into fully-qualified URLs.
pub trait UrlNormalizer: Send + Sync {
    /// Resolves a possibly-relative `path` against the site home and
    /// returns it with a trailing slash, e.g. `https://example.com/image`
    /// becomes `https://example.com/image/`.
    fn to_absolute_url(&self, path: &str) -> String;
}
