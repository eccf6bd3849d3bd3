//! Home-relative URL normalization.

use url::Url;

use crate::error::{Error, Result};
use crate::ports::url::UrlNormalizer;

/// Parses a site home URL, requiring an absolute http(s) URL with a host.
///
/// The returned URL's path always ends with `/` so relative joins land
/// beneath it (`https://example.com/blog` + `image` → `/blog/image`).
///
/// # Errors
///
/// Returns [`Error::InvalidUrl`] if `home` is not usable as a site home.
pub fn parse_home(home: &str) -> Result<Url> {
    let invalid = |reason: &str| Error::InvalidUrl { url: home.to_string(), reason: reason.into() };

    let mut url = Url::parse(home.trim()).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if url.host_str().is_none() {
        return Err(invalid("missing host"));
    }
    url.set_query(None);
    url.set_fragment(None);
    ensure_trailing_slash(&mut url);
    Ok(url)
}

/// Resolves `path` as a literal path beneath `home`.
///
/// Schemes, hosts and dot segments in `path` are never interpreted: leading
/// slashes are ignored, `.` and `..` segments are dropped, and the rest is
/// appended to the home path. Returns `None` if the result would not lie
/// beneath `home`.
pub(crate) fn join_home(home: &Url, path: &str) -> Option<Url> {
    let segments: Vec<&str> = path
        .trim()
        .split(['/', '\\'])
        .filter(|segment| !segment.is_empty() && !is_dot_segment(segment))
        .collect();

    let mut url = home.clone();
    if !segments.is_empty() {
        let mut joined = format!("{}/{}", home.path().trim_end_matches('/'), segments.join("/"));
        if path.trim().ends_with(['/', '\\']) {
            joined.push('/');
        }
        url.set_path(&joined);
    }
    url.as_str().starts_with(home.as_str()).then_some(url)
}

/// `.` or `..`, including their percent-encoded spellings.
pub(crate) fn is_dot_segment(segment: &str) -> bool {
    matches!(segment.to_ascii_lowercase().replace("%2e", ".").as_str(), "." | "..")
}

fn ensure_trailing_slash(url: &mut Url) {
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
}

/// Normalizes request paths against the site home URL.
///
/// Absolute URLs on the home's origin are kept; anything else, including
/// strings that merely look like URLs (`mailto:x`, `host:8080/x`), is
/// treated as a path beneath home.
#[derive(Debug, Clone)]
pub struct HomeUrlNormalizer {
    home: Url,
}

impl HomeUrlNormalizer {
    /// Creates a normalizer for the site at `home`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if `home` is not an absolute http(s) URL.
    pub fn new(home: &str) -> Result<Self> {
        Ok(Self { home: parse_home(home)? })
    }
}

impl UrlNormalizer for HomeUrlNormalizer {
    fn to_absolute_url(&self, path: &str) -> String {
        let mut url = match Url::parse(path.trim()) {
            Ok(absolute) if absolute.origin() == self.home.origin() => absolute,
            _ => {
                let path = path.split(['?', '#']).next().unwrap_or_default();
                join_home(&self.home, path).unwrap_or_else(|| {
                    log::warn!("request path {path:?} resolves outside the site home");
                    self.home.clone()
                })
            }
        };
        url.set_query(None);
        url.set_fragment(None);
        ensure_trailing_slash(&mut url);
        url.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer(home: &str) -> HomeUrlNormalizer {
        HomeUrlNormalizer::new(home).unwrap()
    }

    #[test]
    fn absolute_request_gets_trailing_slash() {
        let urls = normalizer("https://example.com");
        assert_eq!(urls.to_absolute_url("https://example.com/image"), "https://example.com/image/");
    }

    #[test]
    fn relative_path_joins_home() {
        let urls = normalizer("https://example.com/");
        assert_eq!(urls.to_absolute_url("2022/06/image"), "https://example.com/2022/06/image/");
        assert_eq!(urls.to_absolute_url("/image"), "https://example.com/image/");
    }

    #[test]
    fn subdirectory_home_is_preserved() {
        let urls = normalizer("https://example.com/blog");
        assert_eq!(urls.to_absolute_url("/image"), "https://example.com/blog/image/");
    }

    #[test]
    fn empty_path_is_home() {
        let urls = normalizer("https://example.com/blog/");
        assert_eq!(urls.to_absolute_url(""), "https://example.com/blog/");
    }

    #[test]
    fn query_and_fragment_are_dropped() {
        let urls = normalizer("https://example.com");
        assert_eq!(urls.to_absolute_url("image?size=large#top"), "https://example.com/image/");
    }

    #[test]
    fn existing_trailing_slash_is_kept_single() {
        let urls = normalizer("https://example.com");
        assert_eq!(urls.to_absolute_url("image/"), "https://example.com/image/");
    }

    #[test]
    fn rejects_non_http_home() {
        assert!(HomeUrlNormalizer::new("ftp://example.com").is_err());
        assert!(HomeUrlNormalizer::new("example.com").is_err());
        assert!(parse_home("file:///srv/site").is_err());
    }

    #[test]
    fn scheme_like_paths_stay_under_home() {
        let urls = normalizer("https://example.com/blog/");
        assert_eq!(
            urls.to_absolute_url("javascript:alert(1)"),
            "https://example.com/blog/javascript:alert(1)/"
        );
        assert_eq!(
            urls.to_absolute_url("mailto:someone@example.org"),
            "https://example.com/blog/mailto:someone@example.org/"
        );
        assert_eq!(
            urls.to_absolute_url("localhost:8080/image"),
            "https://example.com/blog/localhost:8080/image/"
        );
    }

    #[test]
    fn foreign_origin_is_treated_as_path() {
        let urls = normalizer("https://example.com/");
        let url = urls.to_absolute_url("https://evil.example/image");
        assert!(url.starts_with("https://example.com/"), "{url}");
        assert!(urls.to_absolute_url("//evil.example/image").starts_with("https://example.com/"));
    }

    #[test]
    fn dot_segments_cannot_leave_home() {
        let urls = normalizer("https://example.com/blog/");
        assert_eq!(urls.to_absolute_url("../admin"), "https://example.com/blog/admin/");
        assert_eq!(urls.to_absolute_url("..\\admin"), "https://example.com/blog/admin/");
        assert_eq!(urls.to_absolute_url("%2e%2E/admin"), "https://example.com/blog/admin/");
        assert_eq!(urls.to_absolute_url("/./"), "https://example.com/blog/");
    }

    #[test]
    fn join_keeps_trailing_slash_only_when_given() {
        let home = parse_home("https://example.com/blog").unwrap();
        let join = |path: &str| join_home(&home, path).unwrap().to_string();
        assert_eq!(join("archives/42"), "https://example.com/blog/archives/42");
        assert_eq!(join("archives/42/"), "https://example.com/blog/archives/42/");
        assert_eq!(join_home(&home, "").unwrap(), home);
    }
}
