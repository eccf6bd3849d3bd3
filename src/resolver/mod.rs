//! Canonical URL resolution.
//!
//! Precedence, first match wins:
//!
//! ```text
//! canonical override (non-empty)
//!   └─ dynamic permalinks enabled  → permalink lookup, verbatim
//!        └─ date archive           → archive lookup, verbatim
//!             └─ attachment page   → absolute request URL
//!                  └─ stored permalink (non-empty)
//!                       └─ ""
//! ```
//!
//! At most one port is called per resolution, and only for the branch that
//! is taken.

use std::fmt;

use crate::context::ServiceContext;
use crate::model::{ContentItem, PageContext, PermalinkCapability};

/// Which rule produced a canonical URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalSource {
    /// The item's explicit canonical override.
    Override,
    /// The dynamic permalink lookup.
    DynamicPermalink,
    /// The current date archive's URL.
    DateArchive,
    /// The attachment page's request URL.
    Attachment,
    /// The item's stored permalink.
    StoredPermalink,
    /// Nothing applied; the canonical tag should be omitted.
    Unresolved,
}

impl CanonicalSource {
    /// Stable short name, used in logs and `--explain` output.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Override => "override",
            Self::DynamicPermalink => "dynamic-permalink",
            Self::DateArchive => "date-archive",
            Self::Attachment => "attachment",
            Self::StoredPermalink => "stored-permalink",
            Self::Unresolved => "none",
        }
    }
}

impl fmt::Display for CanonicalSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a resolution: the URL and the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// Canonical URL; empty means "omit the canonical tag".
    pub url: String,
    /// Rule that selected `url`.
    pub source: CanonicalSource,
}

impl Resolution {
    fn new(source: CanonicalSource, url: impl Into<String>) -> Self {
        Self { url: url.into(), source }
    }

    /// Returns `true` when no canonical URL could be determined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.url.is_empty()
    }
}

/// Resolves the canonical URL for `item`, reporting which rule applied.
pub fn resolve(
    item: &ContentItem,
    context: &PageContext,
    capability: PermalinkCapability,
    services: &ServiceContext,
) -> Resolution {
    let resolution = select(item, context, capability, services);
    log::debug!("canonical via {}: {:?}", resolution.source, resolution.url);
    resolution
}

/// Resolves the canonical URL for `item`; an empty string means none.
pub fn resolve_canonical(
    item: &ContentItem,
    context: &PageContext,
    capability: PermalinkCapability,
    services: &ServiceContext,
) -> String {
    resolve(item, context, capability, services).url
}

fn select(
    item: &ContentItem,
    context: &PageContext,
    capability: PermalinkCapability,
    services: &ServiceContext,
) -> Resolution {
    if let Some(url) = item.explicit_canonical() {
        return Resolution::new(CanonicalSource::Override, url);
    }

    // Dynamic mode is authoritative, even when the lookup comes back empty.
    if capability.dynamic_permalinks_enabled {
        return Resolution::new(
            CanonicalSource::DynamicPermalink,
            services.permalinks.dynamic_permalink(item),
        );
    }

    if context.is_date_archive {
        return Resolution::new(
            CanonicalSource::DateArchive,
            services.archives.date_archive_permalink(),
        );
    }

    if context.is_attachment_page {
        let path = context.raw_request_path.as_deref().unwrap_or_default();
        return Resolution::new(CanonicalSource::Attachment, services.urls.to_absolute_url(path));
    }

    match item.permalink() {
        Some(url) => Resolution::new(CanonicalSource::StoredPermalink, url),
        None => Resolution::new(CanonicalSource::Unresolved, String::new()),
    }
}
