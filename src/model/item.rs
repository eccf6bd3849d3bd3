//! Content item metadata.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A piece of content as stored by the CMS.
///
/// Only `canonical_override` and `stored_permalink` feed the resolver
/// directly. The remaining fields are what a dynamic permalink lookup
/// needs to build a URL from the site's permalink structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContentItem {
    /// Numeric content ID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// URL slug (`%postname%`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Publish date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<NaiveDate>,
    /// Canonical URL set explicitly by the author.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_override: Option<String>,
    /// Permalink stored alongside the content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stored_permalink: Option<String>,
}

impl ContentItem {
    /// The author's canonical override, if set and non-empty.
    #[must_use]
    pub fn explicit_canonical(&self) -> Option<&str> {
        non_empty(self.canonical_override.as_deref())
    }

    /// The stored permalink, if set and non-empty.
    #[must_use]
    pub fn permalink(&self) -> Option<&str> {
        non_empty(self.stored_permalink.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
