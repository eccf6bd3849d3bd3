//! Request-scoped page state and the site-wide permalink capability.

use serde::{Deserialize, Serialize};

/// What kind of page is being rendered for the current request.
///
/// The request path is carried explicitly; nothing reads it from global
/// request state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageContext {
    /// The request is a date archive listing.
    pub is_date_archive: bool,
    /// The request is a single uploaded media item's page.
    pub is_attachment_page: bool,
    /// Raw request path; only meaningful on attachment pages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_request_path: Option<String>,
}

impl PageContext {
    /// A regular singular page.
    #[must_use]
    pub fn singular() -> Self {
        Self::default()
    }

    /// A date archive page.
    #[must_use]
    pub fn date_archive() -> Self {
        Self { is_date_archive: true, ..Self::default() }
    }

    /// An attachment page requested at `path`.
    #[must_use]
    pub fn attachment(path: impl Into<String>) -> Self {
        Self { is_attachment_page: true, raw_request_path: Some(path.into()), ..Self::default() }
    }
}

/// Site-wide switch deciding whether permalinks are computed on demand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermalinkCapability {
    /// Permalinks are computed by the dynamic lookup instead of read from storage.
    pub dynamic_permalinks_enabled: bool,
}

impl PermalinkCapability {
    /// Dynamic permalinks on.
    pub const DYNAMIC: Self = Self { dynamic_permalinks_enabled: true };
    /// Dynamic permalinks off.
    pub const STORED: Self = Self { dynamic_permalinks_enabled: false };
}
