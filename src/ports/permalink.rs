//! Dynamic permalink port.

use crate::model::ContentItem;

/// Computes a content item's permalink on demand.
///
/// Used only when the site has dynamic permalinks enabled, in which case
/// its answer is authoritative over any stored permalink.
pub trait PermalinkLookup: Send + Sync {
    /// Returns the permalink for `item`, or an empty string if none can be built.
    fn dynamic_permalink(&self, item: &ContentItem) -> String;
}
