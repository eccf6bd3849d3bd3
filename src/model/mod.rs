//! Inputs to canonical resolution.
//!
//! `ContentItem` and `PermalinkCapability` are read-only snapshots owned by
//! the surrounding CMS; `PageContext` describes the current request.

pub mod item;
pub mod page;
pub mod period;

pub use item::ContentItem;
pub use page::{PageContext, PermalinkCapability};
pub use period::ArchivePeriod;
