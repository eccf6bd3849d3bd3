//! Replaying adapter for the `PermalinkLookup` port.

use std::sync::Mutex;

use super::replay_lookup;
use crate::cassette::replayer::CassetteReplayer;
use crate::model::ContentItem;
use crate::ports::PermalinkLookup;

/// Replays recorded dynamic permalinks.
pub struct ReplayingPermalinkLookup {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingPermalinkLookup {
    /// Creates the adapter from a replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl PermalinkLookup for ReplayingPermalinkLookup {
    fn dynamic_permalink(&self, item: &ContentItem) -> String {
        let input = serde_json::to_value(item).unwrap_or(serde_json::Value::Null);
        replay_lookup(&self.replayer, "permalink", "dynamic_permalink", &input)
    }
}
