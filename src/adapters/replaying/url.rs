//! Replaying adapter for the `UrlNormalizer` port.

use std::sync::Mutex;

use super::replay_lookup;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::UrlNormalizer;

/// Replays recorded absolute URLs.
pub struct ReplayingUrlNormalizer {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingUrlNormalizer {
    /// Creates the adapter from a replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl UrlNormalizer for ReplayingUrlNormalizer {
    fn to_absolute_url(&self, path: &str) -> String {
        replay_lookup(
            &self.replayer,
            "url",
            "to_absolute_url",
            &serde_json::Value::String(path.to_string()),
        )
    }
}
