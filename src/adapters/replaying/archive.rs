//! Replaying adapter for the `DateArchiveLinker` port.

use std::sync::Mutex;

use super::replay_lookup;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::DateArchiveLinker;

/// Replays recorded date archive URLs.
pub struct ReplayingArchiveLinker {
    replayer: Mutex<CassetteReplayer>,
}

impl ReplayingArchiveLinker {
    /// Creates the adapter from a replayer.
    #[must_use]
    pub fn new(replayer: CassetteReplayer) -> Self {
        Self { replayer: Mutex::new(replayer) }
    }
}

impl DateArchiveLinker for ReplayingArchiveLinker {
    fn date_archive_permalink(&self) -> String {
        replay_lookup(&self.replayer, "archive", "date_archive_permalink", &serde_json::Value::Null)
    }
}
