//! Replaying adapters that answer from a lookup log.

pub mod archive;
pub mod permalink;
pub mod url;

use std::sync::{Mutex, PoisonError};

use crate::cassette::replayer::CassetteReplayer;

pub use archive::ReplayingArchiveLinker;
pub use permalink::ReplayingPermalinkLookup;
pub use url::ReplayingUrlNormalizer;

/// Takes the next recorded output for `port::method` as a string.
///
/// # Panics
///
/// Panics if the log is exhausted, the argument differs from the recorded
/// one, or the recorded output is not a string.
pub(crate) fn replay_lookup(
    replayer: &Mutex<CassetteReplayer>,
    port: &str,
    method: &str,
    input: &serde_json::Value,
) -> String {
    let output = replayer.lock().unwrap_or_else(PoisonError::into_inner).next_output(
        port,
        method,
        input,
    );
    match output {
        serde_json::Value::String(url) => url,
        other => panic!("{port}::{method}: expected a string output, found {other}"),
    }
}
