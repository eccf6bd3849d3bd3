//! Recording adapters: delegate to an inner port and log every call.

pub mod archive;
pub mod permalink;
pub mod url;

use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;

pub use archive::RecordingArchiveLinker;
pub use permalink::RecordingPermalinkLookup;
pub use url::RecordingUrlNormalizer;

/// Shared handle the recording adapters append to.
pub type SharedRecorder = Arc<Mutex<CassetteRecorder>>;

/// Appends one port call to the shared recorder.
pub(crate) fn record_lookup<I: Serialize>(
    recorder: &SharedRecorder,
    port: &str,
    method: &str,
    input: &I,
    output: &str,
) {
    let input = serde_json::to_value(input).unwrap_or_else(|e| {
        log::warn!("{port}::{method}: recording input as null, serialization failed: {e}");
        serde_json::Value::Null
    });
    recorder.lock().unwrap_or_else(PoisonError::into_inner).record(
        port,
        method,
        input,
        serde_json::Value::String(output.to_string()),
    );
}
