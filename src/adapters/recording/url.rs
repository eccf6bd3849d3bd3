//! Recording adapter for the `UrlNormalizer` port.

use super::{record_lookup, SharedRecorder};
use crate::ports::UrlNormalizer;

/// Logs URL normalizations while delegating to `inner`.
pub struct RecordingUrlNormalizer {
    inner: Box<dyn UrlNormalizer>,
    recorder: SharedRecorder,
}

impl RecordingUrlNormalizer {
    /// Wraps `inner`, appending its calls to `recorder`.
    pub fn new(inner: Box<dyn UrlNormalizer>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }
}

impl UrlNormalizer for RecordingUrlNormalizer {
    fn to_absolute_url(&self, path: &str) -> String {
        let result = self.inner.to_absolute_url(path);
        record_lookup(&self.recorder, "url", "to_absolute_url", &path, &result);
        result
    }
}
