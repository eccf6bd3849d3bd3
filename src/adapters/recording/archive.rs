//! Recording adapter for the `DateArchiveLinker` port.

use super::{record_lookup, SharedRecorder};
use crate::ports::DateArchiveLinker;

/// Logs date archive lookups while delegating to `inner`.
pub struct RecordingArchiveLinker {
    inner: Box<dyn DateArchiveLinker>,
    recorder: SharedRecorder,
}

impl RecordingArchiveLinker {
    /// Wraps `inner`, appending its calls to `recorder`.
    pub fn new(inner: Box<dyn DateArchiveLinker>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }
}

impl DateArchiveLinker for RecordingArchiveLinker {
    fn date_archive_permalink(&self) -> String {
        let result = self.inner.date_archive_permalink();
        record_lookup(&self.recorder, "archive", "date_archive_permalink", &(), &result);
        result
    }
}
