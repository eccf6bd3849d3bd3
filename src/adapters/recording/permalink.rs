//! Recording adapter for the `PermalinkLookup` port.

use super::{record_lookup, SharedRecorder};
use crate::model::ContentItem;
use crate::ports::PermalinkLookup;

/// Logs dynamic permalink lookups while delegating to `inner`.
pub struct RecordingPermalinkLookup {
    inner: Box<dyn PermalinkLookup>,
    recorder: SharedRecorder,
}

impl RecordingPermalinkLookup {
    /// Wraps `inner`, appending its calls to `recorder`.
    pub fn new(inner: Box<dyn PermalinkLookup>, recorder: SharedRecorder) -> Self {
        Self { inner, recorder }
    }
}

impl PermalinkLookup for RecordingPermalinkLookup {
    fn dynamic_permalink(&self, item: &ContentItem) -> String {
        let result = self.inner.dynamic_permalink(item);
        record_lookup(&self.recorder, "permalink", "dynamic_permalink", item, &result);
        result
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::adapters::live::url::parse_home;
    use crate::adapters::live::PermastructLookup;
    use crate::cassette::CassetteRecorder;

    #[test]
    fn records_item_and_result() {
        let recorder = Arc::new(Mutex::new(CassetteRecorder::new("unused.yaml", "test")));
        let lookup = RecordingPermalinkLookup::new(
            Box::new(PermastructLookup::new(parse_home("https://example.com").unwrap(), "/%postname%/")),
            Arc::clone(&recorder),
        );
        let item = ContentItem { slug: Some("hello".into()), ..ContentItem::default() };

        assert_eq!(lookup.dynamic_permalink(&item), "https://example.com/hello/");

        let log = recorder.lock().unwrap().snapshot();
        assert_eq!(log.calls("permalink", "dynamic_permalink"), 1);
        assert_eq!(log.interactions[0].input, serde_json::json!({"slug": "hello"}));
    }
}
