//! Service context bundling the port trait objects resolution uses.

use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use crate::adapters::live::url::parse_home;
use crate::adapters::live::{HomeUrlNormalizer, PeriodArchiveLinker, PermastructLookup};
use crate::adapters::recording::{
    RecordingArchiveLinker, RecordingPermalinkLookup, RecordingUrlNormalizer, SharedRecorder,
};
use crate::adapters::replaying::{
    ReplayingArchiveLinker, ReplayingPermalinkLookup, ReplayingUrlNormalizer,
};
use crate::cassette::{Cassette, CassetteRecorder, CassetteReplayer};
use crate::config::SiteConfig;
use crate::error::Result;
use crate::model::ArchivePeriod;
use crate::ports::{DateArchiveLinker, PermalinkLookup, UrlNormalizer};

/// The lookups available to one resolution.
///
/// Built per request, since the date archive linker depends on the archive
/// period being served. Constructors wire live, recording, or replaying
/// adapters; [`ServiceContext::new`] accepts any implementations.
pub struct ServiceContext {
    /// Dynamic permalink computation.
    pub permalinks: Box<dyn PermalinkLookup>,
    /// Current date archive URL.
    pub archives: Box<dyn DateArchiveLinker>,
    /// Request path to absolute URL.
    pub urls: Box<dyn UrlNormalizer>,
    /// Written to disk on drop when recording.
    recorder: Option<SharedRecorder>,
}

impl ServiceContext {
    /// Bundles arbitrary port implementations.
    #[must_use]
    pub fn new(
        permalinks: Box<dyn PermalinkLookup>,
        archives: Box<dyn DateArchiveLinker>,
        urls: Box<dyn UrlNormalizer>,
    ) -> Self {
        Self { permalinks, archives, urls, recorder: None }
    }

    /// Live adapters computing URLs from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured home URL is invalid.
    pub fn live(config: &SiteConfig, period: Option<ArchivePeriod>) -> Result<Self> {
        let (permalinks, archives, urls) = live_ports(config, period)?;
        Ok(Self::new(permalinks, archives, urls))
    }

    /// Live adapters whose calls are logged to `path`.
    ///
    /// The log is written when the context is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured home URL is invalid.
    pub fn recording(
        config: &SiteConfig,
        period: Option<ArchivePeriod>,
        path: &Path,
    ) -> Result<Self> {
        let (permalinks, archives, urls) = live_ports(config, period)?;
        let recorder: SharedRecorder =
            Arc::new(Mutex::new(CassetteRecorder::new(path, "canonical-lookups")));

        Ok(Self {
            permalinks: Box::new(RecordingPermalinkLookup::new(permalinks, Arc::clone(&recorder))),
            archives: Box::new(RecordingArchiveLinker::new(archives, Arc::clone(&recorder))),
            urls: Box::new(RecordingUrlNormalizer::new(urls, Arc::clone(&recorder))),
            recorder: Some(recorder),
        })
    }

    /// Adapters answering from the lookup log at `path`.
    ///
    /// Each port replays its own calls in order; a call that was never
    /// recorded, or recorded with a different argument, panics.
    ///
    /// # Errors
    ///
    /// Returns an error if the log cannot be read or parsed.
    pub fn replaying(path: &Path) -> Result<Self> {
        let cassette = Cassette::load(path)?;
        Ok(Self::from_cassette(&cassette))
    }

    /// Adapters answering from an in-memory lookup log.
    #[must_use]
    pub fn from_cassette(cassette: &Cassette) -> Self {
        Self::new(
            Box::new(ReplayingPermalinkLookup::new(CassetteReplayer::new(cassette))),
            Box::new(ReplayingArchiveLinker::new(CassetteReplayer::new(cassette))),
            Box::new(ReplayingUrlNormalizer::new(CassetteReplayer::new(cassette))),
        )
    }
}

type LivePorts = (Box<dyn PermalinkLookup>, Box<dyn DateArchiveLinker>, Box<dyn UrlNormalizer>);

fn live_ports(config: &SiteConfig, period: Option<ArchivePeriod>) -> Result<LivePorts> {
    let home = parse_home(&config.home_url)?;
    let urls: Box<dyn UrlNormalizer> = Box::new(HomeUrlNormalizer::new(&config.home_url)?);
    let permalinks: Box<dyn PermalinkLookup> =
        Box::new(PermastructLookup::new(home.clone(), config.permalink_structure.clone()));
    let archives: Box<dyn DateArchiveLinker> = Box::new(PeriodArchiveLinker::new(home, period));
    Ok((permalinks, archives, urls))
}

impl Drop for ServiceContext {
    fn drop(&mut self) {
        if let Some(recorder) = self.recorder.take() {
            let recorder = recorder.lock().unwrap_or_else(PoisonError::into_inner);
            match recorder.write() {
                Ok(path) => log::info!("lookup log written to {}", path.display()),
                Err(e) => log::warn!("failed to write lookup log: {e}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContentItem, PageContext, PermalinkCapability};
    use crate::resolver::resolve_canonical;

    fn config() -> SiteConfig {
        SiteConfig { home_url: "https://example.com".into(), ..SiteConfig::default() }
    }

    #[test]
    fn live_context_resolves_attachment() {
        let ctx = ServiceContext::live(&config(), None).unwrap();
        let url = resolve_canonical(
            &ContentItem::default(),
            &PageContext::attachment("image"),
            PermalinkCapability::STORED,
            &ctx,
        );
        assert_eq!(url, "https://example.com/image/");
    }

    #[test]
    fn live_context_rejects_bad_home() {
        let bad = SiteConfig { home_url: "not a url".into(), ..SiteConfig::default() };
        assert!(ServiceContext::live(&bad, None).is_err());
    }

    #[test]
    fn recording_context_writes_log_on_drop() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lookups.yaml");
        let period: ArchivePeriod = "2022/06".parse().unwrap();

        {
            let ctx = ServiceContext::recording(&config(), Some(period), &path).unwrap();
            let url = resolve_canonical(
                &ContentItem::default(),
                &PageContext::date_archive(),
                PermalinkCapability::STORED,
                &ctx,
            );
            assert_eq!(url, "https://example.com/2022/06/");
        }

        let log = Cassette::load(&path).unwrap();
        assert_eq!(log.calls("archive", "date_archive_permalink"), 1);
        assert_eq!(log.interactions.len(), 1);
    }
}
