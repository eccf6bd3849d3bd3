//! Date archive URLs.

use url::Url;

use super::url::join_home;
use crate::model::ArchivePeriod;
use crate::ports::archive::DateArchiveLinker;

/// Links to the date archive of the request being served.
///
/// Built per request: `period` is the archive being viewed, or `None` when
/// the router could not tell, in which case the link is empty.
#[derive(Debug, Clone)]
pub struct PeriodArchiveLinker {
    home: Url,
    period: Option<ArchivePeriod>,
}

impl PeriodArchiveLinker {
    /// Creates a linker for `period` on the site at `home`.
    #[must_use]
    pub fn new(home: Url, period: Option<ArchivePeriod>) -> Self {
        Self { home, period }
    }
}

impl DateArchiveLinker for PeriodArchiveLinker {
    fn date_archive_permalink(&self) -> String {
        match self.period {
            Some(period) => join_home(&self.home, &format!("{}/", period.path()))
                .map(Into::into)
                .unwrap_or_default(),
            None => {
                log::warn!("date archive requested without an archive period");
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::live::url::parse_home;

    fn linker(home: &str, period: Option<&str>) -> PeriodArchiveLinker {
        PeriodArchiveLinker::new(parse_home(home).unwrap(), period.map(|p| p.parse().unwrap()))
    }

    #[test]
    fn links_each_granularity() {
        let home = "https://example.com";
        assert_eq!(linker(home, Some("2022")).date_archive_permalink(), "https://example.com/2022/");
        assert_eq!(
            linker(home, Some("2022/06")).date_archive_permalink(),
            "https://example.com/2022/06/"
        );
        assert_eq!(
            linker(home, Some("2022/06/15")).date_archive_permalink(),
            "https://example.com/2022/06/15/"
        );
    }

    #[test]
    fn respects_subdirectory_home() {
        assert_eq!(
            linker("https://example.com/news/", Some("2021/12")).date_archive_permalink(),
            "https://example.com/news/2021/12/"
        );
    }

    #[test]
    fn unknown_period_is_empty() {
        assert_eq!(linker("https://example.com", None).date_archive_permalink(), "");
    }
}
