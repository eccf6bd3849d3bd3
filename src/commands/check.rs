//! `canonical check` command.
//!
//! Reads a YAML list of cases and resolves each against live adapters:
//!
//! ```yaml
//! - name: attachment page
//!   context: { is_attachment_page: true, raw_request_path: image }
//!   expected: https://example.com/image/
//! - name: june archive
//!   context: { is_date_archive: true }
//!   archive: "2022/06"
//!   expected: https://example.com/2022/06/
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::config::SiteConfig;
use crate::context::ServiceContext;
use crate::error::{Error, Result};
use crate::model::{ArchivePeriod, ContentItem, PageContext, PermalinkCapability};
use crate::resolver::{self, Resolution};

/// One expectation in a check file.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckCase {
    /// Label shown in the report.
    #[serde(default)]
    pub name: Option<String>,
    /// The content item.
    #[serde(default)]
    pub item: ContentItem,
    /// The page being rendered.
    #[serde(default)]
    pub context: PageContext,
    /// Overrides the site's dynamic permalinks setting for this case.
    #[serde(default)]
    pub dynamic: Option<bool>,
    /// Archive period served, for date archive cases.
    #[serde(default)]
    pub archive: Option<ArchivePeriod>,
    /// Expected canonical URL; `""` when none should be emitted.
    pub expected: String,
}

/// Result of checking one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseOutcome {
    /// Case label, or its 1-based position when unnamed.
    pub name: String,
    /// Expected canonical URL.
    pub expected: String,
    /// What the resolver produced.
    pub actual: Resolution,
}

impl CaseOutcome {
    /// Whether the resolver produced the expected URL.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.expected == self.actual.url
    }
}

/// Execute the `check` command.
///
/// # Errors
///
/// Returns an error string if the files cannot be loaded or any case fails.
pub fn run(file: &Path, config: Option<&Path>) -> std::result::Result<(), String> {
    let cases = load_cases(file).map_err(|e| e.to_string())?;
    let config = SiteConfig::load(config).map_err(|e| e.to_string())?;
    let outcomes = check_cases(&cases, &config).map_err(|e| e.to_string())?;

    let mut failed = 0;
    for outcome in &outcomes {
        if outcome.passed() {
            println!("ok    {} [{}] {:?}", outcome.name, outcome.actual.source, outcome.actual.url);
        } else {
            failed += 1;
            println!(
                "FAIL  {} [{}] expected {:?}, got {:?}",
                outcome.name, outcome.actual.source, outcome.expected, outcome.actual.url
            );
        }
    }

    if failed == 0 {
        println!("\n{} cases passed", outcomes.len());
        Ok(())
    } else {
        Err(format!("{failed} of {} cases failed", outcomes.len()))
    }
}

/// Reads cases from a YAML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_cases(file: &Path) -> Result<Vec<CheckCase>> {
    let content = std::fs::read_to_string(file).map_err(|e| Error::io(file, e))?;
    serde_yaml::from_str(&content)
        .map_err(|e| Error::yaml(format!("check file {}", file.display()), e))
}

/// Resolves every case with live adapters for `config`.
///
/// # Errors
///
/// Returns an error if the configured home URL is invalid.
pub fn check_cases(cases: &[CheckCase], config: &SiteConfig) -> Result<Vec<CaseOutcome>> {
    cases
        .iter()
        .enumerate()
        .map(|(index, case)| {
            let ctx = ServiceContext::live(config, case.archive)?;
            let capability = PermalinkCapability {
                dynamic_permalinks_enabled: case.dynamic.unwrap_or(config.dynamic_permalinks),
            };
            Ok(CaseOutcome {
                name: case.name.clone().unwrap_or_else(|| format!("#{}", index + 1)),
                expected: case.expected.clone(),
                actual: resolver::resolve(&case.item, &case.context, capability, &ctx),
            })
        })
        .collect()
}
