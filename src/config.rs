//! Site configuration.
//!
//! Loaded from a YAML file when one is given, otherwise from defaults.
//! Environment variables (optionally from a `.env` file) override either:
//!
//! | Variable                       | Field                 |
//! |--------------------------------|-----------------------|
//! | `CANONICAL_HOME_URL`           | `home_url`            |
//! | `CANONICAL_DYNAMIC_PERMALINKS` | `dynamic_permalinks`  |
//! | `CANONICAL_PERMALINK_STRUCTURE`| `permalink_structure` |

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::adapters::live::url::parse_home;
use crate::error::{Error, Result};
use crate::model::PermalinkCapability;

/// Overrides `home_url`.
pub const HOME_URL_VAR: &str = "CANONICAL_HOME_URL";
/// Overrides `dynamic_permalinks` (`1`/`true`/`yes`/`on` or `0`/`false`/`no`/`off`).
pub const DYNAMIC_PERMALINKS_VAR: &str = "CANONICAL_DYNAMIC_PERMALINKS";
/// Overrides `permalink_structure`.
pub const PERMALINK_STRUCTURE_VAR: &str = "CANONICAL_PERMALINK_STRUCTURE";
/// When set, `resolve` records its lookups to this file.
pub const RECORD_VAR: &str = "CANONICAL_RECORD";

/// Site-wide settings the live adapters and the resolver read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Absolute home URL of the site.
    pub home_url: String,
    /// Compute permalinks on demand instead of using stored ones.
    pub dynamic_permalinks: bool,
    /// Permalink structure used by dynamic permalinks; empty for plain links.
    pub permalink_structure: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            home_url: "http://localhost/".into(),
            dynamic_permalinks: false,
            permalink_structure: "/%postname%/".into(),
        }
    }
}

impl SiteConfig {
    /// Loads `path` (or defaults when `None`), applies environment
    /// overrides and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, an override
    /// is malformed, or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
                Self::from_yaml(&content)
                    .map_err(|e| Error::yaml(format!("site config {}", path.display()), e))?
            }
            None => Self::default(),
        };
        config.apply_overrides(|name| std::env::var(name).ok())?;
        config.validate()?;
        log::debug!("site config: {config:?}");
        Ok(config)
    }

    /// Parses a YAML document without applying overrides.
    ///
    /// # Errors
    ///
    /// Returns the YAML error if the document is malformed.
    pub fn from_yaml(content: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Applies overrides looked up by variable name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the dynamic permalinks flag is not a boolean.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(home) = lookup(HOME_URL_VAR) {
            self.home_url = home;
        }
        if let Some(flag) = lookup(DYNAMIC_PERMALINKS_VAR) {
            self.dynamic_permalinks = parse_flag(&flag).ok_or_else(|| {
                Error::Config(format!("{DYNAMIC_PERMALINKS_VAR} must be a boolean, got `{flag}`"))
            })?;
        }
        if let Some(structure) = lookup(PERMALINK_STRUCTURE_VAR) {
            self.permalink_structure = structure;
        }
        Ok(())
    }

    /// Checks that the home URL is an absolute http(s) URL.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] describing the problem.
    pub fn validate(&self) -> Result<()> {
        parse_home(&self.home_url).map(|_| ())
    }

    /// The permalink capability this site runs with.
    #[must_use]
    pub fn capability(&self) -> PermalinkCapability {
        PermalinkCapability { dynamic_permalinks_enabled: self.dynamic_permalinks }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> =
            vars.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[test]
    fn defaults_are_valid() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.capability().dynamic_permalinks_enabled);
    }

    #[test]
    fn yaml_fills_missing_fields_with_defaults() {
        let config = SiteConfig::from_yaml("home_url: https://example.com\n").unwrap();
        assert_eq!(config.home_url, "https://example.com");
        assert_eq!(config.permalink_structure, "/%postname%/");
    }

    #[test]
    fn yaml_rejects_unknown_keys() {
        assert!(SiteConfig::from_yaml("home: https://example.com\n").is_err());
    }

    #[test]
    fn overrides_replace_file_values() {
        let mut config = SiteConfig::default();
        config
            .apply_overrides(env(&[
                (HOME_URL_VAR, "https://example.org/"),
                (DYNAMIC_PERMALINKS_VAR, "yes"),
                (PERMALINK_STRUCTURE_VAR, "/%post_id%/"),
            ]))
            .unwrap();
        assert_eq!(config.home_url, "https://example.org/");
        assert!(config.capability().dynamic_permalinks_enabled);
        assert_eq!(config.permalink_structure, "/%post_id%/");
    }

    #[test]
    fn malformed_flag_is_rejected() {
        let mut config = SiteConfig::default();
        let err = config.apply_overrides(env(&[(DYNAMIC_PERMALINKS_VAR, "maybe")])).unwrap_err();
        assert!(err.to_string().contains(DYNAMIC_PERMALINKS_VAR));
    }

    #[test]
    fn relative_home_fails_validation() {
        let config = SiteConfig { home_url: "/blog".into(), ..SiteConfig::default() };
        assert!(matches!(config.validate(), Err(Error::InvalidUrl { .. })));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("site.yaml");
        std::fs::write(&path, "home_url: https://example.com\ndynamic_permalinks: true\n").unwrap();

        let config = SiteConfig::load(Some(&path)).unwrap();
        assert_eq!(config.home_url, "https://example.com");
    }
}
