//! On-disk YAML format for lookup logs.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One call made to a port during resolution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Position in the log, assigned by the recorder.
    pub seq: u64,
    /// Port name (`permalink`, `archive`, `url`).
    pub port: String,
    /// Method invoked on the port.
    pub method: String,
    /// Argument the port received; `null` for argument-less calls.
    pub input: serde_json::Value,
    /// Value the port returned.
    pub output: serde_json::Value,
}

/// An ordered log of port calls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cassette {
    /// Human-readable name for this log.
    pub name: String,
    /// When recording finished.
    pub recorded_at: DateTime<Utc>,
    /// Calls in the order they were made.
    pub interactions: Vec<Interaction>,
}

impl Cassette {
    /// Reads a lookup log from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid log.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        serde_yaml::from_str(&content)
            .map_err(|e| Error::yaml(format!("lookup log {}", path.display()), e))
    }

    /// Number of recorded calls to `port`'s `method`.
    #[must_use]
    pub fn calls(&self, port: &str, method: &str) -> usize {
        self.interactions.iter().filter(|i| i.port == port && i.method == method).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Cassette {
        Cassette {
            name: "sample".into(),
            recorded_at: Utc::now(),
            interactions: vec![
                Interaction {
                    seq: 0,
                    port: "url".into(),
                    method: "to_absolute_url".into(),
                    input: json!("image"),
                    output: json!("https://example.com/image/"),
                },
                Interaction {
                    seq: 1,
                    port: "archive".into(),
                    method: "date_archive_permalink".into(),
                    input: json!(null),
                    output: json!("https://example.com/2022/06/"),
                },
                Interaction {
                    seq: 2,
                    port: "url".into(),
                    method: "to_absolute_url".into(),
                    input: json!("photo"),
                    output: json!("https://example.com/photo/"),
                },
            ],
        }
    }

    #[test]
    fn counts_calls_per_method() {
        let log = sample();
        assert_eq!(log.calls("url", "to_absolute_url"), 2);
        assert_eq!(log.calls("archive", "date_archive_permalink"), 1);
        assert_eq!(log.calls("permalink", "dynamic_permalink"), 0);
    }

    #[test]
    fn load_reads_written_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lookups.yaml");
        let log = sample();
        std::fs::write(&path, serde_yaml::to_string(&log).unwrap()).unwrap();

        assert_eq!(Cassette::load(&path).unwrap(), log);
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Cassette::load(&dir.path().join("absent.yaml")).unwrap_err();
        assert!(err.to_string().contains("absent.yaml"));
    }
}
