//! Collects port calls and writes them as a lookup log.

use std::path::{Path, PathBuf};

use chrono::Utc;

use super::format::{Cassette, Interaction};
use crate::error::{Error, Result};

/// Accumulates interactions in memory until written to disk.
#[derive(Debug)]
pub struct CassetteRecorder {
    path: PathBuf,
    name: String,
    interactions: Vec<Interaction>,
}

impl CassetteRecorder {
    /// Creates a recorder that will write to `path`.
    pub fn new(path: impl Into<PathBuf>, name: impl Into<String>) -> Self {
        Self { path: path.into(), name: name.into(), interactions: Vec::new() }
    }

    /// Destination file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends an interaction, numbering it after the previous one.
    pub fn record(
        &mut self,
        port: impl Into<String>,
        method: impl Into<String>,
        input: serde_json::Value,
        output: serde_json::Value,
    ) {
        let seq = self.interactions.len() as u64;
        self.interactions.push(Interaction {
            seq,
            port: port.into(),
            method: method.into(),
            input,
            output,
        });
    }

    /// The log as recorded so far.
    #[must_use]
    pub fn snapshot(&self) -> Cassette {
        Cassette {
            name: self.name.clone(),
            recorded_at: Utc::now(),
            interactions: self.interactions.clone(),
        }
    }

    /// Writes everything recorded so far, replacing the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the log cannot be serialized or written.
    pub fn write(&self) -> Result<&Path> {
        let yaml = serde_yaml::to_string(&self.snapshot())
            .map_err(|e| Error::yaml(format!("lookup log {}", self.name), e))?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        std::fs::write(&self.path, yaml).map_err(|e| Error::io(&self.path, e))?;
        Ok(&self.path)
    }

    /// Writes the log and consumes the recorder.
    ///
    /// # Errors
    ///
    /// Returns an error if the log cannot be serialized or written.
    pub fn finish(self) -> Result<PathBuf> {
        self.write()?;
        Ok(self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numbers_interactions_and_writes_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("lookups.yaml");

        let mut recorder = CassetteRecorder::new(&path, "resolve");
        recorder.record("url", "to_absolute_url", json!("image"), json!("https://e.com/image/"));
        recorder.record("archive", "date_archive_permalink", json!(null), json!(""));

        let written = recorder.finish().unwrap();
        assert_eq!(written, path);

        let log = Cassette::load(&path).unwrap();
        assert_eq!(log.name, "resolve");
        assert_eq!(log.interactions.len(), 2);
        assert_eq!(log.interactions[0].seq, 0);
        assert_eq!(log.interactions[1].seq, 1);
        assert_eq!(log.interactions[1].port, "archive");
    }

    #[test]
    fn write_can_be_repeated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lookups.yaml");

        let mut recorder = CassetteRecorder::new(&path, "resolve");
        recorder.write().unwrap();
        assert!(Cassette::load(&path).unwrap().interactions.is_empty());

        recorder.record("url", "to_absolute_url", json!(""), json!("https://e.com/"));
        recorder.write().unwrap();
        assert_eq!(Cassette::load(&path).unwrap().interactions.len(), 1);
    }
}
