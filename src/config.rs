//! Configuration loader for the CDN root and default link options.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::builder::DEFAULT_CDN_ROOT;
use crate::options::LinkOptions;

/// File name searched for by [`LinkConfig::discover`].
pub const DEFAULT_CONFIG_FILE: &str = "cdn-links.config.json";

/// Errors that can occur while loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// Failed to read the configuration file from disk.
  #[error("failed to read {}: {source}", .path.display())]
  Io {
    /// Path that caused the error.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },
  /// Failed to parse the JSON configuration file.
  #[error("failed to parse {}: {source}", .path.display())]
  Parse {
    /// Path that caused the error.
    path: PathBuf,
    /// Source parse error.
    source: serde_json::Error,
  },
}

/// CDN root and default options applied before any caller flags.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LinkConfig {
  /// Base URL of the CDN serving registry packages.
  pub cdn_root: String,
  /// Options enabled unless the caller turns more on.
  pub defaults: LinkOptions,
}

impl Default for LinkConfig {
  fn default() -> Self {
    Self {
      cdn_root: DEFAULT_CDN_ROOT.into(),
      defaults: LinkOptions::default(),
    }
  }
}

impl LinkConfig {
  /// Load configuration from `dir`, falling back to defaults.
  ///
  /// A missing or malformed file is not an error here; link building must keep working with
  /// the public CDN root.
  pub fn discover(dir: &Path) -> Self {
    let candidate = dir.join(DEFAULT_CONFIG_FILE);
    match Self::from_path(&candidate) {
      Ok(config) => config,
      Err(ConfigError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
        debug!(path = %candidate.display(), "no config file, using defaults");
        Self::default()
      }
      Err(err) => {
        warn!("{err}; using defaults");
        Self::default()
      }
    }
  }

  /// Read configuration from a specific JSON file.
  pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
      path: path.to_path_buf(),
      source,
    })?;

    serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
      path: path.to_path_buf(),
      source,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn discover_defaults_when_missing() {
    let temp = tempdir().expect("failed to create temp dir");
    assert_eq!(LinkConfig::discover(temp.path()), LinkConfig::default());
  }

  #[test]
  fn discover_defaults_when_malformed() {
    let temp = tempdir().expect("failed to create temp dir");
    fs::write(temp.path().join(DEFAULT_CONFIG_FILE), "{not json").unwrap();

    assert_eq!(LinkConfig::discover(temp.path()), LinkConfig::default());
  }

  #[test]
  fn discover_reads_partial_configuration() {
    let temp = tempdir().expect("failed to create temp dir");
    fs::write(
      temp.path().join(DEFAULT_CONFIG_FILE),
      r#"{"defaults": {"emitHtml": true, "aliasVersionToMajor": true}}"#,
    )
    .unwrap();

    let config = LinkConfig::discover(temp.path());

    assert_eq!(config.cdn_root, DEFAULT_CDN_ROOT);
    assert!(config.defaults.emit_html);
    assert!(config.defaults.alias_version_to_major);
    assert!(!config.defaults.integrity_mode);
  }

  #[test]
  fn from_path_reports_parse_errors() {
    let temp = tempdir().expect("failed to create temp dir");
    let path = temp.path().join("custom.json");
    fs::write(&path, r#"{"cdnRoot": 42}"#).unwrap();

    let err = LinkConfig::from_path(&path).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("custom.json"));
  }

  #[test]
  fn from_path_reads_cdn_root() {
    let temp = tempdir().expect("failed to create temp dir");
    let path = temp.path().join("custom.json");
    fs::write(&path, r#"{"cdnRoot": "https://mirror.example.org/"}"#).unwrap();

    let config = LinkConfig::from_path(&path).unwrap();

    assert_eq!(config.cdn_root, "https://mirror.example.org/");
    assert_eq!(config.defaults, LinkOptions::default());
  }
}
