//! Loading asset descriptor lists from JSON.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::models::AssetDescriptor;

/// Errors raised while reading an asset list.
#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
  /// Failed to read the asset list.
  #[error("failed to read {}: {source}", .path.display())]
  Io {
    /// Path that caused the error; `-` for stdin.
    path: PathBuf,
    /// Source I/O error.
    source: std::io::Error,
  },
  /// The asset list is not a JSON array of descriptors.
  #[error("failed to parse {}: {source}", .path.display())]
  Parse {
    /// Path that caused the error; `-` for stdin.
    path: PathBuf,
    /// Source parse error.
    source: serde_json::Error,
  },
}

/// Parse a JSON array of asset descriptors.
pub fn parse_assets(contents: &str) -> Result<Vec<AssetDescriptor>, serde_json::Error> {
  serde_json::from_str(contents)
}

/// Read an asset list from `path`, or from stdin when `path` is `-`.
pub fn load_assets(path: impl AsRef<Path>) -> Result<Vec<AssetDescriptor>, ManifestError> {
  let path = path.as_ref();
  let read = if path == Path::new("-") {
    let mut buffer = String::new();
    std::io::stdin()
      .read_to_string(&mut buffer)
      .map(|_| buffer)
  } else {
    fs::read_to_string(path)
  };
  let contents = read.map_err(|source| ManifestError::Io {
    path: path.to_path_buf(),
    source,
  })?;

  parse_assets(&contents).map_err(|source| ManifestError::Parse {
    path: path.to_path_buf(),
    source,
  })
}
