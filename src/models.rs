//! Records consumed and produced while building CDN links.

use serde::{Deserialize, Serialize};

/// A single package file the caller wants a CDN link for.
///
/// The field names on the wire follow the registry lookup payload (`type`, `file`,
/// `hash`), with the longer descriptive names accepted as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetDescriptor {
  /// Registry the package lives in (`npm`, `gh`, ...).
  #[serde(rename = "type", alias = "registryType")]
  pub registry_type: String,
  /// Package name.
  pub name: String,
  /// Version string; not guaranteed to be valid semver.
  pub version: String,
  /// Path of the file inside the package, including its leading `/` and extension.
  #[serde(rename = "file", alias = "filePath")]
  pub file_path: String,
  /// Whether `file_path` is the package's canonical entry file.
  #[serde(default)]
  pub is_default: bool,
  /// Precomputed base64 content hash used for subresource integrity.
  #[serde(
    rename = "hash",
    alias = "integrityHash",
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub integrity_hash: Option<String>,
}

impl AssetDescriptor {
  /// Describe a non-default file without an integrity hash.
  pub fn new(
    registry_type: impl Into<String>,
    name: impl Into<String>,
    version: impl Into<String>,
    file_path: impl Into<String>,
  ) -> Self {
    Self {
      registry_type: registry_type.into(),
      name: name.into(),
      version: version.into(),
      file_path: file_path.into(),
      is_default: false,
      integrity_hash: None,
    }
  }

  /// Mark the file as the package's default entry file.
  pub fn default_file(mut self) -> Self {
    self.is_default = true;
    self
  }

  /// Attach a precomputed integrity hash.
  pub fn with_hash(mut self, hash: impl Into<String>) -> Self {
    self.integrity_hash = Some(hash.into());
    self
  }
}

/// Independent copy of an [`AssetDescriptor`] after filename and version rewriting.
pub type NormalizedAsset = AssetDescriptor;

/// The three buckets a file can land in.
///
/// Only [`AssetCategory::Script`] and [`AssetCategory::Stylesheet`] have an HTML tag form
/// and can be combined into a single request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetCategory {
  /// `.js` files.
  Script,
  /// `.css` files.
  Stylesheet,
  /// Anything else.
  Other,
}

/// Categories that can be embedded as a tag and combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaggedCategory {
  /// Rendered as `<script src>`.
  Script,
  /// Rendered as `<link rel="stylesheet">`.
  Stylesheet,
}

impl AssetCategory {
  /// The taggable form of this category, if it has one.
  pub fn tagged(self) -> Option<TaggedCategory> {
    match self {
      Self::Script => Some(TaggedCategory::Script),
      Self::Stylesheet => Some(TaggedCategory::Stylesheet),
      Self::Other => None,
    }
  }
}

impl From<TaggedCategory> for AssetCategory {
  fn from(category: TaggedCategory) -> Self {
    match category {
      TaggedCategory::Script => Self::Script,
      TaggedCategory::Stylesheet => Self::Stylesheet,
    }
  }
}

/// A link and the form it should be embedded in.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LinkEntry {
  /// Bare CDN URL.
  pub text: String,
  /// Either the bare URL again or a full HTML tag.
  pub html: String,
}

impl LinkEntry {
  /// Entry whose HTML form is the bare URL.
  pub fn plain(link: String) -> Self {
    Self {
      html: link.clone(),
      text: link,
    }
  }
}

/// Links grouped by category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ResultSet {
  /// Script links, combined link first when present.
  pub scripts: Vec<LinkEntry>,
  /// Stylesheet links, combined link first when present.
  pub stylesheets: Vec<LinkEntry>,
  /// Links for files with no tag form, in input order.
  pub other: Vec<LinkEntry>,
}

impl ResultSet {
  /// Mutable access to the list for a taggable category.
  pub fn tagged_mut(&mut self, category: TaggedCategory) -> &mut Vec<LinkEntry> {
    match category {
      TaggedCategory::Script => &mut self.scripts,
      TaggedCategory::Stylesheet => &mut self.stylesheets,
    }
  }

  /// Total number of entries across all categories.
  pub fn len(&self) -> usize {
    self.scripts.len() + self.stylesheets.len() + self.other.len()
  }

  /// Returns `true` when no links were produced.
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserializes_registry_payload_shape() {
    let asset: AssetDescriptor = serde_json::from_str(
      r#"{"type":"npm","name":"jquery","version":"3.7.1","file":"/dist/jquery.js","isDefault":true,"hash":"abc="}"#,
    )
    .unwrap();

    assert_eq!(
      asset,
      AssetDescriptor::new("npm", "jquery", "3.7.1", "/dist/jquery.js")
        .default_file()
        .with_hash("abc=")
    );
  }

  #[test]
  fn accepts_descriptive_aliases_and_defaults() {
    let asset: AssetDescriptor = serde_json::from_str(
      r#"{"registryType":"gh","name":"a/b","version":"1.0.0","filePath":"/x.css"}"#,
    )
    .unwrap();

    assert_eq!(asset.registry_type, "gh");
    assert_eq!(asset.file_path, "/x.css");
    assert!(!asset.is_default);
    assert!(asset.integrity_hash.is_none());
  }

  #[test]
  fn only_scripts_and_stylesheets_are_tagged() {
    assert_eq!(AssetCategory::Script.tagged(), Some(TaggedCategory::Script));
    assert_eq!(
      AssetCategory::Stylesheet.tagged(),
      Some(TaggedCategory::Stylesheet)
    );
    assert_eq!(AssetCategory::Other.tagged(), None);
  }

  #[test]
  fn plain_entry_mirrors_text() {
    let entry = LinkEntry::plain("https://example.com/a".into());
    assert_eq!(entry.text, entry.html);
  }
}
