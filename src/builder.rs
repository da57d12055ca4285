//! Link orchestrator turning asset descriptors into categorized CDN links.

use tracing::debug;

use crate::asset_paths::classify_file;
use crate::config::LinkConfig;
use crate::models::{
  AssetCategory, AssetDescriptor, LinkEntry, NormalizedAsset, ResultSet, TaggedCategory,
};
use crate::normalize::normalize_assets;
use crate::options::{EffectiveOptions, LinkOptions};

/// Public jsDelivr endpoint fronting the npm and GitHub registries.
pub const DEFAULT_CDN_ROOT: &str = "https://cdn.jsdelivr.net";

/// Hash algorithm label written into `integrity` attributes.
pub const INTEGRITY_ALGORITHM: &str = "sha256";

/// Stand-in integrity value for assets that carry no precomputed hash.
// TODO: omit the integrity attribute when no hash is known instead of emitting this.
pub const MISSING_HASH_PLACEHOLDER: &str = "xx";

const COMBINE_SEGMENT: &str = "combine";

/// Build links against the default CDN root.
pub fn build_links(assets: &[AssetDescriptor], options: LinkOptions) -> ResultSet {
  LinkBuilder::default().build(assets, options)
}

/// Builds CDN links for a fixed CDN root.
#[derive(Debug, Clone)]
pub struct LinkBuilder {
  cdn_root: String,
}

impl Default for LinkBuilder {
  fn default() -> Self {
    Self::new(DEFAULT_CDN_ROOT)
  }
}

impl LinkBuilder {
  /// Create a builder for `cdn_root`. Trailing slashes are dropped.
  pub fn new(cdn_root: impl Into<String>) -> Self {
    let cdn_root = cdn_root.into();
    Self {
      cdn_root: cdn_root.trim_end_matches('/').to_string(),
    }
  }

  /// Create a builder using the CDN root from `config`.
  pub fn from_config(config: &LinkConfig) -> Self {
    Self::new(config.cdn_root.as_str())
  }

  /// CDN root links are built against.
  pub fn cdn_root(&self) -> &str {
    &self.cdn_root
  }

  /// Normalize, classify and render `assets`.
  ///
  /// Scripts and stylesheets gain a leading combined link when they hold more than one
  /// entry. The input slice is never modified.
  pub fn build(&self, assets: &[AssetDescriptor], options: LinkOptions) -> ResultSet {
    let options = options.resolve();
    debug!(?options, assets = assets.len(), "building CDN links");

    let normalized = normalize_assets(assets, options);
    let mut links = ResultSet::default();

    for asset in &normalized {
      let link = self.asset_link(asset, options.integrity_mode());

      match classify_file(&asset.file_path).tagged() {
        Some(category) => {
          let hash = options.integrity_mode().then(|| {
            asset
              .integrity_hash
              .as_deref()
              .unwrap_or(MISSING_HASH_PLACEHOLDER)
          });
          links
            .tagged_mut(category)
            .push(render_entry(category, link, options.emit_html(), hash));
        }
        None => links.other.push(LinkEntry::plain(link)),
      }
    }

    for category in [TaggedCategory::Script, TaggedCategory::Stylesheet] {
      if let Some(combined) = self.combined_entry(&normalized, category, options) {
        links.tagged_mut(category).insert(0, combined);
      }
    }

    links
  }

  /// Full CDN URL for a single asset.
  pub fn asset_link(&self, asset: &NormalizedAsset, integrity_mode: bool) -> String {
    format!("{}/{}", self.cdn_root, asset_path(asset, integrity_mode))
  }

  /// A single `combine/` URL covering all of `assets`.
  ///
  /// Combined paths always spell out the file unless it is the default file, and never take
  /// part in integrity mode.
  pub fn combined_link<'a, I>(&self, assets: I) -> String
  where
    I: IntoIterator<Item = &'a NormalizedAsset>,
  {
    let paths: Vec<String> = assets
      .into_iter()
      .map(|asset| asset_path(asset, false))
      .collect();

    format!("{}/{}/{}", self.cdn_root, COMBINE_SEGMENT, paths.join(","))
  }

  fn combined_entry(
    &self,
    normalized: &[NormalizedAsset],
    category: TaggedCategory,
    options: EffectiveOptions,
  ) -> Option<LinkEntry> {
    let members: Vec<&NormalizedAsset> = normalized
      .iter()
      .filter(|asset| classify_file(&asset.file_path) == AssetCategory::from(category))
      .collect();

    if members.len() <= 1 {
      return None;
    }

    debug!(?category, files = members.len(), "emitting combined link");
    let link = self.combined_link(members);
    Some(render_entry(category, link, options.emit_html(), None))
  }
}

/// Registry-relative path of an asset: `<type>/<name>@<version><file>`.
///
/// The file is dropped for default files so the CDN resolves the entry point itself, except
/// in integrity mode where the hash only matches one exact file.
pub fn asset_path(asset: &NormalizedAsset, integrity_mode: bool) -> String {
  let file = if asset.is_default && !integrity_mode {
    ""
  } else {
    asset.file_path.as_str()
  };

  format!(
    "{}/{}@{}{}",
    asset.registry_type, asset.name, asset.version, file
  )
}

/// Render a link as a bare URL, a tag, or a tag with an `integrity` attribute.
///
/// A hash always forces the tag form.
pub fn render_entry(
  category: TaggedCategory,
  link: String,
  emit_html: bool,
  hash: Option<&str>,
) -> LinkEntry {
  let html = match (hash, category) {
    (Some(hash), TaggedCategory::Script) => format!(
      r#"<script src="{link}" integrity="{INTEGRITY_ALGORITHM}-{hash}"></script>"#
    ),
    (Some(hash), TaggedCategory::Stylesheet) => format!(
      r#"<link rel="stylesheet" href="{link}" integrity="{INTEGRITY_ALGORITHM}-{hash}">"#
    ),
    (None, TaggedCategory::Script) if emit_html => format!(r#"<script src="{link}"></script>"#),
    (None, TaggedCategory::Stylesheet) if emit_html => {
      format!(r#"<link rel="stylesheet" href="{link}">"#)
    }
    (None, _) => link.clone(),
  };

  LinkEntry { text: link, html }
}
