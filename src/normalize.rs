//! Filename and version rewriting applied before any link is built.

use tracing::trace;

use crate::asset_paths::{is_source_name, major_alias, minified_name};
use crate::models::{AssetDescriptor, NormalizedAsset};
use crate::options::EffectiveOptions;

/// Produce rewritten copies of every asset, leaving the caller's slice untouched.
pub fn normalize_assets(
  assets: &[AssetDescriptor],
  options: EffectiveOptions,
) -> Vec<NormalizedAsset> {
  assets
    .iter()
    .map(|asset| normalize_asset(asset, options))
    .collect()
}

/// Rewrite a single asset according to `options`.
///
/// Default files are served minified by the CDN already and are never renamed. Versions
/// that are not valid semver, or whose major component is `0`, keep their full value.
pub fn normalize_asset(asset: &AssetDescriptor, options: EffectiveOptions) -> NormalizedAsset {
  let mut normalized = asset.clone();

  if options.optimize_to_minified()
    && !normalized.is_default
    && is_source_name(&normalized.file_path)
  {
    let minified = minified_name(&normalized.file_path).into_owned();
    if minified != normalized.file_path {
      trace!(from = %normalized.file_path, to = %minified, "using minified file");
      normalized.file_path = minified;
    }
  }

  if options.alias_version_to_major()
    && let Some(major) = major_alias(&normalized.version)
  {
    let major = major.to_string();
    trace!(name = %normalized.name, from = %normalized.version, to = %major, "aliasing version");
    normalized.version = major;
  }

  normalized
}
