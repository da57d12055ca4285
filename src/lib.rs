#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod asset_paths;
pub mod builder;
pub mod config;
pub mod manifest;
pub mod models;
pub mod normalize;
pub mod options;

pub use builder::{DEFAULT_CDN_ROOT, LinkBuilder, build_links};
pub use config::LinkConfig;
pub use models::{AssetCategory, AssetDescriptor, LinkEntry, NormalizedAsset, ResultSet};
pub use options::{EffectiveOptions, LinkOptions};
