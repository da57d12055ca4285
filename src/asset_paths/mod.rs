//! Pure helpers for inspecting and rewriting asset names and versions.
//!
//! Each concern lives in its own submodule so the regex-backed rules can be tested
//! independently of link construction.

mod filters;
mod naming;
mod version;

pub use filters::classify_file;
pub use naming::{is_source_name, minified_name, source_name};
pub use version::{major_alias, semver_major};
