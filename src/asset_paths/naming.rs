use std::borrow::Cow;

use regex::Regex;

fn source_extension() -> &'static Regex {
  use std::sync::OnceLock;

  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| Regex::new(r"(?i)\.(js|css)$").expect("invalid extension regex"))
}

fn minified_extension() -> &'static Regex {
  use std::sync::OnceLock;

  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN
    .get_or_init(|| Regex::new(r"(?i)\.min\.(js|css)$").expect("invalid minified regex"))
}

/// Insert a `.min` segment before a trailing `.js` / `.css` extension.
///
/// The extension keeps its original casing. Names without a recognised extension are
/// returned unchanged.
pub fn minified_name(name: &str) -> Cow<'_, str> {
  source_extension().replace(name, ".min.$1")
}

/// Strip a `.min` segment preceding a trailing `.js` / `.css` extension.
pub fn source_name(name: &str) -> Cow<'_, str> {
  minified_extension().replace(name, ".$1")
}

/// Returns `true` when `name` carries no `.min.js` / `.min.css` suffix.
pub fn is_source_name(name: &str) -> bool {
  source_name(name) == name
}
