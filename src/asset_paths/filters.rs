use regex::Regex;

use crate::models::AssetCategory;

fn script_pattern() -> &'static Regex {
  use std::sync::OnceLock;

  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| Regex::new(r"(?i)\.js$").expect("invalid script regex"))
}

fn stylesheet_pattern() -> &'static Regex {
  use std::sync::OnceLock;

  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| Regex::new(r"(?i)\.css$").expect("invalid stylesheet regex"))
}

/// Bucket a file path by its trailing extension.
///
/// Matching is case-insensitive. Anything that is neither `.js` nor `.css` is
/// [`AssetCategory::Other`]; classification never fails.
pub fn classify_file(file_path: &str) -> AssetCategory {
  if script_pattern().is_match(file_path) {
    AssetCategory::Script
  } else if stylesheet_pattern().is_match(file_path) {
    AssetCategory::Stylesheet
  } else {
    AssetCategory::Other
  }
}

#[cfg(test)]
mod tests {
  use super::classify_file;
  use crate::models::AssetCategory;

  #[test]
  fn classifies_scripts() {
    assert_eq!(classify_file("/dist/app.js"), AssetCategory::Script);
    assert_eq!(classify_file("/dist/APP.MIN.JS"), AssetCategory::Script);
  }

  #[test]
  fn classifies_stylesheets() {
    assert_eq!(classify_file("/css/site.css"), AssetCategory::Stylesheet);
    assert_eq!(classify_file("/css/site.min.Css"), AssetCategory::Stylesheet);
  }

  #[test]
  fn falls_back_to_other() {
    assert_eq!(classify_file("/fonts/icons.woff2"), AssetCategory::Other);
    assert_eq!(classify_file("/dist/app.js.map"), AssetCategory::Other);
    assert_eq!(classify_file("/src/app.jsx"), AssetCategory::Other);
    assert_eq!(classify_file(""), AssetCategory::Other);
  }
}
