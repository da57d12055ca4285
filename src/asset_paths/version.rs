use regex::Regex;

/// Full semver 2.0.0 grammar. ASCII digit classes only, so `\d` is spelled `[0-9]`.
const SEMVER_PATTERN: &str = r"^(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)\.(0|[1-9][0-9]*)(?:-(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9][0-9]*|[0-9]*[a-zA-Z-][0-9a-zA-Z-]*))*)?(?:\+[0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*)?$";

fn semver_pattern() -> &'static Regex {
  use std::sync::OnceLock;

  static PATTERN: OnceLock<Regex> = OnceLock::new();
  PATTERN.get_or_init(|| Regex::new(SEMVER_PATTERN).expect("invalid semver regex"))
}

/// Extract the major component of a valid semantic version.
///
/// Returns `None` when `version` does not match the full semver grammar.
pub fn semver_major(version: &str) -> Option<&str> {
  semver_pattern()
    .captures(version)
    .and_then(|caps| caps.get(1))
    .map(|major| major.as_str())
}

/// The bare major version `version` can be aliased to.
///
/// Invalid versions and `0.x` releases are not alias-eligible and yield `None`.
pub fn major_alias(version: &str) -> Option<&str> {
  semver_major(version).filter(|major| *major != "0")
}
