//! Caller-supplied link options and their resolved form.

use serde::{Deserialize, Serialize};

/// Flags controlling how links are rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LinkOptions {
  /// Render `<script>` / `<link>` tags instead of bare URLs.
  pub emit_html: bool,
  /// Point non-default files at their `.min` variant.
  pub optimize_to_minified: bool,
  /// Collapse valid semver versions to their major component.
  pub alias_version_to_major: bool,
  /// Emit tags carrying an `integrity` attribute.
  pub integrity_mode: bool,
}

impl LinkOptions {
  /// Combine two option sets, enabling every flag set in either.
  pub fn union(self, other: Self) -> Self {
    Self {
      emit_html: self.emit_html || other.emit_html,
      optimize_to_minified: self.optimize_to_minified || other.optimize_to_minified,
      alias_version_to_major: self.alias_version_to_major || other.alias_version_to_major,
      integrity_mode: self.integrity_mode || other.integrity_mode,
    }
  }

  /// Apply the integrity precedence rule.
  ///
  /// Integrity hashes are computed for one exact file, so integrity mode always renders HTML
  /// and disables both filename and version rewriting.
  pub fn resolve(self) -> EffectiveOptions {
    if self.integrity_mode {
      return EffectiveOptions {
        emit_html: true,
        optimize_to_minified: false,
        alias_version_to_major: false,
        integrity_mode: true,
      };
    }

    EffectiveOptions {
      emit_html: self.emit_html,
      optimize_to_minified: self.optimize_to_minified,
      alias_version_to_major: self.alias_version_to_major,
      integrity_mode: false,
    }
  }
}

/// Options after precedence rules were applied. Only produced by [`LinkOptions::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveOptions {
  emit_html: bool,
  optimize_to_minified: bool,
  alias_version_to_major: bool,
  integrity_mode: bool,
}

impl EffectiveOptions {
  /// Whether tags are rendered.
  pub fn emit_html(&self) -> bool {
    self.emit_html
  }

  /// Whether filenames are rewritten to their minified variant.
  pub fn optimize_to_minified(&self) -> bool {
    self.optimize_to_minified
  }

  /// Whether versions are aliased to their major component.
  pub fn alias_version_to_major(&self) -> bool {
    self.alias_version_to_major
  }

  /// Whether integrity attributes are emitted.
  pub fn integrity_mode(&self) -> bool {
    self.integrity_mode
  }
}

impl From<LinkOptions> for EffectiveOptions {
  fn from(options: LinkOptions) -> Self {
    options.resolve()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn passes_flags_through_without_integrity() {
    let options = LinkOptions {
      emit_html: false,
      optimize_to_minified: true,
      alias_version_to_major: true,
      integrity_mode: false,
    }
    .resolve();

    assert!(!options.emit_html());
    assert!(options.optimize_to_minified());
    assert!(options.alias_version_to_major());
    assert!(!options.integrity_mode());
  }

  #[test]
  fn integrity_mode_overrides_caller_flags() {
    let options = LinkOptions {
      emit_html: false,
      optimize_to_minified: true,
      alias_version_to_major: true,
      integrity_mode: true,
    }
    .resolve();

    assert!(options.emit_html());
    assert!(!options.optimize_to_minified());
    assert!(!options.alias_version_to_major());
    assert!(options.integrity_mode());
  }

  #[test]
  fn union_enables_flags_from_either_side() {
    let defaults = LinkOptions {
      emit_html: true,
      ..LinkOptions::default()
    };
    let flags = LinkOptions {
      alias_version_to_major: true,
      ..LinkOptions::default()
    };

    let merged = defaults.union(flags);
    assert!(merged.emit_html);
    assert!(merged.alias_version_to_major);
    assert!(!merged.optimize_to_minified);
    assert!(!merged.integrity_mode);
  }

  #[test]
  fn deserializes_camel_case_with_defaults() {
    let options: LinkOptions = serde_json::from_str(r#"{"emitHtml":true}"#).unwrap();
    assert_eq!(options, LinkOptions {
      emit_html: true,
      ..LinkOptions::default()
    });
  }
}
