//! `cdn-links` - print CDN links for a JSON list of package files.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use cdn_links::manifest::load_assets;
use cdn_links::{LinkBuilder, LinkConfig, LinkEntry, LinkOptions, ResultSet};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cdn-links")]
#[command(about = "Build CDN links and HTML tags for versioned package files", long_about = None)]
#[command(version)]
struct Cli {
  /// JSON array of asset descriptors, or `-` to read stdin
  assets: PathBuf,

  /// Render <script>/<link> tags instead of bare URLs
  #[arg(long)]
  html: bool,

  /// Link non-default files to their .min variant
  #[arg(long)]
  optimize: bool,

  /// Alias semver versions to their major version
  #[arg(long)]
  alias: bool,

  /// Emit tags with subresource integrity attributes
  #[arg(long)]
  sri: bool,

  /// Configuration file (defaults to cdn-links.config.json in the working directory)
  #[arg(long)]
  config: Option<PathBuf>,

  /// Override the configured CDN root
  #[arg(long)]
  cdn_root: Option<String>,

  /// Output format
  #[arg(long, value_enum, default_value_t = Format::Json)]
  format: Format,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
  /// Compact JSON result set
  Json,
  /// Indented JSON result set
  Pretty,
  /// One HTML column entry per line, grouped by category
  Text,
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cdn_links=warn")),
    )
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();

  let config = match &cli.config {
    Some(path) => LinkConfig::from_path(path)?,
    None => {
      let cwd = std::env::current_dir().context("failed to resolve working directory")?;
      LinkConfig::discover(&cwd)
    }
  };

  let builder = match &cli.cdn_root {
    Some(root) => LinkBuilder::new(root.as_str()),
    None => LinkBuilder::from_config(&config),
  };

  let options = config.defaults.union(LinkOptions {
    emit_html: cli.html,
    optimize_to_minified: cli.optimize,
    alias_version_to_major: cli.alias,
    integrity_mode: cli.sri,
  });

  let assets = load_assets(&cli.assets)?;
  let links = builder.build(&assets, options);

  let rendered = match cli.format {
    Format::Json => serde_json::to_string(&links).context("failed to serialize links")?,
    Format::Pretty => serde_json::to_string_pretty(&links).context("failed to serialize links")?,
    Format::Text => render_text(&links),
  };

  let mut stdout = std::io::stdout().lock();
  writeln!(stdout, "{rendered}").context("failed to write links")?;

  Ok(())
}

fn render_text(links: &ResultSet) -> String {
  let sections: [(&str, &[LinkEntry]); 3] = [
    ("scripts", links.scripts.as_slice()),
    ("stylesheets", links.stylesheets.as_slice()),
    ("other", links.other.as_slice()),
  ];

  sections
    .iter()
    .filter(|(_, entries)| !entries.is_empty())
    .map(|(title, entries)| {
      let lines: Vec<&str> = entries.iter().map(|entry| entry.html.as_str()).collect();
      format!("# {title}\n{}", lines.join("\n"))
    })
    .collect::<Vec<_>>()
    .join("\n\n")
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn text_output_skips_empty_sections() {
    let links = ResultSet {
      scripts: vec![LinkEntry::plain("https://cdn.jsdelivr.net/npm/a@1".into())],
      stylesheets: Vec::new(),
      other: vec![LinkEntry::plain("https://cdn.jsdelivr.net/npm/a@1/a.svg".into())],
    };

    assert_eq!(
      render_text(&links),
      "# scripts\nhttps://cdn.jsdelivr.net/npm/a@1\n\n# other\nhttps://cdn.jsdelivr.net/npm/a@1/a.svg"
    );
  }

  #[test]
  fn cli_parses_flags() {
    let cli = Cli::parse_from(["cdn-links", "assets.json", "--html", "--sri", "--format", "text"]);

    assert!(cli.html && cli.sri && !cli.alias && !cli.optimize);
    assert!(matches!(cli.format, Format::Text));
    assert_eq!(cli.assets, PathBuf::from("assets.json"));
  }
}
