use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use mdlinks_config::Config;

/// Command line interface for mdlinks
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about = "mdlinks: heading and link extraction for Markdown and MDX"
)]
pub struct Cli {
  /// Subcommand to execute (see [`Commands`])
  #[command(subcommand)]
  pub command: Commands,

  /// Enable verbose debug logging
  #[arg(short, long, global = true)]
  pub verbose: bool,

  /// Path to configuration file(s) (TOML or JSON, can be specified multiple
  /// times) Multiple files are merged in order, with later files overriding
  /// earlier ones
  #[arg(short = 'c', long = "config-file", action = clap::ArgAction::Append, global = true)]
  pub config_files: Vec<PathBuf>,

  /// Override configuration values (KEY=VALUE format, can be used multiple
  /// times)
  #[arg(long = "config", action = clap::ArgAction::Append, global = true)]
  pub config_overrides: Vec<String>,
}

/// All supported subcommands for the mdlinks CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
  /// Initialize a new mdlinks configuration file
  Init {
    /// Path to create the configuration file at
    #[arg(short, long, default_value = "mdlinks.toml")]
    output: PathBuf,

    /// Format of the configuration file.
    #[arg(short = 'F', long, default_value = "toml", value_parser = ["toml", "json"])]
    format: String,

    /// Force overwrite if file already exists
    #[arg(short, long)]
    force: bool,
  },

  /// Extract headings and links and write them as JSON.
  Extract(ExtractArgs),
}

/// Arguments of the `extract` subcommand. Anything given here takes
/// precedence over config files.
#[derive(Args, Debug, Default)]
pub struct ExtractArgs {
  /// Directories containing Markdown and MDX documents. Replaces the
  /// configured input directories.
  pub input_dirs: Vec<PathBuf>,

  /// File to write the JSON result to. Standard output if omitted.
  #[arg(short, long)]
  pub output: Option<PathBuf>,

  /// Number of threads to use for parallel processing.
  #[arg(short, long)]
  pub jobs: Option<usize>,

  /// Skip documents whose frontmatter sets `draft: true`.
  #[arg(long)]
  pub ignore_drafts: bool,

  /// Key documents by their frontmatter `slug` instead of their path.
  #[arg(long)]
  pub use_slug: bool,

  /// Generate slugs for headings without an explicit id.
  #[arg(long)]
  pub heading_slugs: bool,

  /// Write compact JSON instead of pretty-printing it.
  #[arg(long)]
  pub compact: bool,
}

impl ExtractArgs {
  /// Apply the arguments on top of `config`.
  pub fn apply_to(&self, config: &mut Config) {
    if !self.input_dirs.is_empty() {
      config.input_dirs.clone_from(&self.input_dirs);
    }
    if let Some(output) = &self.output {
      config.output = Some(output.clone());
    }
    if let Some(jobs) = self.jobs {
      config.jobs = Some(jobs);
    }
    if self.ignore_drafts {
      config.extractor.astro_ignore_draft = true;
    }
    if self.use_slug {
      config.extractor.astro_use_slug = true;
    }
    if self.heading_slugs {
      config.extractor.create_headings_slug = true;
    }
    if self.compact {
      config.pretty = false;
    }
  }
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
