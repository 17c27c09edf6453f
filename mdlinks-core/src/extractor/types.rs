//! Type definitions for the link extractor.
//!
//! # Examples
//!
//! ```
//! use mdlinks_core::{ExtractorOptions, ExtractorOptionsBuilder};
//!
//! let options = ExtractorOptionsBuilder::new()
//!   .astro_ignore_draft(true)
//!   .create_headings_slug(true)
//!   .build();
//!
//! assert!(options.astro_ignore_draft);
//! assert!(!options.astro_use_slug);
//! ```
use serde::{Deserialize, Serialize};

/// Options for configuring the extractor.
///
/// Keys use the camelCase names hosts already know (`astroIgnoreDraft`,
/// ...); the snake_case field names are accepted as aliases. Unknown keys
/// are rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
#[allow(
  clippy::struct_excessive_bools,
  reason = "Config struct with related boolean flags"
)]
pub struct ExtractorOptions {
  /// Skip documents whose frontmatter sets `draft: true`.
  #[serde(alias = "astro_ignore_draft")]
  pub astro_ignore_draft: bool,

  /// Key documents by their frontmatter `slug` instead of their path.
  /// Documents without one are skipped with a warning.
  #[serde(alias = "astro_use_slug")]
  pub astro_use_slug: bool,

  /// Generate slugs for headings that carry no explicit id. When disabled,
  /// such headings are not recorded.
  #[serde(alias = "create_headings_slug")]
  pub create_headings_slug: bool,

  /// Clear the result store whenever an extractor is created with these
  /// options.
  #[serde(alias = "reset_data_on_run")]
  pub reset_data_on_run: bool,
}

/// Builder for constructing `ExtractorOptions` with method chaining.
#[derive(Debug, Clone, Default)]
pub struct ExtractorOptionsBuilder {
  options: ExtractorOptions,
}

impl ExtractorOptionsBuilder {
  /// Create a new builder with default options.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  #[must_use]
  pub const fn astro_ignore_draft(mut self, enabled: bool) -> Self {
    self.options.astro_ignore_draft = enabled;
    self
  }

  #[must_use]
  pub const fn astro_use_slug(mut self, enabled: bool) -> Self {
    self.options.astro_use_slug = enabled;
    self
  }

  #[must_use]
  pub const fn create_headings_slug(mut self, enabled: bool) -> Self {
    self.options.create_headings_slug = enabled;
    self
  }

  #[must_use]
  pub const fn reset_data_on_run(mut self, enabled: bool) -> Self {
    self.options.reset_data_on_run = enabled;
    self
  }

  /// Build the final `ExtractorOptions`.
  #[must_use]
  pub const fn build(self) -> ExtractorOptions {
    self.options
  }
}

/// Result of processing one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
  /// Results were stored under `slug`.
  Recorded { slug: String },
  /// Nothing was stored.
  Skipped(SkipReason),
}

impl Outcome {
  /// The slug results were stored under, if any.
  #[must_use]
  pub fn slug(&self) -> Option<&str> {
    match self {
      Self::Recorded { slug } => Some(slug),
      Self::Skipped(_) => None,
    }
  }
}

/// Why a document was not recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
  /// Draft document while drafts are ignored.
  Draft,
  /// Slug mode is on and the frontmatter has no usable slug.
  MissingSlug,
}

/// Which parser mode a source file needs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceKind {
  /// CommonMark with GFM and frontmatter.
  #[default]
  Markdown,
  /// Markdown plus JSX, expressions and ESM.
  Mdx,
}

impl SourceKind {
  /// Pick the mode from a file extension (`mdx` selects MDX).
  #[must_use]
  pub fn from_extension(extension: &str) -> Self {
    if extension.eq_ignore_ascii_case("mdx") {
      Self::Mdx
    } else {
      Self::Markdown
    }
  }
}
