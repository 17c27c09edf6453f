use std::fmt;

/// Error type for template operations.
#[derive(Debug)]
pub enum TemplateError {
  /// The requested configuration format is not supported.
  UnsupportedFormat(String),
}

impl fmt::Display for TemplateError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::UnsupportedFormat(format) => {
        write!(f, "Unsupported config format: {format}")
      },
    }
  }
}

impl std::error::Error for TemplateError {}

/// Default configuration template in TOML, with every field explained.
pub const DEFAULT_TOML_TEMPLATE: &str = r#"# mdlinks configuration file

# Directories scanned for Markdown and MDX documents
input_dirs = ["src/content/docs"]

# Write the JSON result to this file instead of standard output
# output = "links.json"

# Number of threads to use for parallel processing (defaults to number of CPU cores)
# jobs = 4

# File extensions treated as documents
extensions = ["md", "mdx"]

# Pretty-print the JSON result
pretty = true

[extractor]
# Skip documents whose frontmatter sets `draft: true`
astroIgnoreDraft = false

# Key documents by their frontmatter `slug` instead of their path
astroUseSlug = false

# Generate GitHub-style slugs for headings without an explicit id
createHeadingsSlug = true

# Clear previously collected results when a new run starts
resetDataOnRun = false
"#;

/// Default configuration template in JSON.
pub const DEFAULT_JSON_TEMPLATE: &str = r#"{
  "input_dirs": ["src/content/docs"],
  "extensions": ["md", "mdx"],
  "pretty": true,
  "extractor": {
    "astroIgnoreDraft": false,
    "astroUseSlug": false,
    "createHeadingsSlug": true,
    "resetDataOnRun": false
  }
}
"#;

/// Default configuration template for `format` (`toml` or `json`).
///
/// # Errors
///
/// Returns [`TemplateError::UnsupportedFormat`] for any other format.
pub fn get_template(format: &str) -> Result<&'static str, TemplateError> {
  match format.to_lowercase().as_str() {
    "toml" => Ok(DEFAULT_TOML_TEMPLATE),
    "json" => Ok(DEFAULT_JSON_TEMPLATE),
    _ => Err(TemplateError::UnsupportedFormat(format.to_string())),
  }
}
