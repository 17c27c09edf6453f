use std::io;

use thiserror::Error;

/// Errors surfaced to the host pipeline.
///
/// Per-document data problems (drafts, missing slugs, unresolved references,
/// broken embedded HTML) are never reported through this type; they only
/// reduce what gets recorded.
#[derive(Debug, Error)]
pub enum ExtractError {
  #[error("Parse error: {0}")]
  Parse(String),

  #[error("Frontmatter error: {0}")]
  Frontmatter(String),

  #[error("I/O error: {0}")]
  Io(#[from] io::Error),
}
