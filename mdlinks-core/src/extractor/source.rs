//! Entry points that start from source text instead of a prepared tree.
use std::{fs, path::Path};

use log::debug;

use super::{core::LinkExtractor, types::{Outcome, SourceKind}};
use crate::{error::ExtractError, file::FileContext, mdast};

impl LinkExtractor {
  /// Parse `source` and process it as `file`.
  ///
  /// Frontmatter found in the source is attached to `file` unless the caller
  /// already provided some.
  ///
  /// # Errors
  ///
  /// Returns [`ExtractError::Parse`] when the source cannot be parsed in the
  /// given mode. Nothing is recorded in that case.
  pub fn process_source(
    &self,
    source: &str,
    mut file: FileContext,
    kind: SourceKind,
  ) -> Result<Outcome, ExtractError> {
    let document = mdast::parse(source, kind)?;
    if file.frontmatter().is_none() {
      file.set_frontmatter(document.frontmatter);
    }
    Ok(self.process(&document.tree, &file))
  }

  /// Read and process the file at `path`. The parser mode follows the file
  /// extension and slugs are made relative to `cwd`.
  ///
  /// # Errors
  ///
  /// Returns [`ExtractError::Io`] if the file cannot be read, or
  /// [`ExtractError::Parse`] if it cannot be parsed.
  pub fn process_file(
    &self,
    path: &Path,
    cwd: &Path,
  ) -> Result<Outcome, ExtractError> {
    debug!("Processing file: {}", path.display());
    let source = fs::read_to_string(path)?;
    let kind = path
      .extension()
      .and_then(|ext| ext.to_str())
      .map(SourceKind::from_extension)
      .unwrap_or_default();

    let file = FileContext::default().with_cwd(cwd).with_path(path);
    self.process_source(&source, file, kind)
  }
}
