//! Per-document file context and document slug derivation.
use std::{
  env,
  path::{Component, Path, PathBuf},
};

use crate::frontmatter::Frontmatter;

/// Information about the file a document tree came from.
///
/// # Examples
///
/// ```
/// use mdlinks_core::FileContext;
///
/// let file = FileContext::default()
///   .with_cwd("/project")
///   .with_path("/project/docs/intro.md");
///
/// assert_eq!(file.path_slug().as_deref(), Some("docs/intro"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileContext {
  history:     Vec<PathBuf>,
  cwd:         PathBuf,
  frontmatter: Option<Frontmatter>,
}

impl FileContext {
  /// Context for `path`, relative to the process working directory.
  #[must_use]
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self::default()
      .with_cwd(env::current_dir().unwrap_or_default())
      .with_path(path)
  }

  /// Record a path for this file. The first recorded path identifies it.
  #[must_use]
  pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
    self.history.push(path.into());
    self
  }

  #[must_use]
  pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
    self.cwd = cwd.into();
    self
  }

  #[must_use]
  pub fn with_frontmatter(mut self, frontmatter: Frontmatter) -> Self {
    self.frontmatter = Some(frontmatter);
    self
  }

  /// Replace the frontmatter in place.
  pub fn set_frontmatter(&mut self, frontmatter: Option<Frontmatter>) {
    self.frontmatter = frontmatter;
  }

  /// The path identifying this file, if any.
  #[must_use]
  pub fn path(&self) -> Option<&Path> {
    self
      .history
      .iter()
      .find(|path| !path.as_os_str().is_empty())
      .map(PathBuf::as_path)
  }

  #[must_use]
  pub fn history(&self) -> &[PathBuf] {
    &self.history
  }

  #[must_use]
  pub fn cwd(&self) -> &Path {
    &self.cwd
  }

  #[must_use]
  pub const fn frontmatter(&self) -> Option<&Frontmatter> {
    self.frontmatter.as_ref()
  }

  /// Whether the frontmatter marks this file as a draft.
  #[must_use]
  pub fn is_draft(&self) -> bool {
    self.frontmatter.as_ref().is_some_and(Frontmatter::draft)
  }

  /// Slug from the frontmatter `slug` field, with one trailing `/` removed.
  /// Empty values count as missing.
  #[must_use]
  pub fn frontmatter_slug(&self) -> Option<String> {
    let slug = self.frontmatter.as_ref()?.slug()?;
    let slug = slug.strip_suffix('/').unwrap_or(slug);
    (!slug.is_empty()).then(|| slug.to_owned())
  }

  /// Slug from the file path, if there is one.
  #[must_use]
  pub fn path_slug(&self) -> Option<String> {
    self.path().map(|path| path_slug(path, &self.cwd))
  }
}

/// Slug for `path`: relative to `cwd` when it lies below it, without a
/// trailing `.md`/`.mdx` extension, components joined with `/`.
#[must_use]
pub fn path_slug(path: &Path, cwd: &Path) -> String {
  let relative = if cwd.as_os_str().is_empty() {
    path
  } else {
    path.strip_prefix(cwd).unwrap_or(path)
  };

  let joined = relative
    .components()
    .filter_map(|component| {
      match component {
        Component::Normal(part) => Some(part.to_string_lossy()),
        Component::ParentDir => Some("..".into()),
        Component::RootDir | Component::CurDir | Component::Prefix(_) => None,
      }
    })
    .collect::<Vec<_>>()
    .join("/");

  joined
    .strip_suffix(".mdx")
    .or_else(|| joined.strip_suffix(".md"))
    .map_or_else(|| joined.clone(), str::to_owned)
}
