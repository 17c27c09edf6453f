//! Core implementation of the link extractor.
//!
//! Drives one document through draft filtering, slug derivation, the
//! definitions pass and the classification pass, then commits the result to
//! the shared [`LinkStore`].
use std::{path::Path, sync::Arc};

use log::{debug, trace, warn};

use super::{
  process::{DocumentVisitor, FileExtraction},
  types::{ExtractorOptions, Outcome, SkipReason},
};
use crate::{
  definitions::DefinitionTable,
  file::{FileContext, path_slug},
  slug::{GithubSlugger, Slugger},
  store::{LinkData, LinkStore},
  tree::Node,
};

/// Extracts headings and links from document trees into a [`LinkStore`].
///
/// An extractor is cheap to share between threads: per-document state is
/// created fresh for every call, and the store serializes commits.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
///
/// use mdlinks_core::{
///   ExtractorOptions, FileContext, LinkExtractor, LinkStore, Outcome,
///   tree::{Link, Node},
/// };
///
/// let extractor =
///   LinkExtractor::new(ExtractorOptions::default(), Arc::new(LinkStore::new()));
/// let tree = Node::root(vec![Node::Link(Link::new("/internal", Vec::new()))]);
/// let file = FileContext::default().with_cwd("/repo").with_path("/repo/a.md");
///
/// assert_eq!(extractor.process(&tree, &file), Outcome::Recorded {
///   slug: "a".into(),
/// });
/// assert_eq!(extractor.data().internal_links["a"], ["/internal"]);
/// ```
#[derive(Debug, Clone)]
pub struct LinkExtractor {
  options: ExtractorOptions,
  store:   Arc<LinkStore>,
}

impl LinkExtractor {
  /// Create an extractor writing into `store`. The store is cleared first
  /// when `options.reset_data_on_run` is set.
  #[must_use]
  pub fn new(options: ExtractorOptions, store: Arc<LinkStore>) -> Self {
    if options.reset_data_on_run {
      debug!("Resetting link store for new run");
      store.reset();
    }
    Self { options, store }
  }

  #[must_use]
  pub const fn options(&self) -> &ExtractorOptions {
    &self.options
  }

  #[must_use]
  pub const fn store(&self) -> &Arc<LinkStore> {
    &self.store
  }

  /// Snapshot of everything recorded so far.
  #[must_use]
  pub fn data(&self) -> LinkData {
    self.store.snapshot()
  }

  /// Clear the store.
  pub fn reset_data(&self) {
    self.store.reset();
  }

  /// Extract from `tree` and record the result for `file`.
  pub fn process(&self, tree: &Node, file: &FileContext) -> Outcome {
    if self.options.astro_ignore_draft && file.is_draft() {
      debug!("Skipping draft {}", display_path(file));
      return Outcome::Skipped(SkipReason::Draft);
    }

    let Some(slug) = self.document_slug(file) else {
      warn!("No slug found for file: {}", display_path(file));
      return Outcome::Skipped(SkipReason::MissingSlug);
    };

    let extraction = self.extract(tree);
    trace!(
      "Recording '{slug}': {} headings, {} internal, {} external",
      extraction.headings.len(),
      extraction.internal_links.len(),
      extraction.external_links.len()
    );
    self.store.record(
      &slug,
      extraction.headings,
      extraction.internal_links,
      extraction.external_links,
    );

    Outcome::Recorded { slug }
  }

  /// Extract from `tree` without recording anything, using the default
  /// GitHub slugger for headings.
  #[must_use]
  pub fn extract(&self, tree: &Node) -> FileExtraction {
    let mut slugger = GithubSlugger::new();
    self.extract_with_slugger(tree, &mut slugger)
  }

  /// Extract from `tree` with a caller-provided slugger. The slugger is only
  /// consulted when heading slugs are enabled.
  pub fn extract_with_slugger(
    &self,
    tree: &Node,
    slugger: &mut dyn Slugger,
  ) -> FileExtraction {
    let definitions = DefinitionTable::from_tree(tree);
    let slugger = self.options.create_headings_slug.then_some(slugger);

    let mut visitor = DocumentVisitor::new(&definitions, slugger);
    visitor.visit(tree);
    visitor.finish()
  }

  /// Key under which `file` is recorded, or `None` when slug mode is on and
  /// the frontmatter provides no slug.
  ///
  /// Without slug mode a file lacking a path is named `file-N` by the store.
  #[must_use]
  pub fn document_slug(&self, file: &FileContext) -> Option<String> {
    if self.options.astro_use_slug {
      return file.frontmatter_slug();
    }

    Some(file.path_slug().unwrap_or_else(|| {
      let name = self.store.next_file_name();
      path_slug(Path::new(&name), file.cwd())
    }))
  }
}

fn display_path(file: &FileContext) -> String {
  file
    .path()
    .map_or_else(|| "<unnamed>".to_string(), |path| path.display().to_string())
}
