//! Accumulated extraction results across documents.
use std::{
  collections::BTreeMap,
  sync::{
    PoisonError,
    RwLock,
    atomic::{AtomicUsize, Ordering},
  },
};

use log::debug;
use serde::{Deserialize, Serialize};

/// Document slug to extracted values.
pub type SlugMap = BTreeMap<String, Vec<String>>;

/// Snapshot of everything recorded in a [`LinkStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkData {
  /// Heading ids per document, in document order.
  pub headings:       SlugMap,
  /// Internal links per document, in document order.
  pub internal_links: SlugMap,
  /// External links per document. Documents without any are absent.
  pub external_links: SlugMap,
}

impl LinkData {
  /// Whether nothing has been recorded.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.headings.is_empty()
      && self.internal_links.is_empty()
      && self.external_links.is_empty()
  }
}

/// Shared, thread-safe result store.
///
/// All three maps live behind a single lock so a document's headings and
/// links become visible together. The store is an ordinary value: hosts
/// decide whether one store accumulates a whole corpus or each run gets a
/// fresh one.
///
/// # Examples
///
/// ```
/// use mdlinks_core::LinkStore;
///
/// let store = LinkStore::new();
/// store.record(
///   "guide",
///   vec!["install".into()],
///   vec!["/faq".into()],
///   Vec::new(),
/// );
///
/// let data = store.snapshot();
/// assert_eq!(data.headings["guide"], ["install"]);
/// assert!(!data.external_links.contains_key("guide"));
///
/// store.reset();
/// assert!(store.snapshot().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct LinkStore {
  data:           RwLock<LinkData>,
  file_name_seed: AtomicUsize,
}

impl LinkStore {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Store the results of one document under `slug`, replacing any earlier
  /// entry. An empty `external_links` leaves that map without an entry for
  /// `slug`.
  pub fn record(
    &self,
    slug: &str,
    headings: Vec<String>,
    internal_links: Vec<String>,
    external_links: Vec<String>,
  ) {
    let mut data = self.data.write().unwrap_or_else(PoisonError::into_inner);

    if data.headings.contains_key(slug) {
      debug!("Overwriting results for duplicate slug '{slug}'");
    }

    data.headings.insert(slug.to_owned(), headings);
    data.internal_links.insert(slug.to_owned(), internal_links);
    if external_links.is_empty() {
      // A previous document with the same slug may have left an entry.
      data.external_links.remove(slug);
    } else {
      data.external_links.insert(slug.to_owned(), external_links);
    }
  }

  /// Independent copy of the recorded data.
  #[must_use]
  pub fn snapshot(&self) -> LinkData {
    self
      .data
      .read()
      .unwrap_or_else(PoisonError::into_inner)
      .clone()
  }

  /// Drop everything recorded so far. The synthetic file name counter keeps
  /// counting.
  pub fn reset(&self) {
    let mut data = self.data.write().unwrap_or_else(PoisonError::into_inner);
    *data = LinkData::default();
  }

  /// Number of documents recorded.
  #[must_use]
  pub fn len(&self) -> usize {
    self
      .data
      .read()
      .unwrap_or_else(PoisonError::into_inner)
      .headings
      .len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Next synthetic name for a document without a path: `file-1`,
  /// `file-2`, ...
  pub fn next_file_name(&self) -> String {
    let n = self.file_name_seed.fetch_add(1, Ordering::Relaxed) + 1;
    format!("file-{n}")
  }
}
