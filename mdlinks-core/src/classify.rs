//! Internal/external link classification.
use serde::{Deserialize, Serialize};
use url::Url;

/// Where a link points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
  /// Relative or local link (`/docs`, `#anchor`, `mailto:...`).
  Internal,
  /// Absolute `http(s)` URL.
  External,
}

/// Classify a link destination.
///
/// A link is external when it starts with `http://` or `https://` and also
/// parses as an absolute URL with a host. Everything else, including empty
/// and malformed input, is internal. The input is never normalized.
///
/// # Examples
///
/// ```
/// use mdlinks_core::{LinkKind, classify};
///
/// assert_eq!(classify("https://example.com"), LinkKind::External);
/// assert_eq!(classify("/internal"), LinkKind::Internal);
/// assert_eq!(classify("mailto:hi@example.com"), LinkKind::Internal);
/// assert_eq!(classify("https://"), LinkKind::Internal);
/// ```
#[must_use]
pub fn classify(url: &str) -> LinkKind {
  if is_external(url) {
    LinkKind::External
  } else {
    LinkKind::Internal
  }
}

/// Whether `url` is an absolute `http(s)` URL.
#[must_use]
pub fn is_external(url: &str) -> bool {
  if !(url.starts_with("http://") || url.starts_with("https://")) {
    return false;
  }

  Url::parse(url).is_ok_and(|parsed| parsed.has_host())
}
