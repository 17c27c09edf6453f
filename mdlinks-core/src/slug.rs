//! Heading slug generation.
//!
//! Slugs follow GitHub's anchor rules so that links written against rendered
//! pages (`#installing-nix`) line up with the extracted headings.
use std::{collections::HashMap, sync::LazyLock};

use regex::Regex;

use crate::utils::compile_or_never;

/// Turns heading text into identifiers that are unique per instance.
pub trait Slugger {
  /// Slug for `text`, unique among the slugs this instance has returned.
  fn slug(&mut self, text: &str) -> String;
}

/// GitHub-compatible slugger.
///
/// # Examples
///
/// ```
/// use mdlinks_core::{GithubSlugger, Slugger};
///
/// let mut slugger = GithubSlugger::new();
/// assert_eq!(slugger.slug("Hello, World!"), "hello-world");
/// assert_eq!(slugger.slug("Hello, World!"), "hello-world-1");
/// ```
#[derive(Debug, Clone, Default)]
pub struct GithubSlugger {
  occurrences: HashMap<String, usize>,
}

impl GithubSlugger {
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }
}

impl Slugger for GithubSlugger {
  fn slug(&mut self, text: &str) -> String {
    let original = slugify(text);
    let mut result = original.clone();

    while self.occurrences.contains_key(&result) {
      let count = self.occurrences.entry(original.clone()).or_insert(0);
      *count += 1;
      result = format!("{original}-{count}");
    }

    self.occurrences.insert(result.clone(), 0);
    result
  }
}

/// Stateless GitHub slug of `text`: lowercased, punctuation and symbols
/// removed, each space turned into a hyphen. Not trimmed and not collapsed.
#[must_use]
pub fn slugify(text: &str) -> String {
  static STRIP_RE: LazyLock<Regex> = LazyLock::new(|| {
    compile_or_never("SLUG_STRIP_RE", r"[^\p{L}\p{M}\p{N}\p{Pc} -]")
  });

  STRIP_RE
    .replace_all(&text.to_lowercase(), "")
    .replace(' ', "-")
}
