//! Link reference definitions of a single document.
use std::collections::HashMap;

use crate::tree::Node;

/// Mapping from definition identifier to destination URL.
///
/// Built in a pass of its own before classification, since a link reference
/// may appear before the definition it points at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefinitionTable {
  urls: HashMap<String, String>,
}

impl DefinitionTable {
  /// Collect every definition in `tree`. Later definitions replace earlier
  /// ones with the same identifier.
  #[must_use]
  pub fn from_tree(tree: &Node) -> Self {
    let mut table = Self::default();
    tree.walk(&mut |node| {
      if let Node::Definition(definition) = node {
        table.insert(&definition.identifier, &definition.url);
      }
    });
    table
  }

  pub fn insert(&mut self, identifier: &str, url: &str) {
    self.urls.insert(identifier.to_owned(), url.to_owned());
  }

  /// Destination of `identifier`, if defined.
  #[must_use]
  pub fn resolve(&self, identifier: &str) -> Option<&str> {
    self.urls.get(identifier).map(String::as_str)
  }

  #[must_use]
  pub fn len(&self) -> usize {
    self.urls.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.urls.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::tree::Definition;

  #[test]
  fn collects_nested_definitions() {
    let tree = Node::root(vec![
      Node::Definition(Definition::new("docs", "/docs")),
      Node::container(vec![Node::Definition(Definition::new(
        "home",
        "https://example.com",
      ))]),
    ]);
    let table = DefinitionTable::from_tree(&tree);
    assert_eq!(table.len(), 2);
    assert_eq!(table.resolve("docs"), Some("/docs"));
    assert_eq!(table.resolve("home"), Some("https://example.com"));
    assert_eq!(table.resolve("missing"), None);
  }

  #[test]
  fn last_definition_wins() {
    let tree = Node::root(vec![
      Node::Definition(Definition::new("x", "/first")),
      Node::Definition(Definition::new("x", "/second")),
    ]);
    assert_eq!(DefinitionTable::from_tree(&tree).resolve("x"), Some("/second"));
  }

  #[test]
  fn empty_tree_has_no_definitions() {
    assert!(DefinitionTable::from_tree(&Node::root(Vec::new())).is_empty());
  }
}
