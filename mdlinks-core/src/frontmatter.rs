//! Document frontmatter.
//!
//! Frontmatter is kept as an untyped value and probed with typed accessors,
//! so a field of an unexpected type is ignored instead of invalidating the
//! whole block.
use serde_json::Value;

use crate::error::ExtractError;

/// Parsed frontmatter of a document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frontmatter {
  data: Value,
}

impl Frontmatter {
  /// Wrap an already parsed value.
  #[must_use]
  pub const fn new(data: Value) -> Self {
    Self { data }
  }

  /// Parse a YAML frontmatter block (without the `---` fences).
  ///
  /// # Errors
  ///
  /// Returns [`ExtractError::Frontmatter`] if the block is not valid YAML.
  pub fn from_yaml(source: &str) -> Result<Self, ExtractError> {
    if source.trim().is_empty() {
      return Ok(Self::default());
    }
    serde_yaml::from_str(source)
      .map(Self::new)
      .map_err(|e| ExtractError::Frontmatter(format!("invalid YAML: {e}")))
  }

  /// Parse a TOML frontmatter block (without the `+++` fences).
  ///
  /// # Errors
  ///
  /// Returns [`ExtractError::Frontmatter`] if the block is not valid TOML.
  pub fn from_toml(source: &str) -> Result<Self, ExtractError> {
    toml::from_str(source)
      .map(Self::new)
      .map_err(|e| ExtractError::Frontmatter(format!("invalid TOML: {e}")))
  }

  /// Whether the document is marked as a draft. Only a boolean `true`
  /// counts.
  #[must_use]
  pub fn draft(&self) -> bool {
    self.get("draft").and_then(Value::as_bool).unwrap_or(false)
  }

  /// Explicit document slug, if it is a string.
  #[must_use]
  pub fn slug(&self) -> Option<&str> {
    self.get("slug").and_then(Value::as_str)
  }

  /// Raw access to any top-level field.
  #[must_use]
  pub fn get(&self, key: &str) -> Option<&Value> {
    self.data.get(key)
  }

  #[must_use]
  pub const fn as_value(&self) -> &Value {
    &self.data
  }
}

impl From<Value> for Frontmatter {
  fn from(data: Value) -> Self {
    Self::new(data)
  }
}
