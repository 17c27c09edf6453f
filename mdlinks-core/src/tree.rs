//! Document tree consumed by the extractor.
//!
//! The tree mirrors the subset of mdast that matters for heading and link
//! extraction. Every node kind the extractor reacts to has its own variant;
//! everything else collapses into [`Node::Container`], [`Node::Text`] or
//! [`Node::Leaf`] so that traversal and text flattening still see it.
//!
//! # Examples
//!
//! ```
//! use mdlinks_core::tree::{Heading, Link, Node};
//!
//! let root = Node::root(vec![
//!   Node::Heading(Heading::new(1, vec![Node::text("Install")])),
//!   Node::container(vec![Node::Link(Link::new(
//!     "/guide",
//!     vec![Node::text("the guide")],
//!   ))]),
//! ]);
//!
//! assert_eq!(root.children().len(), 2);
//! assert_eq!(root.text_content(), "Installthe guide");
//! ```

/// A node of a parsed Markdown or MDX document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
  /// Document root.
  Root(Vec<Node>),
  /// Section heading (`# Title`).
  Heading(Heading),
  /// Inline link with a direct destination.
  Link(Link),
  /// Link whose destination lives in a [`Definition`].
  LinkReference(LinkReference),
  /// Link reference definition (`[id]: /url`).
  Definition(Definition),
  /// Raw HTML embedded in the document.
  Html(String),
  /// Block-level JSX element (MDX).
  MdxJsxFlowElement(JsxElement),
  /// Inline JSX element (MDX).
  MdxJsxTextElement(JsxElement),
  /// Any literal-valued node (text, inline code, code, image alt text...).
  Text(String),
  /// Any other parent node (paragraph, emphasis, list, table...).
  Container(Vec<Node>),
  /// Any node with neither children nor text.
  Leaf,
}

/// Heading node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
  /// Heading depth (1-6).
  pub depth:    u8,
  /// Inline content.
  pub children: Vec<Node>,
  /// Identifier supplied by the producer of the tree (e.g. a `{#id}`
  /// attribute). When present it is used verbatim.
  pub id:       Option<String>,
}

impl Heading {
  #[must_use]
  pub const fn new(depth: u8, children: Vec<Node>) -> Self {
    Self {
      depth,
      children,
      id: None,
    }
  }

  /// Attach an explicit identifier.
  #[must_use]
  pub fn with_id(mut self, id: impl Into<String>) -> Self {
    self.id = Some(id.into());
    self
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
  pub url:      String,
  pub title:    Option<String>,
  pub children: Vec<Node>,
}

impl Link {
  #[must_use]
  pub fn new(url: impl Into<String>, children: Vec<Node>) -> Self {
    Self {
      url: url.into(),
      title: None,
      children,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkReference {
  /// Normalized identifier used to look up the [`Definition`].
  pub identifier: String,
  pub label:      Option<String>,
  pub children:   Vec<Node>,
}

impl LinkReference {
  #[must_use]
  pub fn new(identifier: impl Into<String>, children: Vec<Node>) -> Self {
    Self {
      identifier: identifier.into(),
      label: None,
      children,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
  pub identifier: String,
  pub url:        String,
  pub title:      Option<String>,
}

impl Definition {
  #[must_use]
  pub fn new(identifier: impl Into<String>, url: impl Into<String>) -> Self {
    Self {
      identifier: identifier.into(),
      url:        url.into(),
      title:      None,
    }
  }
}

/// A JSX element, either block-level or inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsxElement {
  /// Tag name; `None` for fragments (`<>...</>`).
  pub name:       Option<String>,
  /// Attributes in source order.
  pub attributes: Vec<JsxAttribute>,
  pub children:   Vec<Node>,
}

impl JsxElement {
  #[must_use]
  pub fn new(name: impl Into<String>) -> Self {
    Self {
      name:       Some(name.into()),
      attributes: Vec::new(),
      children:   Vec::new(),
    }
  }

  /// Append a `name="value"` attribute.
  #[must_use]
  pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
    self.attributes.push(JsxAttribute::Property {
      name:  name.into(),
      value: AttributeValue::Literal(value.into()),
    });
    self
  }

  /// Append an arbitrary attribute.
  #[must_use]
  pub fn with_attribute(mut self, attribute: JsxAttribute) -> Self {
    self.attributes.push(attribute);
    self
  }

  #[must_use]
  pub fn with_children(mut self, children: Vec<Node>) -> Self {
    self.children = children;
    self
  }

  /// Iterate over string values of every attribute called `name`.
  pub fn literal_attributes<'a>(
    &'a self,
    name: &'a str,
  ) -> impl Iterator<Item = &'a str> + 'a {
    self.attributes.iter().filter_map(move |attribute| {
      match attribute {
        JsxAttribute::Property {
          name: attr_name,
          value: AttributeValue::Literal(value),
        } if attr_name == name => Some(value.as_str()),
        _ => None,
      }
    })
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JsxAttribute {
  /// `name`, `name="value"` or `name={expression}`.
  Property { name: String, value: AttributeValue },
  /// Spread expression such as `{...props}`.
  Expression(String),
}

/// Value of a JSX attribute. Only [`AttributeValue::Literal`] is treated as a
/// string by the extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
  Literal(String),
  Expression(String),
  /// Attribute written without a value (`<Card open />`).
  Empty,
}

impl Node {
  #[must_use]
  pub const fn root(children: Vec<Self>) -> Self {
    Self::Root(children)
  }

  #[must_use]
  pub const fn container(children: Vec<Self>) -> Self {
    Self::Container(children)
  }

  #[must_use]
  pub fn text(value: impl Into<String>) -> Self {
    Self::Text(value.into())
  }

  #[must_use]
  pub fn html(value: impl Into<String>) -> Self {
    Self::Html(value.into())
  }

  /// Child nodes, empty for leaves.
  #[must_use]
  pub fn children(&self) -> &[Self] {
    match self {
      Self::Root(children) | Self::Container(children) => children,
      Self::Heading(heading) => &heading.children,
      Self::Link(link) => &link.children,
      Self::LinkReference(reference) => &reference.children,
      Self::MdxJsxFlowElement(element) | Self::MdxJsxTextElement(element) => {
        &element.children
      },
      Self::Definition(_) | Self::Html(_) | Self::Text(_) | Self::Leaf => &[],
    }
  }

  /// Flattened text content of this node and its descendants.
  ///
  /// Literal values are concatenated in document order, raw HTML included,
  /// with no separators.
  #[must_use]
  pub fn text_content(&self) -> String {
    let mut out = String::new();
    self.collect_text(&mut out);
    out
  }

  fn collect_text(&self, out: &mut String) {
    match self {
      Self::Text(value) | Self::Html(value) => out.push_str(value),
      _ => {
        for child in self.children() {
          child.collect_text(out);
        }
      },
    }
  }

  /// Visit this node and every descendant in pre-order.
  pub fn walk<'a, F>(&'a self, f: &mut F)
  where
    F: FnMut(&'a Self),
  {
    f(self);
    for child in self.children() {
      child.walk(f);
    }
  }
}
