//! Conversion from markdown-rs syntax trees.
//!
//! Parses Markdown or MDX with `markdown` (markdown-rs) and converts the
//! resulting mdast into a [`tree::Node`](crate::tree::Node). Frontmatter
//! blocks are parsed on the way and handed back separately.
//!
//! Headings may carry an explicit id with a trailing `{#custom-id}`
//! attribute. The marker is removed from the heading text and the id is used
//! verbatim. In MDX the braces parse as an expression, which is recognized
//! the same way.
//!
//! # Examples
//!
//! ```
//! use mdlinks_core::{SourceKind, mdast::parse, tree::Node};
//!
//! let doc = parse("---\nslug: intro\n---\n# Hello {#hi}\n", SourceKind::Markdown)
//!   .unwrap();
//!
//! assert_eq!(doc.frontmatter.unwrap().slug(), Some("intro"));
//! let Node::Heading(heading) = &doc.tree.children()[1] else {
//!   panic!("expected a heading");
//! };
//! assert_eq!(heading.id.as_deref(), Some("hi"));
//! assert_eq!(heading.children, [Node::text("Hello")]);
//! ```
use std::sync::LazyLock;

use log::warn;
use markdown::{ParseOptions, mdast, to_mdast};
use regex::Regex;

use crate::{
  error::ExtractError,
  extractor::SourceKind,
  frontmatter::Frontmatter,
  tree::{
    AttributeValue,
    Definition,
    Heading,
    JsxAttribute,
    JsxElement,
    Link,
    LinkReference,
    Node,
  },
  utils::compile_or_never,
};

static HEADING_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile_or_never("HEADING_ID_RE", r"(?s)^(.*?)\s*\{#([A-Za-z0-9_:.-]+)\}\s*$")
});

static EXPRESSION_ID_RE: LazyLock<Regex> = LazyLock::new(|| {
  compile_or_never("EXPRESSION_ID_RE", r"^\s*#([A-Za-z0-9_:.-]+)\s*$")
});

/// A parsed source document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
  pub tree:        Node,
  /// Frontmatter, when present and well-formed.
  pub frontmatter: Option<Frontmatter>,
}

/// Parse `source` in the given mode.
///
/// # Errors
///
/// Returns [`ExtractError::Parse`] when markdown-rs rejects the source, which
/// only happens for MDX syntax errors (unclosed JSX, invalid expressions).
pub fn parse(source: &str, kind: SourceKind) -> Result<Document, ExtractError> {
  let options = parse_options(kind);
  let root = to_mdast(source, &options)
    .map_err(|e| ExtractError::Parse(e.to_string()))?;

  let mut converter = Converter::default();
  let tree = converter.convert(&root);
  Ok(Document {
    tree,
    frontmatter: converter.frontmatter,
  })
}

/// markdown-rs options for `kind`: GFM and frontmatter always, MDX on top
/// for [`SourceKind::Mdx`].
#[must_use]
pub fn parse_options(kind: SourceKind) -> ParseOptions {
  let mut options = match kind {
    SourceKind::Markdown => ParseOptions::gfm(),
    SourceKind::Mdx => {
      let mut options = ParseOptions::mdx();
      options.constructs.gfm_autolink_literal = true;
      options.constructs.gfm_footnote_definition = true;
      options.constructs.gfm_label_start_footnote = true;
      options.constructs.gfm_strikethrough = true;
      options.constructs.gfm_table = true;
      options.constructs.gfm_task_list_item = true;
      options
    },
  };
  options.constructs.frontmatter = true;
  options
}

#[derive(Default)]
struct Converter {
  frontmatter: Option<Frontmatter>,
}

impl Converter {
  fn convert(&mut self, node: &mdast::Node) -> Node {
    use mdast::Node as M;

    match node {
      M::Root(root) => Node::Root(self.convert_children(&root.children)),
      M::Heading(heading) => Node::Heading(self.convert_heading(heading)),
      M::Link(link) => {
        Node::Link(Link {
          url:      link.url.clone(),
          title:    link.title.clone(),
          children: self.convert_children(&link.children),
        })
      },
      M::LinkReference(reference) => {
        Node::LinkReference(LinkReference {
          identifier: reference.identifier.clone(),
          label:      reference.label.clone(),
          children:   self.convert_children(&reference.children),
        })
      },
      M::Definition(definition) => {
        Node::Definition(Definition {
          identifier: definition.identifier.clone(),
          url:        definition.url.clone(),
          title:      definition.title.clone(),
        })
      },
      M::Html(html) => Node::Html(html.value.clone()),
      M::MdxJsxFlowElement(element) => {
        Node::MdxJsxFlowElement(self.convert_jsx(
          element.name.as_deref(),
          &element.attributes,
          &element.children,
        ))
      },
      M::MdxJsxTextElement(element) => {
        Node::MdxJsxTextElement(self.convert_jsx(
          element.name.as_deref(),
          &element.attributes,
          &element.children,
        ))
      },
      M::Yaml(yaml) => {
        self.set_frontmatter(Frontmatter::from_yaml(&yaml.value));
        Node::Leaf
      },
      M::Toml(toml) => {
        self.set_frontmatter(Frontmatter::from_toml(&toml.value));
        Node::Leaf
      },
      M::Text(text) => Node::Text(text.value.clone()),
      M::InlineCode(code) => Node::Text(code.value.clone()),
      M::Code(code) => Node::Text(code.value.clone()),
      M::InlineMath(math) => Node::Text(math.value.clone()),
      M::Math(math) => Node::Text(math.value.clone()),
      M::MdxTextExpression(expression) => Node::Text(expression.value.clone()),
      M::MdxFlowExpression(expression) => Node::Text(expression.value.clone()),
      M::MdxjsEsm(esm) => Node::Text(esm.value.clone()),
      M::Image(image) => Node::Text(image.alt.clone()),
      M::ImageReference(image) => Node::Text(image.alt.clone()),
      other => {
        other
          .children()
          .map_or(Node::Leaf, |children| {
            Node::Container(self.convert_children(children))
          })
      },
    }
  }

  fn convert_children(&mut self, children: &[mdast::Node]) -> Vec<Node> {
    children.iter().map(|child| self.convert(child)).collect()
  }

  fn convert_heading(&mut self, heading: &mdast::Heading) -> Heading {
    let mut children = self.convert_children(&heading.children);
    let mut id = None;

    match heading.children.last() {
      Some(mdast::Node::MdxTextExpression(expression)) => {
        if let Some(caps) = EXPRESSION_ID_RE.captures(&expression.value) {
          id = Some(caps[1].to_string());
          children.pop();
          if let Some(Node::Text(text)) = children.last_mut() {
            text.truncate(text.trim_end().len());
          }
        }
      },
      Some(mdast::Node::Text(_)) => {
        if let Some(Node::Text(text)) = children.last_mut()
          && let Some(caps) = HEADING_ID_RE.captures(text)
        {
          id = Some(caps[2].to_string());
          *text = caps[1].to_string();
        }
      },
      _ => {},
    }

    Heading {
      depth: heading.depth,
      children,
      id,
    }
  }

  fn convert_jsx(
    &mut self,
    name: Option<&str>,
    attributes: &[mdast::AttributeContent],
    children: &[mdast::Node],
  ) -> JsxElement {
    JsxElement {
      name:       name.map(str::to_owned),
      attributes: attributes.iter().map(convert_attribute).collect(),
      children:   self.convert_children(children),
    }
  }

  fn set_frontmatter(&mut self, parsed: Result<Frontmatter, ExtractError>) {
    match parsed {
      Ok(frontmatter) => self.frontmatter = Some(frontmatter),
      Err(e) => warn!("Ignoring frontmatter: {e}"),
    }
  }
}

fn convert_attribute(attribute: &mdast::AttributeContent) -> JsxAttribute {
  match attribute {
    mdast::AttributeContent::Expression(expression) => {
      JsxAttribute::Expression(expression.value.clone())
    },
    mdast::AttributeContent::Property(property) => {
      let value = match &property.value {
        None => AttributeValue::Empty,
        Some(mdast::AttributeValue::Literal(value)) => {
          AttributeValue::Literal(value.clone())
        },
        Some(mdast::AttributeValue::Expression(expression)) => {
          AttributeValue::Expression(expression.value.clone())
        },
      };
      JsxAttribute::Property {
        name: property.name.clone(),
        value,
      }
    },
  }
}
