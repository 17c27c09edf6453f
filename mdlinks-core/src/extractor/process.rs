//! Per-node extraction for a single document.
use log::trace;
use serde::{Deserialize, Serialize};

use crate::{
  classify::{LinkKind, classify},
  definitions::DefinitionTable,
  html::extract_html,
  slug::Slugger,
  tree::{Heading, JsxElement, Node},
};

/// JSX elements whose `href` attribute is treated as a link.
pub const LINK_ELEMENTS: [&str; 3] = ["a", "LinkCard", "LinkButton"];

/// Headings and links extracted from one document, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileExtraction {
  pub headings:       Vec<String>,
  pub internal_links: Vec<String>,
  pub external_links: Vec<String>,
}

impl FileExtraction {
  /// Append `url` to the internal or external links.
  pub fn push_link(&mut self, url: &str) {
    self.push_classified(classify(url), url.to_owned());
  }

  fn push_classified(&mut self, kind: LinkKind, url: String) {
    match kind {
      LinkKind::Internal => self.internal_links.push(url),
      LinkKind::External => self.external_links.push(url),
    }
  }
}

/// Walks one document tree and feeds every recognized node to its processor.
pub(crate) struct DocumentVisitor<'a, 's> {
  definitions: &'a DefinitionTable,
  /// Present only when heading slugs are generated.
  slugger:     Option<&'s mut dyn Slugger>,
  out:         FileExtraction,
}

impl<'a, 's> DocumentVisitor<'a, 's> {
  pub(crate) fn new(
    definitions: &'a DefinitionTable,
    slugger: Option<&'s mut dyn Slugger>,
  ) -> Self {
    Self {
      definitions,
      slugger,
      out: FileExtraction::default(),
    }
  }

  pub(crate) fn finish(self) -> FileExtraction {
    self.out
  }

  /// Process `node`, then its descendants in pre-order.
  pub(crate) fn visit(&mut self, node: &Node) {
    match node {
      Node::Heading(heading) => self.process_heading(heading),
      Node::Link(link) => self.out.push_link(&link.url),
      Node::LinkReference(reference) => {
        if let Some(url) = self.definitions.resolve(&reference.identifier) {
          self.out.push_link(url);
        } else {
          trace!("Unresolved link reference '{}'", reference.identifier);
        }
      },
      Node::MdxJsxFlowElement(element) => {
        self.process_jsx_ids(element);
        self.process_jsx_links(element);
      },
      Node::MdxJsxTextElement(element) => self.process_jsx_ids(element),
      Node::Html(html) => self.process_html(html),
      Node::Root(_)
      | Node::Definition(_)
      | Node::Text(_)
      | Node::Container(_)
      | Node::Leaf => {},
    }

    for child in node.children() {
      self.visit(child);
    }
  }

  fn process_heading(&mut self, heading: &Heading) {
    // An empty explicit id counts as no id.
    if let Some(id) = heading.id.as_deref().filter(|id| !id.is_empty()) {
      self.out.headings.push(id.to_owned());
      return;
    }

    let content = heading.children.iter().map(Node::text_content).collect::<String>();
    if content.is_empty() {
      return;
    }

    if let Some(slugger) = self.slugger.as_deref_mut() {
      self.out.headings.push(slugger.slug(&content));
    }
  }

  fn process_jsx_ids(&mut self, element: &JsxElement) {
    self
      .out
      .headings
      .extend(element.literal_attributes("id").map(str::to_owned));
  }

  fn process_jsx_links(&mut self, element: &JsxElement) {
    let Some(name) = element.name.as_deref() else {
      return;
    };
    if !LINK_ELEMENTS.contains(&name) {
      return;
    }

    for href in element.literal_attributes("href") {
      self.out.push_link(href);
    }
  }

  fn process_html(&mut self, html: &str) {
    let extraction = extract_html(html);
    self.out.headings.extend(extraction.ids);
    for (kind, url) in extraction.links {
      self.out.push_classified(kind, url);
    }
  }
}
