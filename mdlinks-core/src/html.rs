//! Extraction from raw HTML embedded in a document.
//!
//! The fragment is parsed with kuchikikiki into its own DOM and walked
//! depth-first. Parsing uses a `<template>` context so table parts such as a
//! lone `<tr>` survive when a table is split across several HTML blocks.
//! Parsing happens behind [`process_safe`] so that whatever the HTML parser
//! does with hostile input stays inside this node.
use kuchikikiki::NodeRef;
use log::{error, trace};
use markup5ever::{QualName, local_name, ns};

use crate::classify::{LinkKind, classify};

/// What an HTML fragment contributes to a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlExtraction {
  /// Values of every `id` attribute, in document order.
  pub ids:   Vec<String>,
  /// `href` values of `<a>` elements, classified.
  pub links: Vec<(LinkKind, String)>,
}

/// Parse `html` and collect element ids and anchor destinations.
///
/// Malformed markup yields whatever the HTML parser recovers, and a failure
/// inside the parser yields an empty extraction.
#[must_use]
pub fn extract_html(html: &str) -> HtmlExtraction {
  if html.trim().is_empty() {
    return HtmlExtraction::default();
  }

  process_safe(html, |html| {
    use tendril::TendrilSink;

    let context = QualName::new(None, ns!(html), local_name!("template"));
    let fragment = kuchikikiki::parse_fragment(context, Vec::new()).one(html);
    collect(&fragment)
  })
}

fn collect(fragment: &NodeRef) -> HtmlExtraction {
  let mut out = HtmlExtraction::default();

  for node in fragment.inclusive_descendants() {
    let Some(element) = node.as_element() else {
      continue;
    };
    let attributes = element.attributes.borrow();

    if let Some(id) = attributes.get(local_name!("id")) {
      out.ids.push(id.to_string());
    }

    if element.name.local == local_name!("a")
      && let Some(href) = attributes.get(local_name!("href"))
    {
      out.links.push((classify(href), href.to_string()));
    }
  }

  trace!(
    "Embedded HTML yielded {} ids and {} links",
    out.ids.len(),
    out.links.len()
  );
  out
}

/// Run `f` over `content`, turning a panic into an empty result.
fn process_safe<F>(content: &str, f: F) -> HtmlExtraction
where
  F: FnOnce(&str) -> HtmlExtraction,
{
  match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| f(content))) {
    Ok(extraction) => extraction,
    Err(e) => {
      if let Some(error_msg) = e.downcast_ref::<String>() {
        error!("Error processing embedded HTML: {error_msg}");
      } else if let Some(error_msg) = e.downcast_ref::<&str>() {
        error!("Error processing embedded HTML: {error_msg}");
      } else {
        error!("Unknown error occurred while processing embedded HTML");
      }
      HtmlExtraction::default()
    },
  }
}

#[cfg(test)]
mod tests {
  #![allow(clippy::panic, reason = "Fine in tests")]
  use super::*;

  #[test]
  fn collects_ids_and_anchor_links_in_order() {
    let out = extract_html(
      r#"<div id="intro"><a href="/docs">Docs</a><span id="note"></span>
      <a href="https://example.com" id="ext">Out</a></div>"#,
    );
    assert_eq!(out.ids, ["intro", "note", "ext"]);
    assert_eq!(out.links, [
      (LinkKind::Internal, "/docs".to_string()),
      (LinkKind::External, "https://example.com".to_string()),
    ]);
  }

  #[test]
  fn href_on_non_anchor_is_ignored() {
    let out = extract_html(r#"<link href="/style.css"><area href="/map">"#);
    assert!(out.links.is_empty());
  }

  #[test]
  fn anchor_without_href_is_ignored() {
    let out = extract_html(r#"<a name="top">Top</a>"#);
    assert!(out.links.is_empty());
    assert!(out.ids.is_empty());
  }

  #[test]
  fn uppercase_tags_are_normalized() {
    let out = extract_html(r#"<A HREF="/upper" ID="Shout">x</A>"#);
    assert_eq!(out.ids, ["Shout"]);
    assert_eq!(out.links, [(LinkKind::Internal, "/upper".to_string())]);
  }

  #[test]
  fn malformed_markup_does_not_fail() {
    let out = extract_html(r#"<div id="open"><a href="/x"<<</span>"#);
    assert_eq!(out.ids, ["open"]);
  }

  #[test]
  fn table_parts_outside_table_keep_ids() {
    let out = extract_html(
      r#"<tr id="row-2"><td id="cell"><a href="/x">x</a></td></tr>"#,
    );
    assert_eq!(out.ids, ["row-2", "cell"]);
    assert_eq!(out.links, [(LinkKind::Internal, "/x".to_string())]);

    let out = extract_html(r#"<td id="lone-cell">text</td>"#);
    assert_eq!(out.ids, ["lone-cell"]);
  }

  #[test]
  fn test_process_safe_panic_recovery() {
    let out = process_safe(r#"<a href="/x">x</a>"#, |_| panic!("test panic"));
    assert_eq!(out, HtmlExtraction::default());

    let out = process_safe("ignored", |_| std::panic::panic_any(42_u32));
    assert_eq!(out, HtmlExtraction::default());
  }

  #[test]
  fn closing_tag_fragment_yields_nothing() {
    assert_eq!(extract_html("</details>"), HtmlExtraction::default());
    assert_eq!(extract_html(""), HtmlExtraction::default());
  }
}
