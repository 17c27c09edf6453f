#![allow(clippy::expect_used, clippy::panic, reason = "Fine in tests")]
use std::sync::Arc;

use mdlinks_core::{
  ExtractorOptions,
  ExtractorOptionsBuilder,
  FileContext,
  Frontmatter,
  LinkExtractor,
  LinkStore,
  Outcome,
  SkipReason,
  tree::{Definition, Heading, JsxElement, Link, LinkReference, Node},
};
use serde_json::json;

fn extractor(options: ExtractorOptions) -> LinkExtractor {
  LinkExtractor::new(options, Arc::new(LinkStore::new()))
}

fn slugs() -> ExtractorOptions {
  ExtractorOptionsBuilder::new().create_headings_slug(true).build()
}

fn file(name: &str) -> FileContext {
  FileContext::default()
    .with_cwd("/project")
    .with_path(format!("/project/{name}"))
}

fn heading(text: &str) -> Node {
  Node::Heading(Heading::new(2, vec![Node::text(text)]))
}

fn link(url: &str) -> Node {
  Node::Link(Link::new(url, vec![Node::text("link")]))
}

#[test]
fn headings_and_internal_links_share_keys() {
  let extractor = extractor(ExtractorOptions::default());
  extractor.process(&Node::root(vec![heading("Intro")]), &file("a.md"));
  extractor.process(&Node::root(vec![link("/x")]), &file("b.md"));
  extractor.process(&Node::root(Vec::new()), &file("c.md"));

  let data = extractor.data();
  assert!(data.headings.keys().eq(data.internal_links.keys()));
  assert_eq!(data.headings.len(), 3);
  assert!(data.external_links.is_empty());
}

#[test]
fn duplicate_heading_text_gets_unique_slugs() {
  let extractor = extractor(slugs());
  let tree = Node::root(vec![heading("Heading 1"), heading("Heading 1")]);
  extractor.process(&tree, &file("doc.md"));

  assert_eq!(extractor.data().headings["doc"], ["heading-1", "heading-1-1"]);
}

#[test]
fn slugger_state_is_per_document() {
  let extractor = extractor(slugs());
  extractor.process(&Node::root(vec![heading("Setup")]), &file("a.md"));
  extractor.process(&Node::root(vec![heading("Setup")]), &file("b.md"));

  let data = extractor.data();
  assert_eq!(data.headings["a"], ["setup"]);
  assert_eq!(data.headings["b"], ["setup"]);
}

#[test]
fn links_are_split_by_kind() {
  let extractor = extractor(ExtractorOptions::default());
  let tree = Node::root(vec![link("/internal"), link("https://example.com")]);
  extractor.process(&tree, &file("links.md"));

  let data = extractor.data();
  assert_eq!(data.internal_links["links"], ["/internal"]);
  assert_eq!(data.external_links["links"], ["https://example.com"]);
}

#[test]
fn document_without_external_links_has_no_external_entry() {
  let extractor = extractor(ExtractorOptions::default());
  extractor.process(&Node::root(vec![link("/only")]), &file("local.md"));

  let data = extractor.data();
  assert_eq!(data.internal_links["local"], ["/only"]);
  assert!(!data.external_links.contains_key("local"));
}

#[test]
fn drafts_are_skipped_when_ignored() {
  let extractor = extractor(
    ExtractorOptionsBuilder::new().astro_ignore_draft(true).build(),
  );
  let file = file("draft.md").with_frontmatter(Frontmatter::new(json!({ "draft": true })));

  let outcome = extractor.process(&Node::root(vec![link("/x")]), &file);
  assert_eq!(outcome, Outcome::Skipped(SkipReason::Draft));
  assert!(extractor.data().is_empty());
}

#[test]
fn drafts_are_kept_by_default() {
  let extractor = extractor(ExtractorOptions::default());
  let file = file("draft.md").with_frontmatter(Frontmatter::new(json!({ "draft": true })));

  assert_eq!(extractor.process(&Node::root(Vec::new()), &file).slug(), Some("draft"));
}

#[test]
fn frontmatter_slug_replaces_path() {
  let extractor =
    extractor(ExtractorOptionsBuilder::new().astro_use_slug(true).build());
  let file = file("blog/post.md")
    .with_frontmatter(Frontmatter::new(json!({ "slug": "custom-slug" })));

  extractor.process(&Node::root(vec![link("/a")]), &file);
  let data = extractor.data();
  assert_eq!(data.internal_links["custom-slug"], ["/a"]);
  assert!(!data.internal_links.contains_key("blog/post"));
}

#[test]
fn frontmatter_slug_trailing_separator_is_trimmed() {
  let extractor =
    extractor(ExtractorOptionsBuilder::new().astro_use_slug(true).build());
  let file = file("x.md").with_frontmatter(Frontmatter::new(json!({ "slug": "guides/" })));

  assert_eq!(extractor.process(&Node::root(Vec::new()), &file).slug(), Some("guides"));
}

#[test]
fn slug_mode_without_slug_skips_document() {
  let extractor =
    extractor(ExtractorOptionsBuilder::new().astro_use_slug(true).build());

  let outcome = extractor.process(&Node::root(vec![heading("A")]), &file("a.md"));
  assert_eq!(outcome, Outcome::Skipped(SkipReason::MissingSlug));
  assert!(extractor.data().is_empty());
}

#[test]
fn pathless_documents_get_sequential_names() {
  let extractor = extractor(slugs());
  let unnamed = FileContext::default().with_cwd("/project");

  let first = extractor.process(&Node::root(vec![heading("One")]), &unnamed);
  let second = extractor.process(&Node::root(vec![heading("Two")]), &unnamed);

  assert_eq!(first.slug(), Some("file-1"));
  assert_eq!(second.slug(), Some("file-2"));
  let data = extractor.data();
  assert_eq!(data.headings["file-1"], ["one"]);
  assert_eq!(data.headings["file-2"], ["two"]);
}

#[test]
fn explicit_heading_id_always_wins() {
  for options in [ExtractorOptions::default(), slugs()] {
    let extractor = extractor(options);
    let tree = Node::root(vec![Node::Heading(
      Heading::new(1, vec![Node::text("Getting Started")]).with_id("start"),
    )]);
    extractor.process(&tree, &file("doc.md"));
    assert_eq!(extractor.data().headings["doc"], ["start"]);
  }
}

#[test]
fn empty_heading_id_falls_back_to_text() {
  let tree = Node::root(vec![Node::Heading(
    Heading::new(1, vec![Node::text("Title")]).with_id(""),
  )]);

  let slugging = extractor(slugs());
  slugging.process(&tree, &file("doc.md"));
  assert_eq!(slugging.data().headings["doc"], ["title"]);

  let plain = extractor(ExtractorOptions::default());
  plain.process(&tree, &file("doc.md"));
  assert_eq!(plain.data().headings["doc"], Vec::<String>::new());
}

#[test]
fn headings_without_id_are_dropped_when_slugs_disabled() {
  let extractor = extractor(ExtractorOptions::default());
  extractor.process(&Node::root(vec![heading("Dropped")]), &file("doc.md"));
  assert_eq!(extractor.data().headings["doc"], Vec::<String>::new());
}

#[test]
fn reset_clears_everything() {
  let extractor = extractor(slugs());
  extractor.process(
    &Node::root(vec![heading("A"), link("https://example.com")]),
    &file("a.md"),
  );
  extractor.reset_data();

  let data = extractor.data();
  assert!(data.headings.is_empty());
  assert!(data.internal_links.is_empty());
  assert!(data.external_links.is_empty());
}

#[test]
fn reset_on_run_clears_shared_store() {
  let store = Arc::new(LinkStore::new());
  let first = LinkExtractor::new(ExtractorOptions::default(), Arc::clone(&store));
  first.process(&Node::root(Vec::new()), &file("a.md"));

  let _accumulating =
    LinkExtractor::new(ExtractorOptions::default(), Arc::clone(&store));
  assert_eq!(store.len(), 1);

  let _isolated = LinkExtractor::new(
    ExtractorOptionsBuilder::new().reset_data_on_run(true).build(),
    Arc::clone(&store),
  );
  assert!(store.is_empty());
}

#[test]
fn link_references_resolve_through_definitions() {
  let extractor = extractor(ExtractorOptions::default());
  let tree = Node::root(vec![
    Node::LinkReference(LinkReference::new("docs", vec![Node::text("Docs")])),
    Node::LinkReference(LinkReference::new("missing", vec![Node::text("?")])),
    Node::LinkReference(LinkReference::new("site", Vec::new())),
    Node::Definition(Definition::new("docs", "/docs")),
    Node::Definition(Definition::new("site", "http://old.example.com")),
    Node::Definition(Definition::new("site", "https://example.com")),
  ]);
  extractor.process(&tree, &file("refs.md"));

  let data = extractor.data();
  assert_eq!(data.internal_links["refs"], ["/docs"]);
  assert_eq!(data.external_links["refs"], ["https://example.com"]);
}

#[test]
fn jsx_flow_elements_follow_allow_list() {
  let extractor = extractor(ExtractorOptions::default());
  let tree = Node::root(vec![
    Node::MdxJsxFlowElement(
      JsxElement::new("LinkCard").attr("id", "card").attr("href", "/guide"),
    ),
    Node::MdxJsxFlowElement(JsxElement::new("LinkButton").attr("href", "https://x.dev")),
    Node::MdxJsxFlowElement(JsxElement::new("a").attr("href", "/a")),
    Node::MdxJsxFlowElement(JsxElement::new("Card").attr("id", "c").attr("href", "/no")),
  ]);
  extractor.process(&tree, &file("page.mdx"));

  let data = extractor.data();
  assert_eq!(data.headings["page"], ["card", "c"]);
  assert_eq!(data.internal_links["page"], ["/guide", "/a"]);
  assert_eq!(data.external_links["page"], ["https://x.dev"]);
}

#[test]
fn jsx_text_elements_contribute_ids_only() {
  let extractor = extractor(ExtractorOptions::default());
  let tree = Node::root(vec![Node::container(vec![Node::MdxJsxTextElement(
    JsxElement::new("a").attr("id", "inline").attr("href", "/ignored"),
  )])]);
  extractor.process(&tree, &file("page.mdx"));

  let data = extractor.data();
  assert_eq!(data.headings["page"], ["inline"]);
  assert!(data.internal_links["page"].is_empty());
}

#[test]
fn raw_html_contributes_ids_and_anchor_links() {
  let extractor = extractor(ExtractorOptions::default());
  let tree = Node::root(vec![
    Node::html(r#"<section id="top"><a href="/local">l</a><a href="https://e.org">e</a></section>"#),
    Node::html("<div <<< broken"),
    link("/after"),
  ]);
  extractor.process(&tree, &file("raw.md"));

  let data = extractor.data();
  assert_eq!(data.headings["raw"], ["top"]);
  assert_eq!(data.internal_links["raw"], ["/local", "/after"]);
  assert_eq!(data.external_links["raw"], ["https://e.org"]);
}

#[test]
fn output_preserves_document_order() {
  let extractor = extractor(slugs());
  let tree = Node::root(vec![
    heading("First"),
    link("/1"),
    Node::container(vec![link("/2"), heading("Second")]),
    link("/3"),
  ]);
  extractor.process(&tree, &file("order.md"));

  let data = extractor.data();
  assert_eq!(data.headings["order"], ["first", "second"]);
  assert_eq!(data.internal_links["order"], ["/1", "/2", "/3"]);
}

#[test]
fn extract_does_not_touch_store() {
  let extractor = extractor(slugs());
  let result = extractor.extract(&Node::root(vec![heading("A"), link("/b")]));

  assert_eq!(result.headings, ["a"]);
  assert_eq!(result.internal_links, ["/b"]);
  assert!(extractor.data().is_empty());
}
