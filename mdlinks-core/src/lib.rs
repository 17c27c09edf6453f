//! # mdlinks-core - heading and link extraction for Markdown and MDX
//!
//! Walks parsed Markdown/MDX documents and records, per document, the heading
//! ids it defines and the links it contains, split into internal and external
//! links. Results accumulate in a shared [`LinkStore`] keyed by document slug
//! so link checkers can validate cross-document references afterwards.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use mdlinks_core::{
//!   ExtractorOptionsBuilder, FileContext, LinkExtractor, LinkStore, SourceKind,
//! };
//!
//! let options = ExtractorOptionsBuilder::new().create_headings_slug(true).build();
//! let extractor = LinkExtractor::new(options, Arc::new(LinkStore::new()));
//!
//! let file = FileContext::default()
//!   .with_cwd("/site")
//!   .with_path("/site/docs/intro.md");
//! extractor
//!   .process_source(
//!     "# Heading 1\n\n# Heading 1\n\n[Next](/docs/next) [Rust](https://rust-lang.org)\n",
//!     file,
//!     SourceKind::Markdown,
//!   )
//!   .unwrap();
//!
//! let data = extractor.data();
//! assert_eq!(data.headings["docs/intro"], ["heading-1", "heading-1-1"]);
//! assert_eq!(data.internal_links["docs/intro"], ["/docs/next"]);
//! assert_eq!(data.external_links["docs/intro"], ["https://rust-lang.org"]);
//! ```
//!
//! ## Features
//!
//! - **Heading ids** from explicit ids, `id` attributes in raw HTML and JSX,
//!   or generated GitHub-style slugs
//! - **Link classification** into internal and external links
//! - **Reference links** resolved through the document's definitions
//! - **Astro conventions** for draft filtering and frontmatter slugs
//! - **Parser-agnostic core** over a small [`tree::Node`] model, with a
//!   markdown-rs adapter behind the `mdast` feature
pub mod classify;
pub mod definitions;
pub mod error;
pub mod extractor;
pub mod file;
pub mod frontmatter;
pub mod html;
#[cfg(feature = "mdast")]
pub mod mdast;
pub mod slug;
pub mod store;
pub mod tree;
pub mod utils;

pub use crate::{
  classify::{LinkKind, classify, is_external},
  definitions::DefinitionTable,
  error::ExtractError,
  extractor::{
    ExtractorOptions,
    ExtractorOptionsBuilder,
    FileExtraction,
    LINK_ELEMENTS,
    LinkExtractor,
    Outcome,
    SkipReason,
    SourceKind,
  },
  file::FileContext,
  frontmatter::Frontmatter,
  html::{HtmlExtraction, extract_html},
  slug::{GithubSlugger, Slugger, slugify},
  store::{LinkData, LinkStore, SlugMap},
};
