//! Heading and link extraction.
//!
//! # Architecture
//!
//! The extractor module is organized into focused submodules:
//!
//! - [`core`]: The [`LinkExtractor`] and the per-document pipeline
//! - [`process`]: Node processors and the document visitor
//! - [`types`]: Options, outcomes and parser modes
//!
//! With the `mdast` feature, [`LinkExtractor`] can also start from source text
//! (`process_source`) or from a file on disk (`process_file`).
pub mod core;
pub mod process;
#[cfg(feature = "mdast")]
mod source;
pub mod types;

pub use core::LinkExtractor;

pub use process::{FileExtraction, LINK_ELEMENTS};
pub use types::{
  ExtractorOptions,
  ExtractorOptionsBuilder,
  Outcome,
  SkipReason,
  SourceKind,
};
