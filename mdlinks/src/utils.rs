use std::{
  fs,
  io::{self, Write},
  ops::Add,
  path::{Path, PathBuf},
  sync::Arc,
};

use color_eyre::eyre::{Context, Result};
use log::{debug, error, info, warn};
use mdlinks_config::Config;
use mdlinks_core::{LinkData, LinkExtractor, LinkStore, Outcome, SkipReason};
use rayon::prelude::*;
use walkdir::WalkDir;

/// A document to process and the directory its slug is relative to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
  pub path: PathBuf,
  pub cwd:  PathBuf,
}

/// Per-run counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
  pub recorded:     usize,
  pub drafts:       usize,
  pub missing_slug: usize,
  pub failed:       usize,
}

impl Summary {
  const fn from_outcome(outcome: &Outcome) -> Self {
    match outcome {
      Outcome::Recorded { .. } => {
        Self {
          recorded: 1,
          ..Self::empty()
        }
      },
      Outcome::Skipped(SkipReason::Draft) => {
        Self {
          drafts: 1,
          ..Self::empty()
        }
      },
      Outcome::Skipped(SkipReason::MissingSlug) => {
        Self {
          missing_slug: 1,
          ..Self::empty()
        }
      },
    }
  }

  const fn failure() -> Self {
    Self {
      failed: 1,
      ..Self::empty()
    }
  }

  const fn empty() -> Self {
    Self {
      recorded:     0,
      drafts:       0,
      missing_slug: 0,
      failed:       0,
    }
  }

  /// Total number of documents seen.
  #[must_use]
  pub const fn total(&self) -> usize {
    self.recorded + self.drafts + self.missing_slug + self.failed
  }
}

impl Add for Summary {
  type Output = Self;

  fn add(self, rhs: Self) -> Self {
    Self {
      recorded:     self.recorded + rhs.recorded,
      drafts:       self.drafts + rhs.drafts,
      missing_slug: self.missing_slug + rhs.missing_slug,
      failed:       self.failed + rhs.failed,
    }
  }
}

/// Collect every document below the configured input directories.
///
/// Files are matched by extension and returned sorted per input directory.
/// Slugs are made relative to the parent of the input directory, so a file
/// `docs/guide/intro.md` found under `docs` is keyed `docs/guide/intro`.
#[must_use]
pub fn collect_documents(config: &Config) -> Vec<SourceFile> {
  let mut files = Vec::with_capacity(100);

  for input_dir in &config.input_dirs {
    let cwd = input_dir.parent().unwrap_or_else(|| Path::new(""));

    for entry in WalkDir::new(input_dir)
      .follow_links(true)
      .sort_by_file_name()
      .into_iter()
      .filter_map(Result::ok)
    {
      let path = entry.path();
      if path.is_file() && config.is_document(path) {
        files.push(SourceFile {
          path: path.to_owned(),
          cwd:  cwd.to_owned(),
        });
      }
    }
  }

  debug!("Found {} documents to process", files.len());
  files
}

/// Process `files` in parallel, recording results through `extractor`.
///
/// Failures to read or parse a file are logged and counted; they do not stop
/// the run.
pub fn process_documents(
  extractor: &LinkExtractor,
  files: &[SourceFile],
) -> Summary {
  files
    .par_iter()
    .map(|file| {
      match extractor.process_file(&file.path, &file.cwd) {
        Ok(outcome) => Summary::from_outcome(&outcome),
        Err(e) => {
          error!("Failed to process {}: {e}", file.path.display());
          Summary::failure()
        },
      }
    })
    .reduce(Summary::empty, Add::add)
}

/// Serialize `data` as JSON and write it to `output`, or standard output.
///
/// # Errors
///
/// Returns an error if serialization fails or the output cannot be written.
pub fn write_output(
  data: &LinkData,
  output: Option<&Path>,
  pretty: bool,
) -> Result<()> {
  let mut json = if pretty {
    serde_json::to_string_pretty(data)
  } else {
    serde_json::to_string(data)
  }
  .wrap_err("Failed to serialize extraction results")?;
  json.push('\n');

  if let Some(path) = output {
    if let Some(parent) = path.parent()
      && !parent.as_os_str().is_empty()
    {
      fs::create_dir_all(parent).wrap_err_with(|| {
        format!("Failed to create directory: {}", parent.display())
      })?;
    }
    fs::write(path, json)
      .wrap_err_with(|| format!("Failed to write output: {}", path.display()))?;
    info!("Results written to {}", path.display());
  } else {
    io::stdout()
      .lock()
      .write_all(json.as_bytes())
      .wrap_err("Failed to write results to standard output")?;
  }

  Ok(())
}

/// Run a full extraction for `config`: discover documents, process them on a
/// thread pool and write the collected results.
///
/// # Errors
///
/// Returns an error if the thread pool cannot be built or the output cannot
/// be written.
pub fn extract(config: &Config) -> Result<Summary> {
  for input_dir in &config.input_dirs {
    info!("Input directory: {}", input_dir.display());
  }
  let files = collect_documents(config);
  info!("Found {} documents", files.len());

  let extractor = LinkExtractor::new(config.extractor, Arc::new(LinkStore::new()));

  let thread_count = config.jobs.unwrap_or_else(num_cpus::get);
  let pool = rayon::ThreadPoolBuilder::new()
    .num_threads(thread_count)
    .build()
    .wrap_err("Failed to build thread pool")?;
  let summary = pool.install(|| process_documents(&extractor, &files));

  let data = extractor.data();
  write_output(&data, config.output.as_deref(), config.pretty)?;

  info!(
    "Recorded {} of {} documents ({} drafts, {} without slug, {} failed)",
    summary.recorded,
    summary.total(),
    summary.drafts,
    summary.missing_slug,
    summary.failed
  );
  if summary.failed > 0 {
    warn!("{} documents could not be processed", summary.failed);
  }

  Ok(summary)
}
