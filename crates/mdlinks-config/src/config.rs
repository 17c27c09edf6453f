use std::{
  fs,
  path::{Path, PathBuf},
};

use mdlinks_core::ExtractorOptions;
use serde::{Deserialize, Serialize};

use crate::{error::ConfigError, templates};

/// Configuration for an mdlinks run.
///
/// [`Config`] controls which files are scanned, how the extractor behaves and
/// where results are written. Fields are typically loaded from a TOML or JSON
/// config file, but can also be set via CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Directories scanned for documents.
  pub input_dirs: Vec<PathBuf>,

  /// File the JSON result is written to. Standard output when unset.
  pub output: Option<PathBuf>,

  /// Number of worker threads. Defaults to the number of CPUs.
  pub jobs: Option<usize>,

  /// File extensions (without the dot) treated as documents.
  pub extensions: Vec<String>,

  /// Pretty-print the JSON result.
  pub pretty: bool,

  /// Options passed to the extractor.
  pub extractor: ExtractorOptions,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      input_dirs: Vec::new(),
      output:     None,
      jobs:       None,
      extensions: vec!["md".to_string(), "mdx".to_string()],
      pretty:     true,
      extractor:  ExtractorOptions::default(),
    }
  }
}

impl Config {
  /// Load configuration from a file (TOML or JSON).
  ///
  /// # Arguments
  ///
  /// * `path` - Path to the configuration file.
  ///
  /// # Errors
  ///
  /// Returns an error if the file cannot be read or parsed, or if the format is
  /// unsupported.
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
      ConfigError::Config(format!(
        "Failed to read config file: {}: {}",
        path.display(),
        e
      ))
    })?;

    let Some(ext) = path.extension().and_then(|ext| ext.to_str()) else {
      return Err(ConfigError::Config(format!(
        "Config file has no extension: {}",
        path.display()
      )));
    };

    match ext.to_lowercase().as_str() {
      "json" => {
        serde_json::from_str(&content)
          .map_err(ConfigError::from)
          .map_err(|e| {
            ConfigError::Config(format!(
              "Failed to parse JSON config from {}: {}",
              path.display(),
              e
            ))
          })
      },
      "toml" => {
        toml::from_str(&content)
          .map_err(ConfigError::from)
          .map_err(|e| {
            ConfigError::Config(format!(
              "Failed to parse TOML config from {}: {}",
              path.display(),
              e
            ))
          })
      },
      _ => {
        Err(ConfigError::Config(format!(
          "Unsupported config file format: {}",
          path.display()
        )))
      },
    }
  }

  /// Load configuration from config files and `KEY=VALUE` overrides.
  ///
  /// Files are merged in order. Without any file, a config discovered in the
  /// working directory is used when present, the defaults otherwise.
  /// Overrides are applied last.
  ///
  /// # Errors
  ///
  /// Returns an error if a file cannot be loaded or an override is invalid.
  pub fn load(
    config_files: &[PathBuf],
    config_overrides: &[String],
  ) -> Result<Self, ConfigError> {
    let mut config = if let Some((first, rest)) = config_files.split_first() {
      let mut merged_config = Self::from_file(first).map_err(|e| {
        ConfigError::Config(format!(
          "Failed to load config from {}: {}",
          first.display(),
          e
        ))
      })?;

      for config_path in rest {
        let additional_config = Self::from_file(config_path).map_err(|e| {
          ConfigError::Config(format!(
            "Failed to load config from {}: {}",
            config_path.display(),
            e
          ))
        })?;
        merged_config.merge(additional_config);
      }

      if config_files.len() > 1 {
        log::info!("Loaded and merged {} config files", config_files.len());
      }

      merged_config
    } else if let Some(discovered_config) = Self::find_config_file() {
      log::info!(
        "Using discovered config file: {}",
        discovered_config.display()
      );
      Self::from_file(&discovered_config).map_err(|e| {
        ConfigError::Config(format!(
          "Failed to load discovered config from {}: {}",
          discovered_config.display(),
          e
        ))
      })?
    } else {
      Self::default()
    };

    if !config_overrides.is_empty() {
      config.apply_overrides(config_overrides)?;
    }

    if config.jobs == Some(0) {
      return Err(ConfigError::Config(
        "Invalid value for 'jobs': '0'. Expected a positive integer".to_string(),
      ));
    }

    Ok(config)
  }

  /// Apply configuration overrides from KEY=VALUE strings.
  ///
  /// # Errors
  ///
  /// Returns an error if:
  ///
  /// - An override string is not in KEY=VALUE format
  /// - A key is not recognized
  /// - A value cannot be parsed as the expected type
  ///
  /// # Example
  ///
  /// ```rust, ignore
  /// config.apply_overrides(&vec![
  ///     "extractor.astroUseSlug=true".to_string(),
  ///     "extensions=md".to_string(),
  /// ])?;
  /// ```
  pub fn apply_overrides(
    &mut self,
    overrides: &[String],
  ) -> Result<(), ConfigError> {
    for override_str in overrides {
      let (key, value) = override_str.split_once('=').ok_or_else(|| {
        ConfigError::Config(format!(
          "Invalid config override format: '{override_str}'. Expected \
           KEY=VALUE"
        ))
      })?;

      self.apply_override(key.trim(), value.trim())?;
    }

    Ok(())
  }

  /// Apply a configuration override by key.
  ///
  /// # Errors
  ///
  /// Returns an error for unknown keys and unparsable values.
  pub fn apply_override(
    &mut self,
    key: &str,
    value: &str,
  ) -> Result<(), ConfigError> {
    match key {
      "input_dirs" => self.input_dirs = split_list(value).map(PathBuf::from).collect(),
      "output" => {
        self.output = (!value.is_empty()).then(|| PathBuf::from(value));
      },
      "jobs" => {
        self.jobs = if value.is_empty() {
          None
        } else {
          match value.parse::<usize>() {
            Ok(jobs) if jobs > 0 => Some(jobs),
            _ => {
              return Err(ConfigError::Config(format!(
                "Invalid value for 'jobs': '{value}'. Expected a positive \
                 integer"
              )));
            },
          }
        };
      },
      "extensions" => {
        self.extensions = split_list(value)
          .map(|ext| ext.trim_start_matches('.').to_string())
          .collect();
      },
      "pretty" => self.pretty = parse_bool(key, value)?,
      _ => {
        let Some(field) = key.strip_prefix("extractor.") else {
          return Err(unknown_key(key));
        };
        let flag = match field {
          "astroIgnoreDraft" | "astro_ignore_draft" => {
            &mut self.extractor.astro_ignore_draft
          },
          "astroUseSlug" | "astro_use_slug" => &mut self.extractor.astro_use_slug,
          "createHeadingsSlug" | "create_headings_slug" => {
            &mut self.extractor.create_headings_slug
          },
          "resetDataOnRun" | "reset_data_on_run" => {
            &mut self.extractor.reset_data_on_run
          },
          _ => return Err(unknown_key(key)),
        };
        *flag = parse_bool(key, value)?;
      },
    }

    Ok(())
  }

  /// Merge another config into this one, with the other config's values taking
  /// precedence.
  ///
  /// # Merge Rules
  ///
  /// - [`Option<T>`] fields: Other's [`Some`] value replaces this config's
  ///   value
  /// - `input_dirs`: Other's entries are appended
  /// - `extensions`: Other's entries are appended, skipping ones already
  ///   present
  /// - Plain fields (`pretty`, `extractor`): Other's value always replaces
  pub fn merge(&mut self, other: Self) {
    self.input_dirs.extend(other.input_dirs);
    if other.output.is_some() {
      self.output = other.output;
    }
    if other.jobs.is_some() {
      self.jobs = other.jobs;
    }
    for ext in other.extensions {
      if !self.extensions.contains(&ext) {
        self.extensions.push(ext);
      }
    }
    self.pretty = other.pretty;
    self.extractor = other.extractor;
  }

  /// Search for a config file in the working directory.
  #[must_use]
  pub fn find_config_file() -> Option<PathBuf> {
    let current_dir = std::env::current_dir().ok()?;
    Self::find_config_file_in(&current_dir)
  }

  /// Search `dir` for `mdlinks.toml`, `mdlinks.json` and their dotted and
  /// `.config/` variants.
  #[must_use]
  pub fn find_config_file_in(dir: &Path) -> Option<PathBuf> {
    let config_filenames = [
      "mdlinks.toml",
      "mdlinks.json",
      ".mdlinks.toml",
      ".mdlinks.json",
      ".config/mdlinks.toml",
      ".config/mdlinks.json",
    ];

    config_filenames
      .iter()
      .map(|filename| dir.join(filename))
      .find(|path| path.is_file())
  }

  /// Check that the config describes a runnable extraction.
  ///
  /// # Errors
  ///
  /// Returns an error listing every problem found, such as missing input
  /// directories, a job count of zero or an empty extension list.
  pub fn validate(&self) -> Result<(), ConfigError> {
    let mut errors = Vec::new();

    if self.input_dirs.is_empty() {
      errors.push("At least one input directory must be provided.".to_string());
    }
    for dir in &self.input_dirs {
      if !dir.is_dir() {
        errors.push(format!(
          "Input directory does not exist or is not a directory: {}",
          dir.display()
        ));
      }
    }
    if self.jobs == Some(0) {
      errors.push("The number of jobs must be a positive integer.".to_string());
    }
    if self.extensions.is_empty() {
      errors.push("At least one document extension must be configured.".to_string());
    }

    if errors.is_empty() {
      Ok(())
    } else {
      Err(ConfigError::Config(errors.join("\n")))
    }
  }

  /// Write a commented default configuration file in `format` (`toml` or
  /// `json`) to `path`.
  ///
  /// # Errors
  ///
  /// Returns an error if the format is unsupported or the file cannot be
  /// written.
  pub fn generate_default_config(
    format: &str,
    path: &Path,
  ) -> Result<(), ConfigError> {
    let config_content = templates::get_template(format)
      .map_err(|e| ConfigError::Template(e.to_string()))?;

    fs::write(path, config_content).map_err(|e| {
      ConfigError::Config(format!(
        "Failed to write default config to {}: {}",
        path.display(),
        e
      ))
    })?;

    log::info!("Created default configuration file: {}", path.display());
    Ok(())
  }

  /// Whether `path` has one of the configured document extensions.
  #[must_use]
  pub fn is_document(&self, path: &Path) -> bool {
    path
      .extension()
      .and_then(|ext| ext.to_str())
      .is_some_and(|ext| {
        self
          .extensions
          .iter()
          .any(|wanted| wanted.eq_ignore_ascii_case(ext))
      })
  }
}

fn split_list(value: &str) -> impl Iterator<Item = &str> {
  value.split(',').map(str::trim).filter(|item| !item.is_empty())
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
  match value.to_lowercase().as_str() {
    "true" | "yes" | "1" => Ok(true),
    "false" | "no" | "0" => Ok(false),
    _ => {
      Err(ConfigError::Config(format!(
        "Invalid boolean value for '{key}': '{value}'. Expected true/false, \
         yes/no, or 1/0"
      )))
    },
  }
}

fn unknown_key(key: &str) -> ConfigError {
  ConfigError::Config(format!(
    "Unknown configuration key: '{key}'. See documentation for supported keys."
  ))
}
