#![allow(clippy::expect_used, clippy::panic, reason = "Fine in tests")]
use std::{fs, path::PathBuf};

use mdlinks_config::{Config, ConfigError};
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
  let path = dir.path().join(name);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent).expect("Failed to create parent dir");
  }
  fs::write(&path, content).expect("Failed to write config");
  path
}

#[test]
fn test_load_toml_config() {
  let dir = TempDir::new().expect("Failed to create temp dir");
  let path = write(
    &dir,
    "mdlinks.toml",
    r#"
input_dirs = ["src/content/docs"]
output = "links.json"
jobs = 2

[extractor]
astroIgnoreDraft = true
create_headings_slug = true
"#,
  );

  let config = Config::from_file(&path).expect("Failed to load config");
  assert_eq!(config.input_dirs, [PathBuf::from("src/content/docs")]);
  assert_eq!(config.output, Some(PathBuf::from("links.json")));
  assert_eq!(config.jobs, Some(2));
  assert_eq!(config.extensions, ["md", "mdx"]);
  assert!(config.extractor.astro_ignore_draft);
  assert!(config.extractor.create_headings_slug);
  assert!(!config.extractor.astro_use_slug);
}

#[test]
fn test_load_json_config() {
  let dir = TempDir::new().expect("Failed to create temp dir");
  let path = write(
    &dir,
    "mdlinks.json",
    r#"{ "pretty": false, "extractor": { "astroUseSlug": true } }"#,
  );

  let config = Config::from_file(&path).expect("Failed to load config");
  assert!(!config.pretty);
  assert!(config.extractor.astro_use_slug);
}

#[test]
fn test_unknown_extractor_option_is_rejected() {
  let dir = TempDir::new().expect("Failed to create temp dir");
  let path = write(&dir, "bad.toml", "[extractor]\nignoreDrafts = true\n");

  let err = Config::from_file(&path).expect_err("Unknown key must fail");
  assert!(matches!(err, ConfigError::Config(_)));
  assert!(err.to_string().contains("Failed to parse TOML config"));
}

#[test]
fn test_unsupported_extension() {
  let dir = TempDir::new().expect("Failed to create temp dir");
  let path = write(&dir, "mdlinks.yaml", "pretty: true\n");

  let err = Config::from_file(&path).expect_err("YAML is not supported");
  assert!(err.to_string().contains("Unsupported config file format"));
}

#[test]
fn test_load_merges_files_then_overrides() {
  let dir = TempDir::new().expect("Failed to create temp dir");
  let base = write(
    &dir,
    "base.toml",
    "input_dirs = [\"docs\"]\njobs = 4\n\n[extractor]\nastroIgnoreDraft = true\n",
  );
  let extra = write(
    &dir,
    "extra.json",
    r#"{ "input_dirs": ["blog"], "extractor": { "createHeadingsSlug": true } }"#,
  );

  let config = Config::load(&[base, extra], &["jobs=1".to_string()])
    .expect("Failed to load configs");

  assert_eq!(config.input_dirs, [PathBuf::from("docs"), PathBuf::from("blog")]);
  assert_eq!(config.jobs, Some(1));
  // Plain fields come from the last file.
  assert!(!config.extractor.astro_ignore_draft);
  assert!(config.extractor.create_headings_slug);
}

#[test]
fn test_load_rejects_zero_jobs_from_file() {
  let dir = TempDir::new().expect("Failed to create temp dir");
  let path = write(&dir, "zero.toml", "jobs = 0\n");

  let err = Config::load(&[path], &[]).expect_err("Zero jobs must fail");
  assert!(err.to_string().contains("positive integer"));
}

#[test]
fn test_find_config_file_in() {
  let dir = TempDir::new().expect("Failed to create temp dir");
  assert_eq!(Config::find_config_file_in(dir.path()), None);

  let nested = write(&dir, ".config/mdlinks.json", "{}");
  assert_eq!(Config::find_config_file_in(dir.path()), Some(nested));

  let top = write(&dir, "mdlinks.toml", "");
  assert_eq!(Config::find_config_file_in(dir.path()), Some(top));
}

#[test]
fn test_validate_checks_input_dirs() {
  let dir = TempDir::new().expect("Failed to create temp dir");
  let mut config = Config {
    input_dirs: vec![dir.path().to_path_buf()],
    ..Default::default()
  };
  assert!(config.validate().is_ok());

  config.input_dirs.push(dir.path().join("missing"));
  let err = config.validate().expect_err("Missing dir must fail");
  assert!(err.to_string().contains("does not exist"));
}

#[test]
fn test_generate_default_config_round_trips() {
  let dir = TempDir::new().expect("Failed to create temp dir");
  for format in ["toml", "json"] {
    let path = dir.path().join(format!("mdlinks.{format}"));
    Config::generate_default_config(format, &path)
      .expect("Failed to generate config");
    let config = Config::from_file(&path).expect("Generated config must load");
    assert_eq!(config.extensions, ["md", "mdx"]);
  }

  let err = Config::generate_default_config("ini", &dir.path().join("x.ini"))
    .expect_err("Unsupported format must fail");
  assert!(matches!(err, ConfigError::Template(_)));
}
