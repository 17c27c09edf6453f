use std::{
  fs,
  path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate_to};
use clap_mangen::Man;

const BIN_NAME: &str = "mdlinks";
const SHELLS: [Shell; 5] = [
  Shell::Bash,
  Shell::Elvish,
  Shell::Fish,
  Shell::PowerShell,
  Shell::Zsh,
];

#[derive(Parser)]
#[command(author, version, about)]
struct Xtask {
  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Build distribution artifacts for the mdlinks CLI
  Dist {
    /// Output directory for generated files.
    #[arg(short, long, default_value = "dist")]
    output_dir: PathBuf,

    /// Only generate shell completions.
    #[arg(long, conflicts_with = "manpage_only")]
    completions_only: bool,

    /// Only generate manpages.
    #[arg(long, conflicts_with = "completions_only")]
    manpage_only: bool,
  },
}

fn main() -> Result<()> {
  let Commands::Dist {
    output_dir,
    completions_only,
    manpage_only,
  } = Xtask::parse().command;

  if !manpage_only {
    generate_completions(&output_dir)?;
  }
  if !completions_only {
    generate_manpages(&output_dir)?;
  }

  Ok(())
}

/// Generate shell completions for every supported shell.
fn generate_completions(output_dir: &Path) -> Result<()> {
  let completions_dir = output_dir.join("completions");
  fs::create_dir_all(&completions_dir)?;

  let mut cmd = mdlinks::cli::Cli::command();
  for shell in SHELLS {
    generate_to(shell, &mut cmd, BIN_NAME, &completions_dir)
      .with_context(|| format!("Failed to generate {shell} completions"))?;
  }
  println!(
    "Shell completions generated in {}",
    completions_dir.display()
  );
  Ok(())
}

/// Generate `mdlinks.1` plus one page per subcommand (`mdlinks-extract.1`,
/// ...).
fn generate_manpages(output_dir: &Path) -> Result<()> {
  let man_dir = output_dir.join("man");
  fs::create_dir_all(&man_dir)?;

  let cmd = mdlinks::cli::Cli::command().name(BIN_NAME);
  for sub in cmd.get_subcommands() {
    let name = format!("{BIN_NAME}-{}", sub.get_name());
    let path = man_dir.join(format!("{name}.1"));
    render_manpage(Man::new(sub.clone()).title(name), &path)?;
  }
  render_manpage(Man::new(cmd), &man_dir.join(format!("{BIN_NAME}.1")))?;

  println!("Manpages generated in {}", man_dir.display());
  Ok(())
}

fn render_manpage(man: Man, file_path: &Path) -> Result<()> {
  let mut file = fs::File::create(file_path).with_context(|| {
    format!("Failed to create manpage file at {}", file_path.display())
  })?;
  man
    .render(&mut file)
    .with_context(|| format!("Failed to render {}", file_path.display()))
}
