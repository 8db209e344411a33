//! `geocite`: inspect and check citation metadata records.
//!
//! # Usage
//!
//! ```text
//! geocite check records/*.json
//! geocite show dcw.toml --output json
//! geocite codes RoleCode
//! ```

mod output;
mod record;
mod settings;

use std::path::PathBuf;

use anyhow::{Context as _, bail};
use clap::{Parser, Subcommand};
use geocite_core::code::VOCABULARIES;
use settings::{CliConfig, OutputFormat};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(author, version, about = "Citation metadata records")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "geocite.toml")]
  config: PathBuf,

  /// Output format; overrides the configuration file.
  #[arg(short, long, value_enum)]
  output: Option<OutputFormat>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
  /// Decode each record and report whether it is a valid citation.
  Check {
    #[arg(required = true, value_name = "FILE")]
    files:     Vec<PathBuf>,
    /// Stop at the first rejected record.
    #[arg(long)]
    fail_fast: bool,
  },
  /// Print one citation record.
  Show {
    #[arg(value_name = "FILE")]
    file: PathBuf,
  },
  /// List the codes of one or all controlled vocabularies.
  Codes {
    /// e.g. `RoleCode`; all vocabularies when omitted.
    vocabulary: Option<String>,
  },
}

// ─── Entry point ──────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();
  let mut cfg = CliConfig::load(&cli.config)?;
  if let Some(output) = cli.output {
    cfg.output = output;
  }
  tracing::debug!(?cfg, "configuration loaded");

  match cli.command {
    Command::Check { files, fail_fast } => {
      check(&files, cfg.output, fail_fast || cfg.fail_fast)
    }
    Command::Show { file } => {
      let citation = record::load(&file)
        .with_context(|| format!("failed to load {}", file.display()))?;
      print!("{}", output::citation(cfg.output, &citation)?);
      Ok(())
    }
    Command::Codes { vocabulary } => {
      let names = match &vocabulary {
        Some(name) => vec![name.as_str()],
        None => VOCABULARIES.to_vec(),
      };
      print!("{}", output::vocabularies(cfg.output, &names)?);
      Ok(())
    }
  }
}

/// How far a `check` run got.
#[derive(Debug, Default, PartialEq, Eq)]
struct Tally {
  checked:  usize,
  rejected: usize,
}

/// Decode `files` in order, handing one report line per record to `emit`.
/// With `fail_fast`, stops after the first rejection.
fn check_records(
  files: &[PathBuf],
  format: OutputFormat,
  fail_fast: bool,
  mut emit: impl FnMut(String),
) -> Tally {
  let mut tally = Tally::default();
  for path in files {
    tally.checked += 1;
    match record::load(path) {
      Ok(citation) => {
        tracing::debug!(file = %path.display(), title = citation.title(), "record accepted");
        emit(output::check_line(format, path, Ok(&citation)));
      }
      Err(e) => {
        tracing::warn!(file = %path.display(), error = %e, "record rejected");
        emit(output::check_line(format, path, Err(&e)));
        tally.rejected += 1;
        if fail_fast {
          break;
        }
      }
    }
  }
  tally
}

fn check(
  files: &[PathBuf],
  format: OutputFormat,
  fail_fast: bool,
) -> anyhow::Result<()> {
  let tally = check_records(files, format, fail_fast, |line| println!("{line}"));
  tracing::info!(
    checked = tally.checked,
    rejected = tally.rejected,
    skipped = files.len() - tally.checked,
    "check finished"
  );
  if tally.rejected > 0 {
    bail!("{} of {} records rejected", tally.rejected, tally.checked);
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use std::fs;

  use super::*;

  fn missing(name: &str) -> PathBuf {
    PathBuf::from(format!("/nonexistent/geocite/{name}.json"))
  }

  fn valid_record(name: &str) -> PathBuf {
    let path = std::env::temp_dir()
      .join(format!("geocite-check-{}-{name}.json", std::process::id()));
    fs::write(&path, r#"{"title": "Digital Chart of the World"}"#).unwrap();
    path
  }

  #[test]
  fn fail_fast_counts_only_records_it_reached() {
    let ok = valid_record("fail-fast");
    let files = [ok.clone(), missing("a"), missing("b"), missing("c")];
    let mut lines = Vec::new();
    let tally = check_records(&files, OutputFormat::Text, true, |l| lines.push(l));
    fs::remove_file(ok).ok();

    assert_eq!(tally, Tally { checked: 2, rejected: 1 });
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with(": ok"));
  }

  #[test]
  fn without_fail_fast_every_record_is_checked() {
    let ok = valid_record("all");
    let files = [missing("a"), ok.clone(), missing("b")];
    let tally = check_records(&files, OutputFormat::Json, false, |_| {});
    fs::remove_file(ok).ok();

    assert_eq!(tally, Tally { checked: 3, rejected: 2 });
  }

  #[test]
  fn summary_reports_checked_not_requested() {
    let files = [missing("a"), missing("b"), missing("c")];
    let err = check(&files, OutputFormat::Text, true).unwrap_err();
    assert_eq!(err.to_string(), "1 of 1 records rejected");
  }
}
