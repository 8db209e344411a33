//! Layered configuration: `geocite.toml`, then `GEOCITE_*` environment
//! variables. Command-line flags are applied on top by `main`.

use std::path::Path;

use anyhow::Context as _;
use clap::ValueEnum;
use serde::Deserialize;

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
  #[default]
  Text,
  Json,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CliConfig {
  #[serde(default)]
  pub output:    OutputFormat,
  /// Stop `check` at the first rejected record.
  #[serde(default)]
  pub fail_fast: bool,
}

impl CliConfig {
  /// Load from `path` (if it exists) layered with the environment.
  pub fn load(path: &Path) -> anyhow::Result<Self> {
    config::Config::builder()
      .add_source(config::File::from(path).required(false))
      .add_source(config::Environment::with_prefix("GEOCITE"))
      .build()
      .context("failed to read config file")?
      .try_deserialize()
      .context("failed to deserialise CliConfig")
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn from_toml(s: &str) -> CliConfig {
    config::Config::builder()
      .add_source(config::File::from_str(s, config::FileFormat::Toml))
      .build()
      .unwrap()
      .try_deserialize()
      .unwrap()
  }

  #[test]
  fn defaults_when_empty() {
    let cfg = from_toml("");
    assert_eq!(cfg.output, OutputFormat::Text);
    assert!(!cfg.fail_fast);
  }

  #[test]
  fn reads_output_and_fail_fast() {
    let cfg = from_toml("output = \"json\"\nfail_fast = true\n");
    assert_eq!(cfg.output, OutputFormat::Json);
    assert!(cfg.fail_fast);
  }

  #[test]
  fn missing_file_is_not_an_error() {
    let cfg = CliConfig::load(Path::new("/nonexistent/geocite.toml")).unwrap();
    assert_eq!(cfg.output, OutputFormat::Text);
  }
}
