//! Text and JSON renderings for the `geocite` commands.

use std::{fmt::Write as _, path::Path};

use geocite_core::{Citation, code};
use serde_json::json;

use crate::settings::OutputFormat;

/// One line reporting the outcome of decoding a record.
pub fn check_line(
  format: OutputFormat,
  path: &Path,
  outcome: Result<&Citation, &dyn std::error::Error>,
) -> String {
  let file = path.display().to_string();
  match (format, outcome) {
    (OutputFormat::Text, Ok(_)) => format!("{file}: ok"),
    (OutputFormat::Text, Err(e)) => format!("{file}: {e}"),
    (OutputFormat::Json, Ok(c)) => {
      json!({ "file": file, "ok": true, "title": c.title() }).to_string()
    }
    (OutputFormat::Json, Err(e)) => {
      json!({ "file": file, "ok": false, "error": e.to_string() }).to_string()
    }
  }
}

/// Full rendering of one citation.
pub fn citation(format: OutputFormat, c: &Citation) -> anyhow::Result<String> {
  if format == OutputFormat::Json {
    return Ok(serde_json::to_string_pretty(c)?);
  }

  let mut out = format!("{c}\n");
  for d in c.dates() {
    writeln!(out, "  {}: {}", d.date_type(), d.date())?;
  }
  if let Some(form) = c.presentation_form() {
    writeln!(out, "  presentation: {form}")?;
  }
  for id in c.identifiers() {
    writeln!(out, "  identifier: {id}")?;
  }
  for r in c.cited_responsible_parties() {
    let name = r.party().name().unwrap_or("(unnamed)");
    writeln!(out, "  {}: {name}", r.role())?;
  }
  if let Some(resource) = c.online_resource() {
    writeln!(out, "  online: {}", resource.linkage())?;
  }
  Ok(out)
}

/// The members of the named vocabularies.
pub fn vocabularies(
  format: OutputFormat,
  names: &[&str],
) -> anyhow::Result<String> {
  let mut listed = Vec::with_capacity(names.len());
  for &name in names {
    let codes = code::codes_of(name)
      .ok_or_else(|| anyhow::anyhow!("unknown vocabulary: {name}"))?;
    listed.push((name, codes));
  }

  if format == OutputFormat::Json {
    let map: serde_json::Map<String, serde_json::Value> = listed
      .into_iter()
      .map(|(name, codes)| (name.to_string(), json!(codes)))
      .collect();
    return Ok(serde_json::to_string_pretty(&map)?);
  }

  let mut out = String::new();
  for (name, codes) in listed {
    writeln!(out, "{name}")?;
    for code in codes {
      writeln!(out, "  {code}")?;
    }
  }
  Ok(out)
}
