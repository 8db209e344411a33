//! Loading citation records from disk.
//!
//! The record format is chosen from the file extension. Decoding goes
//! through the model's serde implementations, so every mandatory-field,
//! vocabulary and URI rule is enforced on the way in.

use std::{fs, path::Path};

use geocite_core::Citation;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
  #[error("unsupported record format: {0:?} (expected .json or .toml)")]
  UnsupportedFormat(String),

  #[error("read failed: {0}")]
  Io(#[from] std::io::Error),

  #[error("{0}")]
  Json(#[from] serde_json::Error),

  #[error("{0}")]
  Toml(#[from] toml::de::Error),
}

/// Encodings a citation record can be stored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
  Json,
  Toml,
}

impl RecordFormat {
  pub fn from_path(path: &Path) -> Result<Self, RecordError> {
    let ext = path
      .extension()
      .and_then(|e| e.to_str())
      .unwrap_or_default()
      .to_ascii_lowercase();
    match ext.as_str() {
      "json" => Ok(Self::Json),
      "toml" => Ok(Self::Toml),
      _ => Err(RecordError::UnsupportedFormat(ext)),
    }
  }
}

/// Decode one citation record from `text`.
pub fn decode(text: &str, format: RecordFormat) -> Result<Citation, RecordError> {
  match format {
    RecordFormat::Json => Ok(serde_json::from_str(text)?),
    RecordFormat::Toml => {
      let mut value: toml::Value = toml::from_str(text)?;
      stringify_datetimes(&mut value);
      Ok(value.try_into()?)
    }
  }
}

/// Rewrite native TOML date and date-time literals as their string form, the
/// shape the model decodes timestamps from.
fn stringify_datetimes(value: &mut toml::Value) {
  match value {
    toml::Value::Datetime(dt) => *value = toml::Value::String(dt.to_string()),
    toml::Value::Array(items) => items.iter_mut().for_each(stringify_datetimes),
    toml::Value::Table(table) => table.iter_mut().for_each(|(_, v)| stringify_datetimes(v)),
    _ => {}
  }
}

/// Read and decode the citation record at `path`.
pub fn load(path: &Path) -> Result<Citation, RecordError> {
  let format = RecordFormat::from_path(path)?;
  let text = fs::read_to_string(path)?;
  decode(&text, format)
}

#[cfg(test)]
mod tests {
  use geocite_core::{DateTypeCode, PresentationFormCode, RoleCode, Timestamp};

  use super::*;

  #[test]
  fn format_follows_extension() {
    assert_eq!(
      RecordFormat::from_path(Path::new("a/b/dcw.json")).unwrap(),
      RecordFormat::Json
    );
    assert_eq!(
      RecordFormat::from_path(Path::new("DCW.TOML")).unwrap(),
      RecordFormat::Toml
    );
    assert!(matches!(
      RecordFormat::from_path(Path::new("dcw.xml")),
      Err(RecordError::UnsupportedFormat(ext)) if ext == "xml"
    ));
    assert!(RecordFormat::from_path(Path::new("README")).is_err());
  }

  #[test]
  fn json_record() {
    let input = r#"{
      "title": "Digital Chart of the World",
      "alternateTitle": "DCW",
      "presentationForm": "mapDigital"
    }"#;
    let citation = decode(input, RecordFormat::Json).unwrap();
    assert_eq!(citation.alternate_title(), Some("DCW"));
    assert_eq!(
      citation.presentation_form(),
      Some(PresentationFormCode::MapDigital)
    );
  }

  #[test]
  fn toml_record() {
    let input = r#"
title = "Land Cover of Canada"
edition = "2020"

[[date]]
date = "2021-06-01"
dateType = "publication"

[[citedResponsibleParty]]
role = "publisher"

[citedResponsibleParty.party]
kind = "organisation"
name = "Natural Resources Canada"
"#;
    let citation = decode(input, RecordFormat::Toml).unwrap();
    assert_eq!(citation.dates()[0].date_type(), DateTypeCode::Publication);
    let publisher = &citation.cited_responsible_parties()[0];
    assert_eq!(publisher.role(), RoleCode::Publisher);
    assert_eq!(publisher.party().name(), Some("Natural Resources Canada"));
  }

  #[test]
  fn toml_native_dates() {
    let input = r#"
title = "Land Cover of Canada"
editionDate = 2020-03-15T08:00:00Z

[[date]]
date = 2021-06-01
dateType = "publication"
"#;
    let citation = decode(input, RecordFormat::Toml).unwrap();
    let published = citation.dates()[0].date();
    assert!(matches!(published, Timestamp::Day(_)));
    assert_eq!(published.to_string(), "2021-06-01");
    assert_eq!(
      citation.edition_date().map(|t| t.to_string()).as_deref(),
      Some("2020-03-15T08:00:00+00:00")
    );
  }

  #[test]
  fn toml_local_time_is_rejected() {
    let input = r#"
title = "x"
editionDate = 08:00:00
"#;
    let err = decode(input, RecordFormat::Toml).unwrap_err();
    assert!(err.to_string().contains("08:00:00"));
  }

  #[test]
  fn misspelt_attributes_are_rejected() {
    let err = decode(r#"{"title": "x", "ISBn": "0-00"}"#, RecordFormat::Json).unwrap_err();
    assert!(err.to_string().contains("ISBn"));

    let input = r#"
title = "x"

[[citedResponsibleParty]]
role = "publisher"

[citedResponsibleParty.party]
kind = "organisation"
name = "USGS"
positionName = "Director"
"#;
    let err = decode(input, RecordFormat::Toml).unwrap_err();
    assert!(err.to_string().contains("positionName"));
  }

  #[test]
  fn rejected_records_explain_why() {
    let err = decode(r#"{"title": "x", "presentationForm": "hologram"}"#, RecordFormat::Json)
      .unwrap_err();
    assert!(err.to_string().contains("hologram"));

    let err = decode(r#"edition = "2""#, RecordFormat::Toml).unwrap_err();
    assert!(err.to_string().contains("title"));
  }

  #[test]
  fn load_reports_missing_files() {
    let err = load(Path::new("/nonexistent/geocite/record.json")).unwrap_err();
    assert!(matches!(err, RecordError::Io(_)));
  }
}
