//! The citation aggregate root and the value entities only it uses.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
  Result,
  builder::{Deferred, required},
  code::{DateTypeCode, IntoCode, PresentationFormCode, RoleCode},
  contact::OnlineResource,
  external::{BrowseGraphic, Identifier},
  party::Party,
  responsibility::Responsibility,
  timestamp::Timestamp,
};

// ─── Series ──────────────────────────────────────────────────────────────────

/// The series, or aggregate resource, a resource belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Series {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  name:                 Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  issue_identification: Option<String>,
  /// Pages of the publication the article appears on.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  page:                 Option<String>,
}

impl Series {
  pub fn builder() -> SeriesBuilder { SeriesBuilder::default() }

  pub fn name(&self) -> Option<&str> { self.name.as_deref() }

  pub fn issue_identification(&self) -> Option<&str> {
    self.issue_identification.as_deref()
  }

  pub fn page(&self) -> Option<&str> { self.page.as_deref() }
}

impl fmt::Display for Series {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let page = self.page.as_ref().map(|p| format!("p. {p}"));
    let parts: Vec<&str> = [self.name.as_deref(), self.issue_identification.as_deref()]
      .into_iter()
      .chain([page.as_deref()])
      .flatten()
      .collect();
    f.write_str(&parts.join(", "))
  }
}

#[derive(Debug, Default)]
#[must_use]
pub struct SeriesBuilder {
  inner: Series,
}

impl SeriesBuilder {
  pub fn name(mut self, name: impl Into<String>) -> Self {
    self.inner.name = Some(name.into());
    self
  }

  pub fn issue_identification(mut self, issue: impl Into<String>) -> Self {
    self.inner.issue_identification = Some(issue.into());
    self
  }

  pub fn page(mut self, page: impl Into<String>) -> Self {
    self.inner.page = Some(page.into());
    self
  }

  pub fn build(self) -> Series { self.inner }
}

// ─── Date ────────────────────────────────────────────────────────────────────

/// A reference date and the event it marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Date {
  date:      Timestamp,
  date_type: DateTypeCode,
}

impl Date {
  pub fn new(date: impl Into<Timestamp>, date_type: DateTypeCode) -> Self {
    Self {
      date: date.into(),
      date_type,
    }
  }

  pub fn builder() -> DateBuilder { DateBuilder::default() }

  pub fn date(&self) -> Timestamp { self.date }

  pub fn date_type(&self) -> DateTypeCode { self.date_type }
}

#[derive(Debug, Default)]
#[must_use]
pub struct DateBuilder {
  date:      Option<Timestamp>,
  date_type: Option<DateTypeCode>,
  deferred:  Deferred,
}

impl DateBuilder {
  pub fn date(mut self, date: impl Into<Timestamp>) -> Self {
    self.date = Some(date.into());
    self
  }

  pub fn date_type(mut self, date_type: impl IntoCode<DateTypeCode>) -> Self {
    self.deferred.code("dateType", &mut self.date_type, date_type);
    self
  }

  pub fn build(self) -> Result<Date> {
    self.deferred.check()?;
    Ok(Date {
      date:      required(self.date, "Date", "date")?,
      date_type: required(self.date_type, "Date", "dateType")?,
    })
  }
}

// ─── Citation ────────────────────────────────────────────────────────────────

/// A standardised reference to a resource.
///
/// Only the title is mandatory. `date`, `identifier` and
/// `citedResponsibleParty` repeat; every other attribute occurs at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Citation {
  title:                   String,
  /// Short name or other-language name, e.g. "DCW" for "Digital Chart of
  /// the World".
  #[serde(default, skip_serializing_if = "Option::is_none")]
  alternate_title:         Option<String>,
  #[serde(rename = "date", default, skip_serializing_if = "Vec::is_empty")]
  dates:                   Vec<Date>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  edition:                 Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  edition_date:            Option<Timestamp>,
  #[serde(rename = "identifier", default, skip_serializing_if = "Vec::is_empty")]
  identifiers:             Vec<Identifier>,
  #[serde(
    rename = "citedResponsibleParty",
    default,
    skip_serializing_if = "Vec::is_empty"
  )]
  cited_responsible_party: Vec<Responsibility>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  presentation_form:       Option<PresentationFormCode>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  series:                  Option<Series>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  other_citation_details:  Option<String>,
  #[serde(rename = "ISBN", default, skip_serializing_if = "Option::is_none")]
  isbn:                    Option<String>,
  #[serde(rename = "ISSN", default, skip_serializing_if = "Option::is_none")]
  issn:                    Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  online_resource:         Option<OnlineResource>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  graphic:                 Option<BrowseGraphic>,
}

impl Citation {
  /// A minimal citation: a title and nothing else.
  pub fn new(title: impl Into<String>) -> Self {
    Self {
      title:                   title.into(),
      alternate_title:         None,
      dates:                   Vec::new(),
      edition:                 None,
      edition_date:            None,
      identifiers:             Vec::new(),
      cited_responsible_party: Vec::new(),
      presentation_form:       None,
      series:                  None,
      other_citation_details:  None,
      isbn:                    None,
      issn:                    None,
      online_resource:         None,
      graphic:                 None,
    }
  }

  pub fn builder() -> CitationBuilder { CitationBuilder::default() }

  // ── Accessors ─────────────────────────────────────────────────────────

  pub fn title(&self) -> &str { &self.title }

  pub fn alternate_title(&self) -> Option<&str> {
    self.alternate_title.as_deref()
  }

  pub fn dates(&self) -> &[Date] { &self.dates }

  /// Version of the cited resource.
  pub fn edition(&self) -> Option<&str> { self.edition.as_deref() }

  pub fn edition_date(&self) -> Option<Timestamp> { self.edition_date }

  pub fn identifiers(&self) -> &[Identifier] { &self.identifiers }

  pub fn cited_responsible_parties(&self) -> &[Responsibility] {
    &self.cited_responsible_party
  }

  pub fn presentation_form(&self) -> Option<PresentationFormCode> {
    self.presentation_form
  }

  pub fn series(&self) -> Option<&Series> { self.series.as_ref() }

  /// Anything else needed to complete the citation.
  pub fn other_citation_details(&self) -> Option<&str> {
    self.other_citation_details.as_deref()
  }

  /// International Standard Book Number. Not checked against `issn`.
  pub fn isbn(&self) -> Option<&str> { self.isbn.as_deref() }

  /// International Standard Serial Number.
  pub fn issn(&self) -> Option<&str> { self.issn.as_deref() }

  pub fn online_resource(&self) -> Option<&OnlineResource> {
    self.online_resource.as_ref()
  }

  pub fn graphic(&self) -> Option<&BrowseGraphic> { self.graphic.as_ref() }

  // ── Queries ───────────────────────────────────────────────────────────

  /// Reference dates of the given type, in declaration order.
  pub fn dates_of_type(
    &self,
    date_type: DateTypeCode,
  ) -> impl Iterator<Item = &Date> + '_ {
    self.dates.iter().filter(move |d| d.date_type() == date_type)
  }

  /// Responsibilities held in the given role, in declaration order.
  pub fn responsibilities_with_role(
    &self,
    role: RoleCode,
  ) -> impl Iterator<Item = &Responsibility> + '_ {
    self
      .cited_responsible_party
      .iter()
      .filter(move |r| r.role() == role)
  }

  /// Every distinct party named by the cited responsibilities, first
  /// occurrence first. Parties are compared by value.
  pub fn parties(&self) -> Vec<&Party> {
    let mut parties: Vec<&Party> = Vec::new();
    for r in &self.cited_responsible_party {
      if !parties.contains(&r.party()) {
        parties.push(r.party());
      }
    }
    parties
  }
}

/// One-line bibliographic rendering:
/// `Title (Alt). Edition. Series, issue, p. N. ISBN x. ISSN y.`
impl fmt::Display for Citation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut parts = vec![match &self.alternate_title {
      Some(alt) => format!("{} ({alt})", self.title),
      None => self.title.clone(),
    }];
    if let Some(edition) = &self.edition {
      parts.push(edition.clone());
    }
    if let Some(series) = &self.series {
      let series = series.to_string();
      if !series.is_empty() {
        parts.push(series);
      }
    }
    if let Some(isbn) = &self.isbn {
      parts.push(format!("ISBN {isbn}"));
    }
    if let Some(issn) = &self.issn {
      parts.push(format!("ISSN {issn}"));
    }

    let line = parts.join(". ");
    if line.ends_with('.') {
      f.write_str(&line)
    } else {
      write!(f, "{line}.")
    }
  }
}

#[derive(Debug, Default)]
#[must_use]
pub struct CitationBuilder {
  title:                   Option<String>,
  alternate_title:         Option<String>,
  dates:                   Vec<Date>,
  edition:                 Option<String>,
  edition_date:            Option<Timestamp>,
  identifiers:             Vec<Identifier>,
  cited_responsible_party: Vec<Responsibility>,
  presentation_form:       Option<PresentationFormCode>,
  series:                  Option<Series>,
  other_citation_details:  Option<String>,
  isbn:                    Option<String>,
  issn:                    Option<String>,
  online_resource:         Option<OnlineResource>,
  graphic:                 Option<BrowseGraphic>,
  deferred:                Deferred,
}

impl CitationBuilder {
  pub fn title(mut self, title: impl Into<String>) -> Self {
    self.title = Some(title.into());
    self
  }

  pub fn alternate_title(mut self, title: impl Into<String>) -> Self {
    self.alternate_title = Some(title.into());
    self
  }

  /// Append a reference date.
  pub fn date(mut self, date: Date) -> Self {
    self.dates.push(date);
    self
  }

  pub fn edition(mut self, edition: impl Into<String>) -> Self {
    self.edition = Some(edition.into());
    self
  }

  pub fn edition_date(mut self, date: impl Into<Timestamp>) -> Self {
    self.edition_date = Some(date.into());
    self
  }

  /// Append an identifier.
  pub fn identifier(mut self, identifier: Identifier) -> Self {
    self.identifiers.push(identifier);
    self
  }

  /// Append a responsible party.
  pub fn cited_responsible_party(mut self, responsibility: Responsibility) -> Self {
    self.cited_responsible_party.push(responsibility);
    self
  }

  pub fn presentation_form(
    mut self,
    form: impl IntoCode<PresentationFormCode>,
  ) -> Self {
    self.deferred.code("presentationForm", &mut self.presentation_form, form);
    self
  }

  pub fn series(mut self, series: Series) -> Self {
    self.series = Some(series);
    self
  }

  pub fn other_citation_details(mut self, details: impl Into<String>) -> Self {
    self.other_citation_details = Some(details.into());
    self
  }

  pub fn isbn(mut self, isbn: impl Into<String>) -> Self {
    self.isbn = Some(isbn.into());
    self
  }

  pub fn issn(mut self, issn: impl Into<String>) -> Self {
    self.issn = Some(issn.into());
    self
  }

  pub fn online_resource(mut self, resource: OnlineResource) -> Self {
    self.online_resource = Some(resource);
    self
  }

  pub fn graphic(mut self, graphic: BrowseGraphic) -> Self {
    self.graphic = Some(graphic);
    self
  }

  pub fn build(self) -> Result<Citation> {
    self.deferred.check()?;
    Ok(Citation {
      title:                   required(self.title, "Citation", "title")?,
      alternate_title:         self.alternate_title,
      dates:                   self.dates,
      edition:                 self.edition,
      edition_date:            self.edition_date,
      identifiers:             self.identifiers,
      cited_responsible_party: self.cited_responsible_party,
      presentation_form:       self.presentation_form,
      series:                  self.series,
      other_citation_details:  self.other_citation_details,
      isbn:                    self.isbn,
      issn:                    self.issn,
      online_resource:         self.online_resource,
      graphic:                 self.graphic,
    })
  }
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;
  use crate::{Error, party::Organisation};

  fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
  }

  #[test]
  fn date_requires_both_attributes() {
    let no_date = Date::builder().date_type("creation").build();
    assert_eq!(no_date.unwrap_err().missing_field(), Some("date"));

    let no_type = Date::builder().date(day(2021, 6, 1)).build();
    assert_eq!(no_type.unwrap_err().missing_field(), Some("dateType"));
  }

  #[test]
  fn invalid_code_wins_over_missing_field() {
    let err = Date::builder().date_type("yesterday").build().unwrap_err();
    assert_eq!(err.invalid_code(), Some("yesterday"));
  }

  #[test]
  fn citation_requires_a_title() {
    let err = Citation::builder().alternate_title("DCW").build().unwrap_err();
    assert_eq!(err, Error::MissingRequiredField {
      entity: "Citation",
      field:  "title",
    });
  }

  #[test]
  fn citation_rejects_unknown_presentation_form() {
    let err = Citation::builder()
      .title("Atlas")
      .presentation_form("hologram")
      .build()
      .unwrap_err();
    assert_eq!(err, Error::InvalidEnumerationValue {
      vocabulary: "PresentationFormCode",
      code:       "hologram".to_string(),
    });
  }

  #[test]
  fn dates_are_queried_by_type() {
    let citation = Citation::builder()
      .title("Land cover")
      .date(Date::new(day(2019, 1, 1), DateTypeCode::Creation))
      .date(Date::new(day(2020, 3, 15), DateTypeCode::Revision))
      .date(Date::new(day(2021, 3, 15), DateTypeCode::Revision))
      .build()
      .unwrap();
    let revisions: Vec<_> = citation
      .dates_of_type(DateTypeCode::Revision)
      .map(|d| d.date().day())
      .collect();
    assert_eq!(revisions, vec![day(2020, 3, 15), day(2021, 3, 15)]);
    assert_eq!(citation.dates_of_type(DateTypeCode::Expiry).count(), 0);
  }

  #[test]
  fn parties_are_deduplicated_by_value() {
    let ogc = Party::from(Organisation::builder().name("OGC").build());
    let citation = Citation::builder()
      .title("GeoAPI")
      .cited_responsible_party(Responsibility::new(RoleCode::Publisher, ogc.clone()))
      .cited_responsible_party(Responsibility::new(RoleCode::Distributor, ogc.clone()))
      .build()
      .unwrap();
    assert_eq!(citation.parties(), vec![&ogc]);
    assert_eq!(
      citation.responsibilities_with_role(RoleCode::Distributor).count(),
      1
    );
    assert_eq!(citation.responsibilities_with_role(RoleCode::Author).count(), 0);
  }

  #[test]
  fn display_renders_a_reference_line() {
    let citation = Citation::builder()
      .title("Digital Chart of the World")
      .alternate_title("DCW")
      .edition("Edition 1")
      .series(
        Series::builder()
          .name("Defense Mapping Agency")
          .issue_identification("Vol. 2")
          .page("14-20")
          .build(),
      )
      .isbn("0-123-45678-9")
      .build()
      .unwrap();
    assert_eq!(
      citation.to_string(),
      "Digital Chart of the World (DCW). Edition 1. Defense Mapping Agency, \
       Vol. 2, p. 14-20. ISBN 0-123-45678-9."
    );
    assert_eq!(Citation::new("Untitled map").to_string(), "Untitled map.");
  }

  #[test]
  fn isbn_and_issn_may_coexist() {
    let citation = Citation::builder()
      .title("Proceedings")
      .isbn("978-3-16-148410-0")
      .issn("2049-3630")
      .build()
      .unwrap();
    assert_eq!(citation.isbn(), Some("978-3-16-148410-0"));
    assert_eq!(citation.issn(), Some("2049-3630"));
  }

  #[test]
  fn wire_names_follow_the_standard() {
    let citation = Citation::builder()
      .title("Atlas")
      .date(Date::new(day(2021, 6, 1), DateTypeCode::Publication))
      .isbn("0-00-000000-0")
      .presentation_form(PresentationFormCode::MapDigital)
      .build()
      .unwrap();
    let json = serde_json::to_value(&citation).unwrap();
    assert_eq!(
      json,
      serde_json::json!({
        "title": "Atlas",
        "date": [{"date": "2021-06-01", "dateType": "publication"}],
        "presentationForm": "mapDigital",
        "ISBN": "0-00-000000-0",
      })
    );
  }

  #[test]
  fn decoder_rejects_misspelt_attributes() {
    let err = serde_json::from_str::<Citation>(r#"{"title": "Atlas", "ISBn": "0-00"}"#)
      .unwrap_err();
    assert!(err.to_string().contains("ISBn"));

    let series = serde_json::from_str::<Series>(r#"{"name": "Maps", "pages": "5"}"#);
    assert!(series.is_err());
  }

  #[test]
  fn presentation_form_can_be_corrected() {
    let citation = Citation::builder()
      .title("Atlas")
      .presentation_form("hologram")
      .presentation_form(PresentationFormCode::MapDigital)
      .build()
      .unwrap();
    assert_eq!(
      citation.presentation_form(),
      Some(PresentationFormCode::MapDigital)
    );
  }

  #[test]
  fn decoder_requires_a_title() {
    let err = serde_json::from_str::<Citation>(r#"{"alternateTitle": "DCW"}"#)
      .unwrap_err();
    assert!(err.to_string().contains("title"));
  }
}
