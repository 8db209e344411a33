//! Controlled vocabularies: closed sets of string-valued codes.
//!
//! The code string is the stable wire identifier (`"creation"`,
//! `"download"`, ...). Lookup by code is exact and case-sensitive; anything
//! outside the declared set is rejected with
//! [`Error::InvalidEnumerationValue`].

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::{Error, Result};

// ─── Shared contract ─────────────────────────────────────────────────────────

/// Behaviour shared by every controlled vocabulary.
pub trait CodeList:
  Copy + Eq + FromStr + IntoEnumIterator + Into<&'static str> + 'static
{
  /// Name of the vocabulary, used in error messages.
  const VOCABULARY: &'static str;

  /// The wire code of this member.
  fn code(self) -> &'static str { self.into() }

  /// Look up a member by its code string.
  fn from_code(code: &str) -> Result<Self> {
    code
      .parse::<Self>()
      .map_err(|_| Error::InvalidEnumerationValue {
        vocabulary: Self::VOCABULARY,
        code:       code.to_string(),
      })
  }

  /// Whether `code` names a member of this vocabulary.
  fn is_member(code: &str) -> bool { code.parse::<Self>().is_ok() }

  /// All members in declaration order.
  fn members() -> <Self as IntoEnumIterator>::Iterator { Self::iter() }
}

/// A value that can be resolved to a member of the vocabulary `C`.
///
/// Implemented for the vocabulary type itself (always succeeds) and for code
/// strings (succeeds only for members). Builders accept either.
pub trait IntoCode<C> {
  fn into_code(self) -> Result<C>;
}

macro_rules! code_list {
  ($ty:ident) => {
    impl CodeList for $ty {
      const VOCABULARY: &'static str = stringify!($ty);
    }

    impl TryFrom<String> for $ty {
      type Error = Error;

      fn try_from(code: String) -> Result<Self> { Self::from_code(&code) }
    }

    impl IntoCode<$ty> for $ty {
      fn into_code(self) -> Result<$ty> { Ok(self) }
    }

    impl IntoCode<$ty> for &str {
      fn into_code(self) -> Result<$ty> { $ty::from_code(self) }
    }

    impl IntoCode<$ty> for String {
      fn into_code(self) -> Result<$ty> { $ty::from_code(&self) }
    }
  };
}

// ─── Vocabularies ────────────────────────────────────────────────────────────

/// Identification of when a given event occurred.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Display,
  EnumIter,
  EnumString,
  IntoStaticStr,
  Serialize,
  Deserialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(try_from = "String", into = "&'static str")]
pub enum DateTypeCode {
  /// Date the resource was brought into existence.
  Creation,
  /// Date the resource was issued.
  Publication,
  /// Date the resource was examined or re-examined and improved or amended.
  Revision,
  /// Date the resource expires.
  Expiry,
  /// Date the resource was last updated.
  LastUpdate,
  /// Date the resource was last revised.
  LastRevision,
  /// Date the resource will next be updated.
  NextUpdate,
  /// Date the resource is no longer available.
  Unavailable,
  /// Date the resource became in force.
  InForce,
  /// Date the resource was adopted.
  Adopted,
  /// Date the resource was deprecated.
  Deprecated,
  /// Date the resource was superseded.
  Superseded,
  /// Time at which the data are considered valid.
  ValidityBegins,
  /// Time at which the data are no longer considered valid.
  ValidityExpires,
  /// Date the resource was released for distribution.
  Released,
  /// Date the distribution of the resource took place.
  Distribution,
}

code_list!(DateTypeCode);

/// Function performed by an online resource.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Display,
  EnumIter,
  EnumString,
  IntoStaticStr,
  Serialize,
  Deserialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(try_from = "String", into = "&'static str")]
pub enum OnLineFunctionCode {
  Download,
  Information,
  OfflineAccess,
  Order,
  Search,
  CompleteMetadata,
  BrowseGraphic,
  Upload,
  EmailService,
  Browsing,
  FileAccess,
}

code_list!(OnLineFunctionCode);

/// Mode in which a cited resource is represented, digital or hardcopy.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Display,
  EnumIter,
  EnumString,
  IntoStaticStr,
  Serialize,
  Deserialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(try_from = "String", into = "&'static str")]
pub enum PresentationFormCode {
  DocumentDigital,
  DocumentHardcopy,
  ImageDigital,
  ImageHardcopy,
  MapDigital,
  MapHardcopy,
  ModelDigital,
  ModelHardcopy,
  ProfileDigital,
  ProfileHardcopy,
  TableDigital,
  TableHardcopy,
  VideoDigital,
  VideoHardcopy,
  AudioDigital,
  AudioHardcopy,
  MultimediaDigital,
  MultimediaHardcopy,
  PhysicalObject,
  DiagramDigital,
  DiagramHardcopy,
}

code_list!(PresentationFormCode);

impl PresentationFormCode {
  /// `true` for the `*Digital` forms.
  pub fn is_digital(self) -> bool { self.code().ends_with("Digital") }
}

/// Function performed by a responsible party.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Display,
  EnumIter,
  EnumString,
  IntoStaticStr,
  Serialize,
  Deserialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(try_from = "String", into = "&'static str")]
pub enum RoleCode {
  /// Party that supplies the resource.
  ResourceProvider,
  /// Party that accepts accountability and responsibility for the resource
  /// and ensures its appropriate care and maintenance.
  Custodian,
  /// Party that owns the resource.
  Owner,
  /// Party who uses the resource.
  User,
  /// Party who distributes the resource.
  Distributor,
  /// Party who created the resource.
  Originator,
  /// Party who can be contacted for acquiring knowledge about the resource.
  PointOfContact,
  /// Key party responsible for gathering information and conducting
  /// research.
  PrincipalInvestigator,
  /// Party who has processed the data in a manner such that the resource has
  /// been modified.
  Processor,
  /// Party who published the resource.
  Publisher,
  /// Party who authored the resource.
  Author,
  /// Party who speaks for the resource.
  Sponsor,
  /// Party who jointly authors the resource.
  CoAuthor,
  /// Party who assists with the generation of the resource.
  Collaborator,
  /// Party who reviewed or modified the resource to improve the content.
  Editor,
  /// Class of entity that mediates access to the resource.
  Mediator,
  /// Party owning or managing rights over the resource.
  RightsHolder,
  /// Party contributing to the resource.
  Contributor,
  /// Party providing monetary support for the resource.
  Funder,
  /// Party who has an interest in the resource or the use of the resource.
  Stakeholder,
}

code_list!(RoleCode);

/// Type of telephone.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Display,
  EnumIter,
  EnumString,
  IntoStaticStr,
  Serialize,
  Deserialize,
)]
#[strum(serialize_all = "camelCase")]
#[serde(try_from = "String", into = "&'static str")]
pub enum TelephoneTypeCode {
  Voice,
  Facsimile,
  Sms,
}

code_list!(TelephoneTypeCode);

// ─── Lookup by vocabulary name ───────────────────────────────────────────────

/// Names of every vocabulary defined in this module, in dependency order.
pub const VOCABULARIES: [&str; 5] = [
  DateTypeCode::VOCABULARY,
  OnLineFunctionCode::VOCABULARY,
  PresentationFormCode::VOCABULARY,
  RoleCode::VOCABULARY,
  TelephoneTypeCode::VOCABULARY,
];

fn codes<C: CodeList>() -> Vec<&'static str> {
  C::members().map(CodeList::code).collect()
}

/// The member codes of the vocabulary called `vocabulary`, or `None` when no
/// such vocabulary exists.
pub fn codes_of(vocabulary: &str) -> Option<Vec<&'static str>> {
  match vocabulary {
    "DateTypeCode" => Some(codes::<DateTypeCode>()),
    "OnLineFunctionCode" => Some(codes::<OnLineFunctionCode>()),
    "PresentationFormCode" => Some(codes::<PresentationFormCode>()),
    "RoleCode" => Some(codes::<RoleCode>()),
    "TelephoneTypeCode" => Some(codes::<TelephoneTypeCode>()),
    _ => None,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn date_type_codes_match_wire_identifiers() {
    assert_eq!(codes::<DateTypeCode>(), vec![
      "creation",
      "publication",
      "revision",
      "expiry",
      "lastUpdate",
      "lastRevision",
      "nextUpdate",
      "unavailable",
      "inForce",
      "adopted",
      "deprecated",
      "superseded",
      "validityBegins",
      "validityExpires",
      "released",
      "distribution",
    ]);
  }

  #[test]
  fn online_function_codes_match_wire_identifiers() {
    assert_eq!(codes::<OnLineFunctionCode>(), vec![
      "download",
      "information",
      "offlineAccess",
      "order",
      "search",
      "completeMetadata",
      "browseGraphic",
      "upload",
      "emailService",
      "browsing",
      "fileAccess",
    ]);
  }

  #[test]
  fn role_and_telephone_codes_match_wire_identifiers() {
    let roles = codes::<RoleCode>();
    assert_eq!(roles.len(), 20);
    assert_eq!(roles[0], "resourceProvider");
    assert!(roles.contains(&"pointOfContact"));
    assert!(roles.contains(&"principalInvestigator"));
    assert!(roles.contains(&"coAuthor"));
    assert!(roles.contains(&"rightsHolder"));
    assert_eq!(roles[19], "stakeholder");

    assert_eq!(codes::<TelephoneTypeCode>(), vec![
      "voice",
      "facsimile",
      "sms"
    ]);
  }

  #[test]
  fn presentation_forms_split_digital_and_hardcopy() {
    let forms: Vec<_> = PresentationFormCode::members().collect();
    assert_eq!(forms.len(), 21);
    assert_eq!(forms[0].code(), "documentDigital");
    assert_eq!(forms[18].code(), "physicalObject");
    assert!(PresentationFormCode::MapDigital.is_digital());
    assert!(!PresentationFormCode::MapHardcopy.is_digital());
    assert!(!PresentationFormCode::PhysicalObject.is_digital());
  }

  fn roundtrip<C: CodeList + std::fmt::Debug + std::fmt::Display>() {
    for member in C::members() {
      assert_eq!(C::from_code(member.code()), Ok(member), "{}", C::VOCABULARY);
      assert_eq!(member.to_string(), member.code());
      assert!(C::is_member(member.code()));
    }
  }

  #[test]
  fn lookup_by_code_returns_the_same_variant() {
    roundtrip::<DateTypeCode>();
    roundtrip::<OnLineFunctionCode>();
    roundtrip::<PresentationFormCode>();
    roundtrip::<RoleCode>();
    roundtrip::<TelephoneTypeCode>();
  }

  #[test]
  fn unknown_code_is_rejected() {
    let err = RoleCode::from_code("invalidRole").unwrap_err();
    assert_eq!(err, Error::InvalidEnumerationValue {
      vocabulary: "RoleCode",
      code:       "invalidRole".to_string(),
    });
    assert_eq!(err.invalid_code(), Some("invalidRole"));
  }

  #[test]
  fn lookup_is_case_sensitive() {
    assert!(DateTypeCode::is_member("creation"));
    assert!(!DateTypeCode::is_member("Creation"));
    assert!(!DateTypeCode::is_member("CREATION"));
    assert!(!DateTypeCode::is_member(""));
  }

  #[test]
  fn code_strings_resolve_through_into_code() {
    let ok: Result<TelephoneTypeCode> = "sms".into_code();
    assert_eq!(ok.unwrap(), TelephoneTypeCode::Sms);
    let bad: Result<TelephoneTypeCode> = String::from("pager").into_code();
    assert!(bad.is_err());
  }

  #[test]
  fn codes_serialize_as_their_code_string() {
    let json = serde_json::to_string(&DateTypeCode::LastUpdate).unwrap();
    assert_eq!(json, r#""lastUpdate""#);

    let role: RoleCode = serde_json::from_str(r#""pointOfContact""#).unwrap();
    assert_eq!(role, RoleCode::PointOfContact);

    let err =
      serde_json::from_str::<RoleCode>(r#""invalidRole""#).unwrap_err();
    assert!(err.to_string().contains("invalidRole"));
  }

  #[test]
  fn vocabularies_are_listed_by_name() {
    for name in VOCABULARIES {
      assert!(codes_of(name).is_some_and(|c| !c.is_empty()));
    }
    assert_eq!(codes_of("TelephoneTypeCode").unwrap().len(), 3);
    assert!(codes_of("CountryCode").is_none());
  }
}
