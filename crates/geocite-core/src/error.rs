//! Error types for `geocite-core`.
//!
//! Construction is all-or-nothing: every failure below is surfaced to the
//! caller and no partially built entity is ever returned.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
  /// A mandatory attribute was not supplied.
  #[error("{entity}: missing required field `{field}`")]
  MissingRequiredField {
    entity: &'static str,
    field:  &'static str,
  },

  /// A code string is not a member of a closed vocabulary.
  #[error("{vocabulary}: invalid enumeration value {code:?}")]
  InvalidEnumerationValue {
    vocabulary: &'static str,
    code:       String,
  },

  /// `OnlineResource.linkage` is not a syntactically valid URI.
  #[error("malformed URI {value:?}: {source}")]
  MalformedUri {
    value:  String,
    #[source]
    source: url::ParseError,
  },
}

impl Error {
  pub(crate) fn missing(entity: &'static str, field: &'static str) -> Self {
    Self::MissingRequiredField { entity, field }
  }

  /// The attribute named by a [`Error::MissingRequiredField`].
  pub fn missing_field(&self) -> Option<&'static str> {
    match self {
      Self::MissingRequiredField { field, .. } => Some(field),
      _ => None,
    }
  }

  /// The rejected code string of an [`Error::InvalidEnumerationValue`].
  pub fn invalid_code(&self) -> Option<&str> {
    match self {
      Self::InvalidEnumerationValue { code, .. } => Some(code),
      _ => None,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
