//! Types owned by other metadata packages.
//!
//! Identifiers, extents and browse graphics are specified elsewhere in the
//! standard. The citation package only needs to hold and compare them, so
//! they are carried as opaque references.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! opaque_reference {
  ($(#[$doc:meta])* $ty:ident) => {
    $(#[$doc])*
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct $ty(String);

    impl $ty {
      pub fn new(reference: impl Into<String>) -> Self { Self(reference.into()) }

      pub fn as_str(&self) -> &str { &self.0 }
    }

    impl fmt::Display for $ty {
      fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
      }
    }
  };
}

opaque_reference!(
  /// Value uniquely identifying an object within a namespace.
  Identifier
);

opaque_reference!(
  /// Spatial or temporal scope, e.g. a bounding box or a time period.
  Extent
);

opaque_reference!(
  /// Graphic that provides an illustration, such as a logo.
  BrowseGraphic
);
