//! Binding of a party to the role it plays for a resource.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::{
  Result,
  builder::{Deferred, required},
  code::{IntoCode, RoleCode},
  external::Extent,
  party::Party,
};

/// A party acting in a role, optionally limited to an extent.
///
/// The party is shared: the same person or organisation can appear in many
/// responsibilities without being copied. Equality compares the role, extent
/// and the party's value, never its address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Responsibility {
  role:   RoleCode,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  extent: Option<Extent>,
  party:  Arc<Party>,
}

impl Responsibility {
  pub fn new(role: RoleCode, party: impl Into<Arc<Party>>) -> Self {
    Self {
      role,
      extent: None,
      party: party.into(),
    }
  }

  pub fn builder() -> ResponsibilityBuilder { ResponsibilityBuilder::default() }

  pub fn role(&self) -> RoleCode { self.role }

  /// Spatial or temporal extent of the role.
  pub fn extent(&self) -> Option<&Extent> { self.extent.as_ref() }

  pub fn party(&self) -> &Party { &self.party }

  /// A handle on the party for reuse in another responsibility.
  pub fn shared_party(&self) -> Arc<Party> { Arc::clone(&self.party) }
}

#[derive(Debug, Default)]
#[must_use]
pub struct ResponsibilityBuilder {
  role:     Option<RoleCode>,
  extent:   Option<Extent>,
  party:    Option<Arc<Party>>,
  deferred: Deferred,
}

impl ResponsibilityBuilder {
  pub fn role(mut self, role: impl IntoCode<RoleCode>) -> Self {
    self.deferred.code("role", &mut self.role, role);
    self
  }

  pub fn extent(mut self, extent: Extent) -> Self {
    self.extent = Some(extent);
    self
  }

  pub fn party(mut self, party: impl Into<Arc<Party>>) -> Self {
    self.party = Some(party.into());
    self
  }

  pub fn build(self) -> Result<Responsibility> {
    self.deferred.check()?;
    Ok(Responsibility {
      role:   required(self.role, "Responsibility", "role")?,
      extent: self.extent,
      party:  required(self.party, "Responsibility", "party")?,
    })
  }
}
