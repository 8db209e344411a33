//! Parties: the individuals and organisations a citation can name.
//!
//! [`Party`] is a closed sum type: a value is exactly one of
//! [`Individual`] or [`Organisation`]. The attributes every party has
//! (`name`, `contactInfo`) live in the shared [`PartyInfo`] payload.

use serde::{Deserialize, Serialize};

use crate::{contact::Contact, external::BrowseGraphic};

// ─── Shared payload ──────────────────────────────────────────────────────────

/// Attributes common to every kind of party.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartyInfo {
  name:         Option<String>,
  contact_info: Option<Contact>,
}

impl PartyInfo {
  pub fn name(&self) -> Option<&str> { self.name.as_deref() }

  pub fn contact_info(&self) -> Option<&Contact> { self.contact_info.as_ref() }
}

// ─── Individual ──────────────────────────────────────────────────────────────

/// A person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "IndividualWire", into = "IndividualWire")]
pub struct Individual {
  info:          PartyInfo,
  /// Position of the individual in an organisation.
  position_name: Option<String>,
}

impl Individual {
  pub fn builder() -> IndividualBuilder { IndividualBuilder::default() }

  pub fn info(&self) -> &PartyInfo { &self.info }

  pub fn name(&self) -> Option<&str> { self.info.name() }

  pub fn contact_info(&self) -> Option<&Contact> { self.info.contact_info() }

  pub fn position_name(&self) -> Option<&str> { self.position_name.as_deref() }
}

#[derive(Debug, Default)]
#[must_use]
pub struct IndividualBuilder {
  inner: Individual,
}

impl IndividualBuilder {
  pub fn name(mut self, name: impl Into<String>) -> Self {
    self.inner.info.name = Some(name.into());
    self
  }

  pub fn contact_info(mut self, contact: Contact) -> Self {
    self.inner.info.contact_info = Some(contact);
    self
  }

  pub fn position_name(mut self, position: impl Into<String>) -> Self {
    self.inner.position_name = Some(position.into());
    self
  }

  pub fn build(self) -> Individual { self.inner }
}

// ─── Organisation ────────────────────────────────────────────────────────────

/// An organisation, optionally with a representative individual.
///
/// The representative is referenced, not inherited: an organisation is never
/// itself an individual.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "OrganisationWire", into = "OrganisationWire")]
pub struct Organisation {
  info:       PartyInfo,
  logo:       Option<BrowseGraphic>,
  individual: Option<Individual>,
}

impl Organisation {
  pub fn builder() -> OrganisationBuilder { OrganisationBuilder::default() }

  pub fn info(&self) -> &PartyInfo { &self.info }

  pub fn name(&self) -> Option<&str> { self.info.name() }

  pub fn contact_info(&self) -> Option<&Contact> { self.info.contact_info() }

  /// Graphic identifying the organisation.
  pub fn logo(&self) -> Option<&BrowseGraphic> { self.logo.as_ref() }

  pub fn individual(&self) -> Option<&Individual> { self.individual.as_ref() }
}

#[derive(Debug, Default)]
#[must_use]
pub struct OrganisationBuilder {
  inner: Organisation,
}

impl OrganisationBuilder {
  pub fn name(mut self, name: impl Into<String>) -> Self {
    self.inner.info.name = Some(name.into());
    self
  }

  pub fn contact_info(mut self, contact: Contact) -> Self {
    self.inner.info.contact_info = Some(contact);
    self
  }

  pub fn logo(mut self, logo: BrowseGraphic) -> Self {
    self.inner.logo = Some(logo);
    self
  }

  pub fn individual(mut self, individual: Individual) -> Self {
    self.inner.individual = Some(individual);
    self
  }

  pub fn build(self) -> Organisation { self.inner }
}

// ─── Wire shapes ─────────────────────────────────────────────────────────────

// Flattened structs cannot deny unknown fields, so each variant is decoded
// through a flat mirror that lists every attribute it accepts.

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct IndividualWire {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  name:          Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  contact_info:  Option<Contact>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  position_name: Option<String>,
}

impl From<IndividualWire> for Individual {
  fn from(wire: IndividualWire) -> Self {
    Self {
      info:          PartyInfo {
        name:         wire.name,
        contact_info: wire.contact_info,
      },
      position_name: wire.position_name,
    }
  }
}

impl From<Individual> for IndividualWire {
  fn from(individual: Individual) -> Self {
    Self {
      name:          individual.info.name,
      contact_info:  individual.info.contact_info,
      position_name: individual.position_name,
    }
  }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct OrganisationWire {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  name:         Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  contact_info: Option<Contact>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  logo:         Option<BrowseGraphic>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  individual:   Option<Individual>,
}

impl From<OrganisationWire> for Organisation {
  fn from(wire: OrganisationWire) -> Self {
    Self {
      info:       PartyInfo {
        name:         wire.name,
        contact_info: wire.contact_info,
      },
      logo:       wire.logo,
      individual: wire.individual,
    }
  }
}

impl From<Organisation> for OrganisationWire {
  fn from(organisation: Organisation) -> Self {
    Self {
      name:         organisation.info.name,
      contact_info: organisation.info.contact_info,
      logo:         organisation.logo,
      individual:   organisation.individual,
    }
  }
}

// ─── Party ───────────────────────────────────────────────────────────────────

/// Discriminant of a [`Party`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartyKind {
  Individual,
  Organisation,
}

/// An individual or an organisation, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Party {
  Individual(Individual),
  Organisation(Organisation),
}

impl Party {
  pub fn kind(&self) -> PartyKind {
    match self {
      Self::Individual(_) => PartyKind::Individual,
      Self::Organisation(_) => PartyKind::Organisation,
    }
  }

  pub fn info(&self) -> &PartyInfo {
    match self {
      Self::Individual(i) => &i.info,
      Self::Organisation(o) => &o.info,
    }
  }

  pub fn name(&self) -> Option<&str> { self.info().name() }

  pub fn contact_info(&self) -> Option<&Contact> { self.info().contact_info() }

  pub fn as_individual(&self) -> Option<&Individual> {
    match self {
      Self::Individual(i) => Some(i),
      Self::Organisation(_) => None,
    }
  }

  pub fn as_organisation(&self) -> Option<&Organisation> {
    match self {
      Self::Individual(_) => None,
      Self::Organisation(o) => Some(o),
    }
  }

  /// Only individuals carry a position name.
  pub fn position_name(&self) -> Option<&str> {
    self.as_individual().and_then(Individual::position_name)
  }

  /// Only organisations carry a logo.
  pub fn logo(&self) -> Option<&BrowseGraphic> {
    self.as_organisation().and_then(Organisation::logo)
  }
}

impl From<Individual> for Party {
  fn from(individual: Individual) -> Self { Self::Individual(individual) }
}

impl From<Organisation> for Party {
  fn from(organisation: Organisation) -> Self { Self::Organisation(organisation) }
}
