//! Contact information: addresses, telephones, online resources and the
//! [`Contact`] record that aggregates them.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
  Error, Result,
  builder::{Deferred, required},
  code::{IntoCode, OnLineFunctionCode, TelephoneTypeCode},
};

// ─── Address ─────────────────────────────────────────────────────────────────

/// Location of the responsible individual or organisation: one postal
/// record plus an electronic mail address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Address {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  delivery_point:          Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  city:                    Option<String>,
  /// State or province.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  administrative_area:     Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  postal_code:             Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  country:                 Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  electronic_mail_address: Option<String>,
}

impl Address {
  pub fn builder() -> AddressBuilder { AddressBuilder::default() }

  /// Address line for the location.
  pub fn delivery_point(&self) -> Option<&str> { self.delivery_point.as_deref() }

  pub fn city(&self) -> Option<&str> { self.city.as_deref() }

  pub fn administrative_area(&self) -> Option<&str> {
    self.administrative_area.as_deref()
  }

  pub fn postal_code(&self) -> Option<&str> { self.postal_code.as_deref() }

  pub fn country(&self) -> Option<&str> { self.country.as_deref() }

  pub fn electronic_mail_address(&self) -> Option<&str> {
    self.electronic_mail_address.as_deref()
  }
}

#[derive(Debug, Default)]
#[must_use]
pub struct AddressBuilder {
  inner: Address,
}

impl AddressBuilder {
  pub fn delivery_point(mut self, value: impl Into<String>) -> Self {
    self.inner.delivery_point = Some(value.into());
    self
  }

  pub fn city(mut self, value: impl Into<String>) -> Self {
    self.inner.city = Some(value.into());
    self
  }

  pub fn administrative_area(mut self, value: impl Into<String>) -> Self {
    self.inner.administrative_area = Some(value.into());
    self
  }

  pub fn postal_code(mut self, value: impl Into<String>) -> Self {
    self.inner.postal_code = Some(value.into());
    self
  }

  pub fn country(mut self, value: impl Into<String>) -> Self {
    self.inner.country = Some(value.into());
    self
  }

  pub fn electronic_mail_address(mut self, value: impl Into<String>) -> Self {
    self.inner.electronic_mail_address = Some(value.into());
    self
  }

  pub fn build(self) -> Address { self.inner }
}

// ─── Telephone ───────────────────────────────────────────────────────────────

/// A telephone number at which a party may be contacted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Telephone {
  number:      String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  number_type: Option<TelephoneTypeCode>,
}

impl Telephone {
  pub fn new(number: impl Into<String>) -> Self {
    Self {
      number:      number.into(),
      number_type: None,
    }
  }

  pub fn builder() -> TelephoneBuilder { TelephoneBuilder::default() }

  pub fn number(&self) -> &str { &self.number }

  pub fn number_type(&self) -> Option<TelephoneTypeCode> { self.number_type }
}

#[derive(Debug, Default)]
#[must_use]
pub struct TelephoneBuilder {
  number:      Option<String>,
  number_type: Option<TelephoneTypeCode>,
  deferred:    Deferred,
}

impl TelephoneBuilder {
  pub fn number(mut self, number: impl Into<String>) -> Self {
    self.number = Some(number.into());
    self
  }

  pub fn number_type(mut self, kind: impl IntoCode<TelephoneTypeCode>) -> Self {
    self.deferred.code("numberType", &mut self.number_type, kind);
    self
  }

  pub fn build(self) -> Result<Telephone> {
    self.deferred.check()?;
    Ok(Telephone {
      number:      required(self.number, "Telephone", "number")?,
      number_type: self.number_type,
    })
  }
}

// ─── OnlineResource ──────────────────────────────────────────────────────────

/// An on-line source: where it lives and what it does.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct OnlineResource {
  linkage:             Url,
  /// Connection protocol, e.g. `http`, `ftp`, `file`.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  protocol:            Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  application_profile: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  name:                Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  description:         Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  function:            Option<OnLineFunctionCode>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  protocol_request:    Option<String>,
}

impl OnlineResource {
  pub fn new(linkage: Url) -> Self {
    Self {
      linkage,
      protocol: None,
      application_profile: None,
      name: None,
      description: None,
      function: None,
      protocol_request: None,
    }
  }

  pub fn builder() -> OnlineResourceBuilder { OnlineResourceBuilder::default() }

  /// Location for on-line access, e.g. `http://www.statkart.no/isotc211`.
  pub fn linkage(&self) -> &Url { &self.linkage }

  pub fn protocol(&self) -> Option<&str> { self.protocol.as_deref() }

  /// Name of an application profile usable with the resource.
  pub fn application_profile(&self) -> Option<&str> {
    self.application_profile.as_deref()
  }

  pub fn name(&self) -> Option<&str> { self.name.as_deref() }

  pub fn description(&self) -> Option<&str> { self.description.as_deref() }

  pub fn function(&self) -> Option<OnLineFunctionCode> { self.function }

  /// Request used by the accessed resource's protocol.
  pub fn protocol_request(&self) -> Option<&str> {
    self.protocol_request.as_deref()
  }
}

#[derive(Debug, Default)]
#[must_use]
pub struct OnlineResourceBuilder {
  linkage:             Option<Url>,
  protocol:            Option<String>,
  application_profile: Option<String>,
  name:                Option<String>,
  description:         Option<String>,
  function:            Option<OnLineFunctionCode>,
  protocol_request:    Option<String>,
  deferred:            Deferred,
}

impl OnlineResourceBuilder {
  /// Parse and set the linkage. A malformed URI fails the build.
  pub fn linkage(mut self, uri: impl AsRef<str>) -> Self {
    let uri = uri.as_ref();
    match Url::parse(uri) {
      Ok(url) => self.linkage_url(url),
      Err(source) => {
        self.linkage = None;
        self.deferred.fail("linkage", Error::MalformedUri {
          value: uri.to_string(),
          source,
        });
        self
      }
    }
  }

  pub fn linkage_url(mut self, url: Url) -> Self {
    self.linkage = Some(url);
    self.deferred.clear("linkage");
    self
  }

  pub fn protocol(mut self, value: impl Into<String>) -> Self {
    self.protocol = Some(value.into());
    self
  }

  pub fn application_profile(mut self, value: impl Into<String>) -> Self {
    self.application_profile = Some(value.into());
    self
  }

  pub fn name(mut self, value: impl Into<String>) -> Self {
    self.name = Some(value.into());
    self
  }

  pub fn description(mut self, value: impl Into<String>) -> Self {
    self.description = Some(value.into());
    self
  }

  pub fn function(mut self, function: impl IntoCode<OnLineFunctionCode>) -> Self {
    self.deferred.code("function", &mut self.function, function);
    self
  }

  pub fn protocol_request(mut self, value: impl Into<String>) -> Self {
    self.protocol_request = Some(value.into());
    self
  }

  pub fn build(self) -> Result<OnlineResource> {
    self.deferred.check()?;
    Ok(OnlineResource {
      linkage:             required(self.linkage, "OnlineResource", "linkage")?,
      protocol:            self.protocol,
      application_profile: self.application_profile,
      name:                self.name,
      description:         self.description,
      function:            self.function,
      protocol_request:    self.protocol_request,
    })
  }
}

// ─── Contact ─────────────────────────────────────────────────────────────────

/// Everything needed to reach a party.
///
/// Every field is optional. A contact with nothing set is valid and means no
/// contact method is known.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Contact {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  phone:                Option<Telephone>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  address:              Option<Address>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  online_resource:      Option<OnlineResource>,
  /// Time period (including time zone) when the party can be contacted.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  hours_of_service:     Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  contact_instructions: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  contact_type:         Option<String>,
}

impl Contact {
  pub fn builder() -> ContactBuilder { ContactBuilder::default() }

  pub fn phone(&self) -> Option<&Telephone> { self.phone.as_ref() }

  pub fn address(&self) -> Option<&Address> { self.address.as_ref() }

  pub fn online_resource(&self) -> Option<&OnlineResource> {
    self.online_resource.as_ref()
  }

  pub fn hours_of_service(&self) -> Option<&str> {
    self.hours_of_service.as_deref()
  }

  pub fn contact_instructions(&self) -> Option<&str> {
    self.contact_instructions.as_deref()
  }

  pub fn contact_type(&self) -> Option<&str> { self.contact_type.as_deref() }

  /// `true` when no attribute is set at all.
  pub fn is_empty(&self) -> bool { self == &Self::default() }
}

#[derive(Debug, Default)]
#[must_use]
pub struct ContactBuilder {
  inner: Contact,
}

impl ContactBuilder {
  pub fn phone(mut self, phone: Telephone) -> Self {
    self.inner.phone = Some(phone);
    self
  }

  pub fn address(mut self, address: Address) -> Self {
    self.inner.address = Some(address);
    self
  }

  pub fn online_resource(mut self, resource: OnlineResource) -> Self {
    self.inner.online_resource = Some(resource);
    self
  }

  pub fn hours_of_service(mut self, value: impl Into<String>) -> Self {
    self.inner.hours_of_service = Some(value.into());
    self
  }

  pub fn contact_instructions(mut self, value: impl Into<String>) -> Self {
    self.inner.contact_instructions = Some(value.into());
    self
  }

  pub fn contact_type(mut self, value: impl Into<String>) -> Self {
    self.inner.contact_type = Some(value.into());
    self
  }

  pub fn build(self) -> Contact { self.inner }
}
