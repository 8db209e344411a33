//! Citation and responsible-party metadata model.
//!
//! Covers the citation package of an ISO 19115-class metadata standard:
//! who produced a resource ([`party`], [`responsibility`]), how to contact
//! them ([`contact`]), and how to cite the resource ([`citation`]), together
//! with the closed controlled vocabularies those entities draw from
//! ([`code`]).
//!
//! Every entity is an immutable value. Mandatory attributes cannot be absent
//! in a constructed instance; builders reject such input with
//! [`Error::MissingRequiredField`]. Codecs, stores and validators live
//! outside this crate and talk to it through its builders, accessors and
//! serde implementations.

pub mod citation;
pub mod code;
pub mod contact;
pub mod error;
pub mod external;
pub mod party;
pub mod responsibility;
pub mod timestamp;

mod builder;


pub use citation::{Citation, Date, Series};
pub use code::{
  CodeList, DateTypeCode, IntoCode, OnLineFunctionCode, PresentationFormCode,
  RoleCode, TelephoneTypeCode,
};
pub use contact::{Address, Contact, OnlineResource, Telephone};
pub use error::{Error, Result};
pub use external::{BrowseGraphic, Extent, Identifier};
pub use party::{Individual, Organisation, Party, PartyInfo, PartyKind};
pub use responsibility::Responsibility;
pub use timestamp::Timestamp;
