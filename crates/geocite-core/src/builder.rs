//! Helpers shared by the entity builders.

use crate::{Error, Result, code::IntoCode};

/// Validation failures parked while a builder is being configured, one per
/// attribute.
///
/// Setters never fail; they park the error here and `build()` returns the
/// oldest one. Setting an attribute again replaces its parked error, so the
/// last call to a setter wins.
#[derive(Debug, Default)]
pub(crate) struct Deferred(Vec<(&'static str, Error)>);

impl Deferred {
  pub(crate) fn fail(&mut self, field: &'static str, error: Error) {
    self.clear(field);
    self.0.push((field, error));
  }

  pub(crate) fn clear(&mut self, field: &'static str) {
    self.0.retain(|(f, _)| *f != field);
  }

  /// Resolve `value` into `slot`, or record why it could not be.
  pub(crate) fn code<C>(
    &mut self,
    field: &'static str,
    slot: &mut Option<C>,
    value: impl IntoCode<C>,
  ) {
    match value.into_code() {
      Ok(code) => {
        *slot = Some(code);
        self.clear(field);
      }
      Err(e) => {
        *slot = None;
        self.fail(field, e);
      }
    }
  }

  pub(crate) fn check(self) -> Result<()> {
    match self.0.into_iter().next() {
      Some((_, error)) => Err(error),
      None => Ok(()),
    }
  }
}

/// Unwrap a mandatory attribute.
pub(crate) fn required<T>(
  slot: Option<T>,
  entity: &'static str,
  field: &'static str,
) -> Result<T> {
  slot.ok_or_else(|| Error::missing(entity, field))
}
