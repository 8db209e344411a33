//! Reference dates.

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, de};

/// A point in time at the precision it was recorded with.
///
/// Citation dates are often known only to the day; those are kept as
/// calendar dates rather than being padded to midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum Timestamp {
  /// A specific moment in time.
  Instant(DateTime<Utc>),
  /// A calendar date without time component.
  Day(NaiveDate),
}

impl Timestamp {
  /// The calendar day this timestamp falls on (UTC).
  pub fn day(&self) -> NaiveDate {
    match self {
      Self::Instant(at) => at.date_naive(),
      Self::Day(day) => *day,
    }
  }
}

impl From<DateTime<Utc>> for Timestamp {
  fn from(at: DateTime<Utc>) -> Self { Self::Instant(at) }
}

impl From<NaiveDate> for Timestamp {
  fn from(day: NaiveDate) -> Self { Self::Day(day) }
}

impl std::str::FromStr for Timestamp {
  type Err = chrono::ParseError;

  /// RFC 3339 instants first, then `YYYY-MM-DD` days.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.parse::<DateTime<Utc>>() {
      Ok(at) => Ok(Self::Instant(at)),
      Err(_) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map(Self::Day),
    }
  }
}

impl<'de> Deserialize<'de> for Timestamp {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    struct TimestampVisitor;

    impl de::Visitor<'_> for TimestampVisitor {
      type Value = Timestamp;

      fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an RFC 3339 date-time or a YYYY-MM-DD date")
      }

      fn visit_str<E: de::Error>(self, value: &str) -> Result<Timestamp, E> {
        value.parse().map_err(|e| {
          E::custom(format_args!(
            "invalid timestamp {value:?}: {e} (expected an RFC 3339 date-time or YYYY-MM-DD)"
          ))
        })
      }
    }

    deserializer.deserialize_str(TimestampVisitor)
  }
}

impl fmt::Display for Timestamp {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Instant(at) => write!(f, "{}", at.to_rfc3339()),
      Self::Day(day) => write!(f, "{}", day.format("%Y-%m-%d")),
    }
  }
}
