//! The wire timestamp transform.
//!
//! The backend serializes every date-like field as a 6-element array
//! `[year, month, day, hour, minute, second]` with a 1-based month. Every
//! record field typed [`Timestamp`] goes through this one conversion, so the
//! month arithmetic happens exactly once.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::macros::format_description;
use time::{Date, Month, PrimitiveDateTime, Time};

const WIRE_LEN: usize = 6;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TimestampError {
    #[error("expected 6 date components, got {0}")]
    WrongLength(usize),
    #[error("{field} out of range: {value}")]
    OutOfRange { field: &'static str, value: i64 },
    #[error("invalid date: {0}")]
    Invalid(String),
}

/// Local date-time decoded from the wire array. No timezone is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(PrimitiveDateTime);

impl Timestamp {
    /// Decode `[year, month(1-based), day, hour, minute, second]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the slice is not exactly six components long or
    /// the components do not form a valid calendar date and time.
    pub fn from_parts(parts: &[i64]) -> Result<Self, TimestampError> {
        let &[year, month, day, hour, minute, second] = parts else {
            return Err(TimestampError::WrongLength(parts.len()));
        };

        let year = component::<i32>("year", year)?;
        let month = Month::try_from(component::<u8>("month", month)?)
            .map_err(|_| TimestampError::OutOfRange { field: "month", value: month })?;
        let date = Date::from_calendar_date(year, month, component("day", day)?)
            .map_err(|e| TimestampError::Invalid(e.to_string()))?;
        let time = Time::from_hms(component("hour", hour)?, component("minute", minute)?, component("second", second)?)
            .map_err(|e| TimestampError::Invalid(e.to_string()))?;

        Ok(Self(PrimitiveDateTime::new(date, time)))
    }

    /// Encode back into the wire array (1-based month).
    #[must_use]
    pub fn to_parts(self) -> [i64; WIRE_LEN] {
        let dt = self.0;
        [
            i64::from(dt.year()),
            i64::from(u8::from(dt.month())),
            i64::from(dt.day()),
            i64::from(dt.hour()),
            i64::from(dt.minute()),
            i64::from(dt.second()),
        ]
    }

    /// Zero-based month index (January = 0, December = 11).
    #[must_use]
    pub fn month_index(self) -> u8 {
        u8::from(self.0.month()) - 1
    }

    #[must_use]
    pub fn datetime(self) -> PrimitiveDateTime {
        self.0
    }
}

fn component<T: TryFrom<i64>>(field: &'static str, value: i64) -> Result<T, TimestampError> {
    T::try_from(value).map_err(|_| TimestampError::OutOfRange { field, value })
}

impl From<PrimitiveDateTime> for Timestamp {
    fn from(value: PrimitiveDateTime) -> Self {
        Self(value)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let format = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
        let rendered = self.0.format(format).map_err(|_| fmt::Error)?;
        f.write_str(&rendered)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parts = Vec::<i64>::deserialize(deserializer)?;
        Self::from_parts(&parts).map_err(serde::de::Error::custom)
    }
}

/// Serialized as `YYYY-MM-DDTHH:MM:SS` for display output, not the wire array.
impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
#[path = "timestamp_test.rs"]
mod tests;
