//! cronify — cron trigger expressions from date/time strings.
//!
//! Classifies a concrete time or date-time string against eight fixed
//! layouts and renders the matching six-field trigger expression (seconds,
//! minutes, hours, day-of-month, month, day-of-week) for Quartz-style
//! schedulers.
//!
//! # Examples
//!
//! ```
//! let expr = cronify::generate("13:45:30").unwrap();
//! assert_eq!(expr, "30 45 13 * * ?");
//! ```

pub mod cron;
pub mod display;
pub mod error;
pub mod shape;
pub mod trigger;

pub use error::TriggerError;
pub use shape::Shape;
pub use trigger::Trigger;

use jiff::civil;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// --- Trigger convenience methods ---

impl Trigger {
    /// Parse a date/time string, resolving month-day inputs against the
    /// system clock at UTC+8.
    pub fn parse(input: &str) -> Result<Self, TriggerError> {
        trigger::parse_on(input, trigger::today_utc8())
    }

    /// Parse a date/time string, resolving month-day inputs against `today`.
    pub fn parse_on(input: &str, today: civil::Date) -> Result<Self, TriggerError> {
        trigger::parse_on(input, today)
    }

    /// Render this trigger as a six-field cron expression.
    pub fn to_cron(&self) -> String {
        cron::to_cron(self)
    }
}

/// Generate a cron trigger expression from a date/time string.
///
/// Shorthand for [`Trigger::parse`] followed by [`Trigger::to_cron`].
pub fn generate(input: &str) -> Result<String, TriggerError> {
    Trigger::parse(input).map(|t| t.to_cron())
}

/// Like [`generate`], resolving month-day inputs against `today` instead of
/// the system clock.
pub fn generate_on(input: &str, today: civil::Date) -> Result<String, TriggerError> {
    Trigger::parse_on(input, today).map(|t| t.to_cron())
}

impl FromStr for Trigger {
    type Err = TriggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Trigger {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("shape", self.shape().as_str())?;

        match self {
            Trigger::SecondsOnly(t) => {
                map.serialize_entry("second", &t.second())?;
            }
            Trigger::MinutesOnly(t) => {
                map.serialize_entry("minute", &t.minute())?;
            }
            Trigger::HoursOnly(t) => {
                map.serialize_entry("hour", &t.hour())?;
            }
            Trigger::MinutesSeconds(t) => {
                map.serialize_entry("second", &t.second())?;
                map.serialize_entry("minute", &t.minute())?;
            }
            Trigger::Time(t) => {
                map.serialize_entry("second", &t.second())?;
                map.serialize_entry("minute", &t.minute())?;
                map.serialize_entry("hour", &t.hour())?;
            }
            Trigger::TimeWeekday(t, day) => {
                map.serialize_entry("second", &t.second())?;
                map.serialize_entry("minute", &t.minute())?;
                map.serialize_entry("hour", &t.hour())?;
                map.serialize_entry("weekday", day)?;
            }
            Trigger::MonthDayTime(dt) | Trigger::DateTime(dt) => {
                map.serialize_entry("second", &dt.second())?;
                map.serialize_entry("minute", &dt.minute())?;
                map.serialize_entry("hour", &dt.hour())?;
                map.serialize_entry("day", &dt.day())?;
                map.serialize_entry("month", &dt.month())?;
                map.serialize_entry("year", &dt.year())?;
            }
        }

        map.serialize_entry("cron", &self.to_cron())?;
        map.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Trigger {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Deserialize from the input string form
        let s = String::deserialize(deserializer)?;
        Trigger::parse(&s).map_err(serde::de::Error::custom)
    }
}
