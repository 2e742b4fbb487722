use jiff::civil;
use jiff::tz::{self, TimeZone};
use jiff::Timestamp;

use crate::error::TriggerError;
use crate::shape::Shape;

/// The two layouts every canonicalized input is tried against, in order.
const LAYOUT_TIME: &str = "%H:%M:%S";
const LAYOUT_DATETIME: &str = "%Y-%m-%d %H:%M:%S";

/// A classified and parsed date/time description, one variant per layout.
///
/// Obtained with [`Trigger::parse`] or [`Trigger::parse_on`], rendered with
/// [`Trigger::to_cron`]. `Display` prints the canonical input form back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// `00:00:SS` — a fixed second of every minute.
    SecondsOnly(civil::Time),
    /// `00:MM:00` — a fixed minute of every hour.
    MinutesOnly(civil::Time),
    /// `HH:00:00` — a fixed hour of every day.
    HoursOnly(civil::Time),
    /// `00:MM:SS` — a fixed minute and second of every hour.
    MinutesSeconds(civil::Time),
    /// `HH:MM:SS` — a fixed time of every day.
    Time(civil::Time),
    /// `HH:MM:SS D` — a fixed time on one weekday (input numbering 1-7).
    TimeWeekday(civil::Time, u8),
    /// `MM-DD HH:MM:SS` — a yearly instant; the year is injected at parse.
    MonthDayTime(civil::DateTime),
    /// `YYYY-MM-DD HH:MM:SS` — a fully specified instant.
    DateTime(civil::DateTime),
}

/// Intermediate parse result: whichever of the two layouts matched.
#[derive(Debug, Clone, Copy)]
enum Parsed {
    Time(civil::Time),
    DateTime(civil::DateTime),
}

impl Trigger {
    /// The layout this trigger was classified as.
    pub fn shape(&self) -> Shape {
        match self {
            Trigger::SecondsOnly(_) => Shape::SecondsOnly,
            Trigger::MinutesOnly(_) => Shape::MinutesOnly,
            Trigger::HoursOnly(_) => Shape::HoursOnly,
            Trigger::MinutesSeconds(_) => Shape::MinutesSeconds,
            Trigger::Time(_) => Shape::Time,
            Trigger::TimeWeekday(_, day) => Shape::TimeWeekday(*day),
            Trigger::MonthDayTime(_) => Shape::MonthDayTime,
            Trigger::DateTime(_) => Shape::DateTime,
        }
    }
}

/// Current date at the fixed UTC+8 offset.
pub(crate) fn today_utc8() -> civil::Date {
    Timestamp::now()
        .to_zoned(TimeZone::fixed(tz::offset(8)))
        .date()
}

/// Classify, canonicalize and parse `input`, resolving month-day inputs
/// against `today`.
pub(crate) fn parse_on(input: &str, today: civil::Date) -> Result<Trigger, TriggerError> {
    let shape = Shape::classify(input).ok_or_else(|| TriggerError::unrecognized(input))?;

    let canonical = canonicalize(input, shape, today);
    let parsed =
        parse_layouts(&canonical).map_err(|e| TriggerError::parse(input, e.to_string()))?;

    match (shape, parsed) {
        (Shape::SecondsOnly, Parsed::Time(t)) => Ok(Trigger::SecondsOnly(t)),
        (Shape::MinutesOnly, Parsed::Time(t)) => Ok(Trigger::MinutesOnly(t)),
        (Shape::HoursOnly, Parsed::Time(t)) => Ok(Trigger::HoursOnly(t)),
        (Shape::MinutesSeconds, Parsed::Time(t)) => Ok(Trigger::MinutesSeconds(t)),
        (Shape::Time, Parsed::Time(t)) => Ok(Trigger::Time(t)),
        (Shape::TimeWeekday(day), Parsed::Time(t)) => Ok(Trigger::TimeWeekday(t, day)),
        (Shape::MonthDayTime, Parsed::DateTime(dt)) => Ok(Trigger::MonthDayTime(dt)),
        (Shape::DateTime, Parsed::DateTime(dt)) => Ok(Trigger::DateTime(dt)),
        // A layout that parsed under the other format family; classification
        // and canonicalization keep this from happening.
        _ => Err(TriggerError::parse(input, "layout and parsed value disagree")),
    }
}

/// Rewrite the weekday and month-day layouts into one of the two parseable
/// layouts; everything else passes through.
fn canonicalize(input: &str, shape: Shape, today: civil::Date) -> String {
    match shape {
        Shape::TimeWeekday(_) => input[..8].to_string(),
        Shape::MonthDayTime => format!("{:04}-{input}", today.year()),
        _ => input.to_string(),
    }
}

/// Try the time layout first, then the full datetime layout.
fn parse_layouts(canonical: &str) -> Result<Parsed, jiff::Error> {
    match civil::Time::strptime(LAYOUT_TIME, canonical) {
        Ok(t) => Ok(Parsed::Time(t)),
        Err(_) => civil::DateTime::strptime(LAYOUT_DATETIME, canonical).map(Parsed::DateTime),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> civil::Date {
        civil::date(2024, 6, 1)
    }

    #[test]
    fn test_time_value() {
        let trigger = parse_on("13:45:30", today()).unwrap();
        assert_eq!(trigger, Trigger::Time(civil::time(13, 45, 30, 0)));
    }

    #[test]
    fn test_weekday_consumed_from_input() {
        let trigger = parse_on("00:00:59 3", today()).unwrap();
        assert_eq!(trigger, Trigger::TimeWeekday(civil::time(0, 0, 59, 0), 3));
    }

    #[test]
    fn test_month_day_injects_year() {
        let trigger = parse_on("06-15 10:00:00", today()).unwrap();
        match trigger {
            Trigger::MonthDayTime(dt) => {
                assert_eq!(dt.year(), 2024);
                assert_eq!(dt.month(), 6);
                assert_eq!(dt.day(), 15);
            }
            other => panic!("wrong variant: {other:?}"),
        }
    }

    #[test]
    fn test_full_datetime_keeps_year() {
        let trigger = parse_on("2022-05-19 14:51:00", today()).unwrap();
        match trigger {
            Trigger::DateTime(dt) => assert_eq!(dt.year(), 2022),
            other => panic!("wrong variant: {other:?}"),
        }
    }

    #[test]
    fn test_unrecognized_input() {
        let err = parse_on("not-a-date", today()).unwrap_err();
        assert!(matches!(err, TriggerError::UnrecognizedFormat { .. }));
    }

    #[test]
    fn test_impossible_date_is_parse_error() {
        // classification checks day 01-31 only; June has no 31st
        let err = parse_on("06-31 10:00:00", today()).unwrap_err();
        assert!(matches!(err, TriggerError::Parse { .. }));
    }

    #[test]
    fn test_nonleap_february_is_parse_error() {
        let err = parse_on("2023-02-29 00:00:00", today()).unwrap_err();
        assert!(matches!(err, TriggerError::Parse { .. }));
    }

    #[test]
    fn test_leap_february_parses() {
        let trigger = parse_on("2024-02-29 00:00:00", today()).unwrap();
        assert!(matches!(trigger, Trigger::DateTime(_)));
    }
}
