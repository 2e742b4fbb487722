use std::fmt;

/// The eight recognized input layouts, in classification priority order.
///
/// The first five are plain `HH:MM:SS` strings told apart by which fields
/// are zero; the subset layouts win over their supersets, so `00:00:59` is
/// [`Shape::SecondsOnly`], never [`Shape::Time`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `00:00:SS` — seconds only.
    SecondsOnly,
    /// `00:MM:00` — minutes only.
    MinutesOnly,
    /// `HH:00:00` — hours only.
    HoursOnly,
    /// `00:MM:SS` — minutes and seconds.
    MinutesSeconds,
    /// `HH:MM:SS` — full time of day.
    Time,
    /// `HH:MM:SS D` — time plus a weekday digit (1-7), carried here.
    TimeWeekday(u8),
    /// `MM-DD HH:MM:SS` — month-day and time, no year.
    MonthDayTime,
    /// `YYYY-MM-DD HH:MM:SS` — full date and time.
    DateTime,
}

impl Shape {
    /// Classify `input` against the eight layouts; `None` if nothing matches.
    ///
    /// Fields are fixed-width and range-checked here: hours 00-23,
    /// minutes/seconds 00-59, month 01-12, day 01-31, weekday 1-7.
    pub fn classify(input: &str) -> Option<Shape> {
        let b = input.as_bytes();
        match b.len() {
            // HH:MM:SS
            8 => {
                let (h, m, s) = scan_time(b, 0)?;
                Some(time_shape(h, m, s))
            }
            // HH:MM:SS D
            10 => {
                scan_time(b, 0)?;
                if b[8] != b' ' || !b[9].is_ascii_digit() {
                    return None;
                }
                let day = b[9] - b'0';
                if !(1..=7).contains(&day) {
                    return None;
                }
                Some(Shape::TimeWeekday(day))
            }
            // MM-DD HH:MM:SS
            14 => {
                scan_month_day(b, 0)?;
                if b[5] != b' ' {
                    return None;
                }
                scan_time(b, 6)?;
                Some(Shape::MonthDayTime)
            }
            // YYYY-MM-DD HH:MM:SS
            19 => {
                scan_year(b)?;
                if b[4] != b'-' {
                    return None;
                }
                scan_month_day(b, 5)?;
                if b[10] != b' ' {
                    return None;
                }
                scan_time(b, 11)?;
                Some(Shape::DateTime)
            }
            _ => None,
        }
    }

    /// Stable snake_case name for the layout.
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::SecondsOnly => "seconds_only",
            Shape::MinutesOnly => "minutes_only",
            Shape::HoursOnly => "hours_only",
            Shape::MinutesSeconds => "minutes_seconds",
            Shape::Time => "time",
            Shape::TimeWeekday(_) => "time_weekday",
            Shape::MonthDayTime => "month_day_time",
            Shape::DateTime => "date_time",
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pick among the five plain-time layouts. The check order mirrors the
/// subset relationships: seconds-only before minutes+seconds before full
/// time, so the narrowest layout always wins.
fn time_shape(h: u8, m: u8, s: u8) -> Shape {
    if h == 0 && m == 0 {
        Shape::SecondsOnly
    } else if h == 0 && s == 0 {
        Shape::MinutesOnly
    } else if m == 0 && s == 0 {
        Shape::HoursOnly
    } else if h == 0 {
        Shape::MinutesSeconds
    } else {
        Shape::Time
    }
}

/// Two ASCII digits at `i` as a number.
fn two_digits(b: &[u8], i: usize) -> Option<u8> {
    if b[i].is_ascii_digit() && b[i + 1].is_ascii_digit() {
        Some((b[i] - b'0') * 10 + (b[i + 1] - b'0'))
    } else {
        None
    }
}

/// `HH:MM:SS` at `i`, range-checked.
fn scan_time(b: &[u8], i: usize) -> Option<(u8, u8, u8)> {
    if b[i + 2] != b':' || b[i + 5] != b':' {
        return None;
    }
    let h = two_digits(b, i)?;
    let m = two_digits(b, i + 3)?;
    let s = two_digits(b, i + 6)?;
    if h > 23 || m > 59 || s > 59 {
        return None;
    }
    Some((h, m, s))
}

/// `MM-DD` at `i`, range-checked.
fn scan_month_day(b: &[u8], i: usize) -> Option<(u8, u8)> {
    if b[i + 2] != b'-' {
        return None;
    }
    let month = two_digits(b, i)?;
    let day = two_digits(b, i + 3)?;
    if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
        return None;
    }
    Some((month, day))
}

/// Four ASCII digits at the start.
fn scan_year(b: &[u8]) -> Option<u16> {
    let mut year = 0u16;
    for &d in &b[..4] {
        if !d.is_ascii_digit() {
            return None;
        }
        year = year * 10 + u16::from(d - b'0');
    }
    Some(year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_time_layouts() {
        assert_eq!(Shape::classify("00:00:59"), Some(Shape::SecondsOnly));
        assert_eq!(Shape::classify("00:30:00"), Some(Shape::MinutesOnly));
        assert_eq!(Shape::classify("13:00:00"), Some(Shape::HoursOnly));
        assert_eq!(Shape::classify("00:15:30"), Some(Shape::MinutesSeconds));
        assert_eq!(Shape::classify("13:45:30"), Some(Shape::Time));
    }

    #[test]
    fn test_narrowest_layout_wins() {
        assert_eq!(Shape::classify("00:00:00"), Some(Shape::SecondsOnly));
        assert_eq!(Shape::classify("13:00:05"), Some(Shape::Time));
    }

    #[test]
    fn test_weekday_layout() {
        assert_eq!(Shape::classify("00:00:59 3"), Some(Shape::TimeWeekday(3)));
        assert_eq!(Shape::classify("23:59:59 7"), Some(Shape::TimeWeekday(7)));
        assert_eq!(Shape::classify("09:00:00 1"), Some(Shape::TimeWeekday(1)));
    }

    #[test]
    fn test_month_day_layout() {
        assert_eq!(Shape::classify("06-15 10:00:00"), Some(Shape::MonthDayTime));
        assert_eq!(Shape::classify("12-31 23:59:59"), Some(Shape::MonthDayTime));
    }

    #[test]
    fn test_datetime_layout() {
        assert_eq!(
            Shape::classify("2022-05-19 14:51:00"),
            Some(Shape::DateTime)
        );
    }

    #[test]
    fn test_out_of_range_fields() {
        assert_eq!(Shape::classify("25:00:00"), None);
        assert_eq!(Shape::classify("00:60:00"), None);
        assert_eq!(Shape::classify("00:00:60"), None);
        assert_eq!(Shape::classify("13-01 10:00:00"), None);
        assert_eq!(Shape::classify("00-01 10:00:00"), None);
        assert_eq!(Shape::classify("06-32 10:00:00"), None);
        assert_eq!(Shape::classify("06-00 10:00:00"), None);
        assert_eq!(Shape::classify("2022-13-19 14:51:00"), None);
        assert_eq!(Shape::classify("00:00:59 0"), None);
        assert_eq!(Shape::classify("00:00:59 8"), None);
    }

    #[test]
    fn test_width_is_fixed() {
        assert_eq!(Shape::classify("0:00:00"), None);
        assert_eq!(Shape::classify("00:00:591"), None);
        assert_eq!(Shape::classify("6-15 10:00:00"), None);
        assert_eq!(Shape::classify("22-05-19 14:51:00"), None);
        assert_eq!(Shape::classify("00:00:59  3"), None);
    }

    #[test]
    fn test_garbage() {
        assert_eq!(Shape::classify(""), None);
        assert_eq!(Shape::classify("not-a-date"), None);
        assert_eq!(Shape::classify("every day"), None);
        assert_eq!(Shape::classify("aa:bb:cc"), None);
    }
}
