use std::fmt;

use crate::trigger::Trigger;

// Renders the canonical input form back; the month-day layout prints
// without its injected year.
impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trigger::SecondsOnly(t)
            | Trigger::MinutesOnly(t)
            | Trigger::HoursOnly(t)
            | Trigger::MinutesSeconds(t)
            | Trigger::Time(t) => {
                write!(f, "{:02}:{:02}:{:02}", t.hour(), t.minute(), t.second())
            }
            Trigger::TimeWeekday(t, day) => {
                write!(
                    f,
                    "{:02}:{:02}:{:02} {day}",
                    t.hour(),
                    t.minute(),
                    t.second()
                )
            }
            Trigger::MonthDayTime(dt) => write!(
                f,
                "{:02}-{:02} {:02}:{:02}:{:02}",
                dt.month(),
                dt.day(),
                dt.hour(),
                dt.minute(),
                dt.second()
            ),
            Trigger::DateTime(dt) => write!(
                f,
                "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
                dt.year(),
                dt.month(),
                dt.day(),
                dt.hour(),
                dt.minute(),
                dt.second()
            ),
        }
    }
}
