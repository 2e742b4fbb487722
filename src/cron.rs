use crate::trigger::Trigger;

/// Render a trigger as a six-field cron expression
/// (seconds minutes hours day-of-month month day-of-week).
///
/// Fields the trigger does not pin render as `*`, except the unused slot of
/// the day-of-month/day-of-week pair, which renders as `?`.
pub fn to_cron(trigger: &Trigger) -> String {
    match trigger {
        Trigger::SecondsOnly(t) => format!("{:02} * * * * ?", t.second()),
        Trigger::MinutesOnly(t) => format!("* {:02} * * * ?", t.minute()),
        Trigger::HoursOnly(t) => format!("* * {:02} * * ?", t.hour()),
        Trigger::MinutesSeconds(t) => format!("{:02} {:02} * * * ?", t.second(), t.minute()),
        Trigger::Time(t) => {
            format!("{:02} {:02} {:02} * * ?", t.second(), t.minute(), t.hour())
        }
        Trigger::TimeWeekday(t, day) => format!(
            "{:02} {:02} {:02} ? * {}",
            t.second(),
            t.minute(),
            t.hour(),
            quartz_dow(*day)
        ),
        Trigger::MonthDayTime(dt) => format!(
            "{:02} {:02} {:02} {:02} * ?",
            dt.second(),
            dt.minute(),
            dt.hour(),
            dt.day()
        ),
        Trigger::DateTime(dt) => format!(
            "{:02} {:02} {:02} {:02} {:02} *",
            dt.second(),
            dt.minute(),
            dt.hour(),
            dt.day(),
            dt.month()
        ),
    }
}

/// Quartz numbers day-of-week 1 (Sunday) through 7 (Saturday); input
/// weekdays count up from 1 with 7 wrapping around to Sunday.
fn quartz_dow(day: u8) -> u8 {
    if day == 7 {
        1
    } else {
        day + 1
    }
}
