use chrono::{DateTime, Local, TimeZone};

use crate::model::day_entry::{DayKey, YearMonth};

/// Day key for a wall-clock instant, taken from its calendar date in the
/// instant's own zone. Callers pass `Local` times so an edit made at 23:30
/// lands on the day the user sees, not the UTC day.
pub fn day_key_for<Tz: TimeZone>(instant: &DateTime<Tz>) -> DayKey {
    DayKey::new(instant.date_naive())
}

pub fn local_day_key(instant: DateTime<Local>) -> DayKey {
    day_key_for(&instant)
}

pub fn today_key() -> DayKey {
    local_day_key(Local::now())
}

pub fn current_month() -> YearMonth {
    YearMonth::of(today_key())
}

/// Label used for month rows and chart axes ("Month 1" .. "Month 12").
pub fn month_label(month: u32) -> String {
    format!("Month {}", month)
}
