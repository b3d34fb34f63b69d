use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime};
use log::warn;
use rust_decimal::Decimal;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PaysheetError;
use crate::input::check_hours;

const DAY_KEY_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMATS: [&str; 2] = ["%H:%M:%S%.f", "%H:%M"];

fn is_time_of_day(input: &str) -> bool {
    let input = input.strip_suffix('Z').unwrap_or(input);
    TIME_FORMATS
        .iter()
        .any(|format| NaiveTime::parse_from_str(input, format).is_ok())
}

/// An employee's per-day hour log. Ordered by day so saved files are stable.
pub type MonthlyData = BTreeMap<DayKey, DayEntry>;

/// A calendar day used as a `monthlyData` key. Carries no time or zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayKey(NaiveDate);

impl DayKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, PaysheetError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| PaysheetError::InvalidDayKey(format!("{year:04}-{month:02}-{day:02}")))
    }

    /// Parses `YYYY-MM-DD`. A trailing time component (`...T12:00:00`,
    /// optionally with `Z` or an offset) is dropped, since older saves
    /// sometimes carried one. Anything else after the `T` is rejected.
    pub fn parse(input: &str) -> Result<Self, PaysheetError> {
        let trimmed = input.trim();
        let invalid = || PaysheetError::InvalidDayKey(input.to_string());

        let Some((date_part, time_part)) = trimmed.split_once('T') else {
            return NaiveDate::parse_from_str(trimmed, DAY_KEY_FORMAT)
                .map(Self)
                .map_err(|_| invalid());
        };

        let date = NaiveDate::parse_from_str(date_part, DAY_KEY_FORMAT).map_err(|_| invalid())?;
        if is_time_of_day(time_part) || DateTime::parse_from_rfc3339(trimmed).is_ok() {
            Ok(Self(date))
        } else {
            Err(invalid())
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month of year, 1-12.
    pub fn month(&self) -> u32 {
        self.0.month()
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DAY_KEY_FORMAT))
    }
}

impl FromStr for DayKey {
    type Err = PaysheetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for DayKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DayKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        DayKey::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Hours logged for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "DayEntryRecord")]
pub struct DayEntry {
    hours: Decimal,
}

impl DayEntry {
    /// Rounds to two decimals. Negative hours and more than a day's worth
    /// are rejected.
    pub fn new(hours: Decimal) -> Result<Self, PaysheetError> {
        Ok(Self {
            hours: check_hours(hours)?,
        })
    }

    pub fn hours(&self) -> Decimal {
        self.hours
    }
}

#[derive(Deserialize)]
struct DayEntryRecord {
    #[serde(default)]
    hours: Decimal,
}

impl TryFrom<DayEntryRecord> for DayEntry {
    type Error = PaysheetError;

    fn try_from(record: DayEntryRecord) -> Result<Self, Self::Error> {
        DayEntry::new(record.hours)
    }
}

/// Reads a stored day log. Two keys naming the same day (`2024-03-01` and
/// `2024-03-01T08:00:00`) are merged by adding their hours; if the sum is not
/// a valid entry the first one is kept. Either way a warning is logged.
pub(crate) fn deserialize_monthly_data<'de, D>(deserializer: D) -> Result<MonthlyData, D::Error>
where
    D: Deserializer<'de>,
{
    struct MonthlyDataVisitor;

    impl<'de> Visitor<'de> for MonthlyDataVisitor {
        type Value = MonthlyData;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of YYYY-MM-DD keys to day entries")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut data = MonthlyData::new();
            while let Some((day, entry)) = map.next_entry::<DayKey, DayEntry>()? {
                match data.entry(day) {
                    Entry::Vacant(slot) => {
                        slot.insert(entry);
                    }
                    Entry::Occupied(mut slot) => {
                        let merged = slot
                            .get()
                            .hours()
                            .checked_add(entry.hours())
                            .ok_or(PaysheetError::Overflow("day hours"))
                            .and_then(DayEntry::new);
                        match merged {
                            Ok(merged) => {
                                warn!("Merged duplicate entries for {}", day);
                                slot.insert(merged);
                            }
                            Err(e) => {
                                warn!("Dropped duplicate entry for {}: {}", day, e);
                            }
                        }
                    }
                }
            }
            Ok(data)
        }
    }

    deserializer.deserialize_map(MonthlyDataVisitor)
}

/// One calendar month of one year, e.g. 2024-03.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> Result<Self, PaysheetError> {
        if !(1..=12).contains(&month) {
            return Err(PaysheetError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    pub fn of(day: DayKey) -> Self {
        Self {
            year: day.year(),
            month: day.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn contains(&self, day: DayKey) -> bool {
        day.year() == self.year && day.month() == self.month
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_day_key_parse_and_display() {
        let key = DayKey::parse("2024-03-01").unwrap();
        assert_eq!(key.year(), 2024);
        assert_eq!(key.month(), 3);
        assert_eq!(key.to_string(), "2024-03-01");
    }

    #[test]
    fn test_day_key_drops_time_component() {
        let key = DayKey::parse("2024-03-01T23:59:59.000Z").unwrap();
        assert_eq!(key, DayKey::from_ymd(2024, 3, 1).unwrap());
    }

    #[test]
    fn test_day_key_accepts_only_real_times_after_t() {
        for ok in [
            "2024-03-01T08:00",
            "2024-03-01T08:00:00",
            "2024-03-01T08:00:00.123",
            "2024-03-01T08:00:00+02:00",
        ] {
            assert_eq!(DayKey::parse(ok).unwrap().to_string(), "2024-03-01", "{ok}");
        }
        for bad in ["2024-03-01Tgarbage", "2024-03-01T", "2024-03-01T25:00"] {
            assert_eq!(
                DayKey::parse(bad),
                Err(PaysheetError::InvalidDayKey(bad.to_string()))
            );
        }
    }

    #[test]
    fn test_duplicate_day_keys_are_merged() {
        #[derive(Deserialize)]
        struct Log {
            #[serde(deserialize_with = "deserialize_monthly_data")]
            days: MonthlyData,
        }

        let json = r#"{"days": {
            "2024-03-01": {"hours": "4.00"},
            "2024-03-01T00:00:00.000Z": {"hours": 2.5},
            "2024-03-02": {"hours": 1}
        }}"#;
        let log: Log = serde_json::from_str(json).unwrap();
        assert_eq!(log.days.len(), 2);
        assert_eq!(log.days[&DayKey::parse("2024-03-01").unwrap()].hours(), dec!(6.5));

        let json = r#"{"days": {
            "2024-03-01": {"hours": 20},
            "2024-03-01T09:00": {"hours": 10}
        }}"#;
        let log: Log = serde_json::from_str(json).unwrap();
        assert_eq!(log.days[&DayKey::parse("2024-03-01").unwrap()].hours(), dec!(20));
    }

    #[test]
    fn test_day_key_rejects_garbage() {
        assert_eq!(
            DayKey::parse("yesterday"),
            Err(PaysheetError::InvalidDayKey("yesterday".to_string()))
        );
        assert!(DayKey::parse("2024-02-30").is_err());
        assert!(DayKey::from_ymd(2024, 13, 1).is_err());
    }

    #[test]
    fn test_day_entry_rounds_and_rejects_negative() {
        assert_eq!(DayEntry::new(dec!(7.125)).unwrap().hours(), dec!(7.13));
        assert!(DayEntry::new(dec!(-1)).is_err());
        assert!(DayEntry::new(dec!(24.5)).is_err());
        assert_eq!(DayEntry::new(Decimal::ZERO).unwrap().hours(), Decimal::ZERO);
    }

    #[test]
    fn test_day_entry_loads_string_and_number_hours() {
        let from_str: DayEntry = serde_json::from_str(r#"{"hours":"4.00"}"#).unwrap();
        let from_num: DayEntry = serde_json::from_str(r#"{"hours":4}"#).unwrap();
        assert_eq!(from_str, from_num);
        assert!(serde_json::from_str::<DayEntry>(r#"{"hours":"-2"}"#).is_err());
    }

    #[test]
    fn test_monthly_data_keys_serialize_as_dates() {
        let mut data = MonthlyData::new();
        data.insert(DayKey::parse("2024-01-06").unwrap(), DayEntry::new(dec!(3)).unwrap());
        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(json, r#"{"2024-01-06":{"hours":"3"}}"#);
        let back: MonthlyData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, data);
    }

    #[test]
    fn test_year_month() {
        let march = YearMonth::new(2024, 3).unwrap();
        assert!(march.contains(DayKey::parse("2024-03-31").unwrap()));
        assert!(!march.contains(DayKey::parse("2023-03-31").unwrap()));
        assert_eq!(YearMonth::of(DayKey::parse("2024-03-09").unwrap()), march);
        assert_eq!(march.to_string(), "2024-03");
        assert_eq!(YearMonth::new(2024, 0), Err(PaysheetError::InvalidMonth(0)));
    }
}
