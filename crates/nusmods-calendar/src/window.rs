//! Semester windows.
//!
//! A window anchors week 1 of a semester to a calendar date and lists the
//! weeks and days on which no lessons run.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Date anchor and exclusion rules for one teaching period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSemesterWindow", rename_all = "camelCase")]
pub struct SemesterWindow {
    /// Monday of week 1
    pub week1_start: NaiveDate,
    /// Recess week index (e.g. 7)
    pub recess_week: Option<i32>,
    /// Reading week index (e.g. 14)
    pub reading_week: Option<i32>,
    holiday_dates: BTreeSet<NaiveDate>,
}

impl SemesterWindow {
    pub fn new(week1_start: NaiveDate, recess_week: Option<i32>, reading_week: Option<i32>) -> Self {
        Self {
            week1_start,
            recess_week,
            reading_week,
            holiday_dates: BTreeSet::new(),
        }
    }

    /// Add public holidays. Only the calendar day of each entry is kept, so a
    /// holiday given as a timestamp excludes the whole day.
    pub fn with_holidays<I, D>(mut self, holidays: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Datelike,
    {
        self.holiday_dates.extend(holidays.into_iter().filter_map(|d| start_of_day(&d)));
        self
    }

    /// Whether `week` is the recess or reading week.
    pub fn is_blackout_week(&self, week: i32) -> bool {
        self.recess_week == Some(week) || self.reading_week == Some(week)
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holiday_dates.contains(&date)
    }

    pub fn holiday_dates(&self) -> impl Iterator<Item = &NaiveDate> {
        self.holiday_dates.iter()
    }
}

fn start_of_day<D: Datelike>(d: &D) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(d.year(), d.month(), d.day())
}

/// Holiday entries in a calendar file may be plain dates or timestamps.
#[derive(Deserialize)]
#[serde(untagged)]
enum HolidayEntry {
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl HolidayEntry {
    fn date(&self) -> NaiveDate {
        match self {
            HolidayEntry::Date(d) => *d,
            HolidayEntry::DateTime(dt) => dt.date(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSemesterWindow {
    week1_start: NaiveDate,
    #[serde(default)]
    recess_week: Option<i32>,
    #[serde(default)]
    reading_week: Option<i32>,
    #[serde(default)]
    holiday_dates: Vec<HolidayEntry>,
}

impl From<RawSemesterWindow> for SemesterWindow {
    fn from(raw: RawSemesterWindow) -> Self {
        SemesterWindow::new(raw.week1_start, raw.recess_week, raw.reading_week)
            .with_holidays(raw.holiday_dates.iter().map(HolidayEntry::date))
    }
}
