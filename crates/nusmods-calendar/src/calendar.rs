//! Academic calendar index.
//!
//! Weekdays use a Sunday-first numbering:
//!
//! ```text
//! Sunday=1  Monday=2  Tuesday=3  Wednesday=4  Thursday=5  Friday=6  Saturday=7
//! ```
//!
//! Week 1 is anchored on its Monday, so the day offset of a slot is
//! `(week - 1) * 7 + (weekday - 2)`. A Sunday slot therefore falls on the day
//! *before* that week's Monday. The numbering and the offset formula must
//! change together or not at all.

use crate::window::SemesterWindow;
use chrono::{Duration, NaiveDateTime};
use nusmods_models::Semester;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const SUNDAY: u32 = 1;
pub const MONDAY: u32 = 2;

/// Semester windows of one academic year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcademicCalendar {
    pub sem1: SemesterWindow,
    pub sem2: SemesterWindow,
    #[serde(default)]
    pub st1: Option<SemesterWindow>,
    #[serde(default)]
    pub st2: Option<SemesterWindow>,
}

impl AcademicCalendar {
    pub fn new(sem1: SemesterWindow, sem2: SemesterWindow) -> Self {
        Self {
            sem1,
            sem2,
            st1: None,
            st2: None,
        }
    }

    pub fn with_special_terms(
        mut self,
        st1: Option<SemesterWindow>,
        st2: Option<SemesterWindow>,
    ) -> Self {
        self.st1 = st1;
        self.st2 = st2;
        self
    }

    /// Window for a semester. Special terms without their own window use the
    /// matching main semester's.
    pub fn window_for(&self, semester: Semester) -> &SemesterWindow {
        match semester {
            Semester::Sem1 => &self.sem1,
            Semester::Sem2 => &self.sem2,
            Semester::SpecialTerm1 => self.st1.as_ref().unwrap_or(&self.sem1),
            Semester::SpecialTerm2 => self.st2.as_ref().unwrap_or(&self.sem2),
        }
    }

    /// Timestamp of a weekly slot in a given teaching week.
    ///
    /// Returns `None` when no session takes place: the week is a recess or
    /// reading week, the week is before week 1, the day is a holiday, or the
    /// hour/minute do not form a valid time of day.
    pub fn resolve(
        &self,
        week: i32,
        weekday: u32,
        hour: u32,
        minute: u32,
        semester: Semester,
    ) -> Option<NaiveDateTime> {
        let window = self.window_for(semester);

        if window.is_blackout_week(week) || week < 1 {
            return None;
        }

        let day_offset = i64::from(week - 1) * 7 + (i64::from(weekday) - i64::from(MONDAY));
        let date = window
            .week1_start
            .checked_add_signed(Duration::days(day_offset))?;
        let at = date.and_hms_opt(hour, minute, 0)?;

        if window.is_holiday(at.date()) {
            return None;
        }

        Some(at)
    }

    /// Weekday number for a day name; see [`weekday_index`].
    pub fn weekday_index(&self, day: &str) -> u32 {
        weekday_index(day)
    }
}

/// Map a weekday name to the Sunday-first numbering, ignoring case.
///
/// Unrecognised names map to Monday. Upstream data has never been observed
/// to carry other values, so this is logged rather than rejected.
pub fn weekday_index(day: &str) -> u32 {
    match day.to_lowercase().as_str() {
        "sunday" => SUNDAY,
        "monday" => MONDAY,
        "tuesday" => 3,
        "wednesday" => 4,
        "thursday" => 5,
        "friday" => 6,
        "saturday" => 7,
        _ => {
            warn!(day = %day, "Unrecognised weekday name, defaulting to Monday");
            MONDAY
        }
    }
}
