//! Weekly lesson templates as published in a module's timetable.

use crate::weeks::Weeks;
use serde::{Deserialize, Serialize};

/// One recurring weekly slot of a module, before calendar expansion.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    /// Class number within the lesson type (e.g. "01")
    pub class_no: String,
    /// Weekday name (e.g. "Monday")
    pub day: String,
    /// Start time as "HHmm"
    pub start_time: String,
    /// End time as "HHmm"
    pub end_time: String,
    /// Lesson type (e.g. "Lecture", "Tutorial")
    pub lesson_type: String,
    /// Venue code, if assigned
    #[serde(default)]
    pub venue: Option<String>,
    pub weeks: Weeks,
}

impl Lesson {
    /// Start time as `(hour, minute)`.
    pub fn start_hm(&self) -> (u32, u32) {
        parse_hhmm(&self.start_time)
    }

    /// End time as `(hour, minute)`.
    pub fn end_hm(&self) -> (u32, u32) {
        parse_hhmm(&self.end_time)
    }
}

/// Split an "HHmm" string into hour and minute.
///
/// The hour is read from the first two characters and the minute from the
/// last two. Either part that does not parse as a number becomes `0`; this
/// never fails.
pub fn parse_hhmm(value: &str) -> (u32, u32) {
    let chars: Vec<char> = value.chars().collect();
    let head: String = chars.iter().take(2).collect();
    let tail: String = chars[chars.len().saturating_sub(2)..].iter().collect();

    (head.parse().unwrap_or(0), tail.parse().unwrap_or(0))
}
