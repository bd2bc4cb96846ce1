//! Academic calendar files.
//!
//! The calendar is not served by the remote catalog, so it is supplied as a
//! JSON file:
//!
//! ```json
//! {
//!   "sem1": { "week1Start": "2025-08-11", "recessWeek": 7, "readingWeek": 14,
//!             "holidayDates": ["2025-08-09", "2025-10-20"] },
//!   "sem2": { "week1Start": "2026-01-12", "recessWeek": 7, "readingWeek": 14 },
//!   "st1":  { "week1Start": "2026-05-11" }
//! }
//! ```

use crate::ConfigError;
use nusmods_calendar::AcademicCalendar;
use std::path::Path;

/// Read an academic calendar from a JSON file.
pub fn load_calendar(path: impl AsRef<Path>) -> Result<AcademicCalendar, ConfigError> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: display.clone(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| ConfigError::Calendar {
        path: display,
        source,
    })
}
