//! # NUSMods Calendar
//!
//! Turns weekly lesson templates into dated sessions.
//!
//! - [`window`]: The date anchor and exclusions of one semester
//! - [`calendar`]: The academic-year index resolving (week, weekday, time) to a timestamp
//! - [`expand`]: Cross-producing lessons with their weeks into sessions
//!
//! # Example
//!
//! ```ignore
//! use chrono::NaiveDate;
//! use nusmods_calendar::{AcademicCalendar, SemesterWindow, expand_lessons};
//! use nusmods_models::Semester;
//!
//! let sem1 = SemesterWindow::new(NaiveDate::from_ymd_opt(2025, 8, 11).unwrap(), Some(7), Some(14));
//! let sem2 = SemesterWindow::new(NaiveDate::from_ymd_opt(2026, 1, 12).unwrap(), Some(7), Some(14));
//! let calendar = AcademicCalendar::new(sem1, sem2);
//!
//! let sessions = expand_lessons("cs1010", Semester::Sem1, &lessons, &calendar);
//! ```

pub mod calendar;
pub mod expand;
pub mod window;

pub use calendar::{AcademicCalendar, weekday_index};
pub use expand::expand_lessons;
pub use window::SemesterWindow;
