//! Dated sessions.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One concrete, timestamped occurrence of a lesson.
///
/// Equality and hashing cover every field, so two sessions are the same
/// session only if module, kind, class, times and location all match.
/// Timestamps are local wall-clock times of the academic calendar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatedSession {
    pub module_code: String,
    /// Lesson type (e.g. "Lecture")
    pub kind: String,
    pub class_no: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub location: Option<String>,
}

impl DatedSession {
    /// Display key for UI lists. Not used for equality.
    pub fn id(&self) -> String {
        format!(
            "{}-{}-{}-{}",
            self.module_code,
            self.kind,
            self.class_no,
            self.start.and_utc().timestamp()
        )
    }

    pub fn duration(&self) -> chrono::Duration {
        self.end - self.start
    }
}
