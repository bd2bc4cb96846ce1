//! Catalog records.
//!
//! These mirror the remote service's JSON bodies field for field; unknown
//! fields are ignored.

use serde::{Deserialize, Serialize};

/// Entry of the academic year's module list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleListItem {
    pub module_code: String,
    pub title: String,
}

/// Descriptive information for one module.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleInfo {
    pub module_code: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Credit count as published (a string upstream, e.g. "4")
    #[serde(default)]
    pub module_credit: Option<String>,
    /// Semester numbers the module is offered in
    #[serde(default)]
    pub semesters: Option<Vec<i32>>,
}

impl ModuleInfo {
    /// Whether the module is offered in the given semester number.
    ///
    /// Returns `false` when the catalog does not list semesters.
    pub fn is_offered_in(&self, semester: u8) -> bool {
        self.semesters
            .as_ref()
            .is_some_and(|s| s.contains(&i32::from(semester)))
    }
}

/// Per-semester exam data of a module.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SemesterData {
    pub semester: i32,
    /// ISO-8601 exam start, if an exam is scheduled
    #[serde(default)]
    pub exam_date: Option<String>,
    /// Exam duration in minutes
    #[serde(default)]
    pub exam_duration: Option<i32>,
}
