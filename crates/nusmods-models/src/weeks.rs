//! Week specifications.
//!
//! A lesson's `weeks` field arrives in one of two shapes:
//!
//! ```text
//! [1, 2, 3, 5]                                        explicit list
//! [{"start": 1, "end": 13, "weekInterval": 2}, ...]   range objects
//! ```
//!
//! Both decode into [`Weeks`], and [`Weeks::flatten`] turns either into the
//! ascending, duplicate-free list of week numbers the lesson runs in.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Highest week a range object can produce.
///
/// Range progressions are cut to `1..=MAX_WEEK`; explicit lists and override
/// lists are taken as given.
pub const MAX_WEEK: i32 = 53;

/// A week specification that matched neither supported shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unsupported weeks format: {0}")]
pub struct FormatError(pub String);

/// Which weeks of a semester a lesson recurs in.
///
/// Decoding tries the explicit list first, then the range-object list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    untagged,
    expecting = "a list of week numbers or a list of week range objects"
)]
pub enum Weeks {
    /// Explicit week numbers, possibly unsorted and repeated.
    Ints(Vec<i32>),
    /// Range objects, each contributing a progression or an override list.
    Objects(Vec<WeekRange>),
}

/// One range object inside [`Weeks::Objects`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekRange {
    pub start: i32,
    pub end: i32,
    /// Step between weeks; `None` means every week.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_interval: Option<i32>,
    /// Explicit override. When present, `start`/`end`/`week_interval` are ignored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weeks: Option<Vec<i32>>,
}

impl WeekRange {
    /// Every week from `start` to `end` inclusive.
    pub fn new(start: i32, end: i32) -> Self {
        Self {
            start,
            end,
            week_interval: None,
            weeks: None,
        }
    }

    /// Every `interval`-th week from `start` to `end` inclusive.
    pub fn stepped(start: i32, end: i32, interval: i32) -> Self {
        Self {
            week_interval: Some(interval),
            ..Self::new(start, end)
        }
    }

    /// A range whose override list replaces the start/end progression.
    pub fn with_override(start: i32, end: i32, weeks: Vec<i32>) -> Self {
        Self {
            weeks: Some(weeks),
            ..Self::new(start, end)
        }
    }

    fn collect_into(&self, out: &mut BTreeSet<i32>) {
        if let Some(weeks) = &self.weeks {
            out.extend(weeks.iter().copied());
            return;
        }

        // Intervals below 1 are not meaningful upstream; treat them as weekly.
        let step = i64::from(self.week_interval.unwrap_or(1).max(1));
        let start = i64::from(self.start);
        let end = i64::from(self.end.min(MAX_WEEK));

        // First week of the progression that is at least 1
        let first = if start < 1 {
            start + (1 - start + step - 1) / step * step
        } else {
            start
        };

        let mut week = first;
        while week <= end {
            out.insert(week as i32);
            week += step;
        }
    }
}

impl Weeks {
    /// Decode a week specification from an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] if the value is neither a list of integers nor
    /// a list of range objects.
    pub fn from_value(value: &serde_json::Value) -> Result<Self, FormatError> {
        Weeks::deserialize(value).map_err(|e| FormatError(e.to_string()))
    }

    /// Resolve into ascending, distinct week numbers.
    pub fn flatten(&self) -> Vec<i32> {
        let mut out = BTreeSet::new();
        match self {
            Weeks::Ints(weeks) => out.extend(weeks.iter().copied()),
            Weeks::Objects(ranges) => {
                for range in ranges {
                    range.collect_into(&mut out);
                }
            }
        }
        out.into_iter().collect()
    }
}
