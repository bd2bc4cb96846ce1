//! Semester identifiers.
//!
//! The remote service numbers the four teaching periods of an academic year
//! 1 through 4. The same number appears in resource paths and cache keys.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A teaching period within an academic year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Semester {
    /// Semester 1
    Sem1,
    /// Semester 2
    Sem2,
    /// Special Term 1
    SpecialTerm1,
    /// Special Term 2
    SpecialTerm2,
}

impl Semester {
    /// All semesters in wire order.
    pub const ALL: [Semester; 4] = [
        Semester::Sem1,
        Semester::Sem2,
        Semester::SpecialTerm1,
        Semester::SpecialTerm2,
    ];

    /// Wire number used in resource paths (`semesters/{n}/...`).
    #[inline]
    pub const fn number(self) -> u8 {
        match self {
            Semester::Sem1 => 1,
            Semester::Sem2 => 2,
            Semester::SpecialTerm1 => 3,
            Semester::SpecialTerm2 => 4,
        }
    }
}

/// Error returned when a semester number or name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown semester: {0}")]
pub struct ParseSemesterError(pub String);

impl TryFrom<u8> for Semester {
    type Error = ParseSemesterError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Semester::Sem1),
            2 => Ok(Semester::Sem2),
            3 => Ok(Semester::SpecialTerm1),
            4 => Ok(Semester::SpecialTerm2),
            other => Err(ParseSemesterError(other.to_string())),
        }
    }
}

impl From<Semester> for u8 {
    fn from(semester: Semester) -> Self {
        semester.number()
    }
}

impl FromStr for Semester {
    type Err = ParseSemesterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "sem1" | "s1" => Ok(Semester::Sem1),
            "2" | "sem2" | "s2" => Ok(Semester::Sem2),
            "3" | "st1" | "special-term-1" => Ok(Semester::SpecialTerm1),
            "4" | "st2" | "special-term-2" => Ok(Semester::SpecialTerm2),
            _ => Err(ParseSemesterError(s.to_string())),
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Semester::Sem1 => "Semester 1",
            Semester::Sem2 => "Semester 2",
            Semester::SpecialTerm1 => "Special Term 1",
            Semester::SpecialTerm2 => "Special Term 2",
        };
        f.write_str(name)
    }
}
