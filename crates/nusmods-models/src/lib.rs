//! # NUSMods Models
//!
//! Data structures shared by the NUSMods sync client.
//!
//! This crate holds the records decoded from the remote catalog service and the
//! dated sessions produced from them:
//!
//! - [`semester`]: The four teaching periods of an academic year
//! - [`weeks`]: Polymorphic week specifications and their flattening
//! - [`lesson`]: Weekly lesson templates and "HHmm" time parsing
//! - [`module`]: Module list entries, module info and exam data
//! - [`session`]: Concrete dated sessions
//!
//! # Example
//!
//! ```ignore
//! use nusmods_models::{Weeks, WeekRange};
//!
//! let weeks = Weeks::Objects(vec![WeekRange::stepped(1, 5, 2)]);
//! assert_eq!(weeks.flatten(), vec![1, 3, 5]);
//! ```

pub mod lesson;
pub mod module;
pub mod semester;
pub mod session;
pub mod weeks;

// Re-export commonly used types at crate root
pub use lesson::{Lesson, parse_hhmm};
pub use module::{ModuleInfo, ModuleListItem, SemesterData};
pub use semester::{ParseSemesterError, Semester};
pub use session::DatedSession;
pub use weeks::{FormatError, MAX_WEEK, WeekRange, Weeks};
