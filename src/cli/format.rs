//! Plain-text rendering of command output.

use nusmods_models::{DatedSession, Lesson, ModuleListItem};
use std::fmt::Write;

/// One `CODE  Title` line per module, optionally filtered case-insensitively.
pub fn module_list(modules: &[ModuleListItem], filter: Option<&str>) -> String {
    let needle = filter.map(str::to_lowercase);
    let mut out = String::new();

    for module in modules {
        if let Some(needle) = &needle
            && !module.module_code.to_lowercase().contains(needle)
            && !module.title.to_lowercase().contains(needle)
        {
            continue;
        }
        let _ = writeln!(out, "{:<10} {}", module.module_code, module.title);
    }

    out
}

/// Weekly lessons with their flattened weeks.
pub fn lessons(lessons: &[Lesson]) -> String {
    let mut out = String::new();

    for lesson in lessons {
        let weeks = lesson
            .weeks
            .flatten()
            .iter()
            .map(i32::to_string)
            .collect::<Vec<_>>()
            .join(",");

        let _ = writeln!(
            out,
            "{:<12} {:<4} {:<9} {}-{} {:<10} weeks {}",
            lesson.lesson_type,
            lesson.class_no,
            lesson.day,
            lesson.start_time,
            lesson.end_time,
            lesson.venue.as_deref().unwrap_or("-"),
            weeks
        );
    }

    out
}

/// Dated sessions, one per line, in the order given.
pub fn sessions(sessions: &[DatedSession]) -> String {
    let mut out = String::new();

    for session in sessions {
        let _ = writeln!(
            out,
            "{} {}-{}  {} {} [{}] @ {}",
            session.start.format("%Y-%m-%d %a"),
            session.start.format("%H:%M"),
            session.end.format("%H:%M"),
            session.module_code,
            session.kind,
            session.class_no,
            session.location.as_deref().unwrap_or("-")
        );
    }

    out
}
