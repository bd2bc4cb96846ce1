//! Lesson-to-session expansion.

use crate::calendar::AcademicCalendar;
use nusmods_models::{DatedSession, Lesson, Semester};
use std::collections::HashSet;
use tracing::debug;

/// Expand weekly lesson templates into dated sessions.
///
/// Every lesson is paired with each of its flattened weeks. An occurrence is
/// kept only when both its start and its end resolve on the calendar, so
/// recess weeks, reading weeks and holidays drop out silently. The result is
/// free of duplicates and sorted by start time. Sessions that start at the
/// same instant come out in no particular order.
pub fn expand_lessons(
    module_code: &str,
    semester: Semester,
    lessons: &[Lesson],
    calendar: &AcademicCalendar,
) -> Vec<DatedSession> {
    let module_code = module_code.to_uppercase();
    let mut seen = HashSet::new();
    let mut skipped = 0usize;

    for lesson in lessons {
        let weekday = calendar.weekday_index(&lesson.day);
        let (start_hour, start_minute) = lesson.start_hm();
        let (end_hour, end_minute) = lesson.end_hm();

        for week in lesson.weeks.flatten() {
            let start = calendar.resolve(week, weekday, start_hour, start_minute, semester);
            let end = calendar.resolve(week, weekday, end_hour, end_minute, semester);

            let (Some(start), Some(end)) = (start, end) else {
                skipped += 1;
                continue;
            };

            seen.insert(DatedSession {
                module_code: module_code.clone(),
                kind: lesson.lesson_type.clone(),
                class_no: lesson.class_no.clone(),
                start,
                end,
                location: lesson.venue.clone(),
            });
        }
    }

    let mut sessions: Vec<DatedSession> = seen.into_iter().collect();
    sessions.sort_by(|a, b| a.start.cmp(&b.start));

    debug!(
        module_code = %module_code,
        semester = %semester,
        lessons = lessons.len(),
        sessions = sessions.len(),
        skipped,
        "Expanded lessons"
    );

    sessions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::window::SemesterWindow;
    use chrono::{NaiveDate, NaiveDateTime};
    use nusmods_models::{WeekRange, Weeks};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, 0).unwrap()
    }

    fn calendar() -> AcademicCalendar {
        let window = SemesterWindow::new(date(2025, 1, 6), Some(7), None);
        AcademicCalendar::new(window.clone(), window)
    }

    fn lesson(day: &str, start: &str, end: &str, weeks: Weeks) -> Lesson {
        Lesson {
            class_no: "1".to_string(),
            day: day.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            lesson_type: "Lecture".to_string(),
            venue: Some("LT27".to_string()),
            weeks,
        }
    }

    #[test]
    fn test_recess_week_is_dropped() {
        let lessons = [lesson("Tuesday", "0800", "0900", Weeks::Ints(vec![1, 2, 7, 8]))];
        let sessions = expand_lessons("cs1010", Semester::Sem1, &lessons, &calendar());

        let starts: Vec<_> = sessions.iter().map(|s| s.start).collect();
        assert_eq!(
            starts,
            vec![
                at(2025, 1, 7, 8, 0),
                at(2025, 1, 14, 8, 0),
                at(2025, 2, 25, 8, 0),
            ]
        );
        assert!(sessions.iter().all(|s| s.end - s.start == chrono::Duration::hours(1)));
    }

    #[test]
    fn test_fields_are_carried_over() {
        let lessons = [lesson("Monday", "1000", "1200", Weeks::Ints(vec![1]))];
        let sessions = expand_lessons("cs2030s", Semester::Sem1, &lessons, &calendar());

        assert_eq!(
            sessions,
            vec![DatedSession {
                module_code: "CS2030S".to_string(),
                kind: "Lecture".to_string(),
                class_no: "1".to_string(),
                start: at(2025, 1, 6, 10, 0),
                end: at(2025, 1, 6, 12, 0),
                location: Some("LT27".to_string()),
            }]
        );
    }

    #[test]
    fn test_duplicate_weeks_yield_one_session_each() {
        let lessons = [lesson("Wednesday", "0900", "1000", Weeks::Ints(vec![3, 3, 4]))];
        let sessions = expand_lessons("MA1521", Semester::Sem1, &lessons, &calendar());
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[0].start, at(2025, 1, 22, 9, 0));
        assert_eq!(sessions[1].start, at(2025, 1, 29, 9, 0));
    }

    #[test]
    fn test_identical_lessons_are_deduplicated() {
        let a = lesson("Friday", "1400", "1600", Weeks::Objects(vec![WeekRange::new(1, 3)]));
        let b = lesson("friday", "1400", "1600", Weeks::Ints(vec![2, 3, 4]));
        let sessions = expand_lessons("GEA1000", Semester::Sem1, &[a, b], &calendar());
        assert_eq!(sessions.len(), 4);
    }

    #[test]
    fn test_holiday_end_drops_the_occurrence() {
        let window = SemesterWindow::new(date(2025, 1, 6), None, None)
            .with_holidays([date(2025, 1, 14)]);
        let cal = AcademicCalendar::new(window.clone(), window);

        let lessons = [lesson("Tuesday", "0800", "0900", Weeks::Ints(vec![1, 2, 3]))];
        let sessions = expand_lessons("CS1010", Semester::Sem2, &lessons, &cal);

        let dates: Vec<_> = sessions.iter().map(|s| s.start.date()).collect();
        assert_eq!(dates, vec![date(2025, 1, 7), date(2025, 1, 21)]);
    }

    #[test]
    fn test_unresolvable_end_time_drops_the_occurrence() {
        let lessons = [lesson("Monday", "2300", "2460", Weeks::Ints(vec![1, 2]))];
        let sessions = expand_lessons("CS1010", Semester::Sem1, &lessons, &calendar());
        assert!(sessions.is_empty());
    }

    #[test]
    fn test_malformed_times_default_to_zero() {
        let lessons = [lesson("Monday", "xx", "01yy", Weeks::Ints(vec![1]))];
        let sessions = expand_lessons("CS1010", Semester::Sem1, &lessons, &calendar());
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].start, at(2025, 1, 6, 0, 0));
        assert_eq!(sessions[0].end, at(2025, 1, 6, 1, 0));
    }

    #[test]
    fn test_unknown_day_is_treated_as_monday() {
        let lessons = [lesson("Funday", "0800", "0900", Weeks::Ints(vec![2]))];
        let sessions = expand_lessons("CS1010", Semester::Sem1, &lessons, &calendar());
        assert_eq!(sessions[0].start, at(2025, 1, 13, 8, 0));
    }

    #[test]
    fn test_output_is_sorted_by_start() {
        let lessons = [
            lesson("Friday", "1000", "1100", Weeks::Ints(vec![1, 2, 3])),
            lesson("Monday", "0800", "0900", Weeks::Ints(vec![3, 1, 2])),
            lesson("Wednesday", "1200", "1300", Weeks::Objects(vec![WeekRange::stepped(1, 9, 4)])),
        ];
        let sessions = expand_lessons("CS1010", Semester::Sem1, &lessons, &calendar());

        assert_eq!(sessions.len(), 9);
        assert!(sessions.windows(2).all(|w| w[0].start <= w[1].start));
    }
}
