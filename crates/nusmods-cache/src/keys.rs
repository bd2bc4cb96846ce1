//! Cache key generation.
//!
//! Keys are flat, dash-separated names scoped by academic year. Module codes
//! are upper-cased so `cs1010` and `CS1010` share an entry. Namespacing is the
//! store's job and is not part of the key.

/// Builds a cache key from its parts.
fn build_key(parts: &[&str]) -> String {
    parts.join("-")
}

/// Key for the module list of an academic year.
pub fn module_list(academic_year: &str) -> String {
    build_key(&["list", academic_year])
}

/// Key for a module's descriptive info.
pub fn module_info(academic_year: &str, module_code: &str) -> String {
    build_key(&["info", academic_year, &module_code.to_uppercase()])
}

/// Key for a module's lessons in one semester.
pub fn timetable(academic_year: &str, semester: u8, module_code: &str) -> String {
    build_key(&[
        "tt",
        academic_year,
        &format!("S{semester}"),
        &module_code.to_uppercase(),
    ])
}

/// Key for a module's exam data in one semester.
pub fn semester_data(academic_year: &str, semester: u8, module_code: &str) -> String {
    build_key(&[
        "sd",
        academic_year,
        &format!("S{semester}"),
        &module_code.to_uppercase(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_generation() {
        assert_eq!(module_list("2025-2026"), "list-2025-2026");
        assert_eq!(module_info("2025-2026", "cs1010"), "info-2025-2026-CS1010");
        assert_eq!(timetable("2025-2026", 1, "CS2030s"), "tt-2025-2026-S1-CS2030S");
        assert_eq!(semester_data("2025-2026", 4, "ma1521"), "sd-2025-2026-S4-MA1521");
    }

    #[test]
    fn test_keys_are_case_insensitive_in_module_code() {
        assert_eq!(timetable("2025-2026", 2, "ge1000"), timetable("2025-2026", 2, "GE1000"));
    }
}
