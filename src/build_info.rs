use chrono::{DateTime, Datelike};

/// RFC 3339 timestamp stamped by `build.rs`.
pub const BUILD_TIME: &str = env!("BUILD_TIME");

pub fn build_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(BUILD_TIME)
        .ok()
        .map(|t| t.year())
}

/// Footer tag, e.g. `SYSTEM.VER.0.1.0 // BUILD 2026-10-19`.
pub fn version_tag() -> String {
    let date = DateTime::parse_from_rfc3339(BUILD_TIME)
        .map(|t| t.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| "UNKNOWN".to_string());
    format!("SYSTEM.VER.{} // BUILD {}", env!("CARGO_PKG_VERSION"), date)
}

/// Footer notice, e.g. `© 2026 ADA KOVAC. ALL RIGHTS RESERVED.`. Words of
/// `name` are joined by single spaces; a missing year is left out.
pub fn copyright_line(year: Option<i32>, name: &str) -> String {
    let mut parts = vec!["©".to_string()];
    parts.extend(year.map(|y| y.to_string()));
    parts.extend(name.split_whitespace().map(str::to_uppercase));
    format!("{}. ALL RIGHTS RESERVED.", parts.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_time_is_stamped() {
        let year = build_year().expect("build.rs should stamp an RFC 3339 time");
        assert!(year >= 2024);
    }

    #[test]
    fn test_copyright_line() {
        assert_eq!(
            copyright_line(Some(2026), "Ada Kovac"),
            "© 2026 ADA KOVAC. ALL RIGHTS RESERVED."
        );
        // single-word name, no trailing gap before the full stop
        assert_eq!(
            copyright_line(Some(2026), "Prince"),
            "© 2026 PRINCE. ALL RIGHTS RESERVED."
        );
        assert_eq!(
            copyright_line(None, "  Jo   Doe "),
            "© JO DOE. ALL RIGHTS RESERVED."
        );
    }

    #[test]
    fn test_version_tag() {
        let tag = version_tag();
        assert!(tag.starts_with(&format!("SYSTEM.VER.{}", env!("CARGO_PKG_VERSION"))));
        assert!(!tag.ends_with("UNKNOWN"));
    }
}
