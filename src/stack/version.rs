//! Major-version extraction from npm version specifiers

/// Returns the leading major component of a version specifier.
///
/// Every character other than an ASCII digit or `.` is stripped before the
/// first dot-separated segment is parsed. Absent, empty, non-numeric and
/// overflowing input all yield `0`, so "no version" and "version 0" are
/// indistinguishable.
pub fn parse_major(version: Option<&str>) -> u32 {
    let Some(version) = version else {
        return 0;
    };

    let cleaned: String = version
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    cleaned
        .split('.')
        .next()
        .and_then(|segment| segment.parse::<u32>().ok())
        .unwrap_or(0)
}
