//! Coordinate format validation
//!
//! Latitude and longitude values may carry an optional sign and any number of
//! decimal places, but cannot start with a decimal point, and a decimal point
//! must be followed by at least one digit.

use regex::Regex;
use std::sync::LazyLock;

/// Whole-number part is 0-89, or exactly 90 with an all-zero fraction.
pub const DEFAULT_LATITUDE_REGEX: &str = r"[+-]?((([0-8]?[0-9])(\.[0-9]+)?)|90(\.0+)?)";

/// Whole-number part is 0-179, or exactly 180 with an all-zero fraction.
pub const DEFAULT_LONGITUDE_REGEX: &str =
    r"[+-]?((((1?[0-7]?|[0-9]?)[0-9])(\.[0-9]+)?)|180(\.0+)?)";

static LATITUDE_RE: LazyLock<Regex> = LazyLock::new(|| full_match(DEFAULT_LATITUDE_REGEX));
static LONGITUDE_RE: LazyLock<Regex> = LazyLock::new(|| full_match(DEFAULT_LONGITUDE_REGEX));

fn full_match(pattern: &str) -> Regex {
    Regex::new(&format!("^(?:{})$", pattern)).expect("coordinate pattern is a valid regex")
}

/// Validates a latitude value against [`DEFAULT_LATITUDE_REGEX`]
pub fn is_valid_latitude(latitude: &str) -> bool {
    LATITUDE_RE.is_match(latitude)
}

/// Validates a longitude value against [`DEFAULT_LONGITUDE_REGEX`]
pub fn is_valid_longitude(longitude: &str) -> bool {
    LONGITUDE_RE.is_match(longitude)
}

/// True for `None`, empty and whitespace-only values.
///
/// Whitespace follows the registration host's notion of blank, which differs
/// from `char::is_whitespace`: no-break spaces are content, while the
/// information separators U+001C..U+001F are whitespace.
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.chars().all(is_form_whitespace))
}

fn is_form_whitespace(c: char) -> bool {
    match c {
        '\u{09}'..='\u{0D}' | '\u{1C}'..='\u{1F}' => true,
        // space separators, excluding the no-break ones
        ' ' | '\u{1680}' | '\u{2000}'..='\u{2006}' | '\u{2008}'..='\u{200A}' => true,
        '\u{205F}' | '\u{3000}' => true,
        // line and paragraph separators
        '\u{2028}' | '\u{2029}' => true,
        _ => false,
    }
}
