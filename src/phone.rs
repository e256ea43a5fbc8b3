//! Loose-input phone normalization and E.164 validation.
//!
//! The formatter is lenient and total; validation is a separate predicate so
//! callers decide whether to reject. [`format_e164`] carries real rules only
//! for [`DefaultCountry::Us`]; every other case falls through to a bare `+`
//! prefix.

use once_cell::sync::Lazy;
use regex::Regex;

// ITU E.164: `+`, a non-zero leading digit, at most 15 digits total.
static E164_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[1-9]\d{1,14}$").expect("E.164 pattern compiles"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
/// Country assumed for inputs without an explicit `+` prefix.
pub enum DefaultCountry {
    /// North American numbering plan: bare 10-digit numbers get `+1`.
    #[default]
    Us,
    /// No country rules; normalization falls through to the `+` fallback.
    Other,
}

/// Normalize a loosely formatted phone number into E.164, best effort.
///
/// Inputs that already carry a `+` are passed through with their formatting
/// stripped and no further validation. Use [`is_valid_e164`] to decide
/// whether the result is acceptable.
pub fn format_e164(input: &str, default_country: DefaultCountry) -> String {
    let trimmed = input.trim();
    let digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();

    // Already prefixed: assumed E.164.
    if trimmed.starts_with('+') {
        return format!("+{digits}");
    }

    let digits = digits.trim_start_matches('0');
    if default_country == DefaultCountry::Us {
        if digits.len() == 10 {
            return format!("+1{digits}");
        }
        if digits.len() == 11 && digits.starts_with('1') {
            return format!("+{digits}");
        }
    }
    format!("+{digits}")
}

/// Whether `phone` is a well-formed E.164 number.
pub fn is_valid_e164(phone: &str) -> bool {
    E164_RE.is_match(phone)
}

/// Human-readable rendering of a phone number.
///
/// Display-only and lossy; the result is never round-tripped back through
/// [`format_e164`]. Numbers that are not 10 digits (or 11 starting with `1`)
/// are returned unchanged.
pub fn format_display(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.len() == 11 && digits.starts_with('1') {
        format!("+1 ({}) {}-{}", &digits[1..4], &digits[4..7], &digits[7..])
    } else if digits.len() == 10 {
        format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else {
        phone.to_owned()
    }
}
