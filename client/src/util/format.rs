//! Number, currency and year formatting for listing and prediction output.
//!
//! The upstream mixes Persian (`۰-۹`) and Arabic-Indic (`٠-٩`) digits into
//! otherwise numeric fields, so everything numeric passes through
//! [`normalize_digits`] before parsing.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::net::types::EngineStatus;

/// Replace Persian and Arabic-Indic digits with ASCII digits.
#[must_use]
pub fn normalize_digits(raw: &str) -> String {
    raw.chars()
        .map(|c| match c {
            '۰'..='۹' => ascii_digit(c as u32 - '۰' as u32),
            '٠'..='٩' => ascii_digit(c as u32 - '٠' as u32),
            other => other,
        })
        .collect()
}

fn ascii_digit(offset: u32) -> char {
    char::from_digit(offset, 10).unwrap_or('0')
}

/// Keep only the ASCII digits of `raw` after normalization.
#[must_use]
pub fn digits_only(raw: &str) -> String {
    normalize_digits(raw).chars().filter(char::is_ascii_digit).collect()
}

/// Rial to Toman, rounding halves up.
#[must_use]
pub fn rial_to_toman(rial: u64) -> u64 {
    rial.saturating_add(5) / 10
}

#[must_use]
pub fn toman_to_rial(toman: f64) -> f64 {
    toman * 10.0
}

/// Group an integer with `,` every three digits.
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Round an amount and group it for display. Non-finite values render as `0`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_owned();
    }
    let rounded = value.round();
    let grouped = group_thousands(rounded.abs() as u64);
    if rounded < 0.0 { format!("-{grouped}") } else { grouped }
}

/// Format a raw digit string with separators, e.g. for the budget input.
///
/// Works on the digits themselves, so input longer than any integer type
/// still echoes back grouped instead of vanishing.
#[must_use]
pub fn group_digit_string(raw: &str) -> String {
    let digits = digits_only(raw);
    let trimmed = digits.trim_start_matches('0');
    if trimmed.is_empty() {
        return if digits.is_empty() { String::new() } else { "0".to_owned() };
    }
    let mut out = String::with_capacity(trimmed.len() + trimmed.len() / 3);
    for (i, c) in trimmed.chars().enumerate() {
        if i > 0 && (trimmed.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// Show a model year on the Persian calendar.
///
/// Gregorian years (above 1900) are shifted by 621. Years already in the
/// Persian range come back with ASCII digits; anything else is echoed.
#[must_use]
pub fn display_year(raw: &str) -> String {
    let normalized = normalize_digits(raw.trim());
    match normalized.parse::<u32>() {
        Ok(year) if year > 1900 => (year - 621).to_string(),
        Ok(year) if year > 1300 && year < 1500 => year.to_string(),
        _ => raw.to_owned(),
    }
}

/// Mileage with ASCII digits and separators when numeric.
#[must_use]
pub fn display_mileage(raw: &str) -> String {
    let normalized = normalize_digits(raw.trim());
    match normalized.parse::<u64>() {
        Ok(value) => group_thousands(value),
        Err(_) => normalized,
    }
}

/// Human label for an engine-status wire value.
#[must_use]
pub fn engine_status_label(raw: Option<&str>) -> &'static str {
    raw.and_then(EngineStatus::from_wire).map_or("N/A", EngineStatus::label)
}
