//! Screenplay page-length arithmetic in eighths of a page.
//!
//! Script breakdowns express scene length as `"W E/8"` (e.g. `"1 4/8"` for a
//! page and a half). The database stores both the display string and the
//! derived float; this module is the single place the two are reconciled so
//! they can never diverge.

use crate::error::CoreError;

/// Number of eighths in a full page.
pub const EIGHTHS_PER_PAGE: u32 = 8;

/// Parse an eighths string into a fractional page count.
///
/// Accepted forms (whitespace-trimmed):
/// - `"W E/8"` -- whole pages plus eighths, e.g. `"1 4/8"` -> `1.5`
/// - `"W"`     -- whole pages only, e.g. `"3"` -> `3.0`
/// - `"E/8"`   -- eighths only, e.g. `"1/8"` -> `0.125`
///
/// The numerator must be in `0..=7` and the denominator must be exactly 8.
pub fn parse(input: &str) -> Result<f64, CoreError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(
            "page length must not be empty".to_string(),
        ));
    }

    let (whole_part, fraction_part) = match trimmed.split_once(char::is_whitespace) {
        Some((w, f)) => (Some(w), Some(f.trim_start())),
        None if trimmed.contains('/') => (None, Some(trimmed)),
        None => (Some(trimmed), None),
    };

    let whole: u32 = match whole_part {
        Some(w) => w.parse().map_err(|_| {
            CoreError::Validation(format!("invalid whole-page count '{w}' in '{input}'"))
        })?,
        None => 0,
    };

    let eighths: u32 = match fraction_part {
        Some(f) => parse_fraction(f, input)?,
        None => 0,
    };

    Ok(f64::from(whole) + f64::from(eighths) / f64::from(EIGHTHS_PER_PAGE))
}

fn parse_fraction(fraction: &str, original: &str) -> Result<u32, CoreError> {
    let (num, den) = fraction.split_once('/').ok_or_else(|| {
        CoreError::Validation(format!("invalid fraction '{fraction}' in '{original}'"))
    })?;
    let num: u32 = num.trim().parse().map_err(|_| {
        CoreError::Validation(format!("invalid numerator '{num}' in '{original}'"))
    })?;
    let den: u32 = den.trim().parse().map_err(|_| {
        CoreError::Validation(format!("invalid denominator '{den}' in '{original}'"))
    })?;
    if den != EIGHTHS_PER_PAGE {
        return Err(CoreError::Validation(format!(
            "page fractions must be in eighths, got denominator {den} in '{original}'"
        )));
    }
    if num > 7 {
        return Err(CoreError::Validation(format!(
            "eighths numerator must be 0..=7, got {num} in '{original}'"
        )));
    }
    Ok(num)
}

/// Format a fractional page count as an eighths string.
///
/// Rounds to the nearest eighth. `0.0` formats as `"0"`, whole pages omit
/// the fraction, and sub-page lengths omit the whole part.
pub fn format(pages: f64) -> String {
    let total_eighths = (pages * f64::from(EIGHTHS_PER_PAGE)).round().max(0.0) as u64;
    let whole = total_eighths / u64::from(EIGHTHS_PER_PAGE);
    let eighths = total_eighths % u64::from(EIGHTHS_PER_PAGE);

    match (whole, eighths) {
        (_, 0) => whole.to_string(),
        (0, e) => format!("{e}/8"),
        (w, e) => format!("{w} {e}/8"),
    }
}
