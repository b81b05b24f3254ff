//! Locale-fixed presentation formatters (es-PY, PYG).
//!
//! Every helper here is a pure function of its input so panels render the
//! same text for the same payload no matter where they run.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::NaiveDate;

/// Currency symbol used by the es-PY locale for guaraníes.
pub const CURRENCY_SYMBOL: &str = "Gs.";

/// Earliest year offered by the attendance year filter.
pub const FIRST_FILTER_YEAR: i32 = 2020;

/// Parse a typed guaraní amount. `.` is read as the thousands separator;
/// anything unparsable yields NaN.
pub fn parse_amount(raw: &str) -> f64 {
    let digits: String = raw.trim().chars().filter(|c| *c != '.' && !c.is_whitespace()).collect();
    digits.parse().unwrap_or(f64::NAN)
}

/// Spanish month names, January first.
pub const MONTH_NAMES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// Placeholder shown for missing values.
pub const MISSING: &str = "-";

/// Format an amount as guaraníes: no fraction digits, `.` as the
/// thousands separator and the symbol followed by a no-break space.
///
/// Non-finite values render as the placeholder.
pub fn format_currency(value: f64) -> String {
    if !value.is_finite() {
        return MISSING.to_owned();
    }
    let rounded = value.round();
    let digits = format!("{:.0}", rounded.abs());
    let grouped = group_thousands(&digits);
    if rounded < 0.0 {
        format!("-{CURRENCY_SYMBOL}\u{a0}{grouped}")
    } else {
        format!("{CURRENCY_SYMBOL}\u{a0}{grouped}")
    }
}

/// [`format_currency`] for amounts the server may omit.
pub fn format_optional_currency(value: Option<f64>) -> String {
    value.map_or_else(|| MISSING.to_owned(), format_currency)
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

/// Spanish name for a 1-based month number.
pub fn month_name(month: u8) -> Option<&'static str> {
    let idx = usize::from(month).checked_sub(1)?;
    MONTH_NAMES.get(idx).copied()
}

/// Years offered by the attendance filter, newest first.
pub fn year_options(current_year: i32) -> Vec<i32> {
    if current_year < FIRST_FILTER_YEAR {
        return vec![current_year];
    }
    (FIRST_FILTER_YEAR..=current_year).rev().collect()
}

/// `YYYY-MM` period key used by the overtime endpoints.
pub fn period_key(year: i32, month: u8) -> String {
    format!("{year:04}-{month:02}")
}

/// Convert an ISO `YYYY-MM-DD` date into `DD/MM/YYYY`.
///
/// Anything that is not an ISO date is returned unchanged; most endpoints
/// already send display-formatted dates.
pub fn format_iso_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => raw.to_owned(),
    }
}

/// Text or the placeholder when absent or blank.
pub fn text_or_dash(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_owned(),
        _ => MISSING.to_owned(),
    }
}
