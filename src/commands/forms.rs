//! Form field parsing shared by the project, sentinel, and measurement forms.
//!
//! Inputs arrive as raw strings from text fields; parsing is lenient the way
//! the forms are (defaults for imagery parameters, silent drop of malformed
//! month entries). Presence checks stay with the individual commands.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

pub const DEFAULT_YEAR: i32 = 2024;
pub const DEFAULT_MONTHS: &str = "6,7,8";
pub const DEFAULT_CLOUD: u32 = 20;

/// Comma-separated month list; malformed entries are dropped.
pub fn parse_months(raw: &str) -> Vec<u32> {
    raw.split(',').filter_map(|m| m.trim().parse().ok()).collect()
}

pub fn parse_year(raw: &str) -> i32 {
    raw.trim().parse().unwrap_or(DEFAULT_YEAR)
}

pub fn parse_cloud(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(DEFAULT_CLOUD)
}

/// Strictly positive number, for DBH and height fields.
pub fn parse_positive(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| *v > 0.0)
}
