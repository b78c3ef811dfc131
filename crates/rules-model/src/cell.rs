//! Worksheet cell values.
//!
//! Spreadsheet cells arrive as text, numbers, dates or nothing at all depending
//! on how the source workbook was formatted. `CellValue` pins that down once at
//! the ingestion boundary so decoders never have to guess.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// A single decoded worksheet cell.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CellValue {
    /// The cell is missing or empty.
    #[default]
    Absent,
    /// A textual value, kept exactly as read (untrimmed).
    Text(String),
    /// A numeric value. Booleans are stored as `1.0` / `0.0`.
    Number(f64),
    /// A date, time or date-time value.
    Date(NaiveDateTime),
}

impl CellValue {
    /// Build a text cell, mapping the empty string to `Absent`.
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            Self::Absent
        } else {
            Self::Text(value)
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Render the cell as a string, `None` for `Absent`.
    ///
    /// Numbers drop trailing zeros (`3.0` renders as `3`), dates at midnight
    /// render as `YYYY-MM-DD` and time-only values as `HH:MM:SS`.
    pub fn render(&self) -> Option<String> {
        match self {
            Self::Absent => None,
            Self::Text(value) => Some(value.clone()),
            Self::Number(value) => Some(format_numeric(*value)),
            Self::Date(value) => Some(format_date(*value)),
        }
    }

    /// Numeric view of the cell; text is parsed leniently (`" 3.0 "` is 3).
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(value) => parse_f64(value),
            Self::Absent | Self::Date(_) => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.render() {
            Some(value) => f.write_str(&value),
            None => Ok(()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

/// Parses a string as f64, returning None for invalid or empty strings.
pub fn parse_f64(value: &str) -> Option<f64> {
    if value.trim().is_empty() {
        return None;
    }
    value.trim().parse::<f64>().ok()
}

/// Formats a floating-point number as a string without trailing zeros.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

// Spreadsheet epochs put time-only values on 1899-12-30 or 1899-12-31.
fn is_time_only(date: NaiveDate) -> bool {
    NaiveDate::from_ymd_opt(1899, 12, 30) == Some(date)
        || NaiveDate::from_ymd_opt(1899, 12, 31) == Some(date)
}

fn format_date(value: NaiveDateTime) -> String {
    if is_time_only(value.date()) {
        return value.time().format("%H:%M:%S").to_string();
    }
    if value.time() == NaiveTime::MIN && value.nanosecond() == 0 {
        return value.date().format("%Y-%m-%d").to_string();
    }
    value.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_absent() {
        assert_eq!(CellValue::text(""), CellValue::Absent);
        assert_eq!(CellValue::from("  "), CellValue::Text("  ".to_string()));
    }

    #[test]
    fn numbers_render_without_trailing_zeros() {
        assert_eq!(CellValue::Number(3.0).render().as_deref(), Some("3"));
        assert_eq!(CellValue::Number(2.50).render().as_deref(), Some("2.5"));
        assert_eq!(CellValue::Number(100.0).render().as_deref(), Some("100"));
    }

    #[test]
    fn dates_render_by_shape() {
        let midnight = NaiveDate::from_ymd_opt(2025, 12, 25)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap();
        assert_eq!(CellValue::Date(midnight).to_string(), "2025-12-25");

        let time_only = NaiveDate::from_ymd_opt(1899, 12, 31)
            .and_then(|d| d.and_hms_opt(17, 5, 0))
            .unwrap();
        assert_eq!(CellValue::Date(time_only).to_string(), "17:05:00");
    }

    #[test]
    fn text_parses_as_number() {
        assert_eq!(CellValue::from(" 3.0 ").as_f64(), Some(3.0));
        assert_eq!(CellValue::from("three").as_f64(), None);
        assert_eq!(CellValue::Absent.as_f64(), None);
    }
}
