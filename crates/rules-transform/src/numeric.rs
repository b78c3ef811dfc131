//! Tolerant numeric coercion for integer-valued cells.

use rules_model::{CellValue, parse_f64};

/// Parses integer-valued text, accepting float formatting (`"3.0"` is 3).
/// Fractions truncate toward zero.
pub fn coerce_int(text: &str) -> Option<i64> {
    let value = parse_f64(text)?;
    float_to_int(value)
}

/// Integer view of a cell. Dates never coerce.
pub fn cell_int(cell: &CellValue) -> Option<i64> {
    match cell {
        CellValue::Number(value) => float_to_int(*value),
        CellValue::Text(text) => coerce_int(text),
        CellValue::Absent | CellValue::Date(_) => None,
    }
}

fn float_to_int(value: f64) -> Option<i64> {
    if !value.is_finite() || value.abs() >= i64::MAX as f64 {
        return None;
    }
    Some(value.trunc() as i64)
}

/// First contiguous run of ASCII digits, e.g. `"3 Business Days"` gives 3.
pub fn leading_digits(text: &str) -> Option<u32> {
    let start = text.find(|c: char| c.is_ascii_digit())?;
    let digits: String = text[start..]
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_float_formatted_integers() {
        assert_eq!(coerce_int("3"), Some(3));
        assert_eq!(coerce_int(" 3.0 "), Some(3));
        assert_eq!(coerce_int("2.9"), Some(2));
        assert_eq!(coerce_int("-1"), Some(-1));
        assert_eq!(coerce_int("three"), None);
        assert_eq!(coerce_int("NaN"), None);
        assert_eq!(coerce_int(""), None);
    }

    #[test]
    fn cell_int_reads_numbers_and_text() {
        assert_eq!(cell_int(&CellValue::Number(72.0)), Some(72));
        assert_eq!(cell_int(&CellValue::text("48.0")), Some(48));
        assert_eq!(cell_int(&CellValue::Absent), None);
    }

    #[test]
    fn leading_digits_takes_first_run() {
        assert_eq!(leading_digits("3 Business Days"), Some(3));
        assert_eq!(leading_digits("Due in 10 days (2 reminders)"), Some(10));
        assert_eq!(leading_digits("next day"), None);
    }
}
