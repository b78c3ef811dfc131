//! Named-column turnaround-time rules (`{"rules": [...]}`).

use rules_ingest::{SheetRow, Worksheet};
use rules_map::TatTables;
use rules_model::{CellValue, Criterion, Operator, TatDocument, TatRule};
use tracing::{debug, info};

use crate::normalize::ValueNormalizer;
use crate::numeric::cell_int;
use crate::report::{Conversion, ConversionReport, RowIssue};

/// Column names read by [`convert_tat`].
pub mod columns {
    pub const DESCRIPTION: &str = "DUE_DATE_AUTO_CALC_RULE_DESC";
    pub const ACTIVE: &str = "ACTIVE";
    pub const WEIGHT: &str = "WEIGHT";
    pub const DUE_DATE: &str = "DUE_DATE";
    pub const DUE_DATE_UNITS: &str = "DUE_DATE_UNITS";
    pub const DATE_TO_CALC_FROM: &str = "DATE_TO_CALC_FROM";
    pub const DUE_DATE_TIME: &str = "DUE_DATE_TIME";
    pub const SKIP_HOLIDAY_DATES: &str = "SKIP_HOLIDAY_DATES";
    pub const OFFSET_VALUE: &str = "OFFSET_VALUE";
    pub const DATE_OPERATOR: &str = "DATE_OPERATOR";
    pub const AUTO_EXTEND: &str = "AUTO_EXTEND";
    pub const EXTEND_STATUS_RSN: &str = "EXTEND_STATUS_RSN";
}

/// Converts every data row of a TAT worksheet. Never fatal.
pub fn convert_tat(sheet: &Worksheet, tables: &TatTables) -> Conversion<TatDocument> {
    let mut report = ConversionReport::new(sheet.len());
    let mut rules = Vec::new();

    for row in sheet.rows() {
        let mut issues = Vec::new();
        let rule = convert_row(row, tables, &mut issues);
        for issue in issues {
            report.record(issue);
        }
        if let Some(rule) = rule {
            info!(row = row.number(), rule = %truncate(&rule.rule_desc, 50), "converted rule");
            rules.push(rule);
        }
    }

    report.accepted = rules.len();
    Conversion {
        output: TatDocument { rules },
        report,
    }
}

fn convert_row(
    row: SheetRow<'_>,
    tables: &TatTables,
    issues: &mut Vec<RowIssue>,
) -> Option<TatRule> {
    let normalizer = ValueNormalizer::new(&tables.sentinels);
    let number = row.number();
    let text = |column: &str| normalizer.present(row.get(column));
    // Exactly 1; "1.0" passes, "1.9" does not.
    let flag = |column: &str| row.get(column).as_f64() == Some(1.0);

    let Some(rule_desc) = text(columns::DESCRIPTION) else {
        issues.push(RowIssue::MissingMandatoryField {
            row: number,
            field: columns::DESCRIPTION.to_string(),
        });
        return None;
    };

    let standard_field_criteria: Vec<Criterion> = tables
        .criteria_columns
        .iter()
        .filter_map(|(column, field)| {
            text(column).map(|value| Criterion::new(*field, Operator::Equals, vec![value]))
        })
        .collect();
    if standard_field_criteria.is_empty() {
        issues.push(RowIssue::NoCriteria { row: number });
        return None;
    }
    debug!(row = number, criteria = standard_field_criteria.len(), "decoded criteria");

    // `None` when the cell is absent or does not coerce; the latter is reported.
    let mut integer = |column: &str| -> Option<i64> {
        let raw = text(column)?;
        let value = cell_int(row.get(column));
        if value.is_none() {
            issues.push(RowIssue::NumericCoercion {
                row: number,
                field: column.to_string(),
                value: raw,
            });
        }
        value
    };

    let weight = integer(columns::WEIGHT).unwrap_or(tables.default_weight);
    let units = integer(columns::DUE_DATE).unwrap_or(tables.default_units);
    let holiday_offset = integer(columns::OFFSET_VALUE);

    let units_of_measure = text(columns::DUE_DATE_UNITS)
        .and_then(|code| tables.units.get(&code))
        .unwrap_or(tables.default_units_of_measure);
    let source_date_time_field = text(columns::DATE_TO_CALC_FROM)
        .and_then(|code| tables.source_dates.get(&code))
        .unwrap_or(tables.default_source_date_time_field);

    let is_active = text(columns::ACTIVE).is_none() || flag(columns::ACTIVE);
    let due_time = text(columns::DUE_DATE_TIME).and_then(|value| normalize_due_time(&value));

    let (holiday_dates, holiday_category) = match text(columns::SKIP_HOLIDAY_DATES) {
        Some(value) if value.chars().any(char::is_alphabetic) => (Vec::new(), Some(value)),
        Some(value) => (split_holiday_dates(&value, &normalizer), None),
        None => (Vec::new(), None),
    };

    let auto_extend = flag(columns::AUTO_EXTEND);
    let extend_status_reason = if auto_extend {
        text(columns::EXTEND_STATUS_RSN)
    } else {
        None
    };

    Some(TatRule {
        rule_desc,
        is_active,
        weight,
        units,
        units_of_measure,
        source_date_time_field,
        standard_field_criteria,
        custom_field_criteria: None,
        due_time,
        holiday_dates,
        holiday_category,
        holiday_offset,
        clinicals_requested_response_threshold_hours: None,
        date_operator: text(columns::DATE_OPERATOR),
        auto_extend,
        extend_status_reason,
    })
}

/// `"8:5:00"` becomes `"08:05"`; values without a colon are dropped.
pub fn normalize_due_time(value: &str) -> Option<String> {
    let mut parts = value.trim().split(':');
    let hours = parts.next()?;
    let minutes = parts.next()?;
    Some(format!("{hours:0>2}:{minutes:0>2}"))
}

/// Splits a holiday date list on commas and whitespace, dropping sentinels.
pub fn split_holiday_dates(value: &str, normalizer: &ValueNormalizer<'_>) -> Vec<String> {
    value
        .replace(',', " ")
        .split_whitespace()
        .filter(|date| normalizer.is_present(&CellValue::text(*date)))
        .map(str::to_string)
        .collect()
}

fn truncate(value: &str, max_chars: usize) -> String {
    match value.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &value[..end]),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rules_map::Sentinels;

    fn flag_sheet(active: &str, auto_extend: &str) -> Worksheet {
        Worksheet::new(
            "TAT",
            vec![
                columns::DESCRIPTION.to_string(),
                columns::ACTIVE.to_string(),
                columns::AUTO_EXTEND.to_string(),
                "URGENCY".to_string(),
            ],
            vec![vec![
                CellValue::text("Flags"),
                CellValue::text(active),
                CellValue::text(auto_extend),
                CellValue::text("STAT"),
            ]],
        )
    }

    #[test]
    fn flags_require_exactly_one() {
        let tables = TatTables::default();
        let rule = |active: &str, auto_extend: &str| {
            convert_tat(&flag_sheet(active, auto_extend), &tables)
                .output
                .rules
                .remove(0)
        };
        let whole = rule("1.0", "1");
        assert!(whole.is_active);
        assert!(whole.auto_extend);

        let fractional = rule("1.9", "1.5");
        assert!(!fractional.is_active);
        assert!(!fractional.auto_extend);

        assert!(!rule("2", "0").is_active);
        assert!(rule("*", "").is_active);
    }

    #[test]
    fn due_time_is_zero_filled() {
        assert_eq!(normalize_due_time("8:5:00"), Some("08:05".to_string()));
        assert_eq!(normalize_due_time("17:00"), Some("17:00".to_string()));
        assert_eq!(normalize_due_time("1700"), None);
    }

    #[test]
    fn holiday_dates_split_on_commas_and_spaces() {
        let sentinels = Sentinels::standard();
        let normalizer = ValueNormalizer::new(&sentinels);
        assert_eq!(
            split_holiday_dates("2024-01-01, 2024-07-04 * 2024-12-25", &normalizer),
            vec!["2024-01-01", "2024-07-04", "2024-12-25"]
        );
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("short", 50), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
    }
}
