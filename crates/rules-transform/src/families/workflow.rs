//! Summary-string request-workflow rules (bare JSON array).

use rules_ingest::{SheetRow, Worksheet};
use rules_map::SummaryTables;
use rules_model::{RequestTypeFilter, RequestWorkflowRule};
use tracing::{debug, info};

use crate::actions::decode_column_actions;
use crate::criteria::SummaryDecoder;
use crate::error::Result;
use crate::normalize::ValueNormalizer;
use crate::numeric::cell_int;
use crate::report::{Conversion, ConversionReport, RowIssue};

/// Column names read by [`convert_workflow`], besides the action columns.
pub mod columns {
    pub const NAME: &str = "Name";
    pub const RULE_SUMMARY: &str = "Rule Summary";
    pub const REQUEST_TYPE: &str = "Request Type";
    pub const FIRE_ONCE: &str = "Fire Once";
}

/// Converts every data row of a request-workflow worksheet.
///
/// Only an invalid operator phrase table can fail; row problems are
/// reported and skipped.
pub fn convert_workflow(
    sheet: &Worksheet,
    tables: &SummaryTables,
) -> Result<Conversion<Vec<RequestWorkflowRule>>> {
    let decoder = SummaryDecoder::new(tables)?;
    let mut report = ConversionReport::new(sheet.len());
    let mut rules = Vec::new();

    for row in sheet.rows() {
        let mut issues = Vec::new();
        let rule = convert_row(row, tables, &decoder, &mut issues);
        for issue in issues {
            report.record(issue);
        }
        if let Some(rule) = rule {
            info!(row = row.number(), rule = %rule.rule_desc, "converted rule");
            rules.push(rule);
        }
    }

    report.accepted = rules.len();
    Ok(Conversion {
        output: rules,
        report,
    })
}

fn convert_row(
    row: SheetRow<'_>,
    tables: &SummaryTables,
    decoder: &SummaryDecoder<'_>,
    issues: &mut Vec<RowIssue>,
) -> Option<RequestWorkflowRule> {
    let normalizer = ValueNormalizer::new(&tables.sentinels);
    let number = row.number();
    let text = |column: &str| normalizer.present(row.get(column));

    let Some(rule_desc) = text(columns::NAME) else {
        issues.push(RowIssue::MissingMandatoryField {
            row: number,
            field: columns::NAME.to_string(),
        });
        return None;
    };
    let Some(summary) = text(columns::RULE_SUMMARY) else {
        issues.push(RowIssue::MissingMandatoryField {
            row: number,
            field: columns::RULE_SUMMARY.to_string(),
        });
        return None;
    };

    let decoded = decoder.decode(&summary);
    for dropped in decoded.dropped {
        issues.push(RowIssue::DroppedClause {
            row: number,
            clause: dropped.clause,
            reason: dropped.rejection.describe(),
        });
    }
    if decoded.criteria.is_empty() {
        issues.push(RowIssue::NoCriteria { row: number });
        return None;
    }
    debug!(row = number, criteria = decoded.criteria.len(), "decoded criteria");

    let trigger_events = tables
        .trigger_columns
        .iter()
        .filter(|(column, _)| text(column).is_some_and(|value| tables.is_affirmative(&value)))
        .map(|(_, event)| *event)
        .collect();

    let request_type_filter =
        text(columns::REQUEST_TYPE).and_then(|value| RequestTypeFilter::parse(&value));

    let fire_once = match text(columns::FIRE_ONCE) {
        Some(raw) => match cell_int(row.get(columns::FIRE_ONCE)) {
            Some(value) => value == 1,
            None => {
                issues.push(RowIssue::NumericCoercion {
                    row: number,
                    field: columns::FIRE_ONCE.to_string(),
                    value: raw,
                });
                false
            }
        },
        None => false,
    };

    let actions = decode_column_actions(row, tables, issues).non_empty();
    if actions.is_none() {
        issues.push(RowIssue::NoActions { row: number });
    }

    Some(RequestWorkflowRule {
        rule_desc,
        standard_field_criteria: decoded.criteria,
        is_active: true,
        weight: tables.default_weight,
        trigger_events,
        request_type_filter,
        fire_once,
        actions,
    })
}
