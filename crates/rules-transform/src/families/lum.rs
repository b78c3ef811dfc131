//! Triplet-columnar auto-workflow rules (`AUTO_WORKFLOW_RULES`).

use rules_ingest::Worksheet;
use rules_map::TripletTables;
use rules_model::{ActionKind, AutoWorkflowDocument, AutoWorkflowRule};
use tracing::{debug, info};

use crate::actions::decode_keyword_actions;
use crate::boundary::locate_action_boundary;
use crate::criteria::scan_triplets;
use crate::describe::describe_rule;
use crate::error::{ConvertError, Result};
use crate::report::{Conversion, ConversionReport, RowIssue};

/// Converts every data row of a triplet-columnar worksheet.
///
/// An unknown field or operator on any row aborts the whole run; nothing
/// converted so far is returned.
pub fn convert_lum(
    sheet: &Worksheet,
    tables: &TripletTables,
) -> Result<Conversion<AutoWorkflowDocument>> {
    let mut report = ConversionReport::new(sheet.len());

    let boundary = locate_action_boundary(sheet, tables);
    if boundary.is_default() {
        report.record(RowIssue::StructuralAmbiguity {
            column: boundary.column,
        });
    } else {
        info!(column = boundary.column, source = ?boundary.source, "found action column");
    }

    let mut rules = Vec::new();
    for row in sheet.rows() {
        let number = row.number();
        let scan = scan_triplets(row.cells(), boundary.column, tables)
            .map_err(|source| ConvertError::row(number, source))?;
        if scan.criteria.is_empty() {
            report.record(RowIssue::NoCriteria { row: number });
            continue;
        }
        debug!(row = number, criteria = scan.criteria.len(), "decoded criteria");

        let actions = decode_keyword_actions(row.cells(), boundary.column, tables);
        if actions.is_empty() {
            report.record(RowIssue::NoActions { row: number });
        } else {
            let kinds: Vec<&str> = actions.kinds().iter().map(ActionKind::as_str).collect();
            debug!(row = number, actions = ?kinds, "decoded actions");
        }

        let code = tables.rule_code(number);
        let rule = AutoWorkflowRule {
            rule_desc: describe_rule(&scan.criteria, &actions),
            code,
            standard_field_criteria: scan.criteria,
            custom_field_criteria: Vec::new(),
            is_active: true,
            weight: tables.default_weight,
            actions,
        };
        info!(row = number, code = %rule.code, "converted rule");
        rules.push(rule);
    }

    report.accepted = rules.len();
    Ok(Conversion {
        output: AutoWorkflowDocument::new(rules),
        report,
    })
}
