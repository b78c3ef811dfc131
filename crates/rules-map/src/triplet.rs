//! Tables for the triplet-columnar (auto-workflow) rule family.
//!
//! Rows hold repeating Field / Operator / Value groups followed by an action
//! block that starts either with a routing keyword or a task keyword.

use rules_model::{DEFAULT_WEIGHT, Operator, StandardField};

use crate::label::LabelMap;
use crate::sentinel::Sentinels;

/// Column assumed to start the action block when no sentinel label is found.
///
/// Taken from one observed spreadsheet layout; other layouts should set
/// `default_action_column` in a mapping override file.
pub const DEFAULT_ACTION_COLUMN: usize = 13;

#[derive(Debug, Clone)]
pub struct TripletTables {
    pub fields: LabelMap<StandardField>,
    pub operators: LabelMap<Operator>,
    pub sentinels: Sentinels,
    /// Field-name cells (case-insensitive) that end the criteria region.
    pub criteria_stop_labels: Vec<String>,
    /// Labels that mark the action column in the header or first data row.
    pub boundary_labels: Vec<String>,
    /// Labels probed in the first `boundary_probe_rows` data rows.
    pub boundary_probe_labels: Vec<String>,
    pub boundary_probe_rows: usize,
    pub default_action_column: usize,
    pub routing_keyword: String,
    pub task_keyword: String,
    pub task_type_label: String,
    pub task_reason_label: String,
    pub task_due_label: String,
    pub default_task_reason: String,
    pub default_days_until_due: u32,
    pub code_prefix: String,
    pub code_width: usize,
    pub default_weight: i64,
}

impl TripletTables {
    /// Sequential rule code for a 1-based row number, e.g. `LUM007`.
    pub fn rule_code(&self, row_number: usize) -> String {
        format!(
            "{prefix}{row_number:0width$}",
            prefix = self.code_prefix,
            width = self.code_width
        )
    }

    /// True when `label` (case-insensitive, trimmed) ends the criteria region.
    pub fn is_criteria_stop(&self, label: &str) -> bool {
        contains_ignore_case(&self.criteria_stop_labels, label)
    }

    pub fn is_boundary_label(&self, label: &str) -> bool {
        contains_ignore_case(&self.boundary_labels, label)
    }

    pub fn is_boundary_probe_label(&self, label: &str) -> bool {
        contains_ignore_case(&self.boundary_probe_labels, label)
    }
}

pub(crate) fn contains_ignore_case(labels: &[String], label: &str) -> bool {
    let needle = crate::label::normalize_label(label).to_lowercase();
    labels
        .iter()
        .any(|candidate| crate::label::normalize_label(candidate).to_lowercase() == needle)
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_string()).collect()
}

impl Default for TripletTables {
    fn default() -> Self {
        Self {
            fields: LabelMap::from_pairs([
                ("Outcome Status", StandardField::ReviewOutcomeStatus),
                ("Outcome Reason", StandardField::ReviewOutcomeStatusReason),
                ("Review Type", StandardField::ServiceReviewType),
                ("Member Line of Business", StandardField::EnrollmentLineOfBusiness),
                ("Request Type", StandardField::RequestType),
                ("Urgency", StandardField::RequestUrgency),
                ("Treatment Type", StandardField::ServiceTreatmentType),
                ("Member State", StandardField::MemberState),
                ("Member Client", StandardField::MemberClient),
                ("Plan", StandardField::EnrollmentPlan),
            ]),
            operators: LabelMap::from_pairs([
                ("is any of", Operator::In),
                ("is none of", Operator::NotIn),
                ("is", Operator::Equals),
                ("is not", Operator::NotEquals),
            ]),
            sentinels: Sentinels::standard(),
            criteria_stop_labels: strings(&["action", "task type", "set task due to", "task reason"]),
            boundary_labels: strings(&["action", "task type"]),
            boundary_probe_labels: strings(&["action", "reassign to", "task type"]),
            boundary_probe_rows: 3,
            default_action_column: DEFAULT_ACTION_COLUMN,
            routing_keyword: "Reassign to".to_string(),
            task_keyword: "Task Type".to_string(),
            task_type_label: "Task Type".to_string(),
            task_reason_label: "Task Reason".to_string(),
            task_due_label: "Set Task Due to".to_string(),
            default_task_reason: "Review Required".to_string(),
            default_days_until_due: 3,
            code_prefix: "LUM".to_string(),
            code_width: 3,
            default_weight: DEFAULT_WEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_codes_are_zero_padded() {
        let tables = TripletTables::default();
        assert_eq!(tables.rule_code(1), "LUM001");
        assert_eq!(tables.rule_code(42), "LUM042");
        assert_eq!(tables.rule_code(1234), "LUM1234");
    }

    #[test]
    fn stop_labels_ignore_case() {
        let tables = TripletTables::default();
        assert!(tables.is_criteria_stop("ACTION"));
        assert!(tables.is_criteria_stop(" Set Task Due To "));
        assert!(!tables.is_criteria_stop("Urgency"));
    }

    #[test]
    fn double_spaced_labels_resolve() {
        let tables = TripletTables::default();
        assert_eq!(
            tables.fields.get("Outcome  Reason"),
            Some(StandardField::ReviewOutcomeStatusReason)
        );
        assert_eq!(tables.fields.get("Urgency "), Some(StandardField::RequestUrgency));
    }
}
