//! Tables for the request-workflow rule family, whose criteria are written as
//! free-text rule summaries such as
//! `Member client is in the group 'All Clients' AND Review Type is 'Retrospective'`.

use rules_model::{DEFAULT_WEIGHT, Operator, StandardField, TriggerEvent};

use crate::label::LabelMap;
use crate::sentinel::Sentinels;

/// Worksheet the request-workflow rules live on.
pub const DEFAULT_WORKFLOW_SHEET: &str = "AWF Rules - Request";

#[derive(Debug, Clone)]
pub struct SummaryTables {
    pub fields: LabelMap<StandardField>,
    /// Operator phrases, matched case-insensitively.
    pub operators: LabelMap<Operator>,
    pub sentinels: Sentinels,
    /// Word joining clauses (case-insensitive), surrounded by whitespace.
    pub clause_delimiter: String,
    /// Yes/No columns and the trigger event each one enables.
    pub trigger_columns: Vec<(String, TriggerEvent)>,
    /// Cell text meaning "yes" in flag columns.
    pub affirmative: String,
    /// Transfer target used when the row names no task owner.
    pub unassigned_owner: String,
    pub default_sheet: String,
    pub default_weight: i64,
}

impl SummaryTables {
    /// Operator phrases ordered longest first, so that a phrase is always
    /// tried before any shorter phrase it contains.
    pub fn operator_phrases(&self) -> Vec<(String, Operator)> {
        let mut phrases: Vec<(String, Operator)> = self
            .operators
            .iter()
            .map(|(phrase, operator)| (phrase.to_string(), operator))
            .collect();
        phrases.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then_with(|| a.0.cmp(&b.0)));
        phrases
    }

    /// True when the flag cell text equals the affirmative token.
    pub fn is_affirmative(&self, text: &str) -> bool {
        text.trim() == self.affirmative
    }
}

impl Default for SummaryTables {
    fn default() -> Self {
        let trigger_columns = [
            ("Create Request", TriggerEvent::CreateRequest),
            ("Edit Request", TriggerEvent::EditRequest),
            ("Extend Request", TriggerEvent::ExtendRequest),
            ("Create Service", TriggerEvent::CreateService),
            ("Edit Service", TriggerEvent::EditService),
            ("Extend Service", TriggerEvent::ExtendService),
            ("Save Questionnaire", TriggerEvent::SaveQuestionnaire),
        ]
        .into_iter()
        .map(|(column, event)| (column.to_string(), event))
        .collect();
        Self {
            fields: LabelMap::from_pairs([
                ("Member client", StandardField::MemberClient),
                ("Review Type", StandardField::ServiceReviewType),
                ("Treatment type", StandardField::ServiceTreatmentType),
                ("Urgency", StandardField::RequestUrgency),
                ("Outcome Status Reason", StandardField::ReviewOutcomeStatusReason),
                ("Request Bed Type", StandardField::RequestTreatmentSetting),
                ("Source System", StandardField::RequestOriginatingSystemSource),
                ("CID", StandardField::EnrollmentGroupId),
                ("Member Group ID", StandardField::EnrollmentGroupId),
                ("Request Type", StandardField::RequestType),
                ("Member State", StandardField::MemberState),
                ("Treatment Type", StandardField::ServiceTreatmentType),
                ("LOB", StandardField::EnrollmentLineOfBusiness),
                ("Plan", StandardField::EnrollmentPlan),
                ("Service Code", StandardField::ServiceCode),
                ("Diagnosis Code", StandardField::RequestDiagnosisCode),
                ("Task Type", StandardField::RequestClassification),
                ("Task Reason", StandardField::RequestStatus),
                ("Task Outcome", StandardField::ReviewOutcomeStatus),
            ]),
            operators: LabelMap::from_pairs_ignore_case([
                ("is", Operator::Equals),
                ("is not", Operator::NotIn),
                ("is in the group", Operator::In),
                ("is not in the group", Operator::NotIn),
            ]),
            sentinels: Sentinels::standard(),
            clause_delimiter: "AND".to_string(),
            trigger_columns,
            affirmative: "Yes".to_string(),
            unassigned_owner: "UNASSIGNED".to_string(),
            default_sheet: DEFAULT_WORKFLOW_SHEET.to_string(),
            default_weight: DEFAULT_WEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operator_phrases_are_longest_first() {
        let tables = SummaryTables::default();
        let phrases: Vec<String> = tables
            .operator_phrases()
            .into_iter()
            .map(|(phrase, _)| phrase)
            .collect();
        assert_eq!(
            phrases,
            vec!["is not in the group", "is in the group", "is not", "is"]
        );
    }
}
