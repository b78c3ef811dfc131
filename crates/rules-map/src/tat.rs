//! Tables for the turnaround-time (TAT) rule family.

use rules_model::{DEFAULT_WEIGHT, SourceDateTimeField, StandardField, UnitsOfMeasure};

use crate::label::LabelMap;
use crate::sentinel::Sentinels;

#[derive(Debug, Clone)]
pub struct TatTables {
    /// Criteria columns and the field each maps to, in output order.
    pub criteria_columns: Vec<(String, StandardField)>,
    pub units: LabelMap<UnitsOfMeasure>,
    pub source_dates: LabelMap<SourceDateTimeField>,
    pub sentinels: Sentinels,
    pub default_units: i64,
    pub default_units_of_measure: UnitsOfMeasure,
    pub default_source_date_time_field: SourceDateTimeField,
    pub default_weight: i64,
}

impl TatTables {
    /// Maps a criteria column to `field`, replacing an existing mapping.
    pub fn set_criteria_column(&mut self, column: &str, field: StandardField) {
        let column = crate::label::normalize_label(column);
        match self
            .criteria_columns
            .iter_mut()
            .find(|(existing, _)| *existing == column)
        {
            Some(entry) => entry.1 = field,
            None => self.criteria_columns.push((column, field)),
        }
    }
}

impl Default for TatTables {
    fn default() -> Self {
        let criteria_columns = [
            ("TX_TYPE", StandardField::ServiceTreatmentType),
            ("URGENCY", StandardField::RequestUrgency),
            ("REVIEW_TYPE", StandardField::ServiceReviewType),
            ("REQUEST_TYPE", StandardField::RequestType),
            ("CLIENT", StandardField::MemberClient),
            ("LOB", StandardField::EnrollmentLineOfBusiness),
            ("PLAN_TYPE", StandardField::EnrollmentPlan),
            ("TX_SETTING", StandardField::RequestTreatmentSetting),
            ("STATUS", StandardField::ReviewOutcomeStatus),
            ("STATUS_REASON", StandardField::ReviewOutcomeStatusReason),
        ]
        .into_iter()
        .map(|(column, field)| (column.to_string(), field))
        .collect();
        Self {
            criteria_columns,
            units: LabelMap::from_pairs([
                ("HR", UnitsOfMeasure::Hours),
                ("BD", UnitsOfMeasure::BusinessDays),
                ("CD", UnitsOfMeasure::CalendarDays),
            ]),
            source_dates: LabelMap::from_pairs([
                ("NOTIFYDATE", SourceDateTimeField::NotificationDateTime),
                ("STATUSCHANGEDATE", SourceDateTimeField::StatusChangeDateTime),
                ("REQUESTDATE", SourceDateTimeField::RequestDateTime),
                ("RECEIPTDATE", SourceDateTimeField::ReceiptDateTime),
                ("RECEIVEDDATE", SourceDateTimeField::ReceivedDateTime),
            ]),
            sentinels: Sentinels::standard(),
            default_units: 72,
            default_units_of_measure: UnitsOfMeasure::Hours,
            default_source_date_time_field: SourceDateTimeField::NotificationDateTime,
            default_weight: DEFAULT_WEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_and_source_codes_resolve() {
        let tables = TatTables::default();
        assert_eq!(tables.units.get("BD"), Some(UnitsOfMeasure::BusinessDays));
        assert_eq!(
            tables.source_dates.get("RECEIPTDATE"),
            Some(SourceDateTimeField::ReceiptDateTime)
        );
        assert_eq!(tables.units.get("WK"), None);
    }

    #[test]
    fn set_criteria_column_replaces_or_appends() {
        let mut tables = TatTables::default();
        let before = tables.criteria_columns.len();
        tables.set_criteria_column("CLIENT", StandardField::EnrollmentGroupId);
        tables.set_criteria_column("STATE", StandardField::MemberState);
        assert_eq!(tables.criteria_columns.len(), before + 1);
        assert!(
            tables
                .criteria_columns
                .contains(&("CLIENT".to_string(), StandardField::EnrollmentGroupId))
        );
        assert_eq!(
            tables.criteria_columns.last(),
            Some(&("STATE".to_string(), StandardField::MemberState))
        );
    }
}
