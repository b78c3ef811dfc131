//! Standard-field criteria.
//!
//! The consuming rules application evaluates rules against a closed set of
//! request attributes. Both the attribute names and the comparison operators
//! are modelled as enums so an unmapped spreadsheet label can never leak into
//! the output as free text.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Canonical request attribute a criterion filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StandardField {
    ReviewOutcomeStatus,
    ReviewOutcomeStatusReason,
    ServiceReviewType,
    ServiceTreatmentType,
    ServiceCode,
    EnrollmentLineOfBusiness,
    EnrollmentPlan,
    EnrollmentGroupId,
    RequestType,
    RequestUrgency,
    RequestTreatmentSetting,
    RequestOriginatingSystemSource,
    RequestDiagnosisCode,
    RequestClassification,
    RequestStatus,
    MemberState,
    MemberClient,
}

impl StandardField {
    pub const ALL: [StandardField; 17] = [
        StandardField::ReviewOutcomeStatus,
        StandardField::ReviewOutcomeStatusReason,
        StandardField::ServiceReviewType,
        StandardField::ServiceTreatmentType,
        StandardField::ServiceCode,
        StandardField::EnrollmentLineOfBusiness,
        StandardField::EnrollmentPlan,
        StandardField::EnrollmentGroupId,
        StandardField::RequestType,
        StandardField::RequestUrgency,
        StandardField::RequestTreatmentSetting,
        StandardField::RequestOriginatingSystemSource,
        StandardField::RequestDiagnosisCode,
        StandardField::RequestClassification,
        StandardField::RequestStatus,
        StandardField::MemberState,
        StandardField::MemberClient,
    ];

    /// Returns the identifier used by the rules application.
    pub fn as_str(&self) -> &'static str {
        match self {
            StandardField::ReviewOutcomeStatus => "REVIEW_OUTCOME_STATUS",
            StandardField::ReviewOutcomeStatusReason => "REVIEW_OUTCOME_STATUS_REASON",
            StandardField::ServiceReviewType => "SERVICE_REVIEW_TYPE",
            StandardField::ServiceTreatmentType => "SERVICE_TREATMENT_TYPE",
            StandardField::ServiceCode => "SERVICE_CODE",
            StandardField::EnrollmentLineOfBusiness => "ENROLLMENT_LINE_OF_BUSINESS",
            StandardField::EnrollmentPlan => "ENROLLMENT_PLAN",
            StandardField::EnrollmentGroupId => "ENROLLMENT_GROUP_ID",
            StandardField::RequestType => "REQUEST_TYPE",
            StandardField::RequestUrgency => "REQUEST_URGENCY",
            StandardField::RequestTreatmentSetting => "REQUEST_TREATMENT_SETTING",
            StandardField::RequestOriginatingSystemSource => "REQUEST_ORIGINATING_SYSTEM_SOURCE",
            StandardField::RequestDiagnosisCode => "REQUEST_DIAGNOSIS_CODE",
            StandardField::RequestClassification => "REQUEST_CLASSIFICATION",
            StandardField::RequestStatus => "REQUEST_STATUS",
            StandardField::MemberState => "MEMBER_STATE",
            StandardField::MemberClient => "MEMBER_CLIENT",
        }
    }

    /// Human-readable title, e.g. `REQUEST_URGENCY` becomes "Request Urgency".
    pub fn title(&self) -> String {
        title_case(&self.as_str().replace('_', " "))
    }
}

impl fmt::Display for StandardField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StandardField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();
        StandardField::ALL
            .into_iter()
            .find(|field| field.as_str() == normalized)
            .ok_or_else(|| format!("Unknown standard field: {s}"))
    }
}

/// Comparison applied between the request attribute and the criterion values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operator {
    Equals,
    NotEquals,
    In,
    NotIn,
}

impl Operator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equals => "EQUALS",
            Operator::NotEquals => "NOT_EQUALS",
            Operator::In => "IN",
            Operator::NotIn => "NOT_IN",
        }
    }

    /// True for `NOT_EQUALS` and `NOT_IN`.
    pub fn is_negated(&self) -> bool {
        matches!(self, Operator::NotEquals | Operator::NotIn)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "EQUALS" => Ok(Operator::Equals),
            "NOT_EQUALS" => Ok(Operator::NotEquals),
            "IN" => Ok(Operator::In),
            "NOT_IN" => Ok(Operator::NotIn),
            _ => Err(format!("Unknown operator: {s}")),
        }
    }
}

/// One normalized filter condition.
///
/// `values` is never empty; decoders drop a criterion rather than emit one
/// without values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Criterion {
    pub field: StandardField,
    pub operator: Operator,
    pub values: Vec<String>,
}

impl Criterion {
    pub fn new(field: StandardField, operator: Operator, values: Vec<String>) -> Self {
        Self {
            field,
            operator,
            values,
        }
    }
}

/// Title-cases words: the first letter after any non-letter is upper-cased,
/// the rest lower-cased.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut previous_alpha = false;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if previous_alpha {
                out.extend(ch.to_lowercase());
            } else {
                out.extend(ch.to_uppercase());
            }
            previous_alpha = true;
        } else {
            out.push(ch);
            previous_alpha = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_round_trips_through_str() {
        for field in StandardField::ALL {
            assert_eq!(field.as_str().parse::<StandardField>(), Ok(field));
        }
        assert!("NOT_A_FIELD".parse::<StandardField>().is_err());
    }

    #[test]
    fn field_title() {
        assert_eq!(StandardField::RequestUrgency.title(), "Request Urgency");
        assert_eq!(
            StandardField::EnrollmentLineOfBusiness.title(),
            "Enrollment Line Of Business"
        );
    }

    #[test]
    fn operator_negation() {
        assert!(Operator::NotIn.is_negated());
        assert!(Operator::NotEquals.is_negated());
        assert!(!Operator::In.is_negated());
        assert!(!Operator::Equals.is_negated());
    }
}
