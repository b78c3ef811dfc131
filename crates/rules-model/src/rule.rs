//! Output rule records and documents for the three rule families.

use serde::{Deserialize, Serialize};

use crate::action::Actions;
use crate::criteria::Criterion;

/// Rule weight used when the source does not provide one.
pub const DEFAULT_WEIGHT: i64 = 100;

/// Auto-workflow rule decoded from a triplet-columnar worksheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutoWorkflowRule {
    pub code: String,
    pub rule_desc: String,
    pub standard_field_criteria: Vec<Criterion>,
    /// Reserved for the consuming application; always empty here.
    pub custom_field_criteria: Vec<Criterion>,
    pub is_active: bool,
    pub weight: i64,
    pub actions: Actions,
}

/// `{"type": "AUTO_WORKFLOW_RULES", "rules": [...]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoWorkflowDocument {
    #[serde(rename = "type")]
    pub kind: String,
    pub rules: Vec<AutoWorkflowRule>,
}

impl AutoWorkflowDocument {
    pub const KIND: &'static str = "AUTO_WORKFLOW_RULES";

    pub fn new(rules: Vec<AutoWorkflowRule>) -> Self {
        Self {
            kind: Self::KIND.to_string(),
            rules,
        }
    }
}

/// Unit the TAT due-date offset is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitsOfMeasure {
    #[default]
    Hours,
    BusinessDays,
    CalendarDays,
}

/// Request timestamp the TAT due date is calculated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceDateTimeField {
    #[default]
    NotificationDateTime,
    StatusChangeDateTime,
    RequestDateTime,
    ReceiptDateTime,
    ReceivedDateTime,
}

/// Turnaround-time rule (`TATRuleExport`).
///
/// Optional timing fields serialize as `null` rather than being omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TatRule {
    pub rule_desc: String,
    pub is_active: bool,
    pub weight: i64,
    pub units: i64,
    pub units_of_measure: UnitsOfMeasure,
    pub source_date_time_field: SourceDateTimeField,
    pub standard_field_criteria: Vec<Criterion>,
    pub custom_field_criteria: Option<Vec<Criterion>>,
    pub due_time: Option<String>,
    pub holiday_dates: Vec<String>,
    pub holiday_category: Option<String>,
    pub holiday_offset: Option<i64>,
    pub clinicals_requested_response_threshold_hours: Option<i64>,
    pub date_operator: Option<String>,
    pub auto_extend: bool,
    pub extend_status_reason: Option<String>,
}

/// `{"rules": [...]}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TatDocument {
    pub rules: Vec<TatRule>,
}

/// Request lifecycle event that fires a workflow rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TriggerEvent {
    CreateRequest,
    EditRequest,
    ExtendRequest,
    CreateService,
    EditService,
    ExtendService,
    SaveQuestionnaire,
}

impl TriggerEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            TriggerEvent::CreateRequest => "CREATE_REQUEST",
            TriggerEvent::EditRequest => "EDIT_REQUEST",
            TriggerEvent::ExtendRequest => "EXTEND_REQUEST",
            TriggerEvent::CreateService => "CREATE_SERVICE",
            TriggerEvent::EditService => "EDIT_SERVICE",
            TriggerEvent::ExtendService => "EXTEND_SERVICE",
            TriggerEvent::SaveQuestionnaire => "SAVE_QUESTIONNAIRE",
        }
    }
}

/// Request setting a workflow rule is restricted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestTypeFilter {
    Inpatient,
    Outpatient,
}

impl RequestTypeFilter {
    /// Parses `INPATIENT` / `OUTPATIENT` in any case.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_uppercase().as_str() {
            "INPATIENT" => Some(RequestTypeFilter::Inpatient),
            "OUTPATIENT" => Some(RequestTypeFilter::Outpatient),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestTypeFilter::Inpatient => "INPATIENT",
            RequestTypeFilter::Outpatient => "OUTPATIENT",
        }
    }
}

/// Request-workflow rule. Written as a bare JSON array of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestWorkflowRule {
    pub rule_desc: String,
    pub standard_field_criteria: Vec<Criterion>,
    pub is_active: bool,
    pub weight: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub trigger_events: Vec<TriggerEvent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_type_filter: Option<RequestTypeFilter>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub fire_once: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actions: Option<Actions>,
}
