//! End-to-end conversions over in-memory worksheets.

use rules_ingest::Worksheet;
use rules_map::{SummaryTables, TatTables, TripletTables};
use rules_model::{
    CellValue, Criterion, DepartmentRouting, Operator, RequestTypeFilter, SourceDateTimeField,
    StandardField, TriggerEvent, UnitsOfMeasure,
};
use rules_transform::{
    ConvertError, DecodeError, RowIssue, convert_lum, convert_tat, convert_workflow,
};

fn sheet(headers: &[&str], rows: &[&[&str]]) -> Worksheet {
    Worksheet::new(
        "Sheet1",
        headers.iter().map(|h| (*h).to_string()).collect(),
        rows.iter()
            .map(|row| row.iter().map(|cell| CellValue::text(*cell)).collect())
            .collect(),
    )
}

fn values(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_string()).collect()
}

#[test]
fn lum_routing_row_converts() {
    let sheet = sheet(
        &["Field", "Operator", "Value", "Action", "Department"],
        &[&["Urgency", "is any of", "STAT\nURGENT", "Reassign to", "CARDIO"]],
    );
    let conversion = convert_lum(&sheet, &TripletTables::default()).unwrap();
    let rules = &conversion.output.rules;
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].code, "LUM001");
    assert_eq!(
        rules[0].standard_field_criteria,
        vec![Criterion::new(
            StandardField::RequestUrgency,
            Operator::In,
            values(&["STAT", "URGENT"]),
        )]
    );
    assert_eq!(
        rules[0].actions.department_routing,
        Some(DepartmentRouting {
            department_code: "CARDIO".to_string()
        })
    );
    assert_eq!(rules[0].rule_desc, "Request Urgency is STAT, URGENT → Route to CARDIO");
    assert!(rules[0].custom_field_criteria.is_empty());
    assert_eq!(rules[0].weight, 100);
}

#[test]
fn lum_document_json_shape() {
    let sheet = sheet(
        &["Field", "Operator", "Value", "Action", "A", "B", "C"],
        &[
            &["Member State", "is", "NJ", "Task Type", "Clinical Review", "Set Task Due to", "5 Days"],
            &["", "", "", "", "", "", ""],
            &["Plan", "is none of", "Bronze\nSilver", "", "", "", ""],
        ],
    );
    let conversion = convert_lum(&sheet, &TripletTables::default()).unwrap();
    insta::assert_snapshot!(serde_json::to_string_pretty(&conversion.output).unwrap(), @r#"
    {
      "type": "AUTO_WORKFLOW_RULES",
      "rules": [
        {
          "code": "LUM001",
          "ruleDesc": "Member State is NJ → Create Clinical Review task",
          "standardFieldCriteria": [
            {
              "field": "MEMBER_STATE",
              "operator": "EQUALS",
              "values": [
                "NJ"
              ]
            }
          ],
          "customFieldCriteria": [],
          "isActive": true,
          "weight": 100,
          "actions": {
            "createTask": {
              "taskType": "Clinical Review",
              "taskReason": "Review Required",
              "daysUntilDue": 5
            }
          }
        },
        {
          "code": "LUM003",
          "ruleDesc": "Enrollment Plan is not Bronze, Silver → ",
          "standardFieldCriteria": [
            {
              "field": "ENROLLMENT_PLAN",
              "operator": "NOT_IN",
              "values": [
                "Bronze",
                "Silver"
              ]
            }
          ],
          "customFieldCriteria": [],
          "isActive": true,
          "weight": 100,
          "actions": {}
        }
      ]
    }
    "#);
    assert_eq!(conversion.report.total_rows, 3);
    assert_eq!(conversion.report.accepted, 2);
    assert_eq!(
        conversion.report.issues,
        vec![RowIssue::NoCriteria { row: 2 }, RowIssue::NoActions { row: 3 }]
    );
}

#[test]
fn lum_unknown_field_aborts_the_run() {
    let sheet = sheet(
        &["Field", "Operator", "Value", "Action", "Department"],
        &[
            &["Urgency", "is", "STAT", "Reassign to", "CARDIO"],
            &["Shoe Size", "is", "42", "Reassign to", "PODIATRY"],
        ],
    );
    let err = convert_lum(&sheet, &TripletTables::default()).unwrap_err();
    match err {
        ConvertError::Row { row, source } => {
            assert_eq!(row, 2);
            assert_eq!(
                source,
                DecodeError::UnknownField {
                    label: "Shoe Size".to_string()
                }
            );
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn lum_default_boundary_is_reported_once() {
    let sheet = sheet(
        &["A", "B", "C"],
        &[&["Urgency", "is", "STAT"], &["Plan", "is", "Gold"]],
    );
    let conversion = convert_lum(&sheet, &TripletTables::default()).unwrap();
    let ambiguities = conversion
        .report
        .issues
        .iter()
        .filter(|issue| matches!(issue, RowIssue::StructuralAmbiguity { column: 13 }))
        .count();
    assert_eq!(ambiguities, 1);
    // Rows narrower than the default column are scanned to their end.
    assert_eq!(conversion.output.rules.len(), 2);
}

const TAT_HEADERS: &[&str] = &[
    "DUE_DATE_AUTO_CALC_RULE_DESC",
    "ACTIVE",
    "WEIGHT",
    "DUE_DATE",
    "DUE_DATE_UNITS",
    "DATE_TO_CALC_FROM",
    "DUE_DATE_TIME",
    "SKIP_HOLIDAY_DATES",
    "OFFSET_VALUE",
    "AUTO_EXTEND",
    "EXTEND_STATUS_RSN",
    "URGENCY",
    "CLIENT",
    "LOB",
];

#[test]
fn tat_row_maps_units_and_source_date() {
    let sheet = sheet(
        TAT_HEADERS,
        &[&[
            "Urgent retro", "1", "50", "2", "BD", "RECEIPTDATE", "8:5:00", "FED", "1.0", "1",
            "Pending Info", "URGENT", "*", "Commercial",
        ]],
    );
    let conversion = convert_tat(&sheet, &TatTables::default());
    let rule = &conversion.output.rules[0];
    assert_eq!(rule.units_of_measure, UnitsOfMeasure::BusinessDays);
    assert_eq!(rule.source_date_time_field, SourceDateTimeField::ReceiptDateTime);
    assert_eq!(rule.units, 2);
    assert_eq!(rule.weight, 50);
    assert!(rule.is_active);
    assert_eq!(rule.due_time.as_deref(), Some("08:05"));
    assert_eq!(rule.holiday_category.as_deref(), Some("FED"));
    assert!(rule.holiday_dates.is_empty());
    assert_eq!(rule.holiday_offset, Some(1));
    assert!(rule.auto_extend);
    assert_eq!(rule.extend_status_reason.as_deref(), Some("Pending Info"));
    assert_eq!(
        rule.standard_field_criteria,
        vec![
            Criterion::new(StandardField::RequestUrgency, Operator::Equals, values(&["URGENT"])),
            Criterion::new(
                StandardField::EnrollmentLineOfBusiness,
                Operator::Equals,
                values(&["Commercial"]),
            ),
        ]
    );
    assert!(conversion.report.issues.is_empty());
}

#[test]
fn tat_defaults_and_row_local_failures() {
    let sheet = sheet(
        TAT_HEADERS,
        &[
            &["Defaults", "", "heavy", "", "", "", "", "2024-01-01,2024-12-25", "", "0", "x", "STAT", "", ""],
            &["", "1", "", "", "", "", "", "", "", "", "", "STAT", "", ""],
            &["No criteria", "0", "", "", "", "", "", "", "", "", "", "[NULL]", "", ""],
        ],
    );
    let conversion = convert_tat(&sheet, &TatTables::default());
    assert_eq!(conversion.output.rules.len(), 1);
    let rule = &conversion.output.rules[0];
    assert!(rule.is_active);
    assert_eq!(rule.weight, 100);
    assert_eq!(rule.units, 72);
    assert_eq!(rule.units_of_measure, UnitsOfMeasure::Hours);
    assert_eq!(rule.source_date_time_field, SourceDateTimeField::NotificationDateTime);
    assert_eq!(rule.holiday_dates, values(&["2024-01-01", "2024-12-25"]));
    assert!(!rule.auto_extend);
    assert_eq!(rule.extend_status_reason, None);
    assert_eq!(
        conversion.report.issues,
        vec![
            RowIssue::NumericCoercion {
                row: 1,
                field: "WEIGHT".to_string(),
                value: "heavy".to_string(),
            },
            RowIssue::MissingMandatoryField {
                row: 2,
                field: "DUE_DATE_AUTO_CALC_RULE_DESC".to_string(),
            },
            RowIssue::NoCriteria { row: 3 },
        ]
    );
    assert_eq!(conversion.report.skipped(), 2);

    let json = serde_json::to_value(&conversion.output).unwrap();
    assert!(json["rules"][0]["customFieldCriteria"].is_null());
    assert!(json["rules"][0]["clinicalsRequestedResponseThresholdHours"].is_null());
}

const WORKFLOW_HEADERS: &[&str] = &[
    "Name",
    "Rule Summary",
    "Create Request",
    "Edit Request",
    "Request Type",
    "Fire Once",
    "Triggered Letter",
    "Task Type",
    "Task Reason",
    "Transfer",
];

#[test]
fn workflow_row_converts() {
    let sheet = sheet(
        WORKFLOW_HEADERS,
        &[&[
            "Retro review letter",
            "Member client is in the group 'All Clients (NO BUPA)' AND Review Type is 'Retrospective'",
            "Yes",
            "No",
            "inpatient",
            "1.0",
            "Retro Approval",
            "",
            "",
            "",
        ]],
    );
    let conversion = convert_workflow(&sheet, &SummaryTables::default()).unwrap();
    insta::assert_snapshot!(serde_json::to_string_pretty(&conversion.output).unwrap(), @r#"
    [
      {
        "ruleDesc": "Retro review letter",
        "standardFieldCriteria": [
          {
            "field": "MEMBER_CLIENT",
            "operator": "IN",
            "values": [
              "All Clients (NO BUPA)"
            ]
          },
          {
            "field": "SERVICE_REVIEW_TYPE",
            "operator": "EQUALS",
            "values": [
              "Retrospective"
            ]
          }
        ],
        "isActive": true,
        "weight": 100,
        "triggerEvents": [
          "CREATE_REQUEST"
        ],
        "requestTypeFilter": "INPATIENT",
        "fireOnce": true,
        "actions": {
          "generateLetters": [
            {
              "letterName": "Retro Approval"
            }
          ]
        }
      }
    ]
    "#);
}

#[test]
fn workflow_skips_and_warnings() {
    let sheet = sheet(
        WORKFLOW_HEADERS,
        &[
            &["(null)", "Urgency is 'STAT'", "", "", "", "", "", "", "", ""],
            &["No summary", "", "", "", "", "", "", "", "", ""],
            &["Only noise", "Shoe Size is '42'", "", "", "", "", "", "", "", ""],
            &["Transfer", "Urgency is 'STAT' AND Colour is 'Red'", "", "Yes", "Both", "", "", "", "", "Yes"],
        ],
    );
    let conversion = convert_workflow(&sheet, &SummaryTables::default()).unwrap();
    assert_eq!(conversion.output.len(), 1);
    let rule = &conversion.output[0];
    assert_eq!(rule.trigger_events, vec![TriggerEvent::EditRequest]);
    assert_eq!(rule.request_type_filter, None::<RequestTypeFilter>);
    assert_eq!(
        rule.actions
            .as_ref()
            .and_then(|actions| actions.transfer_ownership.as_ref())
            .map(|transfer| transfer.transfer_to.as_str()),
        Some("UNASSIGNED")
    );
    let kinds: Vec<&str> = conversion.report.issues.iter().map(RowIssue::kind).collect();
    assert_eq!(
        kinds,
        vec![
            "missing field",
            "missing field",
            "dropped clause",
            "no criteria",
            "dropped clause",
        ]
    );
    assert_eq!(conversion.report.skipped(), 3);
}
