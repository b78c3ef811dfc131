//! Property tests for the value normalizer and the triplet scan.

use proptest::prelude::*;
use rules_map::{Sentinels, TripletTables};
use rules_model::{CellValue, Operator, StandardField};
use rules_transform::{ValueNormalizer, scan_triplets};

const FIELDS: &[(&str, StandardField)] = &[
    ("Urgency", StandardField::RequestUrgency),
    ("Member State", StandardField::MemberState),
    ("Plan", StandardField::EnrollmentPlan),
    ("Review Type", StandardField::ServiceReviewType),
];

const OPERATORS: &[(&str, Operator)] = &[
    ("is", Operator::Equals),
    ("is not", Operator::NotEquals),
    ("is any of", Operator::In),
    ("is none of", Operator::NotIn),
];

fn sentinel_text() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("*"), Just("[NULL]"), Just("(null)"), Just("")],
        "[ \t]{0,3}",
        "[ \t]{0,3}",
    )
        .prop_map(|(token, lead, trail)| format!("{lead}{token}{trail}"))
}

/// A value cell: either a sentinel or one to three plain values on lines.
fn value_cell() -> impl Strategy<Value = (String, Vec<String>)> {
    prop_oneof![
        sentinel_text().prop_map(|text| (text, Vec::new())),
        prop::collection::vec("[A-Z][A-Z0-9]{0,6}", 1..4)
            .prop_map(|values| (values.join("\n"), values)),
    ]
}

proptest! {
    #[test]
    fn sentinel_cells_are_always_absent(text in sentinel_text()) {
        let sentinels = Sentinels::standard();
        let normalizer = ValueNormalizer::new(&sentinels);
        let cell = CellValue::text(text);
        prop_assert!(normalizer.present(&cell).is_none());
        prop_assert!(normalizer.split_multi_value(&cell).is_empty());
    }

    #[test]
    fn triplet_scan_keeps_order_and_consumes_whole_triplets(
        triplets in prop::collection::vec(
            (0..FIELDS.len(), 0..OPERATORS.len(), value_cell()),
            0..6,
        ),
        stop in prop_oneof![Just("Action"), Just("task type"), Just("Set Task Due To"), Just("")],
    ) {
        let tables = TripletTables::default();
        let mut cells = Vec::new();
        let mut expected = Vec::new();
        for (field, operator, (text, values)) in &triplets {
            cells.push(CellValue::text(FIELDS[*field].0));
            cells.push(CellValue::text(OPERATORS[*operator].0));
            cells.push(CellValue::text(text.clone()));
            if !values.is_empty() {
                expected.push((FIELDS[*field].1, OPERATORS[*operator].1, values.clone()));
            }
        }
        cells.push(CellValue::text(stop));
        cells.push(CellValue::text("CARDIO"));
        cells.push(CellValue::Absent);

        let scan = scan_triplets(&cells, cells.len(), &tables).unwrap();
        prop_assert_eq!(scan.consumed, triplets.len() * 3);
        let decoded: Vec<_> = scan
            .criteria
            .into_iter()
            .map(|criterion| (criterion.field, criterion.operator, criterion.values))
            .collect();
        prop_assert_eq!(decoded, expected);
    }
}
