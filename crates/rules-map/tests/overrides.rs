use std::io::Write;

use rules_map::{MapError, MappingOverrides, TatTables};
use rules_model::{SourceDateTimeField, StandardField, UnitsOfMeasure};
use tempfile::NamedTempFile;

fn write_overrides(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write overrides");
    file
}

#[test]
fn loads_tat_overrides_from_disk() {
    let file = write_overrides(
        r#"
        [fields]
        STATE = "MEMBER_STATE"

        [units]
        HRS = "HOURS"

        [source_dates]
        NOTIFY = "NOTIFICATION_DATE_TIME"
        "#,
    );
    let overrides = MappingOverrides::from_path(file.path()).expect("load overrides");
    let mut tables = TatTables::default();
    overrides.apply_tat(&mut tables);

    assert_eq!(tables.units.get("HRS"), Some(UnitsOfMeasure::Hours));
    assert_eq!(
        tables.source_dates.get("NOTIFY"),
        Some(SourceDateTimeField::NotificationDateTime)
    );
    assert_eq!(
        tables.criteria_columns.last(),
        Some(&("STATE".to_string(), StandardField::MemberState))
    );
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = MappingOverrides::from_path(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, MapError::Io { .. }));
}

#[test]
fn malformed_file_is_toml_error() {
    let file = write_overrides("[fields\n");
    let err = MappingOverrides::from_path(file.path()).unwrap_err();
    assert!(matches!(err, MapError::Toml { .. }));
    assert!(err.to_string().starts_with("failed to parse mapping file"));
}
