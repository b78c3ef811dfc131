//! CSV exports of a single worksheet.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use rules_model::CellValue;

use crate::error::{IngestError, Result};
use crate::sheet::Worksheet;

/// Reads a CSV export. All cells are text; empty cells are `Absent`.
///
/// Leading blank lines are skipped; the first non-empty record is the header.
pub fn read_csv_sheet(path: &Path) -> Result<Worksheet> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
    let mut raw_rows: Vec<Vec<CellValue>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        let row: Vec<CellValue> = record
            .iter()
            .map(|value| CellValue::text(value.trim_matches('\u{feff}')))
            .collect();
        if raw_rows.is_empty() && row.iter().all(CellValue::is_absent) {
            continue;
        }
        raw_rows.push(row);
    }
    if raw_rows.is_empty() {
        return Err(IngestError::EmptyWorksheet {
            path: path.to_path_buf(),
        });
    }
    let header_row = raw_rows.remove(0);
    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| cell.render().unwrap_or_default())
        .collect();
    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("Sheet1")
        .to_string();
    debug!(
        sheet = %name,
        columns = headers.len(),
        rows = raw_rows.len(),
        "csv worksheet loaded"
    );
    Ok(Worksheet::new(name, headers, raw_rows))
}
