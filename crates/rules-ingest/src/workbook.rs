//! Workbook (xlsx, xlsm, xlsb, xls, ods) loading through `calamine`.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use tracing::debug;

use rules_model::CellValue;

use crate::error::{IngestError, Result};
use crate::sheet::Worksheet;

/// Converts a calamine cell into a `CellValue`.
pub fn cell_from_data(data: &Data) -> CellValue {
    match data {
        Data::Empty | Data::Error(_) => CellValue::Absent,
        Data::String(value) => CellValue::text(value.clone()),
        Data::Float(value) => CellValue::Number(*value),
        Data::Int(value) => CellValue::Number(*value as f64),
        Data::Bool(value) => CellValue::Number(if *value { 1.0 } else { 0.0 }),
        Data::DateTime(value) => match value.as_datetime() {
            Some(datetime) => CellValue::Date(datetime),
            None => CellValue::Number(value.as_f64()),
        },
        Data::DateTimeIso(value) | Data::DurationIso(value) => CellValue::text(value.clone()),
    }
}

/// Reads one worksheet of a workbook; the first sheet when `sheet` is `None`.
///
/// The first non-empty row is the header row. Leading empty columns are kept
/// so positional column indices match the spreadsheet.
pub fn read_workbook_sheet(path: &Path, sheet: Option<&str>) -> Result<Worksheet> {
    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let names = workbook.sheet_names();
    let name = match sheet {
        Some(requested) => names
            .iter()
            .find(|name| name.as_str() == requested)
            .cloned()
            .ok_or_else(|| IngestError::SheetNotFound {
                path: path.to_path_buf(),
                sheet: requested.to_string(),
                available: names.join(", "),
            })?,
        None => names
            .first()
            .cloned()
            .ok_or_else(|| IngestError::EmptyWorksheet {
                path: path.to_path_buf(),
            })?,
    };
    let range = workbook
        .worksheet_range(&name)
        .map_err(|e| IngestError::Workbook {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    let leading_columns = range.start().map(|(_, col)| col as usize).unwrap_or(0);

    let mut rows = range.rows().map(|row| {
        let mut cells = vec![CellValue::Absent; leading_columns];
        cells.extend(row.iter().map(cell_from_data));
        cells
    });
    let Some(header_row) = rows.by_ref().find(|row| !row.iter().all(CellValue::is_absent)) else {
        return Err(IngestError::EmptyWorksheet {
            path: path.to_path_buf(),
        });
    };
    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| cell.render().unwrap_or_default())
        .collect();
    let data: Vec<Vec<CellValue>> = rows.collect();
    debug!(
        sheet = %name,
        columns = headers.len(),
        rows = data.len(),
        "worksheet loaded"
    );
    Ok(Worksheet::new(name, headers, data))
}
