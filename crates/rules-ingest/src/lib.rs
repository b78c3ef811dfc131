//! Worksheet ingestion for rule conversion.
//!
//! Loads one worksheet from a spreadsheet workbook (through `calamine`) or
//! from a CSV export, and exposes it as a header row plus data rows of
//! `CellValue`.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use rules_ingest::read_worksheet;
//!
//! let sheet = read_worksheet(Path::new("LUM UM Rules.xlsx"), None)?;
//! for row in sheet.rows() {
//!     let first = row.cell(0);
//! }
//! ```

mod csv_sheet;
mod error;
mod sheet;
mod workbook;

use std::path::Path;

use tracing::debug;

// === Error Types ===
pub use error::{IngestError, Result};

// === Worksheet ===
pub use sheet::{SheetRow, Worksheet, normalize_header};

// === Readers ===
pub use csv_sheet::read_csv_sheet;
pub use workbook::{cell_from_data, read_workbook_sheet};

const WORKBOOK_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Reads a worksheet, choosing the reader from the file extension.
///
/// `sheet` selects a worksheet by name in workbooks; CSV exports contain a
/// single sheet and ignore it.
pub fn read_worksheet(path: &Path, sheet: Option<&str>) -> Result<Worksheet> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    if extension == "csv" {
        if let Some(requested) = sheet {
            debug!(sheet = %requested, "CSV input has a single sheet; ignoring sheet name");
        }
        return read_csv_sheet(path);
    }
    if WORKBOOK_EXTENSIONS.contains(&extension.as_str()) {
        return read_workbook_sheet(path, sheet);
    }
    Err(IngestError::UnsupportedFormat {
        path: path.to_path_buf(),
        extension,
    })
}
