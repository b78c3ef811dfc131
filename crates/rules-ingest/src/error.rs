//! Error types for worksheet ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a worksheet.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("input file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// The file extension is not a supported spreadsheet format.
    #[error("unsupported spreadsheet format '{extension}': {path}")]
    UnsupportedFormat { path: PathBuf, extension: String },

    // === Workbook Errors ===
    /// The workbook could not be opened or parsed.
    #[error("failed to read workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    /// The requested worksheet does not exist.
    #[error("worksheet '{sheet}' not found in {path} (available: {available})")]
    SheetNotFound {
        path: PathBuf,
        sheet: String,
        available: String,
    },

    /// The workbook has no worksheets, or the worksheet has no header row.
    #[error("no worksheet data in {path}")]
    EmptyWorksheet { path: PathBuf },

    // === CSV Errors ===
    /// Failed to parse a CSV export.
    #[error("failed to parse CSV {path}: {source}")]
    CsvParse {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
