//! In-memory worksheet: a header row plus data rows of `CellValue`.

use std::collections::BTreeMap;

use rules_model::CellValue;

static ABSENT: CellValue = CellValue::Absent;

/// Trims a header label, strips a BOM and collapses internal whitespace.
pub fn normalize_header(raw: &str) -> String {
    raw.trim()
        .trim_matches('\u{feff}')
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// A loaded worksheet.
///
/// Every data row is padded to the header width so positional access never
/// runs short of a real spreadsheet column.
#[derive(Debug, Clone)]
pub struct Worksheet {
    pub name: String,
    pub headers: Vec<String>,
    rows: Vec<Vec<CellValue>>,
    index: BTreeMap<String, usize>,
}

impl Worksheet {
    /// Build a worksheet from already-decoded cells.
    ///
    /// Headers are normalized; rows are padded to the widest of header and row
    /// width and trailing fully-empty rows are dropped.
    pub fn new(name: impl Into<String>, headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        let headers: Vec<String> = headers.iter().map(|h| normalize_header(h)).collect();
        let mut index = BTreeMap::new();
        for (idx, header) in headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            index.entry(header.clone()).or_insert(idx);
        }
        let mut rows = rows;
        while rows
            .last()
            .is_some_and(|row| row.iter().all(CellValue::is_absent))
        {
            rows.pop();
        }
        let width = rows
            .iter()
            .map(Vec::len)
            .max()
            .unwrap_or(0)
            .max(headers.len());
        for row in &mut rows {
            row.resize(width, CellValue::Absent);
        }
        Self {
            name: name.into(),
            headers,
            rows,
            index,
        }
    }

    /// Number of data rows (header excluded).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of the column whose normalized header equals `header`.
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.index.get(&normalize_header(header)).copied()
    }

    pub fn row(&self, index: usize) -> Option<SheetRow<'_>> {
        self.rows.get(index).map(|cells| SheetRow {
            sheet: self,
            index,
            cells,
        })
    }

    /// Data rows in source order.
    pub fn rows(&self) -> impl Iterator<Item = SheetRow<'_>> {
        self.rows.iter().enumerate().map(|(index, cells)| SheetRow {
            sheet: self,
            index,
            cells,
        })
    }
}

/// A borrowed data row with positional and by-name access.
#[derive(Debug, Clone, Copy)]
pub struct SheetRow<'a> {
    sheet: &'a Worksheet,
    index: usize,
    cells: &'a [CellValue],
}

impl<'a> SheetRow<'a> {
    /// Zero-based data row index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// One-based data row number, as reported to users.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &'a [CellValue] {
        self.cells
    }

    /// Cell at `column`, `Absent` when out of range.
    pub fn cell(&self, column: usize) -> &'a CellValue {
        self.cells.get(column).unwrap_or(&ABSENT)
    }

    /// Cell under the named header, `Absent` when the column does not exist.
    pub fn get(&self, header: &str) -> &'a CellValue {
        match self.sheet.column_index(header) {
            Some(column) => self.cell(column),
            None => &ABSENT,
        }
    }
}
