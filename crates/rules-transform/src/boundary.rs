//! Action-boundary detection for triplet-columnar worksheets.

use rules_ingest::Worksheet;
use rules_map::TripletTables;

use crate::normalize::ValueNormalizer;

/// Where the action column was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundarySource {
    Header,
    FirstRow,
    /// Found by the column-major probe over the first data rows (0-based row).
    Probe { row: usize },
    /// Nothing matched; the configured default column is assumed.
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionBoundary {
    /// 0-based column where the action block starts.
    pub column: usize,
    pub source: BoundarySource,
}

impl ActionBoundary {
    pub fn is_default(&self) -> bool {
        self.source == BoundarySource::Default
    }
}

/// Locates the column where criteria end and actions begin.
///
/// Tried in order: the header row and then the first data row for a
/// boundary label; then, column by column, the first few data rows for a
/// probe label; finally the configured default column.
pub fn locate_action_boundary(sheet: &Worksheet, tables: &TripletTables) -> ActionBoundary {
    let normalizer = ValueNormalizer::new(&tables.sentinels);

    if let Some(column) = sheet
        .headers
        .iter()
        .position(|header| tables.is_boundary_label(header))
    {
        return ActionBoundary {
            column,
            source: BoundarySource::Header,
        };
    }

    if let Some(first) = sheet.row(0) {
        let found = first.cells().iter().position(|cell| {
            normalizer
                .present(cell)
                .is_some_and(|text| tables.is_boundary_label(&text))
        });
        if let Some(column) = found {
            return ActionBoundary {
                column,
                source: BoundarySource::FirstRow,
            };
        }
    }

    let probe_rows: Vec<_> = sheet.rows().take(tables.boundary_probe_rows).collect();
    let width = probe_rows.iter().map(|row| row.len()).max().unwrap_or(0);
    for column in 0..width {
        for row in &probe_rows {
            let matched = normalizer
                .present(row.cell(column))
                .is_some_and(|text| tables.is_boundary_probe_label(&text));
            if matched {
                return ActionBoundary {
                    column,
                    source: BoundarySource::Probe { row: row.index() },
                };
            }
        }
    }

    ActionBoundary {
        column: tables.default_action_column,
        source: BoundarySource::Default,
    }
}
