//! Per-run conversion report.

use std::fmt;

use tracing::warn;

/// A row-local problem. The row is skipped or defaulted; the run continues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowIssue {
    /// A mandatory column is empty; the row was skipped.
    MissingMandatoryField { row: usize, field: String },
    /// A numeric column could not be parsed; the default was used.
    NumericCoercion {
        row: usize,
        field: String,
        value: String,
    },
    /// No criteria decoded; the row was skipped.
    NoCriteria { row: usize },
    /// Criteria decoded but no actions; the rule was kept.
    NoActions { row: usize },
    /// A summary clause was dropped.
    DroppedClause {
        row: usize,
        clause: String,
        reason: String,
    },
    /// The action boundary could not be located; a default column was used
    /// for every row.
    StructuralAmbiguity { column: usize },
}

impl RowIssue {
    /// 1-based data row, `None` for run-wide issues.
    pub fn row(&self) -> Option<usize> {
        match self {
            RowIssue::MissingMandatoryField { row, .. }
            | RowIssue::NumericCoercion { row, .. }
            | RowIssue::NoCriteria { row }
            | RowIssue::NoActions { row }
            | RowIssue::DroppedClause { row, .. } => Some(*row),
            RowIssue::StructuralAmbiguity { .. } => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            RowIssue::MissingMandatoryField { .. } => "missing field",
            RowIssue::NumericCoercion { .. } => "numeric coercion",
            RowIssue::NoCriteria { .. } => "no criteria",
            RowIssue::NoActions { .. } => "no actions",
            RowIssue::DroppedClause { .. } => "dropped clause",
            RowIssue::StructuralAmbiguity { .. } => "structural ambiguity",
        }
    }

    /// True when the issue caused its row to be skipped.
    pub fn skips_row(&self) -> bool {
        matches!(
            self,
            RowIssue::MissingMandatoryField { .. } | RowIssue::NoCriteria { .. }
        )
    }
}

impl fmt::Display for RowIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowIssue::MissingMandatoryField { field, .. } => {
                write!(f, "missing {field}; row skipped")
            }
            RowIssue::NumericCoercion { field, value, .. } => {
                write!(f, "{field} value '{value}' is not a number; default used")
            }
            RowIssue::NoCriteria { .. } => f.write_str("no criteria found; row skipped"),
            RowIssue::NoActions { .. } => f.write_str("no actions found"),
            RowIssue::DroppedClause { clause, reason, .. } => {
                write!(f, "clause '{clause}' dropped: {reason}")
            }
            RowIssue::StructuralAmbiguity { column } => write!(
                f,
                "action column not found; assuming column index {column}"
            ),
        }
    }
}

/// Counts and issues for one conversion run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConversionReport {
    pub total_rows: usize,
    pub accepted: usize,
    pub issues: Vec<RowIssue>,
}

impl ConversionReport {
    pub fn new(total_rows: usize) -> Self {
        Self {
            total_rows,
            ..Self::default()
        }
    }

    /// Records and logs an issue.
    pub fn record(&mut self, issue: RowIssue) {
        match issue.row() {
            Some(row) => warn!(row, kind = issue.kind(), "{issue}"),
            None => warn!(kind = issue.kind(), "{issue}"),
        }
        self.issues.push(issue);
    }

    pub fn skipped(&self) -> usize {
        self.total_rows.saturating_sub(self.accepted)
    }

    pub fn warnings(&self) -> usize {
        self.issues.len()
    }
}

/// Output of a successful run together with its report.
#[derive(Debug, Clone)]
pub struct Conversion<T> {
    pub output: T,
    pub report: ConversionReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skipped_is_total_minus_accepted() {
        let mut report = ConversionReport::new(5);
        report.accepted = 3;
        report.record(RowIssue::NoCriteria { row: 2 });
        report.record(RowIssue::StructuralAmbiguity { column: 13 });
        assert_eq!(report.skipped(), 2);
        assert_eq!(report.warnings(), 2);
        assert_eq!(report.issues[1].row(), None);
        assert!(report.issues[0].skips_row());
    }
}
