//! Error types for rule conversion.
//!
//! Only batch-fatal conditions are errors. Row-local problems are recorded
//! as [`RowIssue`](crate::report::RowIssue)s and never unwind.

use rules_ingest::IngestError;
use rules_map::MapError;
use thiserror::Error;

/// A decoding failure that invalidates the mapping tables for the whole run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("unknown field name '{label}'; add it to the field mappings")]
    UnknownField { label: String },

    #[error("unknown operator '{label}' for field '{field}'; add it to the operator mappings")]
    UnknownOperator { label: String, field: String },
}

#[derive(Debug, Error)]
pub enum ConvertError {
    /// A fatal decoding error on a 1-based data row.
    #[error("row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: DecodeError,
    },

    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Map(#[from] MapError),

    #[error("invalid summary pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl ConvertError {
    pub(crate) fn row(row: usize, source: DecodeError) -> Self {
        Self::Row { row, source }
    }
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConvertError::row(
            4,
            DecodeError::UnknownOperator {
                label: "is maybe".to_string(),
                field: "Urgency".to_string(),
            },
        );
        assert_eq!(
            err.to_string(),
            "row 4: unknown operator 'is maybe' for field 'Urgency'; add it to the operator mappings"
        );
    }
}
