//! Row-to-rule conversion pipeline.
//!
//! Every rule family runs the same stages over an in-memory worksheet:
//! value normalization, criteria decoding, action decoding and rule
//! assembly. The stages are parameterised by the family's mapping tables
//! from `rules-map`.
//!
//! Fatal conditions (an unknown field or operator in a triplet sheet) are
//! returned as [`ConvertError`]; everything row-local is collected in the
//! [`ConversionReport`] and the run continues.

pub mod actions;
pub mod boundary;
pub mod criteria;
pub mod describe;
pub mod error;
pub mod families;
pub mod normalize;
pub mod numeric;
pub mod report;
pub mod stats;

use std::path::Path;

use rules_ingest::Worksheet;
use rules_map::MappingOverrides;
use tracing::info;

pub use actions::{decode_column_actions, decode_keyword_actions};
pub use boundary::{ActionBoundary, BoundarySource, locate_action_boundary};
pub use criteria::{
    ClauseRejection, DroppedClause, SummaryDecode, SummaryDecoder, TripletScan, scan_triplets,
};
pub use describe::describe_rule;
pub use error::{ConvertError, DecodeError, Result};
pub use families::{convert_lum, convert_tat, convert_workflow};
pub use normalize::ValueNormalizer;
pub use numeric::{cell_int, coerce_int, leading_digits};
pub use report::{Conversion, ConversionReport, RowIssue};
pub use stats::WorkflowStatistics;

/// Reads the input worksheet.
pub fn load_worksheet(path: &Path, sheet: Option<&str>) -> Result<Worksheet> {
    let worksheet = rules_ingest::read_worksheet(path, sheet)?;
    info!(
        path = %path.display(),
        sheet = %worksheet.name,
        rows = worksheet.len(),
        "loaded worksheet"
    );
    Ok(worksheet)
}

/// Loads mapping overrides, or the empty set when no file is given.
pub fn load_overrides(path: Option<&Path>) -> Result<MappingOverrides> {
    match path {
        Some(path) => Ok(MappingOverrides::from_path(path)?),
        None => Ok(MappingOverrides::default()),
    }
}
