//! Mapping tables from spreadsheet labels to the canonical rule vocabulary.
//!
//! Each rule family gets one immutable table struct whose `Default` holds the
//! built-in mappings. Decoders receive the tables explicitly; there is no
//! shared global state. A [`MappingOverrides`] file can extend the built-ins
//! before conversion starts.

pub mod error;
pub mod label;
pub mod overrides;
pub mod sentinel;
pub mod summary;
pub mod tat;
pub mod triplet;

pub use error::{MapError, Result};
pub use label::{LabelMap, normalize_label};
pub use overrides::MappingOverrides;
pub use sentinel::{STANDARD_SENTINELS, Sentinels};
pub use summary::{DEFAULT_WORKFLOW_SHEET, SummaryTables};
pub use tat::TatTables;
pub use triplet::{DEFAULT_ACTION_COLUMN, TripletTables};
