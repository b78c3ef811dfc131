//! Mapping override files.
//!
//! An override file extends the built-in tables of one rule family without
//! recompiling:
//!
//! ```toml
//! sentinels = ["*", "[NULL]", "(null)", "N/A"]
//! default_action_column = 9
//!
//! [fields]
//! "Member Plan" = "ENROLLMENT_PLAN"
//!
//! [operators]
//! "equals" = "EQUALS"
//! ```
//!
//! Canonical values are closed enums, so a misspelled target is rejected
//! when the file is parsed.

use std::collections::BTreeMap;
use std::path::Path;

use rules_model::{Operator, SourceDateTimeField, StandardField, UnitsOfMeasure};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{MapError, Result};
use crate::sentinel::Sentinels;
use crate::summary::SummaryTables;
use crate::tat::TatTables;
use crate::triplet::TripletTables;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MappingOverrides {
    /// Source label to canonical field. For TAT these are criteria column names.
    pub fields: BTreeMap<String, StandardField>,
    pub operators: BTreeMap<String, Operator>,
    /// TAT `DUE_DATE_UNITS` codes.
    pub units: BTreeMap<String, UnitsOfMeasure>,
    /// TAT `DATE_TO_CALC_FROM` codes.
    pub source_dates: BTreeMap<String, SourceDateTimeField>,
    /// Replaces the sentinel token set when present.
    pub sentinels: Option<Vec<String>>,
    /// Triplet family action-boundary fallback (0-based column).
    pub default_action_column: Option<usize>,
}

impl MappingOverrides {
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| MapError::io(path, source))?;
        let overrides: Self = toml::from_str(&text).map_err(|source| MapError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            path = %path.display(),
            fields = overrides.fields.len(),
            operators = overrides.operators.len(),
            "loaded mapping overrides"
        );
        Ok(overrides)
    }

    fn sentinels(&self) -> Option<Sentinels> {
        self.sentinels.as_ref().map(Sentinels::new)
    }

    fn warn_ignored(&self, family: &str, tat_only: bool, triplet_only: bool) {
        if tat_only && (!self.units.is_empty() || !self.source_dates.is_empty()) {
            warn!(family, "units and source_dates overrides only apply to TAT rules; ignoring");
        }
        if triplet_only && self.default_action_column.is_some() {
            warn!(family, "default_action_column only applies to triplet rules; ignoring");
        }
    }

    pub fn apply_triplet(&self, tables: &mut TripletTables) {
        self.warn_ignored("lum", true, false);
        for (label, field) in &self.fields {
            tables.fields.insert(label, *field);
        }
        for (label, operator) in &self.operators {
            tables.operators.insert(label, *operator);
        }
        if let Some(sentinels) = self.sentinels() {
            tables.sentinels = sentinels;
        }
        if let Some(column) = self.default_action_column {
            tables.default_action_column = column;
        }
    }

    pub fn apply_tat(&self, tables: &mut TatTables) {
        self.warn_ignored("tat", false, true);
        if !self.operators.is_empty() {
            warn!("TAT criteria always use EQUALS; ignoring operator overrides");
        }
        for (column, field) in &self.fields {
            tables.set_criteria_column(column, *field);
        }
        for (code, units) in &self.units {
            tables.units.insert(code, *units);
        }
        for (code, source) in &self.source_dates {
            tables.source_dates.insert(code, *source);
        }
        if let Some(sentinels) = self.sentinels() {
            tables.sentinels = sentinels;
        }
    }

    pub fn apply_summary(&self, tables: &mut SummaryTables) {
        self.warn_ignored("workflow", true, true);
        for (label, field) in &self.fields {
            tables.fields.insert(label, *field);
        }
        for (phrase, operator) in &self.operators {
            tables.operators.insert(phrase, *operator);
        }
        if let Some(sentinels) = self.sentinels() {
            tables.sentinels = sentinels;
        }
    }
}
