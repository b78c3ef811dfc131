//! Criteria decoders.
//!
//! Two strategies share the output type:
//!
//! - **triplet scan**: repeating (field, operator, value) cells before the
//!   action boundary. Unknown fields and operators are fatal.
//! - **summary decode**: a free-text `<field> <operator phrase> <value>`
//!   chain joined by `AND`. Unparsable clauses and unknown fields are
//!   dropped with a warning.

use regex::{Regex, RegexBuilder};
use rules_map::{SummaryTables, TripletTables, normalize_label};
use rules_model::{CellValue, Criterion, Operator};
use tracing::debug;

use crate::error::DecodeError;
use crate::normalize::ValueNormalizer;

/// Result of a triplet scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripletScan {
    pub criteria: Vec<Criterion>,
    /// Cells consumed, always a multiple of three.
    pub consumed: usize,
}

/// Reads (field, operator, value) triplets from `cells[..boundary]`.
///
/// Scanning stops when fewer than three cells remain before the boundary,
/// when the field cell is empty, or when it is an action-section label.
/// A triplet whose value cell is absent advances the scan but emits nothing.
pub fn scan_triplets(
    cells: &[CellValue],
    boundary: usize,
    tables: &TripletTables,
) -> Result<TripletScan, DecodeError> {
    let normalizer = ValueNormalizer::new(&tables.sentinels);
    let end = boundary.min(cells.len());
    let mut criteria = Vec::new();
    let mut idx = 0;

    while idx + 3 <= end {
        let Some(field_label) = normalizer.present(&cells[idx]) else {
            break;
        };
        if tables.is_criteria_stop(&field_label) {
            break;
        }
        let field = tables
            .fields
            .get(&field_label)
            .ok_or_else(|| DecodeError::UnknownField {
                label: field_label.clone(),
            })?;
        let operator_label = cells[idx + 1]
            .render()
            .map(|text| text.trim().to_string())
            .unwrap_or_default();
        let operator =
            tables
                .operators
                .get(&operator_label)
                .ok_or_else(|| DecodeError::UnknownOperator {
                    label: operator_label.clone(),
                    field: field_label.clone(),
                })?;

        let values = normalizer.split_multi_value(&cells[idx + 2]);
        if !values.is_empty() {
            criteria.push(Criterion::new(field, operator, values));
        }
        idx += 3;
    }

    Ok(TripletScan {
        criteria,
        consumed: idx,
    })
}

/// Why a summary clause was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClauseRejection {
    /// No `<field> <operator> <value>` shape was found.
    NoOperator,
    UnknownField { field: String },
    /// The value is blank once quotes are stripped.
    EmptyValue,
}

impl ClauseRejection {
    pub fn describe(&self) -> String {
        match self {
            ClauseRejection::NoOperator => "no recognised operator".to_string(),
            ClauseRejection::UnknownField { field } => format!("unknown field '{field}'"),
            ClauseRejection::EmptyValue => "empty value".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedClause {
    pub clause: String,
    pub rejection: ClauseRejection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryDecode {
    pub criteria: Vec<Criterion>,
    pub dropped: Vec<DroppedClause>,
}

/// Decodes conjunctive rule summaries.
///
/// Operator phrases are compiled longest first into one alternation, so
/// `is not in the group` is always tried before `is not` and `is`.
#[derive(Debug, Clone)]
pub struct SummaryDecoder<'a> {
    tables: &'a SummaryTables,
    delimiter: Regex,
    clause: Regex,
}

impl<'a> SummaryDecoder<'a> {
    pub fn new(tables: &'a SummaryTables) -> Result<Self, regex::Error> {
        let delimiter = RegexBuilder::new(&format!(
            r"\s+{}\s+",
            regex::escape(tables.clause_delimiter.trim())
        ))
        .case_insensitive(true)
        .build()?;

        let phrases = tables
            .operator_phrases()
            .into_iter()
            .map(|(phrase, _)| phrase_pattern(&phrase))
            .collect::<Vec<_>>()
            .join("|");
        let clause = RegexBuilder::new(&format!(r#"^(.+?)\s+({phrases})\s+['"]?(.+?)['"]?\s*$"#))
            .case_insensitive(true)
            .build()?;

        Ok(Self {
            tables,
            delimiter,
            clause,
        })
    }

    pub fn decode(&self, summary: &str) -> SummaryDecode {
        let mut decoded = SummaryDecode::default();
        for clause in self.delimiter.split(summary) {
            let clause = clause.trim();
            if clause.is_empty() {
                continue;
            }
            match self.decode_clause(clause) {
                Ok(criterion) => decoded.criteria.push(criterion),
                Err(rejection) => decoded.dropped.push(DroppedClause {
                    clause: clause.to_string(),
                    rejection,
                }),
            }
        }
        decoded
    }

    fn decode_clause(&self, clause: &str) -> Result<Criterion, ClauseRejection> {
        let captures = self
            .clause
            .captures(clause)
            .ok_or(ClauseRejection::NoOperator)?;
        let field_text = captures.get(1).map_or("", |m| m.as_str()).trim();
        let phrase = captures.get(2).map_or("", |m| m.as_str());
        let value = captures
            .get(3)
            .map_or("", |m| m.as_str())
            .trim()
            .trim_matches(['\'', '"']);

        let field = self
            .tables
            .fields
            .get(field_text)
            .ok_or_else(|| ClauseRejection::UnknownField {
                field: field_text.to_string(),
            })?;
        if value.trim().is_empty() {
            return Err(ClauseRejection::EmptyValue);
        }
        let operator = self
            .tables
            .operators
            .get(&normalize_label(phrase))
            .unwrap_or(Operator::In);
        debug!(field = %field, operator = %operator, value, "decoded summary clause");
        Ok(Criterion::new(field, operator, vec![value.to_string()]))
    }
}

fn phrase_pattern(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+")
}
