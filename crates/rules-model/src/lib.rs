//! Data model for spreadsheet rule conversion.
//!
//! - **cell**: tagged worksheet cell values
//! - **criteria**: canonical fields, operators and criteria
//! - **action**: per-kind rule actions
//! - **rule**: the three output rule shapes and their documents

pub mod action;
pub mod cell;
pub mod criteria;
pub mod rule;

pub use action::{
    ActionKind, Actions, CreateProgram, CreateTask, DepartmentRouting, GenerateLetter,
    TransferOwnership,
};
pub use cell::{CellValue, format_numeric, parse_f64};
pub use criteria::{Criterion, Operator, StandardField, title_case};
pub use rule::{
    AutoWorkflowDocument, AutoWorkflowRule, DEFAULT_WEIGHT, RequestTypeFilter,
    RequestWorkflowRule, SourceDateTimeField, TatDocument, TatRule, TriggerEvent, UnitsOfMeasure,
};
