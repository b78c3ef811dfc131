//! One converter per rule family.

pub mod lum;
pub mod tat;
pub mod workflow;

pub use lum::convert_lum;
pub use tat::convert_tat;
pub use workflow::convert_workflow;
