//! Library components of the rule conversion CLI.

pub mod logging;
pub mod output;
