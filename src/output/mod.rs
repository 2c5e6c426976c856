//! Report assembly and output formatting

pub mod formatter;
pub mod report;
