//! Output formatting for analysis results

pub mod formatter;

pub use formatter::{OutputFormatter, ReportGenerator};
