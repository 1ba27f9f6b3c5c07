//! Report structures and output formatters

pub mod report;
pub mod formatter;

pub use formatter::{ConsoleFormatter, JsonFormatter, OutputFormatter, ReportGenerator};
pub use report::ScreeningReport;
