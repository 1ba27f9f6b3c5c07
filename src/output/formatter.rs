//! Output formatters: console text and JSON

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::ScreeningReport;
use colored::{Color, Colorize};

/// Trait for formatting screening reports
pub trait OutputFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Plain report on the terminal, optionally colored
pub struct ConsoleFormatter {
    use_colors: bool,
}

/// JSON document for piping into other tools
pub struct JsonFormatter {
    pretty: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{}\n", title.bold())
        } else {
            format!("\n{}\n", title)
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("Analysis Results:"));
        output.push_str(&format!("Skills: {:?}\n", report.skills));
        output.push_str(&format!("Experience snippets: {:?}\n", report.experience));

        output.push_str(&format!(
            "\nResume Score: {}\n",
            self.colorize(&report.score.to_string(), Color::Cyan)
        ));
        output.push_str(&format!("Required Skills: {:?}\n", report.required_skills));
        output.push_str(&format!("Minimum Experience (Years): {}\n", report.min_experience_years));

        let verdict_color = if report.verdict.is_good_fit() {
            Color::Green
        } else {
            Color::Red
        };
        output.push_str(&self.colorize(&report.verdict.to_string(), verdict_color));
        output.push('\n');

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl ReportGenerator {
    pub fn new(use_colors: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors),
            json_formatter: JsonFormatter::new(true),
        }
    }

    pub fn generate_report(
        &self,
        report: &ScreeningReport,
        format: OutputFormat,
    ) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new(true)
    }
}
