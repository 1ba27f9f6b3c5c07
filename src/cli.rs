//! CLI interface for the resume screener

use crate::config::OutputFormat;
use crate::error::{Result, ScreenerError};
use crate::screening::ScreeningRequest;
use clap::Parser;
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub const RESUME_PROMPT: &str = "Enter the path to the resume file (PDF or DOCX): ";
pub const SKILLS_PROMPT: &str = "Enter required skills (comma-separated): ";
pub const EXPERIENCE_PROMPT: &str = "Enter minimum required experience in years: ";

#[derive(Parser, Debug)]
#[command(name = "resume-screener")]
#[command(about = "Score a PDF or DOCX resume against required skills and experience")]
#[command(long_about = "Extract skills and experience mentions from a resume and compute \
a heuristic fit score. Any input not given as a flag is asked for interactively.")]
pub struct Cli {
    /// Path to resume file (PDF or DOCX)
    #[arg(short, long)]
    pub resume: Option<PathBuf>,

    /// Required skills, comma-separated
    #[arg(short, long)]
    pub skills: Option<String>,

    /// Minimum required experience in years
    #[arg(short, long, allow_hyphen_values = true)]
    pub min_years: Option<String>,

    /// Output format: console, json
    #[arg(short, long)]
    pub output: Option<String>,

    /// Disable colored console output
    #[arg(long)]
    pub no_color: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Build the screening request, prompting for every value that was not
    /// passed as a flag. Prompts follow the order path, skills, years.
    pub fn collect_request<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
    ) -> Result<ScreeningRequest> {
        let resume_path = match &self.resume {
            Some(path) => path.clone(),
            None => PathBuf::from(prompt(input, output, RESUME_PROMPT)?),
        };

        let skills = match &self.skills {
            Some(skills) => skills.clone(),
            None => prompt(input, output, SKILLS_PROMPT)?,
        };

        let min_years = match &self.min_years {
            Some(years) => years.clone(),
            None => prompt(input, output, EXPERIENCE_PROMPT)?,
        };

        Ok(ScreeningRequest::new(resume_path, &skills, min_years))
    }
}

/// Print `message` and read one line, without its line terminator
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> Result<String> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(ScreenerError::InvalidInput(
            "Input ended before all answers were given".to_string(),
        ));
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> std::result::Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        _ => Err(format!("Invalid output format: {}. Supported: console, json", format)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_prompts_in_order() {
        let cli = Cli::parse_from(["resume-screener"]);
        let mut input = Cursor::new("cv/jane.pdf\r\nPython, Java\n3\n");
        let mut output = Vec::new();

        let request = cli.collect_request(&mut input, &mut output).unwrap();

        assert_eq!(request.resume_path, PathBuf::from("cv/jane.pdf"));
        assert_eq!(request.required_skills.as_slice(), ["python", "java"]);
        assert_eq!(request.min_experience_input, "3");
        assert_eq!(
            String::from_utf8(output).unwrap(),
            format!("{}{}{}", RESUME_PROMPT, SKILLS_PROMPT, EXPERIENCE_PROMPT)
        );
    }

    #[test]
    fn test_flags_skip_prompts() {
        let cli = Cli::parse_from(["resume-screener", "--resume", "cv.docx", "-m", "-2"]);
        let mut input = Cursor::new("rust\n");
        let mut output = Vec::new();

        let request = cli.collect_request(&mut input, &mut output).unwrap();

        assert_eq!(request.resume_path, PathBuf::from("cv.docx"));
        assert_eq!(request.required_skills.as_slice(), ["rust"]);
        assert_eq!(request.min_experience_input, "-2");
        assert_eq!(String::from_utf8(output).unwrap(), SKILLS_PROMPT);
    }

    #[test]
    fn test_closed_input_is_an_error() {
        let cli = Cli::parse_from(["resume-screener", "-r", "cv.pdf"]);
        let mut input = Cursor::new("python\n");
        let mut output = Vec::new();

        assert!(matches!(
            cli.collect_request(&mut input, &mut output),
            Err(ScreenerError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON"), Ok(OutputFormat::Json));
        assert_eq!(parse_output_format("console"), Ok(OutputFormat::Console));
        assert!(parse_output_format("html").is_err());
    }
}
