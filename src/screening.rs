//! One screening run: validate inputs, extract, clean, analyze, score

use crate::error::{Result, ScreenerError};
use crate::input::file_detector::FileType;
use crate::input::manager::InputManager;
use crate::output::report::ScreeningReport;
use crate::processing::analyzer::ResumeAnalyzer;
use crate::processing::annotator::Annotator;
use crate::processing::scorer::RequiredSkills;
use crate::processing::text_processor::TextProcessor;
use log::{debug, info};
use std::fmt;
use std::io::Write;
use std::path::PathBuf;

/// The three answers collected from the recruiter, as typed
#[derive(Debug, Clone)]
pub struct ScreeningRequest {
    pub resume_path: PathBuf,
    pub required_skills: RequiredSkills,
    pub min_experience_input: String,
}

impl ScreeningRequest {
    pub fn new(
        resume_path: impl Into<PathBuf>,
        skills_input: &str,
        min_experience_input: impl Into<String>,
    ) -> Self {
        Self {
            resume_path: resume_path.into(),
            required_skills: RequiredSkills::parse(skills_input),
            min_experience_input: min_experience_input.into(),
        }
    }
}

/// Why a run stopped before producing a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltReason {
    InvalidExperience,
    UnsupportedFormat,
    NoText,
}

impl fmt::Display for HaltReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HaltReason::InvalidExperience => {
                write!(f, "Invalid input. Please enter a valid number for experience.")
            }
            HaltReason::UnsupportedFormat => {
                write!(f, "Unsupported file format. Please provide a PDF or DOCX file.")
            }
            HaltReason::NoText => {
                write!(
                    f,
                    "No text extracted from the resume. Please check the file or its content."
                )
            }
        }
    }
}

#[derive(Debug, Clone)]
pub enum ScreeningOutcome {
    Completed(Box<ScreeningReport>),
    Halted(HaltReason),
}

/// Parse the minimum experience answer: a non-negative whole number,
/// surrounding whitespace allowed.
pub fn parse_min_years(input: &str) -> Result<u32> {
    input
        .trim()
        .parse::<u32>()
        .map_err(|e| {
            ScreenerError::InvalidInput(format!(
                "'{}' is not a number of years: {}",
                input.trim(),
                e
            ))
        })
}

pub struct ScreeningPipeline<A> {
    input_manager: InputManager,
    text_processor: TextProcessor,
    analyzer: ResumeAnalyzer<A>,
}

impl<A: Annotator> ScreeningPipeline<A> {
    pub fn new(analyzer: ResumeAnalyzer<A>) -> Self {
        Self {
            input_manager: InputManager::new(),
            text_processor: TextProcessor::new(),
            analyzer,
        }
    }

    /// Run the pipeline. Diagnostics and halt messages are written to `out`;
    /// the report itself is returned for the caller to format.
    pub fn run<W: Write>(
        &self,
        request: &ScreeningRequest,
        out: &mut W,
    ) -> Result<ScreeningOutcome> {
        let min_experience_years = match parse_min_years(&request.min_experience_input) {
            Ok(years) => years,
            Err(e) => {
                debug!("{}", e);
                return self.halt(HaltReason::InvalidExperience, out);
            }
        };

        let path = request.resume_path.as_path();
        let file_type = FileType::from_path(path);
        if file_type == FileType::Unknown {
            return self.halt(HaltReason::UnsupportedFormat, out);
        }

        let raw_text = match self.input_manager.extract_as(path, file_type) {
            Ok(text) => text,
            Err(e) => {
                writeln!(out, "Error extracting text from {}: {}", file_type.label(), e)?;
                String::new()
            }
        };

        if raw_text.is_empty() {
            return self.halt(HaltReason::NoText, out);
        }

        let cleaned = self.text_processor.clean_text(&raw_text);
        info!("Cleaned text: {} characters", cleaned.chars().count());

        let analysis = self.analyzer.analyze(&cleaned);
        let report = ScreeningReport::new(
            path,
            file_type,
            analysis,
            &request.required_skills,
            min_experience_years,
        );
        info!("Score {} against threshold {}", report.score, report.threshold);

        Ok(ScreeningOutcome::Completed(Box::new(report)))
    }

    fn halt<W: Write>(&self, reason: HaltReason, out: &mut W) -> Result<ScreeningOutcome> {
        info!("Screening halted: {:?}", reason);
        writeln!(out, "{}", reason)?;
        Ok(ScreeningOutcome::Halted(reason))
    }
}
