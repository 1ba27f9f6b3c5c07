//! Screening report assembled from the pipeline results

use crate::input::file_detector::FileType;
use crate::processing::analyzer::AnalysisResult;
use crate::processing::scorer::{self, RequiredSkills, Verdict};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

/// Everything printed at the end of a screening run
#[derive(Debug, Clone, Serialize)]
pub struct ScreeningReport {
    pub resume_path: String,
    pub file_type: FileType,
    pub skills: Vec<String>,
    pub experience: Vec<String>,
    pub score: u32,
    pub required_skills: Vec<String>,
    pub min_experience_years: u32,
    pub threshold: u64,
    pub verdict: Verdict,
    pub generated_at: DateTime<Utc>,
}

impl ScreeningReport {
    /// Score the analysis and derive the verdict
    pub fn new(
        resume_path: &Path,
        file_type: FileType,
        analysis: AnalysisResult,
        required: &RequiredSkills,
        min_experience_years: u32,
    ) -> Self {
        let score = scorer::score(Some(&analysis), required, min_experience_years);
        let threshold = scorer::verdict_threshold(required, min_experience_years);

        Self {
            resume_path: resume_path.display().to_string(),
            file_type,
            skills: analysis.skills,
            experience: analysis.experience,
            score,
            required_skills: required.as_slice().to_vec(),
            min_experience_years,
            threshold,
            verdict: Verdict::from_score(score, threshold),
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_scores_and_judges() {
        let analysis = AnalysisResult {
            skills: vec!["Python".into(), "Java".into(), "Rust".into(), "Python".into()],
            experience: vec!["a".into(), "b".into(), "c".into()],
        };
        let required = RequiredSkills::parse("python, java");

        let report =
            ScreeningReport::new(Path::new("cv.pdf"), FileType::Pdf, analysis, &required, 1);

        assert_eq!(report.score, 3 + 6);
        assert_eq!(report.threshold, 4);
        assert_eq!(report.verdict, Verdict::GoodFit);
        assert_eq!(report.required_skills, vec!["python", "java"]);
        assert_eq!(report.resume_path, "cv.pdf");
    }
}
