//! Heuristic fit scoring against the recruiter's requirements

use crate::processing::analyzer::AnalysisResult;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Points per matching skill token
pub const SKILL_MATCH_POINTS: u32 = 1;
/// Points per experience sentence
pub const EXPERIENCE_SENTENCE_POINTS: u32 = 2;

/// Skills the recruiter asked for, lowercased, in the order they were typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequiredSkills {
    skills: Vec<String>,
    lookup: HashSet<String>,
}

impl RequiredSkills {
    /// Parse a comma-separated list. Every entry is trimmed and lowercased
    /// and kept, empty ones included, so `""` yields a single empty entry.
    pub fn parse(input: &str) -> Self {
        Self::from_entries(input.split(','))
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let skills: Vec<String> = entries
            .into_iter()
            .map(|s| s.as_ref().trim().to_lowercase())
            .collect();
        let lookup = skills.iter().cloned().collect();
        Self { skills, lookup }
    }

    /// Case-insensitive membership test
    pub fn contains(&self, skill: &str) -> bool {
        self.lookup.contains(&skill.to_lowercase())
    }

    /// Number of entries as typed, duplicates included
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.skills
    }
}

/// Score an analysis: one point per skill token found in `required` and two
/// per experience sentence.
///
/// `_min_experience_years` is part of the signature but does not enter the
/// arithmetic; only [`verdict_threshold`] uses it.
pub fn score(
    analysis: Option<&AnalysisResult>,
    required: &RequiredSkills,
    _min_experience_years: u32,
) -> u32 {
    let Some(analysis) = analysis else {
        return 0;
    };

    let skill_points = analysis
        .skills
        .iter()
        .filter(|skill| required.contains(skill))
        .count() as u32
        * SKILL_MATCH_POINTS;

    let experience_points = analysis.experience.len() as u32 * EXPERIENCE_SENTENCE_POINTS;

    skill_points + experience_points
}

/// The score a resume must exceed to count as a good fit
pub fn verdict_threshold(required: &RequiredSkills, min_experience_years: u32) -> u64 {
    required.len() as u64 + u64::from(min_experience_years) * 2
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    GoodFit,
    NotAFit,
}

impl Verdict {
    pub fn from_score(score: u32, threshold: u64) -> Self {
        if u64::from(score) > threshold {
            Verdict::GoodFit
        } else {
            Verdict::NotAFit
        }
    }

    pub fn is_good_fit(&self) -> bool {
        matches!(self, Verdict::GoodFit)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::GoodFit => write!(f, "Resume is a good fit."),
            Verdict::NotAFit => write!(f, "Resume does not meet the criteria."),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis(skills: &[&str], experience: &[&str]) -> AnalysisResult {
        AnalysisResult {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience: experience.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_parse_required_skills() {
        let required = RequiredSkills::parse(" Python, JAVA ,rust,,Go ");
        assert_eq!(required.as_slice(), ["python", "java", "rust", "", "go"]);
        assert_eq!(required.len(), 5);
        assert!(required.contains("Python"));
        assert!(required.contains("GO"));
        assert!(!required.contains("c++"));
    }

    #[test]
    fn test_empty_input_is_one_empty_skill() {
        let required = RequiredSkills::parse("");
        assert_eq!(required.len(), 1);
        assert_eq!(required.as_slice(), [""]);
    }

    #[test]
    fn test_score_counts_matches_and_experience() {
        let required = RequiredSkills::parse("python,java");
        let result = analysis(
            &["John", "Python", "Java", "skills"],
            &["John has Python experience and Java skills"],
        );
        assert_eq!(score(Some(&result), &required, 2), 4);
    }

    #[test]
    fn test_score_without_analysis_is_zero() {
        let required = RequiredSkills::parse("python");
        assert_eq!(score(None, &required, 3), 0);
    }

    #[test]
    fn test_score_ignores_min_experience_years() {
        let required = RequiredSkills::parse("python,java");
        let result = analysis(&["Python", "Java", "Python"], &["work", "role"]);

        let baseline = score(Some(&result), &required, 0);
        for years in [1, 2, 5, 10, 40, u32::MAX] {
            assert_eq!(score(Some(&result), &required, years), baseline);
        }
    }

    #[test]
    fn test_each_duplicate_skill_adds_one() {
        let required = RequiredSkills::parse("rust");
        let mut skills = vec!["Rust"];
        let mut previous = score(Some(&analysis(&skills, &[])), &required, 0);

        for _ in 0..4 {
            skills.push("rust");
            let current = score(Some(&analysis(&skills, &[])), &required, 0);
            assert_eq!(current, previous + 1);
            previous = current;
        }

        skills.push("Go");
        assert_eq!(score(Some(&analysis(&skills, &[])), &required, 0), previous);
    }

    #[test]
    fn test_each_experience_sentence_adds_two() {
        let required = RequiredSkills::parse("python");
        let mut sentences = Vec::new();
        let mut previous = score(Some(&analysis(&["Python"], &sentences)), &required, 0);
        assert_eq!(previous, 1);

        for _ in 0..3 {
            sentences.push("worked as an engineer");
            let current = score(Some(&analysis(&["Python"], &sentences)), &required, 0);
            assert_eq!(current, previous + 2);
            previous = current;
        }
    }

    #[test]
    fn test_verdict_threshold_uses_years() {
        let required = RequiredSkills::parse("python,java");
        let threshold = verdict_threshold(&required, 2);
        assert_eq!(threshold, 6);

        assert_eq!(Verdict::from_score(4, threshold), Verdict::NotAFit);
        assert_eq!(Verdict::from_score(6, threshold), Verdict::NotAFit);
        assert_eq!(Verdict::from_score(7, threshold), Verdict::GoodFit);
        assert_eq!(verdict_threshold(&required, u32::MAX), 2 + 2 * u32::MAX as u64);
    }

    #[test]
    fn test_verdict_messages() {
        assert_eq!(Verdict::GoodFit.to_string(), "Resume is a good fit.");
        assert_eq!(Verdict::NotAFit.to_string(), "Resume does not meet the criteria.");
    }
}
