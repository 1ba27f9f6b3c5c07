//! Resume analysis: skill tokens and experience sentences

use crate::error::{Result, ScreenerError};
use crate::processing::annotator::Annotator;
use aho_corasick::AhoCorasick;
use log::debug;

/// Keywords that mark a sentence as describing work history
pub const DEFAULT_EXPERIENCE_KEYWORDS: [&str; 5] =
    ["experience", "work", "job", "position", "role"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisResult {
    /// Noun and proper-noun tokens in document order, duplicates kept
    pub skills: Vec<String>,
    /// Sentences mentioning an experience keyword
    pub experience: Vec<String>,
}

pub struct ResumeAnalyzer<A> {
    annotator: A,
    keywords: Vec<String>,
    keyword_matcher: AhoCorasick,
}

impl<A: Annotator> ResumeAnalyzer<A> {
    /// Create an analyzer with the default experience keywords
    pub fn new(annotator: A) -> Result<Self> {
        Self::with_keywords(annotator, DEFAULT_EXPERIENCE_KEYWORDS.iter().map(|k| k.to_string()))
    }

    pub fn with_keywords<I>(annotator: A, keywords: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let keywords: Vec<String> = keywords.into_iter().map(|k| k.to_lowercase()).collect();
        let keyword_matcher = AhoCorasick::new(&keywords).map_err(|e| {
            ScreenerError::Configuration(format!(
                "Failed to build experience keyword matcher: {}",
                e
            ))
        })?;

        Ok(Self {
            annotator,
            keywords,
            keyword_matcher,
        })
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Annotate cleaned text and pull out skills and experience sentences
    pub fn analyze(&self, cleaned_text: &str) -> AnalysisResult {
        let annotation = self.annotator.annotate(cleaned_text);

        let skills: Vec<String> = annotation
            .tokens
            .into_iter()
            .filter(|token| token.pos.is_nominal())
            .map(|token| token.text)
            .collect();

        let experience: Vec<String> = annotation
            .sentences
            .into_iter()
            .filter(|sentence| self.mentions_experience(sentence))
            .collect();

        debug!(
            "Analysis found {} skill tokens and {} experience sentences",
            skills.len(),
            experience.len()
        );

        AnalysisResult { skills, experience }
    }

    /// Substring match against the lowercased sentence, so "networking"
    /// counts as a mention of "work".
    pub fn mentions_experience(&self, sentence: &str) -> bool {
        self.keyword_matcher.is_match(&sentence.to_lowercase())
    }
}
