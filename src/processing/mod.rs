//! Text processing and analysis module

pub mod text_processor;
pub mod annotator;
pub mod analyzer;
pub mod scorer;

pub use analyzer::{AnalysisResult, ResumeAnalyzer};
pub use annotator::{Annotation, Annotator, LexiconTagger, PosTag, Token};
pub use scorer::{RequiredSkills, Verdict};
pub use text_processor::TextProcessor;
