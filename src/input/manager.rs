//! Input manager: validates the resume path and routes it to an extractor

use crate::error::{Result, ScreenerError};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{DocxExtractor, PdfExtractor, TextExtractor};
use log::{info, warn};
use std::path::Path;

#[derive(Default)]
pub struct InputManager {
    pdf_extractor: PdfExtractor,
    docx_extractor: DocxExtractor,
}

impl InputManager {
    pub fn new() -> Self {
        Self {
            pdf_extractor: PdfExtractor,
            docx_extractor: DocxExtractor::new(),
        }
    }

    /// Extract the raw text of `path`, choosing the extractor from its extension.
    pub fn extract_text(&self, path: &Path) -> Result<String> {
        self.extract_as(path, FileType::from_path(path))
    }

    /// Extract the raw text of `path` as the given `file_type`.
    pub fn extract_as(&self, path: &Path, file_type: FileType) -> Result<String> {
        let extractor: &dyn TextExtractor = match file_type {
            FileType::Pdf => &self.pdf_extractor,
            FileType::Docx => &self.docx_extractor,
            FileType::Unknown => {
                return Err(ScreenerError::UnsupportedFormat(format!(
                    "Unsupported file type for: {}",
                    path.display()
                )));
            }
        };

        if !path.exists() {
            return Err(ScreenerError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        info!("Extracting text from {}: {}", file_type.label(), path.display());
        let result = extractor.extract(path);

        match &result {
            Ok(text) => info!("Extracted {} characters", text.chars().count()),
            Err(e) => warn!("{} extraction failed: {}", file_type.label(), e),
        }
        result
    }
}
