//! Text extraction from PDF and DOCX resumes

use crate::error::{Result, ScreenerError};
use regex::{Captures, Regex};
use std::fs::{self, File};
use std::io::Read;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;

pub trait TextExtractor {
    fn extract(&self, path: &Path) -> Result<String>;
}

#[derive(Default)]
pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let bytes = fs::read(path)?;

        // pdf-extract panics on some malformed content streams instead of
        // returning an error, so treat a panic as a failed extraction.
        let extracted = panic::catch_unwind(AssertUnwindSafe(|| {
            pdf_extract::extract_text_from_mem(&bytes)
        }))
        .map_err(|_| {
            ScreenerError::PdfExtraction(format!(
                "PDF parser aborted while reading '{}'",
                path.display()
            ))
        })?;

        let text = extracted.map_err(|e| {
            ScreenerError::PdfExtraction(format!(
                "Failed to extract text from PDF '{}': {}",
                path.display(),
                e
            ))
        })?;
        Ok(text)
    }
}

/// Main document part of a WordprocessingML package.
const DOCX_DOCUMENT_PART: &str = "word/document.xml";

pub struct DocxExtractor {
    run_regex: Regex,
    entity_regex: Regex,
}

impl Default for DocxExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for DocxExtractor {
    fn extract(&self, path: &Path) -> Result<String> {
        let file = File::open(path)?;
        let mut archive = zip::ZipArchive::new(file).map_err(|e| {
            ScreenerError::DocxExtraction(format!(
                "'{}' is not a DOCX package: {}",
                path.display(),
                e
            ))
        })?;

        let mut xml = String::new();
        archive
            .by_name(DOCX_DOCUMENT_PART)
            .map_err(|e| {
                ScreenerError::DocxExtraction(format!(
                    "'{}' has no {}: {}",
                    path.display(),
                    DOCX_DOCUMENT_PART,
                    e
                ))
            })?
            .read_to_string(&mut xml)?;

        Ok(self.xml_to_text(&xml))
    }
}

impl DocxExtractor {
    pub fn new() -> Self {
        let run_regex = Regex::new(
            r"<w:t(?:\s[^>]*)?>([^<]*)</w:t>|<w:tab/>|<w:(?:br|cr)(?:\s[^>]*)?/>|</w:p>",
        )
        .expect("Invalid DOCX run regex");
        let entity_regex = Regex::new(r"&(?:#x([0-9a-fA-F]+)|#([0-9]+)|(amp|lt|gt|quot|apos));")
            .expect("Invalid XML entity regex");

        Self {
            run_regex,
            entity_regex,
        }
    }

    /// Collect `<w:t>` runs in document order. Tabs, breaks and paragraph
    /// ends become whitespace so words in adjacent paragraphs stay apart.
    pub fn xml_to_text(&self, xml: &str) -> String {
        let mut text = String::new();
        for caps in self.run_regex.captures_iter(xml) {
            match caps.get(1) {
                Some(run) => text.push_str(&self.decode_entities(run.as_str())),
                None => {
                    let tag = &caps[0];
                    if tag == "<w:tab/>" {
                        text.push('\t');
                    } else if tag == "</w:p>" {
                        text.push_str("\n\n");
                    } else {
                        text.push('\n');
                    }
                }
            }
        }

        text.trim().to_string()
    }

    /// Decode the predefined XML entities and numeric character references.
    fn decode_entities(&self, text: &str) -> String {
        if !text.contains('&') {
            return text.to_string();
        }

        self.entity_regex
            .replace_all(text, |caps: &Captures| {
                let decoded = if let Some(hex) = caps.get(1) {
                    u32::from_str_radix(hex.as_str(), 16).ok().and_then(char::from_u32)
                } else if let Some(dec) = caps.get(2) {
                    dec.as_str().parse::<u32>().ok().and_then(char::from_u32)
                } else {
                    match &caps[3] {
                        "amp" => Some('&'),
                        "lt" => Some('<'),
                        "gt" => Some('>'),
                        "quot" => Some('"'),
                        _ => Some('\''),
                    }
                };
                decoded
                    .map(String::from)
                    .unwrap_or_else(|| caps[0].to_string())
            })
            .into_owned()
    }
}
