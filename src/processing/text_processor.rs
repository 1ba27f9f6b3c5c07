//! Text normalization: whitespace collapse and punctuation stripping

use regex::Regex;

pub struct TextProcessor {
    whitespace_regex: Regex,
    punctuation_regex: Regex,
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor {
    pub fn new() -> Self {
        let whitespace_regex = Regex::new(r"\s+").expect("Invalid whitespace regex");
        let punctuation_regex = Regex::new(r"[^\w\s]").expect("Invalid punctuation regex");

        Self {
            whitespace_regex,
            punctuation_regex,
        }
    }

    /// Clean raw resume text for annotation.
    ///
    /// Whitespace runs (newlines and tabs included) become a single space,
    /// then every character that is neither a word character nor whitespace
    /// is removed. Stripping can leave two spaces side by side (`"a - b"`),
    /// so whitespace is normalized once more at the end.
    pub fn clean_text(&self, text: &str) -> String {
        let collapsed = self.normalize_whitespace(text);
        let stripped = self.punctuation_regex.replace_all(&collapsed, "");
        self.normalize_whitespace(&stripped)
    }

    /// Collapse whitespace runs to one space and trim the ends
    fn normalize_whitespace(&self, text: &str) -> String {
        self.whitespace_regex.replace_all(text, " ").trim().to_string()
    }
}
