//! Part-of-speech annotation and sentence segmentation
//!
//! The analyzer only depends on the [`Annotator`] trait so the tagger can be
//! swapped for a fixed stub in tests. [`LexiconTagger`] is the English tagger
//! used by the binary: Unicode word and sentence boundaries, a closed-class
//! lexicon, a small open-class lexicon for frequent resume vocabulary and
//! suffix rules, with nouns as the fallback.
//!
//! Cleaned resume text carries no sentence punctuation, so Unicode sentence
//! bounds alone yield one sentence per document. A capitalised common word
//! in the middle of a sentence (`... at Acme Worked on payments ...`) is
//! taken as the start of a new one, which recovers the line structure of
//! the original document.

use std::collections::HashMap;
use unicode_segmentation::UnicodeSegmentation;

/// Universal part-of-speech tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    Noun,
    PropNoun,
    Verb,
    Aux,
    Adj,
    Adv,
    Pron,
    Det,
    Adp,
    CConj,
    SConj,
    Num,
    Part,
    Intj,
    Punct,
    Sym,
    X,
}

impl PosTag {
    /// Common or proper noun
    pub fn is_nominal(&self) -> bool {
        matches!(self, PosTag::Noun | PosTag::PropNoun)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub pos: PosTag,
}

impl Token {
    pub fn new(text: impl Into<String>, pos: PosTag) -> Self {
        Self {
            text: text.into(),
            pos,
        }
    }
}

/// Tokens in document order plus the sentence segmentation of the same text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotation {
    pub tokens: Vec<Token>,
    pub sentences: Vec<String>,
}

pub trait Annotator {
    fn annotate(&self, text: &str) -> Annotation;
}

/// Rule and lexicon based English tagger.
pub struct LexiconTagger {
    closed_class: HashMap<&'static str, PosTag>,
    open_class: HashMap<&'static str, PosTag>,
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl Annotator for LexiconTagger {
    fn annotate(&self, text: &str) -> Annotation {
        let mut annotation = Annotation::default();

        for bound in text.split_sentence_bounds() {
            if !bound.chars().any(char::is_alphanumeric) {
                continue;
            }

            let mut start = 0;
            let mut sentence_initial = true;
            for (offset, word) in bound.split_word_bound_indices() {
                if word.chars().all(char::is_whitespace) {
                    continue;
                }

                if !sentence_initial && self.opens_sentence(word) {
                    annotation.sentences.push(bound[start..offset].trim().to_string());
                    start = offset;
                    sentence_initial = true;
                }

                let pos = self.tag_word(word, sentence_initial);
                sentence_initial = false;
                annotation.tokens.push(Token::new(word, pos));
            }

            annotation.sentences.push(bound[start..].trim().to_string());
        }

        annotation
    }
}

impl LexiconTagger {
    pub fn new() -> Self {
        let mut closed_class = HashMap::new();
        for (tag, words) in Self::closed_class_words() {
            for word in words.iter() {
                closed_class.insert(*word, *tag);
            }
        }

        let mut open_class = HashMap::new();
        for (tag, words) in Self::open_class_words() {
            for word in words.iter() {
                open_class.insert(*word, *tag);
            }
        }

        Self {
            closed_class,
            open_class,
        }
    }

    /// Tag a single word token. `sentence_initial` relaxes the
    /// capitalisation rule, since the first word of a sentence is
    /// capitalised regardless of its category.
    pub fn tag_word(&self, word: &str, sentence_initial: bool) -> PosTag {
        if !word.chars().any(char::is_alphanumeric) {
            return if word.chars().all(|c| c.is_ascii_punctuation() || is_unicode_punctuation(c)) {
                PosTag::Punct
            } else {
                PosTag::Sym
            };
        }

        if word.chars().all(char::is_numeric) {
            return PosTag::Num;
        }

        if is_acronym(word) {
            return PosTag::PropNoun;
        }

        let lower = word.to_lowercase();
        if let Some(tag) = self.closed_class.get(lower.as_str()) {
            return *tag;
        }

        let has_upper = word.chars().any(char::is_uppercase);
        if has_upper {
            if sentence_initial && is_titlecase(word) {
                return self
                    .open_class
                    .get(lower.as_str())
                    .copied()
                    .or_else(|| suffix_tag(&lower))
                    .unwrap_or(PosTag::PropNoun);
            }
            return PosTag::PropNoun;
        }

        if let Some(tag) = self.open_class.get(lower.as_str()) {
            return *tag;
        }

        suffix_tag(&lower).unwrap_or(PosTag::Noun)
    }

    /// A title-case word that the lexicons or suffix rules know as a common
    /// word. Mid-sentence, such a word only appears capitalised when it
    /// starts a new line or heading. `I` is always capitalised and excluded.
    fn opens_sentence(&self, word: &str) -> bool {
        if word.chars().count() < 2 || !is_titlecase(word) {
            return false;
        }

        let lower = word.to_lowercase();
        self.closed_class.contains_key(lower.as_str())
            || self.open_class.contains_key(lower.as_str())
            || suffix_tag(&lower).is_some()
    }

    fn closed_class_words() -> &'static [(PosTag, &'static [&'static str])] {
        &[
            (PosTag::Det, &[
                "a", "an", "the", "this", "that", "these", "those", "each", "every",
                "some", "any", "no", "all", "both", "either", "neither", "another",
                "such", "my", "your", "his", "its", "our", "their", "whose",
            ]),
            (PosTag::Pron, &[
                "i", "me", "you", "he", "him", "she", "her", "it", "we", "us", "they",
                "them", "myself", "yourself", "himself", "herself", "itself",
                "ourselves", "themselves", "who", "whom", "what", "which", "mine",
                "yours", "hers", "ours", "theirs", "someone", "anyone", "everyone",
                "something", "anything", "everything", "nothing", "nobody",
            ]),
            (PosTag::Adp, &[
                "in", "on", "at", "by", "for", "with", "from", "of", "about", "into",
                "onto", "over", "under", "through", "during", "across", "after",
                "before", "between", "among", "within", "without", "via", "per",
                "until", "against", "toward", "towards", "upon", "around", "behind",
                "beyond", "throughout", "including", "like", "near", "inside",
                "outside", "along", "above", "below", "except",
            ]),
            (PosTag::Part, &["to", "not"]),
            (PosTag::CConj, &["and", "or", "but", "nor", "yet", "plus"]),
            (PosTag::SConj, &[
                "if", "because", "while", "although", "though", "whether", "as",
                "so", "than", "when", "where", "unless", "whereas", "since",
            ]),
            (PosTag::Aux, &[
                "is", "am", "are", "was", "were", "be", "been", "being", "have",
                "has", "had", "having", "do", "does", "did", "will", "would",
                "shall", "should", "can", "could", "may", "might", "must",
            ]),
            (PosTag::Num, &[
                "zero", "one", "two", "three", "four", "five", "six", "seven",
                "eight", "nine", "ten", "eleven", "twelve", "fifteen", "twenty",
                "thirty", "forty", "fifty", "hundred", "thousand", "million",
            ]),
            (PosTag::Intj, &["yes", "hello", "hi", "oh", "ok", "okay"]),
        ]
    }

    fn open_class_words() -> &'static [(PosTag, &'static [&'static str])] {
        &[
            (PosTag::Verb, &[
                "lead", "leads", "led", "build", "builds", "built", "develop",
                "develops", "design", "designs", "manage", "manages", "create",
                "creates", "implement", "implements", "maintain", "maintains",
                "use", "uses", "make", "makes", "made", "write", "writes", "wrote",
                "written", "run", "runs", "ran", "drive", "drives", "drove",
                "improve", "improves", "reduce", "reduces", "increase",
                "increases", "deliver", "delivers", "ensure", "ensures", "enable",
                "enables", "know", "knows", "knew", "known", "get", "gets", "got",
                "take", "takes", "took", "taken", "give", "gives", "gave", "given",
                "see", "sees", "saw", "seen", "go", "goes", "went", "gone", "come",
                "comes", "came", "seek", "seeks", "join", "joins", "help", "helps",
                "collaborate", "collaborates", "coordinate", "coordinates",
                "oversee", "oversees", "oversaw", "grow", "grows", "grew", "grown",
                "teach", "teaches", "taught", "bring", "brings", "brought",
            ]),
            (PosTag::Adj, &[
                "good", "great", "new", "old", "senior", "junior", "strong",
                "excellent", "large", "small", "high", "low", "big", "full",
                "various", "several", "other", "many", "more", "most", "best",
                "better", "last", "key", "main", "major", "proficient", "familiar",
                "fluent", "remote", "technical", "professional", "personal",
                "international", "national", "global", "digital", "social",
                "internal", "external", "general", "critical", "analytical",
                "practical", "real", "same", "different", "current", "previous",
                "recent", "early", "late", "long", "short", "fast", "quick",
                "robust", "complex", "simple", "annual", "dynamic", "strategic",
                "academic", "scientific", "agile",
            ]),
            (PosTag::Noun, &[
                "experience", "education", "skills", "summary", "role", "position",
                "job", "work", "projects", "responsibilities", "achievements",
                "certifications", "languages", "references", "profile",
                "employment", "history", "interests", "duties",
            ]),
            (PosTag::Adv, &[
                "also", "well", "very", "too", "now", "then", "there", "here",
                "always", "never", "often", "still", "just", "even", "only",
                "again", "already", "together", "currently", "recently",
            ]),
        ]
    }
}

/// Suffix heuristics for words missing from both lexicons
fn suffix_tag(lower: &str) -> Option<PosTag> {
    const NOUN_EXCEPTIONS: &[&str] = &[
        "executive", "objective", "initiative", "representative", "detective",
        "alternative", "incentive", "perspective", "directive", "supply",
        "family", "assembly", "anomaly", "reply", "butterfly", "ally", "rally",
        "bed", "red", "need", "seed", "speed", "feed", "shed", "bled",
        "cable", "table", "variable", "deliverable", "bible",
    ];

    if lower.chars().count() < 4 || NOUN_EXCEPTIONS.contains(&lower) {
        return None;
    }

    if lower.ends_with("ly") {
        Some(PosTag::Adv)
    } else if lower.ends_with("ed") || lower.ends_with("ize") {
        Some(PosTag::Verb)
    } else if ["ous", "ful", "less", "able", "ible", "ive"]
        .iter()
        .any(|suffix| lower.ends_with(suffix))
    {
        Some(PosTag::Adj)
    } else {
        None
    }
}

/// Two or more letters, all uppercase (`SQL`, `AWS`, `CI3`)
fn is_acronym(word: &str) -> bool {
    let letters: Vec<char> = word.chars().filter(|c| c.is_alphabetic()).collect();
    letters.len() >= 2 && letters.iter().all(|c| c.is_uppercase())
}

/// First letter uppercase, the rest lowercase (`Developed`, not `JavaScript`)
fn is_titlecase(word: &str) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if first.is_uppercase() => chars.all(|c| !c.is_uppercase()),
        _ => false,
    }
}

fn is_unicode_punctuation(c: char) -> bool {
    matches!(c, '\u{2010}'..='\u{2027}' | '\u{2030}'..='\u{205E}' | '\u{3000}'..='\u{303F}')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(annotation: &Annotation) -> Vec<(&str, PosTag)> {
        annotation
            .tokens
            .iter()
            .map(|t| (t.text.as_str(), t.pos))
            .collect()
    }

    #[test]
    fn test_tags_simple_resume_sentence() {
        let tagger = LexiconTagger::new();
        let annotation = tagger.annotate("John has Python experience and Java skills");

        assert_eq!(
            tags(&annotation),
            vec![
                ("John", PosTag::PropNoun),
                ("has", PosTag::Aux),
                ("Python", PosTag::PropNoun),
                ("experience", PosTag::Noun),
                ("and", PosTag::CConj),
                ("Java", PosTag::PropNoun),
                ("skills", PosTag::Noun),
            ]
        );
        assert_eq!(annotation.sentences, vec!["John has Python experience and Java skills"]);
    }

    #[test]
    fn test_sentence_initial_capitals() {
        let tagger = LexiconTagger::new();
        assert_eq!(tagger.tag_word("The", true), PosTag::Det);
        assert_eq!(tagger.tag_word("Developed", true), PosTag::Verb);
        assert_eq!(tagger.tag_word("Led", true), PosTag::Verb);
        assert_eq!(tagger.tag_word("Kubernetes", true), PosTag::PropNoun);
        assert_eq!(tagger.tag_word("Led", false), PosTag::PropNoun);
    }

    #[test]
    fn test_acronyms_and_mixed_case_are_proper_nouns() {
        let tagger = LexiconTagger::new();
        assert_eq!(tagger.tag_word("SQL", false), PosTag::PropNoun);
        assert_eq!(tagger.tag_word("AWS", true), PosTag::PropNoun);
        assert_eq!(tagger.tag_word("JavaScript", true), PosTag::PropNoun);
        assert_eq!(tagger.tag_word("iOS", false), PosTag::PropNoun);
        assert_eq!(tagger.tag_word("I", true), PosTag::Pron);
        assert_eq!(tagger.tag_word("C", false), PosTag::PropNoun);
    }

    #[test]
    fn test_lowercase_fallbacks() {
        let tagger = LexiconTagger::new();
        assert_eq!(tagger.tag_word("kubernetes", false), PosTag::Noun);
        assert_eq!(tagger.tag_word("quickly", false), PosTag::Adv);
        assert_eq!(tagger.tag_word("managed", false), PosTag::Verb);
        assert_eq!(tagger.tag_word("optimize", false), PosTag::Verb);
        assert_eq!(tagger.tag_word("responsible", false), PosTag::Adj);
        assert_eq!(tagger.tag_word("executive", false), PosTag::Noun);
        assert_eq!(tagger.tag_word("programming", false), PosTag::Noun);
        assert_eq!(tagger.tag_word("2019", false), PosTag::Num);
        assert_eq!(tagger.tag_word("five", false), PosTag::Num);
    }

    #[test]
    fn test_punctuated_text_is_segmented() {
        let tagger = LexiconTagger::new();
        let annotation = tagger.annotate("I write Rust. My last role was at Acme!  ");

        assert_eq!(annotation.sentences, vec!["I write Rust.", "My last role was at Acme!"]);
        assert_eq!(annotation.tokens.last().map(|t| t.pos), Some(PosTag::Punct));
        let nominal: Vec<&str> = annotation
            .tokens
            .iter()
            .filter(|t| t.pos.is_nominal())
            .map(|t| t.text.as_str())
            .collect();
        assert_eq!(nominal, vec!["Rust", "role", "Acme"]);
    }

    #[test]
    fn test_capitalised_common_words_open_sentences() {
        let tagger = LexiconTagger::new();
        let annotation = tagger.annotate(
            "Software engineer at Acme Worked on payments for five years \
             Previous job at Initech Role backend lead",
        );

        assert_eq!(
            annotation.sentences,
            vec![
                "Software engineer at Acme",
                "Worked on payments for five years",
                "Previous job at Initech",
                "Role backend lead",
            ]
        );
        let worked = annotation.tokens.iter().find(|t| t.text == "Worked");
        assert_eq!(worked.map(|t| t.pos), Some(PosTag::Verb));
    }

    #[test]
    fn test_proper_nouns_do_not_open_sentences() {
        let tagger = LexiconTagger::new();
        let annotation = tagger.annotate("Built services in Rust with Kubernetes on AWS and Azure");

        assert_eq!(annotation.sentences.len(), 1);
        assert_eq!(tagger.annotate("Reports to I").sentences.len(), 1);
    }

    #[test]
    fn test_empty_text() {
        let tagger = LexiconTagger::new();
        assert_eq!(tagger.annotate(""), Annotation::default());
        assert_eq!(tagger.annotate("   "), Annotation::default());
    }
}
