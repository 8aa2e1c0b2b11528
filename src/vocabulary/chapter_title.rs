use once_cell::sync::Lazy;
use regex::{Captures, Regex};

// @module: Chapter header detection and title normalization

// @const: Header token, compared against the uppercased line
const CHAPTER_TOKEN: &str = "CHAPTER";

// @const: English number words and their digits
const NUMBER_WORDS: [(&str, &str); 19] = [
    ("ONE", "1"),
    ("TWO", "2"),
    ("THREE", "3"),
    ("FOUR", "4"),
    ("FIVE", "5"),
    ("SIX", "6"),
    ("SEVEN", "7"),
    ("EIGHT", "8"),
    ("NINE", "9"),
    ("TEN", "10"),
    ("ELEVEN", "11"),
    ("TWELVE", "12"),
    ("THIRTEEN", "13"),
    ("FOURTEEN", "14"),
    ("FIFTEEN", "15"),
    ("SIXTEEN", "16"),
    ("SEVENTEEN", "17"),
    ("EIGHTEEN", "18"),
    ("NINETEEN", "19"),
];

static NUMBER_WORD_REGEX: Lazy<Regex> = Lazy::new(|| {
    let alternatives = NUMBER_WORDS
        .iter()
        .map(|(word, _)| *word)
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"(?i)\b(?:{})\b", alternatives)).unwrap()
});

static VOCABULARY_WORD_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bVOCABULARY\b").unwrap()
});

/// Check whether a trimmed line opens a new chapter
pub fn is_chapter_header(line: &str) -> bool {
    line.to_uppercase().starts_with(CHAPTER_TOKEN)
}

/// Normalize a chapter header line into its title.
///
/// Number words ONE through NINETEEN become digits and the word VOCABULARY is
/// dropped, so `"CHAPTER FOUR VOCABULARY"` becomes `"CHAPTER 4"`. Whitespace left
/// behind inside the title is not collapsed.
pub fn normalize_chapter_title(line: &str) -> String {
    let numbered = NUMBER_WORD_REGEX.replace_all(line, |caps: &Captures| {
        let word = caps[0].to_uppercase();
        NUMBER_WORDS
            .iter()
            .find(|(name, _)| *name == word)
            .map(|(_, digits)| (*digits).to_string())
            .unwrap_or_else(|| caps[0].to_string())
    });

    VOCABULARY_WORD_REGEX
        .replace_all(&numbered, "")
        .trim()
        .to_string()
}
