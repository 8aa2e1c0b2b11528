/*!
 * Vocabulary line parsing.
 *
 * A vocabulary line is `LATIN - ENGLISH`. The part of speech is carried in one of
 * two ways:
 * - Format A: parenthesized after the Latin, `amāre (verb) - to love`
 * - Format B: after the last comma of the English, `ego, meī - I, pronoun`
 *
 * The heuristic is kept exactly as the curated data expects it, including its
 * failure modes (a translation containing a comma loses its tail to `pos`).
 */

use once_cell::sync::Lazy;
use regex::Regex;

use super::model::WordEntry;

// @const: Segment separator after en-dash normalization
const SEPARATOR: &str = " - ";

// @const: Format A part of speech, anchored at the end of the Latin field
static TRAILING_POS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s*\(([^)]+)\)$").unwrap()
});

/// Gender and number markers recognized as the final comma token of the Latin field
pub const GENDER_MARKERS: [&str; 10] = [
    "m.", "f.", "n.", "c.", "m/f", "m./f.", "pl.", "m. pl.", "f. pl.", "n. pl.",
];

/// Where the part of speech was found on a line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosFormat {
    /// Parenthesized after the Latin field
    Parenthesized,
    /// After the last comma of the English field
    TrailingComma,
    /// No part of speech detected
    Missing,
}

/// A parsed vocabulary line with the format that was detected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub entry: WordEntry,
    pub format: PosFormat,
}

/// Parse a vocabulary line into a word entry.
///
/// Returns `None` when the line has no ` - ` separator.
pub fn parse_line(line: &str) -> Option<WordEntry> {
    parse_line_detailed(line).map(|parsed| parsed.entry)
}

/// Parse a vocabulary line, keeping track of which POS format matched
pub fn parse_line_detailed(line: &str) -> Option<ParsedLine> {
    let line = line.replace('–', "-");

    let mut parts = line.split(SEPARATOR);
    let latin_part = parts.next()?.trim();
    let english_part = parts.next()?.trim();

    let (latin, translation, pos, format) = match TRAILING_POS_REGEX.captures(latin_part) {
        Some(caps) => {
            let whole = caps.get(0)?;
            (
                latin_part[..whole.start()].trim(),
                english_part,
                caps[1].to_string(),
                PosFormat::Parenthesized,
            )
        }
        None => match english_part.rfind(',') {
            Some(index) => (
                latin_part,
                english_part[..index].trim(),
                english_part[index + 1..].trim().to_string(),
                PosFormat::TrailingComma,
            ),
            None => (latin_part, english_part, String::new(), PosFormat::Missing),
        },
    };

    let (latin, gender) = split_gender(latin);

    Some(ParsedLine {
        entry: WordEntry {
            latin,
            translation: translation.to_string(),
            pos,
            gender,
        },
        format,
    })
}

/// Split a trailing gender marker off the Latin field.
///
/// `"frāter, frātris, m."` yields `("frāter, frātris", "m.")`. When the last comma
/// token is not a marker the field is returned unchanged with an empty gender.
pub fn split_gender(latin: &str) -> (String, String) {
    if let Some(index) = latin.rfind(',') {
        let last_token = latin[index + 1..].trim();
        if GENDER_MARKERS.contains(&last_token) {
            return (latin[..index].trim().to_string(), last_token.to_string());
        }
    }

    (latin.to_string(), String::new())
}
