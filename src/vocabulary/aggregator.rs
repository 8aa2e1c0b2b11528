use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

use super::chapter_title::{is_chapter_header, normalize_chapter_title};
use super::line_parser::{PosFormat, parse_line_detailed};
use super::model::{Chapter, VocabularyDocument};

// @module: Chapter aggregation over a vocabulary source

// @const: Format B parts of speech longer than this are likely part of the translation
const MAX_TRAILING_POS_CHARS: usize = 15;

/// Why a line produced no word entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No ` - ` separator on the line
    NoSeparator,
    /// Line appeared before any chapter header
    BeforeFirstChapter,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoSeparator => write!(f, "no ' - ' separator"),
            Self::BeforeFirstChapter => write!(f, "before first chapter header"),
        }
    }
}

/// Why a parsed line deserves a second look
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceIssue {
    /// Part of speech after the last comma is suspiciously long
    LongTrailingPos,
    /// No part of speech could be detected
    NoPartOfSpeech,
}

impl fmt::Display for ConfidenceIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LongTrailingPos => write!(f, "trailing part of speech looks like translation text"),
            Self::NoPartOfSpeech => write!(f, "no part of speech detected"),
        }
    }
}

/// A source line that produced no entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the source
    pub line_number: usize,
    pub text: String,
    pub reason: SkipReason,
}

/// A source line whose entry was kept but may be misparsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LowConfidenceLine {
    /// 1-based line number in the source
    pub line_number: usize,
    pub text: String,
    pub issue: ConfidenceIssue,
}

/// Diagnostics gathered while parsing. Never affects the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    pub skipped: Vec<SkippedLine>,
    pub low_confidence: Vec<LowConfidenceLine>,
}

impl ParseReport {
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.low_confidence.is_empty()
    }

    /// Render the report as one line per finding
    pub fn to_lines(&self) -> Vec<String> {
        let skipped = self.skipped.iter().map(|s| {
            format!("line {}: skipped ({}): {}", s.line_number, s.reason, s.text)
        });
        let flagged = self.low_confidence.iter().map(|l| {
            format!("line {}: low confidence ({}): {}", l.line_number, l.issue, l.text)
        });
        skipped.chain(flagged).collect()
    }
}

/// Result of parsing a whole vocabulary source
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    pub document: VocabularyDocument,
    pub report: ParseReport,
}

/// Accumulates chapters line by line
#[derive(Debug, Default)]
pub struct ChapterAggregator {
    chapters: Vec<Chapter>,
    current: Option<Chapter>,
    report: ParseReport,
}

impl ChapterAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw source line. `line_number` is 1-based.
    pub fn push_line(&mut self, line_number: usize, raw: &str) {
        let line = raw.trim();
        if line.is_empty() {
            return;
        }

        if is_chapter_header(line) {
            if let Some(finished) = self.current.take() {
                self.chapters.push(finished);
            }
            let title = normalize_chapter_title(line);
            debug!("Line {}: starting chapter '{}'", line_number, title);
            self.current = Some(Chapter::new(title));
            return;
        }

        let Some(chapter) = self.current.as_mut() else {
            self.report.skipped.push(SkippedLine {
                line_number,
                text: line.to_string(),
                reason: SkipReason::BeforeFirstChapter,
            });
            return;
        };

        match parse_line_detailed(line) {
            Some(parsed) => {
                let issue = match parsed.format {
                    PosFormat::TrailingComma
                        if parsed.entry.pos.chars().count() > MAX_TRAILING_POS_CHARS =>
                    {
                        Some(ConfidenceIssue::LongTrailingPos)
                    }
                    PosFormat::Missing => Some(ConfidenceIssue::NoPartOfSpeech),
                    _ => None,
                };
                if let Some(issue) = issue {
                    self.report.low_confidence.push(LowConfidenceLine {
                        line_number,
                        text: line.to_string(),
                        issue,
                    });
                }
                chapter.words.push(parsed.entry);
            }
            None => {
                self.report.skipped.push(SkippedLine {
                    line_number,
                    text: line.to_string(),
                    reason: SkipReason::NoSeparator,
                });
            }
        }
    }

    /// Close the last chapter and return the document with its diagnostics
    pub fn finish(mut self) -> ParseOutcome {
        if let Some(finished) = self.current.take() {
            self.chapters.push(finished);
        }

        ParseOutcome {
            document: VocabularyDocument::new(self.chapters),
            report: self.report,
        }
    }
}

// \r\n, \n and a lone \r all end a line
static LINE_BREAK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\r\n|\n|\r").unwrap()
});

/// Parse a complete vocabulary source into chapters
pub fn parse_document(content: &str) -> ParseOutcome {
    let mut aggregator = ChapterAggregator::new();
    for (index, line) in LINE_BREAK_REGEX.split(content).enumerate() {
        aggregator.push_line(index + 1, line);
    }

    let outcome = aggregator.finish();
    if outcome.document.is_empty() && !content.trim().is_empty() {
        warn!("No chapter header found; every line was discarded");
    }
    outcome
}
