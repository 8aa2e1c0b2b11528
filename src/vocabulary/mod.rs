/*!
 * Vocabulary conversion.
 *
 * This module turns the curated plain-text word list into the chapter document
 * consumed by the flashcard front-end:
 * - `chapter_title`: Chapter header detection and title normalization
 * - `line_parser`: Single-line parsing (part of speech, gender, translation)
 * - `aggregator`: Grouping of parsed lines into chapters, with diagnostics
 * - `export`: JSON and browser script serialization
 * - `model`: Document types
 */

pub mod aggregator;
pub mod chapter_title;
pub mod export;
pub mod line_parser;
pub mod model;

pub use aggregator::{
    ChapterAggregator, ConfidenceIssue, LowConfidenceLine, ParseOutcome, ParseReport, SkipReason,
    SkippedLine, parse_document,
};
pub use chapter_title::{is_chapter_header, normalize_chapter_title};
pub use export::{ExportedFiles, VocabularyExporter, to_pretty_json, to_script};
pub use line_parser::{GENDER_MARKERS, ParsedLine, PosFormat, parse_line, parse_line_detailed};
pub use model::{Chapter, VocabularyDocument, WordEntry};
