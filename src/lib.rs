/*!
 * # latin-vocab - Latin vocabulary list converter
 *
 * A Rust library for turning a curated plain-text Latin vocabulary list into the
 * data files used by a browser flashcard application.
 *
 * ## Features
 *
 * - Chapter grouping with normalized titles ("CHAPTER FOUR VOCABULARY" -> "CHAPTER 4")
 * - Part of speech detection in two source conventions:
 *   - `amāre (verb) - to love`
 *   - `saepe - often, adverb`
 * - Gender marker extraction (`m.`, `f.`, `n.`, `n. pl.`, ...)
 * - Diagnostics for skipped and doubtful lines, with line numbers
 * - Pretty JSON output plus a `var wordsData = [...];` browser script
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `vocabulary`: Parsing and serialization:
 *   - `vocabulary::chapter_title`: Chapter header detection
 *   - `vocabulary::line_parser`: Vocabulary line heuristics
 *   - `vocabulary::aggregator`: Chapter grouping and parse diagnostics
 *   - `vocabulary::export`: JSON and script output
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod file_utils;
pub mod vocabulary;
pub mod app_controller;
pub mod errors;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::{Controller, ConversionSummary};
pub use vocabulary::{Chapter, VocabularyDocument, WordEntry, parse_document, parse_line};
pub use errors::{AppError, ExportError, VocabularyError};
