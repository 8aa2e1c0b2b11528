use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::errors::{AppError, VocabularyError};
use crate::file_utils::FileManager;
use crate::vocabulary::{ConfidenceIssue, ParseReport, VocabularyExporter, parse_document};

// @module: Application controller for vocabulary conversion

/// Counts and paths from a finished conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    pub chapter_count: usize,
    pub word_count: usize,
    pub skipped_count: usize,
    pub low_confidence_count: usize,
    /// Files written; empty for a dry run
    pub written: Vec<PathBuf>,
}

/// Main application controller for vocabulary conversion
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()
            .context("Configuration validation failed")?;

        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read, parse and write both output artifacts
    pub fn run(&self) -> Result<ConversionSummary, AppError> {
        self.convert(false)
    }

    /// Read and parse without writing the output artifacts
    pub fn dry_run(&self) -> Result<ConversionSummary, AppError> {
        self.convert(true)
    }

    fn convert(&self, dry_run: bool) -> Result<ConversionSummary, AppError> {
        let start_time = std::time::Instant::now();
        let input_path = &self.config.input_path;

        let content = FileManager::read_to_string(input_path).map_err(|e| VocabularyError::Unreadable {
            path: input_path.clone(),
            message: format!("{:#}", e),
        })?;

        debug!("Read {} bytes from {:?}", content.len(), input_path);

        let outcome = parse_document(&content);
        self.log_report(&outcome.report);

        if let Some(report_path) = &self.config.skipped_report_path {
            self.write_report(&outcome.report, report_path)
                .map_err(|e| AppError::File(format!("{:#}", e)))?;
        }

        let document = outcome.document;
        let mut written = Vec::new();

        if dry_run {
            info!("Dry run, not writing output files");
        } else {
            let exporter = VocabularyExporter::new(
                self.config.json_output_path.clone(),
                self.config.resolved_script_output_path(),
                self.config.script_variable.clone(),
                self.config.json_indent,
            );
            let files = exporter.export(&document)?;
            info!("Wrote {:?}", files.json_path);
            info!("Wrote {:?}", files.script_path);
            written.push(files.json_path);
            written.push(files.script_path);
        }

        debug!("Conversion finished in {:?}", start_time.elapsed());

        Ok(ConversionSummary {
            chapter_count: document.chapter_count(),
            word_count: document.word_count(),
            skipped_count: outcome.report.skipped.len(),
            low_confidence_count: outcome.report.low_confidence.len(),
            written,
        })
    }

    fn log_report(&self, report: &ParseReport) {
        for skipped in &report.skipped {
            debug!("Skipped line {} ({}): {}", skipped.line_number, skipped.reason, skipped.text);
        }

        for flagged in &report.low_confidence {
            match flagged.issue {
                ConfidenceIssue::LongTrailingPos => warn!(
                    "Line {} may be misparsed ({}): {}",
                    flagged.line_number, flagged.issue, flagged.text
                ),
                ConfidenceIssue::NoPartOfSpeech => debug!(
                    "Line {} kept without part of speech: {}",
                    flagged.line_number, flagged.text
                ),
            }
        }

        if !report.is_clean() {
            info!(
                "{} line(s) skipped, {} line(s) flagged for review",
                report.skipped.len(),
                report.low_confidence.len()
            );
        }
    }

    fn write_report(&self, report: &ParseReport, path: &Path) -> Result<()> {
        FileManager::append_to_log_file(
            path,
            &format!("Parse report for {:?}", self.config.input_path),
        )?;

        for line in report.to_lines() {
            FileManager::append_to_log_file(path, &line)?;
        }

        Ok(())
    }
}
