/*!
 * Error types for the latin-vocab application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading the vocabulary source
#[derive(Error, Debug)]
pub enum VocabularyError {
    /// The input file could not be read
    #[error("Failed to read vocabulary file {path:?}: {message}")]
    Unreadable {
        /// Path that was requested
        path: PathBuf,
        /// Underlying I/O message
        message: String,
    },
}

/// Errors that can occur while writing the output artifacts
#[derive(Error, Debug)]
pub enum ExportError {
    /// Error when encoding the document fails
    #[error("Failed to encode vocabulary document: {0}")]
    Encoding(#[from] serde_json::Error),

    /// Error when a target file cannot be written
    #[error("Failed to write {path:?}: {message}")]
    Write {
        /// Target path
        path: PathBuf,
        /// Underlying I/O message
        message: String,
    },

    /// Script variable name is not a JavaScript identifier
    #[error("Invalid script variable name: {0}")]
    InvalidVariableName(String),
}

/// Error returned by a conversion run
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from an auxiliary file operation, such as the report file
    #[error("File error: {0}")]
    File(String),

    /// Error from reading the vocabulary source
    #[error("Vocabulary error: {0}")]
    Vocabulary(#[from] VocabularyError),

    /// Error from writing the output artifacts
    #[error("Export error: {0}")]
    Export(#[from] ExportError),
}
