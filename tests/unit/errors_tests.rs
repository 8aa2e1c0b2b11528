/*!
 * Tests for error types and conversions
 */

use std::path::PathBuf;
use latin_vocab::errors::{AppError, ExportError, VocabularyError};

#[test]
fn test_vocabularyError_unreadable_shouldDisplayPathAndMessage() {
    let error = VocabularyError::Unreadable {
        path: PathBuf::from("words.txt"),
        message: "No such file or directory".to_string(),
    };
    let display = format!("{}", error);
    assert!(display.contains("words.txt"));
    assert!(display.contains("No such file or directory"));
}

#[test]
fn test_exportError_invalidVariableName_shouldDisplayName() {
    let error = ExportError::InvalidVariableName("2words".to_string());
    assert!(format!("{}", error).contains("2words"));
}

#[test]
fn test_exportError_fromSerdeError_shouldWrapAsEncoding() {
    let serde_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let export_error: ExportError = serde_error.into();
    assert!(matches!(export_error, ExportError::Encoding(_)));
}

#[test]
fn test_appError_fromVocabularyError_shouldWrapCorrectly() {
    let error = VocabularyError::Unreadable {
        path: PathBuf::from("words.txt"),
        message: "denied".to_string(),
    };
    let app_error: AppError = error.into();
    assert!(format!("{}", app_error).contains("Vocabulary error"));
}

#[test]
fn test_appError_fromExportError_shouldWrapCorrectly() {
    let app_error: AppError = ExportError::Write {
        path: PathBuf::from("data.js"),
        message: "read-only".to_string(),
    }
    .into();
    let display = format!("{}", app_error);
    assert!(display.contains("Export error"));
    assert!(display.contains("data.js"));
}
