use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::path::{Path, PathBuf};

use super::model::VocabularyDocument;
use crate::errors::ExportError;
use crate::file_utils::FileManager;

// @module: JSON and script serialization of the vocabulary document

static JS_IDENTIFIER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap()
});

/// Check that a name can be used as a `var` binding in a browser script
pub fn is_valid_variable_name(name: &str) -> bool {
    JS_IDENTIFIER_REGEX.is_match(name)
}

/// Render the document as indented JSON. Non-ASCII text is written literally.
pub fn to_pretty_json(document: &VocabularyDocument, indent: usize) -> Result<String, ExportError> {
    let indent = " ".repeat(indent);
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    document.serialize(&mut serializer)?;

    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Render the document as `var <name> = <compact JSON>;`
pub fn to_script(document: &VocabularyDocument, variable: &str) -> Result<String, ExportError> {
    if !is_valid_variable_name(variable) {
        return Err(ExportError::InvalidVariableName(variable.to_string()));
    }

    let json = serde_json::to_string(document)?;
    Ok(format!("var {} = {};", variable, json))
}

/// Paths written by an export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFiles {
    pub json_path: PathBuf,
    pub script_path: PathBuf,
}

/// Writes the two output artifacts
#[derive(Debug, Clone)]
pub struct VocabularyExporter {
    json_path: PathBuf,
    script_path: PathBuf,
    variable: String,
    indent: usize,
}

impl VocabularyExporter {
    pub fn new(json_path: PathBuf, script_path: PathBuf, variable: impl Into<String>, indent: usize) -> Self {
        Self {
            json_path,
            script_path,
            variable: variable.into(),
            indent,
        }
    }

    /// Write both artifacts, overwriting anything already there
    pub fn export(&self, document: &VocabularyDocument) -> Result<ExportedFiles, ExportError> {
        let json = to_pretty_json(document, self.indent)?;
        let script = to_script(document, &self.variable)?;

        Self::write(&self.json_path, &json)?;
        Self::write(&self.script_path, &script)?;

        Ok(ExportedFiles {
            json_path: self.json_path.clone(),
            script_path: self.script_path.clone(),
        })
    }

    fn write(path: &Path, content: &str) -> Result<(), ExportError> {
        FileManager::write_to_file(path, content).map_err(|e| ExportError::Write {
            path: path.to_path_buf(),
            message: format!("{:#}", e),
        })
    }
}
