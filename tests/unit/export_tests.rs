/*!
 * Tests for JSON and script serialization
 */

use std::fs;
use anyhow::Result;
use latin_vocab::vocabulary::{
    Chapter, VocabularyDocument, VocabularyExporter, WordEntry, to_pretty_json, to_script,
};
use latin_vocab::errors::ExportError;
use crate::common;

fn sample_document() -> VocabularyDocument {
    let mut first = Chapter::new("CHAPTER 1");
    first.words.push(WordEntry::new("amāre", "to love", "verb", ""));
    first.words.push(WordEntry::new("porta, portae", "gate", "noun", "f."));
    let second = Chapter::new("CHAPTER 2");
    VocabularyDocument::new(vec![first, second])
}

/// Test that pretty JSON parses back to the same document
#[test]
fn test_toPrettyJson_withDocument_shouldParseBackIdentically() -> Result<()> {
    let document = sample_document();
    let json = to_pretty_json(&document, 4)?;
    let parsed: VocabularyDocument = serde_json::from_str(&json)?;
    assert_eq!(parsed, document);
    Ok(())
}

/// Test that the indent width is honoured
#[test]
fn test_toPrettyJson_withTwoSpaceIndent_shouldIndentByTwo() -> Result<()> {
    let json = to_pretty_json(&sample_document(), 2)?;
    assert!(json.starts_with("[\n  {\n    \"chapter\""));
    assert!(json.contains("\"words\": []"));
    Ok(())
}

/// Test that the script wraps compact JSON in a var declaration
#[test]
fn test_toScript_withDocument_shouldContainCompactJson() -> Result<()> {
    let document = sample_document();
    let script = to_script(&document, "wordsData")?;

    assert!(script.starts_with("var wordsData = "));
    assert!(script.ends_with(';'));
    assert!(!script.contains('\n'));

    let json = &script["var wordsData = ".len()..script.len() - 1];
    let parsed: VocabularyDocument = serde_json::from_str(json)?;
    assert_eq!(parsed, document);
    Ok(())
}

/// Test that the exporter writes both files and overwrites old content
#[test]
fn test_export_withExistingFiles_shouldOverwriteBoth() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let json_path = temp_dir.path().join("words").join("words.json");
    let script_path = temp_dir.path().join("data.js");
    fs::write(&script_path, "stale content that is much longer than the new script")?;

    let exporter = VocabularyExporter::new(json_path.clone(), script_path.clone(), "wordsData", 4);
    let files = exporter.export(&sample_document())?;

    assert_eq!(files.json_path, json_path);
    assert_eq!(files.script_path, script_path);

    let json = fs::read_to_string(&json_path)?;
    assert!(json.contains("\"latin\": \"amāre\""));

    let script = fs::read_to_string(&script_path)?;
    assert!(script.starts_with("var wordsData = [{"));
    assert!(!script.contains("stale"));
    Ok(())
}

/// Test that an invalid variable name is rejected before anything is written
#[test]
fn test_export_withInvalidVariable_shouldFailWithoutWriting() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let json_path = temp_dir.path().join("words.json");
    let script_path = temp_dir.path().join("data.js");

    let exporter = VocabularyExporter::new(json_path.clone(), script_path, "var name", 4);
    let result = exporter.export(&sample_document());

    assert!(matches!(result, Err(ExportError::InvalidVariableName(_))));
    assert!(!json_path.exists());
    Ok(())
}
