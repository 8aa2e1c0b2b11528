/*!
 * Tests for file utility functions
 */

use std::fs;
use std::path::Path;
use anyhow::Result;
use latin_vocab::file_utils::FileManager;
use crate::common;

/// Test that file_exists returns true for existing files
#[test]
fn test_file_exists_withExistingFile_shouldReturnTrue() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let test_file = common::create_test_file(temp_dir.path(), "words.txt", "CHAPTER ONE")?;

    assert!(FileManager::file_exists(&test_file));
    assert!(!FileManager::file_exists(temp_dir.path()));

    Ok(())
}

/// Test that file_exists returns false for non-existent files
#[test]
fn test_file_exists_withNonExistentFile_shouldReturnFalse() {
    assert!(!FileManager::file_exists("non_existent_file.tmp"));
}

/// Test that ensure_dir creates nested directories
#[test]
fn test_ensure_dir_withNonExistentDir_shouldCreateDirectory() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let nested = temp_dir.path().join("site").join("words");

    FileManager::ensure_dir(&nested)?;

    assert!(nested.is_dir());
    Ok(())
}

/// Test the derived script path next to a nested JSON output
#[test]
fn test_script_path_for_withNestedJson_shouldPointOneLevelUp() {
    assert_eq!(
        FileManager::script_path_for("/site/words/words.json"),
        Path::new("/site/words/../data.js")
    );
}

/// Test the derived script path for a bare file name
#[test]
fn test_script_path_for_withBareFileName_shouldUseParentOfCurrentDir() {
    assert_eq!(FileManager::script_path_for("words.json"), Path::new("./../data.js"));
}

/// Test relative and absolute path resolution
#[test]
fn test_resolve_against_withRelativeAndAbsolute_shouldOnlyJoinRelative() {
    assert_eq!(
        FileManager::resolve_against("/base", "words.txt"),
        Path::new("/base/words.txt")
    );
    assert_eq!(
        FileManager::resolve_against("/base", "/abs/words.txt"),
        Path::new("/abs/words.txt")
    );
}

/// Test that write_to_file creates parents and replaces content
#[test]
fn test_write_to_file_withExistingFile_shouldReplaceContent() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let target = temp_dir.path().join("out").join("words.json");

    FileManager::write_to_file(&target, "first version, longer")?;
    FileManager::write_to_file(&target, "second")?;

    assert_eq!(fs::read_to_string(&target)?, "second");
    Ok(())
}

/// Test that read_to_string reports the missing path
#[test]
fn test_read_to_string_withMissingFile_shouldNamePath() {
    let error = FileManager::read_to_string("missing_words_12345.txt").unwrap_err();
    assert!(format!("{:#}", error).contains("missing_words_12345.txt"));
}

/// Test that append_to_log_file appends timestamped lines
#[test]
fn test_append_to_log_file_withTwoWrites_shouldKeepBoth() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let log_path = temp_dir.path().join("skipped.log");

    FileManager::append_to_log_file(&log_path, "line 3: skipped")?;
    FileManager::append_to_log_file(&log_path, "line 9: skipped")?;

    let content = fs::read_to_string(&log_path)?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with('['));
    assert!(lines[0].ends_with("line 3: skipped"));
    assert!(lines[1].ends_with("line 9: skipped"));
    Ok(())
}
