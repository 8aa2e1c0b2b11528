/*!
 * Integration tests for application lifecycle
 */

use std::path::PathBuf;
use anyhow::Result;
use latin_vocab::app_config::Config;
use latin_vocab::app_controller::Controller;
use crate::common;

/// Test the controller initialization with default config
#[test]
fn test_controller_initialization_withDefaultConfig_shouldSucceed() -> Result<()> {
    let controller = Controller::new_for_test()?;
    assert_eq!(controller.config(), &Config::default());
    Ok(())
}

/// Test that an invalid configuration is rejected at construction
#[test]
fn test_controller_withInvalidConfig_shouldFailValidation() {
    let config = Config {
        script_variable: "not valid".to_string(),
        ..Config::default()
    };

    let error = Controller::with_config(config).err().expect("validation should fail");
    assert!(format!("{:#}", error).contains("Configuration validation failed"));
}

/// Test the full lifecycle: save config, load it, convert
#[test]
fn test_lifecycle_withSavedConfig_shouldConvertUsingRelativePaths() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    common::create_test_file(
        temp_dir.path(),
        "list.txt",
        "CHAPTER SIX VOCABULARY\nvideō, vidēre, vīdī, vīsum - to see, verb",
    )?;

    let config_path = temp_dir.path().join("conf.json");
    let saved = Config {
        input_path: PathBuf::from("list.txt"),
        json_output_path: PathBuf::from("out/list.json"),
        script_output_path: Some(PathBuf::from("out/list.js")),
        script_variable: "latinWords".to_string(),
        ..Config::default()
    };
    saved.save(&config_path)?;

    let loaded = Config::load_or_default(&config_path)?;
    let summary = Controller::with_config(loaded)?.run()?;
    assert_eq!(summary.chapter_count, 1);

    let script = std::fs::read_to_string(temp_dir.path().join("out").join("list.js"))?;
    assert!(script.starts_with(r#"var latinWords = [{"chapter":"CHAPTER 6","#));
    assert!(script.contains(r#""latin":"videō, vidēre, vīdī, vīsum""#));
    assert!(script.contains(r#""pos":"verb""#));
    Ok(())
}
