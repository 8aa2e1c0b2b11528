use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::file_utils::FileManager;
use crate::vocabulary::export::is_valid_variable_name;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Plain-text vocabulary source
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,

    /// Pretty-printed JSON output
    #[serde(default = "default_json_output_path")]
    pub json_output_path: PathBuf,

    /// Browser script output; defaults to `data.js` one level above the JSON output
    #[serde(default)]
    pub script_output_path: Option<PathBuf>,

    /// Global variable name assigned in the script output
    #[serde(default = "default_script_variable")]
    pub script_variable: String,

    /// Spaces per indentation level in the JSON output
    #[serde(default = "default_json_indent")]
    pub json_indent: usize,

    /// Optional file that skipped and low-confidence lines are appended to
    #[serde(default)]
    pub skipped_report_path: Option<PathBuf>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching log crate filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

// @const: Bounds on JSON indentation width
const MIN_JSON_INDENT: usize = 1;
const MAX_JSON_INDENT: usize = 16;

fn default_input_path() -> PathBuf {
    PathBuf::from("words.txt")
}

fn default_json_output_path() -> PathBuf {
    PathBuf::from("words.json")
}

fn default_script_variable() -> String {
    "wordsData".to_string()
}

fn default_json_indent() -> usize {
    4
}

impl Config {
    /// Load a configuration file; relative paths inside it resolve against its directory
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .context(format!("Failed to open config file: {:?}", path))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {:?}", path))?;

        let base_dir = path
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        Ok(config.anchored_at(base_dir))
    }

    /// Load the configuration file if it exists, otherwise fall back to defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if FileManager::file_exists(path) {
            Self::from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save the configuration as pretty JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let config_json = serde_json::to_string_pretty(self)
            .context("Failed to serialize config to JSON")?;

        FileManager::write_to_file(&path, &config_json)
            .context(format!("Failed to write config to file: {:?}", path.as_ref()))
    }

    /// Resolve every relative path against `base_dir`
    pub fn anchored_at<P: AsRef<Path>>(mut self, base_dir: P) -> Self {
        let base_dir = base_dir.as_ref();
        self.input_path = FileManager::resolve_against(base_dir, &self.input_path);
        self.json_output_path = FileManager::resolve_against(base_dir, &self.json_output_path);
        self.script_output_path = self
            .script_output_path
            .map(|p| FileManager::resolve_against(base_dir, p));
        self.skipped_report_path = self
            .skipped_report_path
            .map(|p| FileManager::resolve_against(base_dir, p));
        self
    }

    /// Script output path, derived from the JSON output when not set explicitly
    pub fn resolved_script_output_path(&self) -> PathBuf {
        self.script_output_path
            .clone()
            .unwrap_or_else(|| FileManager::script_path_for(&self.json_output_path))
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        if self.input_path.as_os_str().is_empty() {
            return Err(anyhow!("Input path must not be empty"));
        }

        if self.json_output_path.as_os_str().is_empty() {
            return Err(anyhow!("JSON output path must not be empty"));
        }

        if self.input_path == self.json_output_path
            || self.input_path == self.resolved_script_output_path()
        {
            return Err(anyhow!("Output paths must differ from the input path: {:?}", self.input_path));
        }

        if !is_valid_variable_name(&self.script_variable) {
            return Err(anyhow!(
                "Script variable '{}' is not a valid JavaScript identifier",
                self.script_variable
            ));
        }

        if !(MIN_JSON_INDENT..=MAX_JSON_INDENT).contains(&self.json_indent) {
            return Err(anyhow!(
                "JSON indent must be between {} and {}, got {}",
                MIN_JSON_INDENT, MAX_JSON_INDENT, self.json_indent
            ));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            input_path: default_input_path(),
            json_output_path: default_json_output_path(),
            script_output_path: None,
            script_variable: default_script_variable(),
            json_indent: default_json_indent(),
            skipped_report_path: None,
            log_level: LogLevel::default(),
        }
    }
}
