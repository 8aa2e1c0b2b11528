// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{Result, Context};
use log::{info, LevelFilter, Log, Metadata, Record, Level, SetLoggerError};
use std::path::{Path, PathBuf};
use std::io::Write;
use clap::{Parser, ValueEnum, CommandFactory, Subcommand};
use clap_complete::{generate, Shell};

use latin_vocab::app_config::{self, Config};
use latin_vocab::file_utils::FileManager;
use latin_vocab::Controller;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write a default configuration file to the --config path
    InitConfig {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },

    /// Generate shell completions for latin-vocab
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// latin-vocab - Latin vocabulary list converter
///
/// Converts a plain-text Latin vocabulary list into JSON and a browser script
/// for the flashcard application.
#[derive(Parser, Debug)]
#[command(name = "latin-vocab")]
#[command(version)]
#[command(about = "Convert a Latin vocabulary list into flashcard data files")]
#[command(long_about = "latin-vocab reads a chapter-grouped Latin vocabulary list and writes it as JSON
and as a `var wordsData = [...];` script for the browser.

EXAMPLES:
    latin-vocab                                  # Convert using conf.json or defaults
    latin-vocab -i words/words.txt -j words/words.json
    latin-vocab --dry-run --log-level debug      # Parse only, show skipped lines
    latin-vocab --report-skipped skipped.log     # Append skipped lines to a file
    latin-vocab init-config                      # Write a default conf.json
    latin-vocab completions bash > latin-vocab.bash

CONFIGURATION:
    Configuration is read from conf.json by default; use --config to pick another
    file. Relative paths inside it
    resolve against the directory containing the file. Without a config file,
    words.txt is read and words.json and ../data.js are written relative to
    the current directory.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(short, long = "config", value_name = "PATH", default_value = "conf.json")]
    config_path: PathBuf,

    /// Vocabulary text file to convert
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// JSON output file
    #[arg(short, long, value_name = "PATH")]
    json_output: Option<PathBuf>,

    /// Script output file (default: data.js one level above the JSON output)
    #[arg(short, long, value_name = "PATH")]
    script_output: Option<PathBuf>,

    /// Global variable name assigned in the script output
    #[arg(long)]
    variable_name: Option<String>,

    /// Spaces per indentation level in the JSON output
    #[arg(long)]
    indent: Option<usize>,

    /// Append skipped and doubtful lines to this file
    #[arg(short, long, value_name = "PATH")]
    report_skipped: Option<PathBuf>,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Parse and report without writing output files
    #[arg(long)]
    dry_run: bool,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: Tag and ANSI colour for log level
    fn style_for_level(level: Level) -> (&'static str, &'static str) {
        match level {
            Level::Error => ("ERROR", "1;31"),
            Level::Warn => ("WARN ", "1;33"),
            Level::Info => ("INFO ", "1;32"),
            Level::Debug => ("DEBUG", "1;36"),
            Level::Trace => ("TRACE", "1;35"),
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let (tag, colour) = Self::style_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "\x1B[{}m{} {} {}\x1B[0m",
                colour, now, tag, record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // The logger accepts everything; the effective level is set via set_max_level
    CustomLogger::init(LevelFilter::Trace)?;
    log::set_max_level(LevelFilter::Info);

    let mut cli = CommandLineOptions::parse();

    match cli.command.take() {
        Some(Commands::Completions { shell }) => {
            write_completions(shell, &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::InitConfig { force }) => init_config(&cli.config_path, force),
        None => run_convert(cli),
    }
}

fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = CommandLineOptions::command();
    generate(shell, &mut cmd, "latin-vocab", out);
}

fn init_config(config_path: &Path, force: bool) -> Result<()> {
    if FileManager::file_exists(config_path) && !force {
        return Err(anyhow::anyhow!(
            "Config file already exists: {:?}. Use --force to overwrite.",
            config_path
        ));
    }

    Config::default().save(config_path)?;
    info!("Wrote default config to {:?}", config_path);
    Ok(())
}

/// Override config values with the CLI options that were given
fn apply_overrides(config: &mut Config, options: &CommandLineOptions) {
    if let Some(input) = &options.input {
        config.input_path = input.clone();
    }

    if let Some(json_output) = &options.json_output {
        config.json_output_path = json_output.clone();
    }

    if let Some(script_output) = &options.script_output {
        config.script_output_path = Some(script_output.clone());
    }

    if let Some(variable_name) = &options.variable_name {
        config.script_variable = variable_name.clone();
    }

    if let Some(indent) = options.indent {
        config.json_indent = indent;
    }

    if let Some(report_path) = &options.report_skipped {
        config.skipped_report_path = Some(report_path.clone());
    }

    // Command line log level wins over the config file
    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }
}

fn run_convert(options: CommandLineOptions) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(level.to_level_filter());
    }

    let config_exists = FileManager::file_exists(&options.config_path);
    let mut config = Config::load_or_default(&options.config_path)?;
    if !config_exists {
        info!("Config file {:?} not found, using defaults", options.config_path);
    }

    apply_overrides(&mut config, &options);
    log::set_max_level(config.log_level.to_level_filter());

    let controller = Controller::with_config(config)?;

    let summary = if options.dry_run {
        controller.dry_run()
    } else {
        controller.run()
    }
    .context("Vocabulary conversion failed")?;

    info!(
        "{} word(s), {} line(s) skipped, {} flagged",
        summary.word_count, summary.skipped_count, summary.low_confidence_count
    );
    println!("Converted {} chapters.", summary.chapter_count);

    Ok(())
}
