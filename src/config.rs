//! Configuration management for the schedule checker.
//!
//! Handles:
//! - Command-line argument parsing
//! - Optional TOML config files (project directory, then user config directory)

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Project config file looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "schedule-check.toml";

/// Input used when no file is given anywhere
pub const DEFAULT_INPUT: &str = "SampleInputWithCollision.txt";

/// How the verdict is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Command-line arguments for the schedule checker
#[derive(Debug, Parser, Default)]
#[command(name = "schedule-check")]
#[command(about = "Check a multi-robot movement schedule for collisions")]
#[command(version)]
pub struct Args {
    /// Schedule file to validate
    pub input: Option<PathBuf>,

    #[arg(long, value_enum, help = "Output format (text, json)")]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Log level (trace, debug, info, warn, error)")]
    pub log_level: Option<String>,

    #[arg(long, help = "Config file to use instead of the project/user config")]
    pub config: Option<PathBuf>,
}

/// Contents of a `schedule-check.toml` file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub input: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub log_level: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }
}

/// Combined configuration from all sources
#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    /// True when no input was given and [`DEFAULT_INPUT`] is used
    pub input_defaulted: bool,
    pub format: OutputFormat,
    pub log_level: String,
    /// Config file that contributed settings, if any
    pub config_file: Option<PathBuf>,
}

impl Config {
    /// Create configuration from command-line arguments.
    ///
    /// Help and version requests print and exit; any other argument error is
    /// returned so the caller can map it to its own exit status.
    pub fn from_args_and_env() -> Result<Self> {
        let args = match Args::try_parse() {
            Ok(args) => args,
            Err(e) => match e.kind() {
                ErrorKind::DisplayHelp
                | ErrorKind::DisplayVersion
                | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => e.exit(),
                _ => return Err(e.into()),
            },
        };
        Self::from_args(args)
    }

    /// Create configuration from explicit arguments (useful for testing)
    pub fn from_args(args: Args) -> Result<Self> {
        let config_file = match &args.config {
            Some(path) => Some(path.clone()),
            None => discover_config_file(),
        };

        let file = match &config_file {
            Some(path) => {
                log::debug!("Loading config from {}", path.display());
                FileConfig::load(path)?
            }
            None => FileConfig::default(),
        };

        Ok(Self::merge(args, file, config_file))
    }

    /// CLI values win over file values, file values over defaults
    pub fn merge(args: Args, file: FileConfig, config_file: Option<PathBuf>) -> Self {
        let explicit_input = args.input.or(file.input);
        let input_defaulted = explicit_input.is_none();

        Config {
            input: explicit_input.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT)),
            input_defaulted,
            format: args.format.or(file.format).unwrap_or_default(),
            log_level: args
                .log_level
                .or(file.log_level)
                .unwrap_or_else(|| "info".to_string()),
            config_file,
        }
    }
}

/// Project config first, then the user config directory
fn discover_config_file() -> Option<PathBuf> {
    let project = PathBuf::from(PROJECT_CONFIG_FILE);
    if project.is_file() {
        return Some(project);
    }

    dirs::config_dir()
        .map(|dir| dir.join("schedule-check").join("config.toml"))
        .filter(|path| path.is_file())
}
