//! Command-line driver: read the schedule, validate it, print the verdict.

use anyhow::{bail, Context, Result};
use std::fs;
use std::process::ExitCode;

use crate::config::Config;
use crate::parser;
use crate::report::{Report, EXIT_ERROR};
use crate::validation;

/// Run the checker and map the outcome to a process exit code
pub fn run() -> ExitCode {
    match try_run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn try_run() -> Result<ExitCode> {
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    check(&config)
}

/// Validate the configured input and print the report
pub fn check(config: &Config) -> Result<ExitCode> {
    if let Some(path) = &config.config_file {
        log::debug!("Using settings from {}", path.display());
    }

    if config.input_defaulted {
        log::warn!(
            "No input file given, falling back to '{}'",
            config.input.display()
        );
    }

    if !config.input.is_file() {
        bail!("The file '{}' does not exist", config.input.display());
    }

    let content = fs::read_to_string(&config.input)
        .with_context(|| format!("Failed to read {}", config.input.display()))?;

    let schedule = parser::parse(&content)
        .with_context(|| format!("Malformed schedule {}", config.input.display()))?;
    let result = validation::validate(&schedule);

    let report = Report::new(&config.input, &schedule, result);
    println!("{}", report.render(config.format)?);

    Ok(report.exit_code())
}
