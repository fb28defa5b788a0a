//! Verdict reporting and exit-code mapping for the command-line tool.

use anyhow::Result;
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;

use crate::config::OutputFormat;
use crate::schedule::Schedule;
use crate::validation::{Collision, ValidationResult};

/// Exit status when no collision was found
pub const EXIT_VALID: u8 = 0;
/// Exit status for unreadable input, bad configuration or malformed schedules
pub const EXIT_ERROR: u8 = 1;
/// Exit status when at least one collision was found
pub const EXIT_INVALID: u8 = 2;

/// Summary of one validation run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub input: String,
    pub valid: bool,
    pub declared_robots: Option<i64>,
    pub robots: usize,
    pub movements: usize,
    pub collision: Option<Collision>,
}

impl Report {
    pub fn new(input: &Path, schedule: &Schedule, result: ValidationResult) -> Self {
        Self {
            input: input.display().to_string(),
            valid: result.is_valid(),
            declared_robots: schedule.declared_robot_count(),
            robots: schedule.robots().len(),
            movements: schedule.movements().len(),
            collision: result.collision,
        }
    }

    pub fn exit_status(&self) -> u8 {
        if self.valid { EXIT_VALID } else { EXIT_INVALID }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    fn to_text(&self) -> String {
        match &self.collision {
            None => format!(
                "The schedule `{}` is valid. No collisions were found.",
                self.input
            ),
            Some(c) => format!(
                "The schedule `{}` is invalid! At least one collision was found.\n\
                 '{}' and '{}' collide at movement {}.",
                self.input, c.first, c.second, c.movement
            ),
        }
    }
}
