//! Robot Schedule Validator
//!
//! Checks multi-robot movement schedules for spatial collisions.
//!
//! This library provides:
//! - Schedule text parsing
//! - Swept-rectangle collision validation per movement
//! - Configuration and reporting for the `schedule-check` tool

pub mod cli;
pub mod config;
pub mod parser;
pub mod report;
pub mod schedule;
pub mod validation;

// Re-exports for clean public API
pub use config::Config;
pub use parser::{parse, ParseError};
pub use schedule::{Position, Rectangle, Robot, Schedule};
pub use validation::{is_valid, validate, Collision, ValidationResult};
