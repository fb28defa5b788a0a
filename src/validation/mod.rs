//! Collision Validation
//!
//! Checks that no two robots occupy overlapping space during the same movement.

pub mod engine;

pub use engine::{is_valid, overlaps, validate, validate_text, Collision, ValidationResult};
