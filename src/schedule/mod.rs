//! Schedule Model
//!
//! Robots, their initial positions and the rectangles they sweep per movement.

pub mod builder;
pub mod model;

pub use builder::{ScheduleBuilder, UnknownRobot};
pub use model::{Movement, Position, Rectangle, Robot, Schedule};
