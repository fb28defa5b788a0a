//! Schedule Builder
//!
//! Owns all intermediate state while lines are being read and hands out an
//! immutable [`Schedule`] at the end.

use super::model::{Movement, Position, Rectangle, Robot, Schedule};
use std::collections::{HashMap, HashSet};

/// A movement named a robot that has no initial position yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRobot(pub String);

#[derive(Debug, Default)]
pub struct ScheduleBuilder {
    declared_robot_count: Option<i64>,
    movements: Vec<Movement>,
    seen_movements: HashSet<Movement>,
    robots: Vec<Robot>,
    index: HashMap<String, usize>,
}

impl ScheduleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrites any previously declared count
    pub fn declare_robot_count(&mut self, count: i64) {
        self.declared_robot_count = Some(count);
    }

    /// Insert the robot if absent. Returns false when the name was already
    /// declared, in which case the first declaration is kept.
    pub fn declare_robot(&mut self, name: &str, position: Position) -> bool {
        if self.index.contains_key(name) {
            return false;
        }
        self.index.insert(name.to_string(), self.robots.len());
        self.robots.push(Robot::new(name.to_string(), position));
        true
    }

    /// Record where `name` goes at `movement`.
    ///
    /// A second entry for the same robot and movement replaces the first; the
    /// replaced rectangle is returned.
    pub fn record_movement(
        &mut self,
        movement: Movement,
        name: &str,
        target: Position,
    ) -> Result<Option<Rectangle>, UnknownRobot> {
        let slot = *self
            .index
            .get(name)
            .ok_or_else(|| UnknownRobot(name.to_string()))?;

        if self.seen_movements.insert(movement) {
            self.movements.push(movement);
        }

        Ok(self.robots[slot].record_movement(movement, target))
    }

    pub fn build(self) -> Schedule {
        Schedule {
            declared_robot_count: self.declared_robot_count,
            movements: self.movements,
            robots: self.robots,
            index: self.index,
        }
    }
}
