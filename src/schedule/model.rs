//! Schedule Model
//!
//! Immutable value types produced by the parser and read by the validator.

use serde::Serialize;
use std::collections::HashMap;

/// Time-step index of a movement
pub type Movement = i64;

/// A robot location on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

impl Position {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned area swept by a robot during one movement.
///
/// Bounds are inclusive and always normalised: `x_left <= x_right` and
/// `y_bottom <= y_top`. The fields are private so the only way to build one
/// is from two endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rectangle {
    movement: Movement,
    x_left: i64,
    x_right: i64,
    y_bottom: i64,
    y_top: i64,
}

impl Rectangle {
    /// Bounding rectangle of `from` and `to` for the given movement
    pub fn swept(movement: Movement, from: Position, to: Position) -> Self {
        Self {
            movement,
            x_left: from.x.min(to.x),
            x_right: from.x.max(to.x),
            y_bottom: from.y.min(to.y),
            y_top: from.y.max(to.y),
        }
    }

    pub fn movement(&self) -> Movement {
        self.movement
    }

    pub fn x_left(&self) -> i64 {
        self.x_left
    }

    pub fn x_right(&self) -> i64 {
        self.x_right
    }

    pub fn y_bottom(&self) -> i64 {
        self.y_bottom
    }

    pub fn y_top(&self) -> i64 {
        self.y_top
    }

    /// True when the rectangle has no area (straight-line or stationary move)
    pub fn is_degenerate(&self) -> bool {
        self.x_left == self.x_right || self.y_bottom == self.y_top
    }
}

/// A named robot with its initial position and per-movement swept areas
#[derive(Debug, Clone, PartialEq)]
pub struct Robot {
    name: String,
    initial_position: Position,
    rectangles: Vec<Rectangle>,
    /// Movement -> slot in `rectangles`
    slots: HashMap<Movement, usize>,
}

impl Robot {
    pub(crate) fn new(name: String, initial_position: Position) -> Self {
        Self {
            name,
            initial_position,
            rectangles: Vec::new(),
            slots: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn initial_position(&self) -> Position {
        self.initial_position
    }

    /// Rectangles in the order their movements were first recorded
    pub fn rectangles(&self) -> &[Rectangle] {
        &self.rectangles
    }

    /// The swept area at `movement`, if this robot moves then
    pub fn rectangle_at(&self, movement: Movement) -> Option<&Rectangle> {
        self.slots.get(&movement).map(|&slot| &self.rectangles[slot])
    }

    /// Record a movement to `target`, anchored at the initial position.
    ///
    /// Returns the replaced rectangle when this movement was already recorded.
    pub(crate) fn record_movement(
        &mut self,
        movement: Movement,
        target: Position,
    ) -> Option<Rectangle> {
        let rectangle = Rectangle::swept(movement, self.initial_position, target);
        if rectangle.is_degenerate() {
            log::trace!(
                "Robot '{}' sweeps a line or point at movement {}",
                self.name,
                movement
            );
        }

        match self.slots.get(&movement) {
            Some(&slot) => Some(std::mem::replace(&mut self.rectangles[slot], rectangle)),
            None => {
                self.slots.insert(movement, self.rectangles.len());
                self.rectangles.push(rectangle);
                None
            }
        }
    }
}

/// A fully parsed schedule. Built once by [`super::ScheduleBuilder`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Schedule {
    pub(crate) declared_robot_count: Option<i64>,
    pub(crate) movements: Vec<Movement>,
    pub(crate) robots: Vec<Robot>,
    pub(crate) index: HashMap<String, usize>,
}

impl Schedule {
    /// Robot count from the last single-field line, if any. Informational only.
    pub fn declared_robot_count(&self) -> Option<i64> {
        self.declared_robot_count
    }

    /// Distinct movement indices in order of first appearance
    pub fn movements(&self) -> &[Movement] {
        &self.movements
    }

    /// Robots in declaration order
    pub fn robots(&self) -> &[Robot] {
        &self.robots
    }

    pub fn robot(&self, name: &str) -> Option<&Robot> {
        self.index.get(name).map(|&i| &self.robots[i])
    }

    /// Robots that move at `movement`, paired with their swept area
    pub fn active_at(&self, movement: Movement) -> Vec<(&Robot, &Rectangle)> {
        self.robots
            .iter()
            .filter_map(|robot| robot.rectangle_at(movement).map(|rect| (robot, rect)))
            .collect()
    }
}
