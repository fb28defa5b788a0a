//! Validation Engine
//!
//! Pairwise collision detection per movement, separated from parsing.

use serde::Serialize;

use crate::parser::{self, ParseError};
use crate::schedule::{Movement, Rectangle, Robot, Schedule};

/// The first pair of robots found sharing space during a movement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Collision {
    pub movement: Movement,
    pub first: String,
    pub second: String,
    pub first_area: Rectangle,
    pub second_area: Rectangle,
}

/// Outcome of validating a schedule
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationResult {
    pub collision: Option<Collision>,
    pub movements_checked: usize,
    pub pairs_checked: usize,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.collision.is_none()
    }
}

/// Closed-interval overlap: shared edges and corners count.
pub fn overlaps(a: &Rectangle, b: &Rectangle) -> bool {
    b.x_left() <= a.x_right()
        && a.x_left() <= b.x_right()
        && b.y_bottom() <= a.y_top()
        && a.y_bottom() <= b.y_top()
}

/// Check every movement in first-appearance order, stopping at the first collision
pub fn validate(schedule: &Schedule) -> ValidationResult {
    let mut result = ValidationResult::new();

    for &movement in schedule.movements() {
        result.movements_checked += 1;

        let active = schedule.active_at(movement);
        log::debug!("Movement {}: {} robots moving", movement, active.len());

        if let Some(collision) = first_collision(movement, &active, &mut result.pairs_checked) {
            log::info!(
                "Collision between '{}' and '{}' at movement {}",
                collision.first,
                collision.second,
                collision.movement
            );
            result.collision = Some(collision);
            return result;
        }
    }

    result
}

pub fn is_valid(schedule: &Schedule) -> bool {
    validate(schedule).is_valid()
}

/// Parse and validate in one step
pub fn validate_text(text: &str) -> Result<ValidationResult, ParseError> {
    let schedule = parser::parse(text)?;
    Ok(validate(&schedule))
}

fn first_collision(
    movement: Movement,
    active: &[(&Robot, &Rectangle)],
    pairs_checked: &mut usize,
) -> Option<Collision> {
    for (i, &(robot_a, area_a)) in active.iter().enumerate() {
        for &(robot_b, area_b) in &active[i + 1..] {
            *pairs_checked += 1;

            let collide = overlaps(area_a, area_b);
            log::trace!(
                "{} vs {} at movement {}: collide = {}",
                robot_a.name(),
                robot_b.name(),
                movement,
                collide
            );

            if collide {
                return Some(Collision {
                    movement,
                    first: robot_a.name().to_string(),
                    second: robot_b.name().to_string(),
                    first_area: *area_a,
                    second_area: *area_b,
                });
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::Position;

    fn rect(from: (i64, i64), to: (i64, i64)) -> Rectangle {
        Rectangle::swept(0, Position::new(from.0, from.1), Position::new(to.0, to.1))
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let samples = [
            rect((0, 0), (10, 10)),
            rect((11, 11), (12, 12)),
            rect((10, 10), (5, 1)),
            rect((5, 5), (5, 5)),
            rect((-3, 4), (20, 4)),
        ];
        for a in &samples {
            for b in &samples {
                assert_eq!(overlaps(a, b), overlaps(b, a), "{a:?} / {b:?}");
            }
        }
    }

    #[test]
    fn test_rectangle_overlaps_itself() {
        let point = rect((3, 3), (3, 3));
        let area = rect((0, 0), (4, 9));
        assert!(overlaps(&point, &point));
        assert!(overlaps(&area, &area));
    }

    #[test]
    fn test_shared_edge_collides() {
        assert!(overlaps(&rect((0, 0), (5, 9)), &rect((10, 10), (5, 1))));
    }

    #[test]
    fn test_shared_corner_collides() {
        assert!(overlaps(&rect((0, 0), (5, 5)), &rect((5, 5), (9, 9))));
    }

    #[test]
    fn test_gap_of_one_does_not_collide() {
        assert!(!overlaps(&rect((0, 0), (10, 10)), &rect((11, 11), (12, 12))));
        assert!(!overlaps(&rect((0, 0), (10, 10)), &rect((0, 11), (10, 12))));
    }

    #[test]
    fn test_point_inside_area_collides() {
        assert!(overlaps(&rect((0, 0), (10, 10)), &rect((4, 6), (4, 6))));
    }

    #[test]
    fn test_validate_reports_first_collision() {
        let text = "A, 0, 0\nB, 10, 10\nC, 50, 50\n\
                    0, A, 1, 1\n0, B, 9, 9\n0, C, 51, 51\n\
                    1, A, 9, 9\n1, B, 1, 1\n1, C, 5, 5";
        let result = validate_text(text).unwrap();

        assert!(!result.is_valid());
        let collision = result.collision.unwrap();
        assert_eq!(collision.movement, 1);
        assert_eq!((collision.first.as_str(), collision.second.as_str()), ("A", "B"));
        assert_eq!(collision.first_area.x_right(), 9);
        // Short-circuits on the first pair of movement 1
        assert_eq!(result.movements_checked, 2);
        assert_eq!(result.pairs_checked, 4);
    }

    #[test]
    fn test_idle_robots_are_not_checked() {
        // B sits where A moves, but B does not move at movement 0
        let text = "A, 0, 0\nB, 5, 5\n0, A, 10, 10\n1, B, 6, 6";
        let result = validate_text(text).unwrap();
        assert!(result.is_valid());
        assert_eq!(result.pairs_checked, 0);
    }

    #[test]
    fn test_validation_is_repeatable() {
        let schedule = parser::parse("A, 0, 0\nB, 10, 10\n0, A, 5, 5\n0, B, 5, 5").unwrap();
        let first = validate(&schedule);
        for _ in 0..3 {
            assert_eq!(validate(&schedule), first);
            assert!(!is_valid(&schedule));
        }
    }

    #[test]
    fn test_empty_schedule_is_valid() {
        let result = validate(&Schedule::default());
        assert!(result.is_valid());
        assert_eq!(result.movements_checked, 0);
    }
}
