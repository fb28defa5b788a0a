//! Schedule Parser
//!
//! Turns raw schedule text into a [`Schedule`] in a single pass.
//! Lexing, line classification and schedule assembly are kept separate.

pub mod ast;
pub mod error;
pub mod lexer;

pub use ast::ParsedLine;
pub use error::ParseError;
pub use lexer::{split_lines, SourceLine};

use crate::schedule::{Schedule, ScheduleBuilder, UnknownRobot};

/// Classify a single meaningful line
pub fn parse_line<'a>(line: &SourceLine<'a>) -> Result<ParsedLine<'a>, ParseError> {
    ast::classify(line)
}

/// Parse a complete schedule.
///
/// The first malformed line aborts parsing; no partial schedule is returned.
pub fn parse(text: &str) -> Result<Schedule, ParseError> {
    let mut builder = ScheduleBuilder::new();

    for line in lexer::split_lines(text) {
        match parse_line(&line)? {
            ParsedLine::RobotCount(count) => builder.declare_robot_count(count),
            ParsedLine::InitialPosition { name, position } => {
                if !builder.declare_robot(name, position) {
                    log::debug!(
                        "line {}: robot '{}' already declared, keeping first position",
                        line.number,
                        name
                    );
                }
            }
            ParsedLine::Movement {
                movement,
                name,
                target,
            } => {
                let replaced = builder
                    .record_movement(movement, name, target)
                    .map_err(|UnknownRobot(name)| ParseError::UnknownRobot {
                        line: line.number,
                        name,
                    })?;
                if replaced.is_some() {
                    log::warn!(
                        "line {}: robot '{}' has a second entry for movement {}, using the later one",
                        line.number,
                        name,
                        movement
                    );
                }
            }
        }
    }

    let schedule = builder.build();
    log::debug!(
        "Parsed {} robots across {} movements",
        schedule.robots().len(),
        schedule.movements().len()
    );
    Ok(schedule)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::Position;

    const SAMPLE: &str = "\
# two robots, three steps
2
Robot A, 0, 0
Robot B, 10, 10

0, Robot A, 1, 1
0, Robot B, 9, 9
1, Robot A, 9, 9
1, Robot B, 1, 1
";

    #[test]
    fn test_parse_sample() {
        let schedule = parse(SAMPLE).unwrap();

        assert_eq!(schedule.declared_robot_count(), Some(2));
        assert_eq!(schedule.movements(), &[0, 1]);
        assert_eq!(schedule.robots().len(), 2);

        let b = schedule.robot("Robot B").unwrap();
        assert_eq!(b.initial_position(), Position::new(10, 10));
        let rect = b.rectangle_at(1).unwrap();
        assert_eq!((rect.x_left(), rect.x_right()), (1, 10));
        assert_eq!((rect.y_bottom(), rect.y_top()), (1, 10));
    }

    #[test]
    fn test_redeclared_robot_is_ignored() {
        let schedule = parse("A, 0, 0\nA, 100, 100\n0, A, 1, 1").unwrap();
        let a = schedule.robot("A").unwrap();
        assert_eq!(a.initial_position(), Position::new(0, 0));
        assert_eq!(a.rectangle_at(0).unwrap().x_left(), 0);
    }

    #[test]
    fn test_robot_count_anywhere_last_wins() {
        let schedule = parse("A, 0, 0\n3\n0, A, 1, 1\n5").unwrap();
        assert_eq!(schedule.declared_robot_count(), Some(5));
    }

    #[test]
    fn test_negative_robot_count_is_stored() {
        let schedule = parse("-1\nA, 0, 0\n0, A, 1, 1").unwrap();
        assert_eq!(schedule.declared_robot_count(), Some(-1));
        assert_eq!(schedule.robots().len(), 1);
    }

    #[test]
    fn test_duplicate_movement_last_wins() {
        let schedule = parse("A, 0, 0\n0, A, 1, 1\n0, A, 4, 4").unwrap();
        let a = schedule.robot("A").unwrap();
        assert_eq!(a.rectangles().len(), 1);
        assert_eq!(a.rectangle_at(0).unwrap().x_right(), 4);
    }

    #[test]
    fn test_unknown_robot_reports_line() {
        let err = parse("A, 0, 0\n\n0, B, 1, 1").unwrap_err();
        assert_eq!(
            err,
            ParseError::UnknownRobot {
                line: 3,
                name: "B".to_string()
            }
        );
    }

    #[test]
    fn test_format_error_aborts() {
        let err = parse("A, 0, 0\nA, 0\n0, A, 1, 1").unwrap_err();
        assert_eq!(err.line(), 2);
        assert!(matches!(err, ParseError::Format { fields: 2, .. }));
    }

    #[test]
    fn test_empty_text() {
        let schedule = parse("").unwrap();
        assert!(schedule.robots().is_empty());
        assert!(schedule.movements().is_empty());
        assert_eq!(schedule.declared_robot_count(), None);
    }
}
