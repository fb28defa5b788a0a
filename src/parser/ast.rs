//! Parsed Schedule Lines
//!
//! Typed representation of the three recognised line shapes.

use std::num::ParseIntError;
use std::str::FromStr;

use crate::parser::error::ParseError;
use crate::parser::lexer::SourceLine;
use crate::schedule::{Movement, Position};

/// A classified schedule line
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedLine<'a> {
    /// `<count>`
    RobotCount(i64),
    /// `<name>, <x>, <y>`
    InitialPosition { name: &'a str, position: Position },
    /// `<movement>, <name>, <x>, <y>`
    Movement {
        movement: Movement,
        name: &'a str,
        target: Position,
    },
}

/// Classify a line by its field count and parse the numeric fields
pub fn classify<'a>(line: &SourceLine<'a>) -> Result<ParsedLine<'a>, ParseError> {
    let number = line.number;

    match line.fields[..] {
        [count] => Ok(ParsedLine::RobotCount(parse_int(number, "robot count", count)?)),
        [name, x, y] => Ok(ParsedLine::InitialPosition {
            name,
            position: Position::new(parse_int(number, "x", x)?, parse_int(number, "y", y)?),
        }),
        [movement, name, x, y] => Ok(ParsedLine::Movement {
            movement: parse_int(number, "movement", movement)?,
            name,
            target: Position::new(parse_int(number, "x", x)?, parse_int(number, "y", y)?),
        }),
        _ => Err(ParseError::Format {
            line: number,
            fields: line.fields.len(),
        }),
    }
}

fn parse_int<T>(line: usize, field: &'static str, value: &str) -> Result<T, ParseError>
where
    T: FromStr<Err = ParseIntError>,
{
    value.parse().map_err(|source| ParseError::Numeric {
        line,
        field,
        value: value.to_string(),
        source,
    })
}
