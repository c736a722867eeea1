use std::{fmt, ops::RangeInclusive};

use thiserror::Error;

use crate::big_decimal::DecimalError;

pub mod day01;
pub mod day02;
pub mod day03;
pub mod day04;
pub mod day05;
pub mod day06;
pub mod day07;
pub mod day08;
pub mod day09;

pub const DAYS: RangeInclusive<u8> = 1..=9;

#[derive(Error, Debug)]
pub enum PuzzleError {
    #[error("no data was given")]
    NoData,
    #[error("there is no solution for day {0}")]
    UnknownDay(u8),
    #[error("malformed input at line {line} ({content:?}): {reason}")]
    Malformed {
        line: usize,
        content: String,
        reason: String,
    },
    #[error("no answer exists: {0}")]
    NoSolution(&'static str),
    #[error(transparent)]
    Decimal(#[from] DecimalError),
    #[error(transparent)]
    Pattern(#[from] regex::Error),
}

impl PuzzleError {
    /// `index` is zero-based, the reported line number is one-based.
    pub fn malformed(index: usize, content: &str, reason: impl Into<String>) -> Self {
        PuzzleError::Malformed {
            line: index + 1,
            content: content.to_string(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    One,
    Two,
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::One => write!(f, "Part 1"),
            Part::Two => write!(f, "Part 2"),
        }
    }
}

/// Knobs that only some puzzles care about.
#[derive(Debug, Clone)]
pub struct Options {
    /// How many of the closest junction box pairs day 8 connects in part 1.
    pub connections: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options { connections: 1000 }
    }
}

/// Solves one part of one day, formatting the answer.
pub fn run(day: u8, part: Part, lines: &[&str], options: &Options) -> Result<String, PuzzleError> {
    if !DAYS.contains(&day) {
        return Err(PuzzleError::UnknownDay(day));
    }

    if lines.iter().all(|line| line.trim().is_empty()) {
        return Err(PuzzleError::NoData);
    }

    let answer = match (day, part) {
        (1, Part::One) => day01::solve(lines)?.to_string(),
        (1, Part::Two) => day01::bonus(lines)?.to_string(),
        (2, Part::One) => day02::solve(lines)?.to_string(),
        (2, Part::Two) => day02::bonus(lines)?.to_string(),
        (3, Part::One) => day03::solve(lines)?.to_string(),
        (3, Part::Two) => day03::bonus(lines)?.to_string(),
        (4, Part::One) => day04::solve(lines)?.to_string(),
        (4, Part::Two) => day04::bonus(lines)?.to_string(),
        (5, Part::One) => day05::solve(lines)?.to_string(),
        (5, Part::Two) => day05::bonus(lines)?.to_string(),
        (6, Part::One) => day06::solve(lines)?.to_string(),
        (6, Part::Two) => day06::bonus(lines)?.to_string(),
        (7, Part::One) => day07::solve(lines)?.to_string(),
        (7, Part::Two) => day07::bonus(lines)?.to_string(),
        (8, Part::One) => day08::solve(lines, options.connections)?.to_string(),
        (8, Part::Two) => day08::bonus(lines)?.to_string(),
        (9, Part::One) => day09::solve(lines)?.to_string(),
        (9, Part::Two) => day09::bonus(lines)?.to_string(),
        _ => return Err(PuzzleError::UnknownDay(day)),
    };

    Ok(answer)
}
