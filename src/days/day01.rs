use tracing::debug;

use super::PuzzleError;
use crate::parser_combinators::{alt, complete, map, preceded, tag, unsigned};

const DIAL_SIZE: u64 = 100;
const START_POSITION: u64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rotation {
    Left(u64),
    Right(u64),
}

fn parse(lines: &[&str]) -> Result<Vec<Rotation>, PuzzleError> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(i, &line)| {
            complete(
                alt(
                    map(preceded(tag("L"), unsigned), Rotation::Left),
                    map(preceded(tag("R"), unsigned), Rotation::Right),
                ),
                i,
                line,
            )
        })
        .collect()
}

/// Returns the new position and how many clicks on the way (the last one
/// included) pointed at zero.
fn turn(position: u64, rotation: Rotation) -> (u64, u64) {
    match rotation {
        Rotation::Right(n) => {
            let end = position + n % DIAL_SIZE;
            (end % DIAL_SIZE, n / DIAL_SIZE + end / DIAL_SIZE)
        }
        Rotation::Left(n) => {
            let zeros = if position == 0 {
                n / DIAL_SIZE
            } else if n >= position {
                (n - position) / DIAL_SIZE + 1
            } else {
                0
            };

            ((position + DIAL_SIZE - n % DIAL_SIZE) % DIAL_SIZE, zeros)
        }
    }
}

fn spin(rotations: &[Rotation]) -> impl Iterator<Item = (u64, u64)> + '_ {
    rotations.iter().scan(START_POSITION, |position, &rotation| {
        let (next, zeros) = turn(*position, rotation);
        debug!(?rotation, from = *position, to = next, zeros, "dial turned");
        *position = next;
        Some((next, zeros))
    })
}

pub fn solve(lines: &[&str]) -> Result<usize, PuzzleError> {
    let rotations = parse(lines)?;

    Ok(spin(&rotations).filter(|&(position, _)| position == 0).count())
}

pub fn bonus(lines: &[&str]) -> Result<u128, PuzzleError> {
    let rotations = parse(lines)?;

    Ok(spin(&rotations).map(|(_, zeros)| u128::from(zeros)).sum())
}
