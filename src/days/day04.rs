use tracing::debug;

use super::PuzzleError;

const ROLL: char = '@';
const EMPTY: char = '.';

const NEIGHBOURS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

type Grid = Vec<Vec<bool>>;

fn parse(lines: &[&str]) -> Result<Grid, PuzzleError> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(i, &line)| {
            line.chars()
                .map(|c| match c {
                    ROLL => Ok(true),
                    EMPTY => Ok(false),
                    _ => Err(PuzzleError::malformed(i, line, format!("unexpected {c:?}"))),
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect()
}

fn is_roll(grid: &Grid, y: usize, x: usize, (dy, dx): (isize, isize)) -> bool {
    let (Some(y), Some(x)) = (y.checked_add_signed(dy), x.checked_add_signed(dx)) else {
        return false;
    };

    grid.get(y)
        .and_then(|row| row.get(x))
        .copied()
        .unwrap_or(false)
}

/// Rolls with fewer than four rolls around them.
fn accessible(grid: &Grid) -> Vec<(usize, usize)> {
    grid.iter()
        .enumerate()
        .flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|(_, &roll)| roll)
                .map(move |(x, _)| (y, x))
        })
        .filter(|&(y, x)| {
            NEIGHBOURS
                .iter()
                .filter(|&&offset| is_roll(grid, y, x, offset))
                .count()
                < 4
        })
        .collect()
}

pub fn solve(lines: &[&str]) -> Result<usize, PuzzleError> {
    let grid = parse(lines)?;

    Ok(accessible(&grid).len())
}

pub fn bonus(lines: &[&str]) -> Result<usize, PuzzleError> {
    let mut grid = parse(lines)?;
    let mut removed = 0;

    loop {
        let reachable = accessible(&grid);
        if reachable.is_empty() {
            break;
        }

        debug!(count = reachable.len(), "removing rolls");
        removed += reachable.len();
        for (y, x) in reachable {
            grid[y][x] = false;
        }
    }

    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lonely_and_crowded_rolls() {
        assert_eq!(solve(&["@"]).unwrap(), 1);
        assert_eq!(solve(&["@@@", "@@@", "@@@"]).unwrap(), 4);
        assert_eq!(bonus(&["@@@", "@@@", "@@@"]).unwrap(), 9);
    }

    #[test]
    fn rejects_unknown_tiles() {
        assert!(matches!(
            solve(&["@.", ".#"]),
            Err(PuzzleError::Malformed { line: 2, .. })
        ));
    }
}
