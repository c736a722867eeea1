use tracing::debug;

use super::PuzzleError;
use crate::big_decimal::BigDecimal;

const START: char = 'S';
const SPLITTER: char = '^';
const EMPTY: char = '.';

struct Manifold {
    start: usize,
    width: usize,
    /// Splitter columns per row below the start, as flags.
    rows: Vec<Vec<bool>>,
}

fn parse(lines: &[&str]) -> Result<Manifold, PuzzleError> {
    let mut lines = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.is_empty());

    let (first_index, &first) = lines.next().ok_or(PuzzleError::NoData)?;
    let start = first
        .find(START)
        .ok_or_else(|| PuzzleError::malformed(first_index, first, "no start in the first row"))?;

    let rows = lines
        .map(|(i, &line)| {
            line.chars()
                .map(|c| match c {
                    SPLITTER => Ok(true),
                    EMPTY => Ok(false),
                    _ => Err(PuzzleError::malformed(i, line, format!("unexpected {c:?}"))),
                })
                .collect::<Result<Vec<_>, _>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    let width = rows
        .iter()
        .map(Vec::len)
        .chain([first.len()])
        .max()
        .unwrap_or(0);

    Ok(Manifold { start, width, rows })
}

impl Manifold {
    fn is_splitter(&self, row: usize, column: usize) -> bool {
        self.rows[row].get(column).copied().unwrap_or(false)
    }

    /// Sends the beam down, calling `split` whenever a column of beams hits
    /// a splitter. Returns the timelines per column that reach the bottom,
    /// and those that left the manifold sideways.
    fn descend(&self, mut split: impl FnMut()) -> (Vec<BigDecimal>, BigDecimal) {
        let mut beams = vec![BigDecimal::zero(); self.width];
        beams[self.start] = BigDecimal::one();
        let mut escaped = BigDecimal::zero();

        for row in 0..self.rows.len() {
            let mut next = vec![BigDecimal::zero(); self.width];

            for (column, count) in beams.iter().enumerate() {
                if count.is_zero() {
                    continue;
                }

                if !self.is_splitter(row, column) {
                    next[column] = next[column].add(count);
                    continue;
                }

                split();

                match column.checked_sub(1) {
                    Some(left) => next[left] = next[left].add(count),
                    None => escaped = escaped.add(count),
                }
                match next.get_mut(column + 1) {
                    Some(right) => *right = right.add(count),
                    None => escaped = escaped.add(count),
                }
            }

            beams = next;
            debug!(row, active = beams.iter().filter(|n| !n.is_zero()).count(), "beams moved");
        }

        (beams, escaped)
    }
}

pub fn solve(lines: &[&str]) -> Result<usize, PuzzleError> {
    let manifold = parse(lines)?;
    let mut splits = 0;

    manifold.descend(|| splits += 1);

    Ok(splits)
}

pub fn bonus(lines: &[&str]) -> Result<BigDecimal, PuzzleError> {
    let manifold = parse(lines)?;

    let (beams, escaped) = manifold.descend(|| {});

    Ok(beams.iter().sum::<BigDecimal>().add(&escaped))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merged_beams_split_once() {
        let lines = [".S.", "...", ".^.", "...", "^.^"];
        // one split at the middle, the two beams each hit an outer splitter
        assert_eq!(solve(&lines).unwrap(), 3);
        // each outer splitter sends one timeline off the edge
        assert_eq!(bonus(&lines).unwrap().as_str(), "4");
    }

    #[test]
    fn straight_down() {
        assert_eq!(solve(&["S", ".", "."]).unwrap(), 0);
        assert_eq!(bonus(&["S", ".", "."]).unwrap().as_str(), "1");
    }

    /// Every level of a full splitter triangle doubles the timelines.
    fn triangle(depth: usize) -> Vec<String> {
        let width = 2 * depth + 1;
        let mut lines = vec![];

        let mut first = ".".repeat(width);
        first.replace_range(depth..=depth, "S");
        lines.push(first);

        for level in 0..depth {
            let row = (0..width)
                .map(|column| {
                    let offset = column.abs_diff(depth);
                    if offset <= level && offset % 2 == level % 2 {
                        '^'
                    } else {
                        '.'
                    }
                })
                .collect::<String>();
            lines.push(".".repeat(width));
            lines.push(row);
        }

        lines
    }

    #[test]
    fn timelines_beyond_u64() {
        let lines = triangle(70);
        let lines = lines.iter().map(String::as_str).collect::<Vec<_>>();

        assert_eq!(solve(&lines).unwrap(), 70 * 71 / 2);
        // 2^70
        assert_eq!(bonus(&lines).unwrap().as_str(), "1180591620717411303424");
    }

    #[test]
    fn needs_a_start() {
        assert!(matches!(
            solve(&["...", ".^."]),
            Err(PuzzleError::Malformed { line: 1, .. })
        ));
        assert!(matches!(
            solve(&[".S.", ".x."]),
            Err(PuzzleError::Malformed { line: 2, .. })
        ));
    }
}
