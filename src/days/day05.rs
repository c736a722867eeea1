use tracing::debug;

use super::PuzzleError;
use crate::{
    big_decimal::BigDecimal,
    parser_combinators::{complete, decimal, separated_pair, tag},
};

#[derive(Debug, Clone, PartialEq, Eq)]
struct IdRange {
    start: BigDecimal,
    end: BigDecimal,
}

impl IdRange {
    fn contains(&self, id: &BigDecimal) -> bool {
        !id.is_less(&self.start) && !self.end.is_less(id)
    }

    fn size(&self) -> Result<BigDecimal, PuzzleError> {
        Ok(self.end.subtract(&self.start)?.increment())
    }
}

/// Ranges up to the first blank line, ingredient IDs after it.
fn parse(lines: &[&str]) -> Result<(Vec<IdRange>, Vec<BigDecimal>), PuzzleError> {
    let mut lines = lines.iter().enumerate();
    let mut ranges = vec![];

    for (i, &line) in lines.by_ref() {
        if line.is_empty() {
            break;
        }

        let (start, end) = complete(separated_pair(decimal, tag("-"), decimal), i, line)?;
        if end.is_less(&start) {
            return Err(PuzzleError::malformed(i, line, "range ends before it starts"));
        }

        ranges.push(IdRange { start, end });
    }

    let ids = lines
        .filter(|(_, line)| !line.is_empty())
        .map(|(i, &line)| complete(decimal, i, line))
        .collect::<Result<Vec<_>, _>>()?;

    Ok((ranges, ids))
}

/// Sorts and fuses overlapping or touching ranges.
fn merged(mut ranges: Vec<IdRange>) -> Vec<IdRange> {
    ranges.sort_by(|a, b| a.start.cmp(&b.start));

    let mut merged: Vec<IdRange> = vec![];
    for range in ranges {
        match merged.last_mut() {
            Some(last) if !last.end.increment().is_less(&range.start) => {
                if last.end.is_less(&range.end) {
                    last.end = range.end;
                }
            }
            _ => merged.push(range),
        }
    }

    merged
}

pub fn solve(lines: &[&str]) -> Result<usize, PuzzleError> {
    let (ranges, ids) = parse(lines)?;

    Ok(ids
        .iter()
        .filter(|id| ranges.iter().any(|range| range.contains(id)))
        .count())
}

pub fn bonus(lines: &[&str]) -> Result<BigDecimal, PuzzleError> {
    let (ranges, _) = parse(lines)?;

    merged(ranges)
        .iter()
        .map(|range| {
            let size = range.size()?;
            debug!(start = %range.start, end = %range.end, %size, "fresh range");
            Ok(size)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(start: &str, end: &str) -> IdRange {
        IdRange {
            start: start.parse().unwrap(),
            end: end.parse().unwrap(),
        }
    }

    #[test]
    fn merging() {
        assert_eq!(
            merged(vec![
                range("10", "14"),
                range("3", "5"),
                range("16", "20"),
                range("12", "18"),
            ]),
            vec![range("3", "5"), range("10", "20")]
        );

        // adjacent ranges fuse, ones with a gap do not
        assert_eq!(
            merged(vec![range("1", "2"), range("3", "4"), range("6", "6")]),
            vec![range("1", "4"), range("6", "6")]
        );

        // a range swallowed by an earlier one
        assert_eq!(
            merged(vec![range("1", "100"), range("5", "6")]),
            vec![range("1", "100")]
        );
    }

    #[test]
    fn huge_ids() {
        let lines = [
            "100000000000000000000-100000000000000000009",
            "99999999999999999999-100000000000000000000",
            "",
            "100000000000000000005",
        ];
        assert_eq!(solve(&lines).unwrap(), 1);
        assert_eq!(bonus(&lines).unwrap().as_str(), "11");
    }

    #[test]
    fn backwards_range() {
        assert!(matches!(
            solve(&["5-3", "", "4"]),
            Err(PuzzleError::Malformed { line: 1, .. })
        ));
    }
}
