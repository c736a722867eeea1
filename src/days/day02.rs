use fxhash::FxHashSet;
use tracing::debug;

use super::PuzzleError;
use crate::parser_combinators::{complete, separated_list1, separated_pair, tag, unsigned};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct IdRange {
    start: u128,
    end: u128,
}

/// The ranges may be wrapped over several lines, each ending in a comma.
fn parse(lines: &[&str]) -> Result<Vec<IdRange>, PuzzleError> {
    let mut ranges = vec![];

    for (i, &line) in lines.iter().enumerate() {
        let trimmed = line.trim().trim_end_matches(',');
        if trimmed.is_empty() {
            continue;
        }

        let pairs = complete(
            separated_list1(tag(","), separated_pair(unsigned, tag("-"), unsigned)),
            i,
            trimmed,
        )?;

        for (start, end) in pairs {
            if start > end {
                return Err(PuzzleError::malformed(
                    i,
                    line,
                    format!("range {start}-{end} ends before it starts"),
                ));
            }

            ranges.push(IdRange {
                start: start.into(),
                end: end.into(),
            });
        }
    }

    Ok(ranges)
}

fn digit_count(n: u128) -> u32 {
    n.checked_ilog10().map_or(1, |log| log + 1)
}

fn pow10(exp: u32) -> u128 {
    10u128.pow(exp)
}

/// Collects every ID in `range` that is one block of digits written exactly
/// `repeats` times.
fn repeated_ids(range: &IdRange, repeats: u32, found: &mut FxHashSet<u128>) {
    for len in digit_count(range.start)..=digit_count(range.end) {
        if len % repeats != 0 {
            continue;
        }

        let block_len = len / repeats;
        // block * multiplier spells the block `repeats` times, e.g. 12 * 10101 = 121212
        let multiplier = (0..repeats).map(|i| pow10(i * block_len)).sum::<u128>();

        let lowest = range.start.max(pow10(len - 1));
        let highest = range.end.min(pow10(len) - 1);

        let first_block = lowest.div_ceil(multiplier).max(pow10(block_len - 1));
        let last_block = (highest / multiplier).min(pow10(block_len) - 1);

        for block in first_block..=last_block {
            found.insert(block * multiplier);
        }
    }
}

fn invalid_id_sum(ranges: &[IdRange], max_repeats: impl Fn(&IdRange) -> u32) -> u128 {
    let mut found = FxHashSet::default();

    for range in ranges {
        for repeats in 2..=max_repeats(range) {
            repeated_ids(range, repeats, &mut found);
        }
        debug!(start = %range.start, end = %range.end, total = found.len(), "range scanned");
    }

    found.into_iter().sum()
}

pub fn solve(lines: &[&str]) -> Result<u128, PuzzleError> {
    let ranges = parse(lines)?;

    Ok(invalid_id_sum(&ranges, |_| 2))
}

pub fn bonus(lines: &[&str]) -> Result<u128, PuzzleError> {
    let ranges = parse(lines)?;

    Ok(invalid_id_sum(&ranges, |range| digit_count(range.end)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(start: u128, end: u128, repeats: u32) -> Vec<u128> {
        let mut found = FxHashSet::default();
        repeated_ids(&IdRange { start, end }, repeats, &mut found);
        let mut found = found.into_iter().collect::<Vec<_>>();
        found.sort();
        found
    }

    #[test]
    fn doubled_blocks() {
        assert_eq!(ids(11, 22, 2), vec![11, 22]);
        assert_eq!(ids(95, 115, 2), vec![99]);
        assert_eq!(ids(998, 1012, 2), vec![1010]);
        assert_eq!(ids(1698522, 1698528, 2), vec![]);
    }

    #[test]
    fn longer_repetitions() {
        assert_eq!(ids(95, 115, 3), vec![111]);
        assert_eq!(ids(565653, 565659, 3), vec![565656]);
        assert_eq!(ids(2121212118, 2121212124, 5), vec![2121212121]);
    }

    #[test]
    fn counts_each_id_once() {
        // 222222 is 2x"222", 3x"22" and 6x"2"
        assert_eq!(bonus(&["222220-222224"]).unwrap(), 222222);
    }

    #[test]
    fn wrapped_ranges() {
        let lines = ["11-22,", "95-115,", "", "998-1012"];
        assert_eq!(solve(&lines).unwrap(), 11 + 22 + 99 + 1010);
    }

    #[test]
    fn backwards_range() {
        assert!(matches!(
            solve(&["22-11"]),
            Err(PuzzleError::Malformed { line: 1, .. })
        ));

        let err = solve(&["11-22,95-115,", "30-20,40-50"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "malformed input at line 2 (\"30-20,40-50\"): range 30-20 ends before it starts"
        );

        assert!(matches!(
            solve(&["11-22,", "95-x"]),
            Err(PuzzleError::Malformed { line: 2, .. })
        ));
    }
}
