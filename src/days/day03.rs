use super::PuzzleError;

/// The largest number formed by picking `count` digits of `bank` in order.
fn max_joltage(bank: &str, count: usize) -> Option<u64> {
    let digits = bank.as_bytes();
    if count == 0 || digits.len() < count || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }

    let mut start = 0;
    let mut joltage = 0;

    for remaining in (0..count).rev() {
        let window = &digits[start..digits.len() - remaining];
        // max_by_key keeps the last maximum, so reversing finds the leftmost
        // one and leaves the most digits for later picks
        let (offset, &best) = window.iter().enumerate().rev().max_by_key(|(_, &d)| d)?;

        joltage = joltage * 10 + u64::from(best - b'0');
        start += offset + 1;
    }

    Some(joltage)
}

fn total_joltage(lines: &[&str], count: usize) -> Result<u64, PuzzleError> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| !line.is_empty())
        .map(|(i, &line)| {
            max_joltage(line, count).ok_or_else(|| {
                PuzzleError::malformed(i, line, format!("need a bank of at least {count} digits"))
            })
        })
        .sum()
}

pub fn solve(lines: &[&str]) -> Result<u64, PuzzleError> {
    total_joltage(lines, 2)
}

pub fn bonus(lines: &[&str]) -> Result<u64, PuzzleError> {
    total_joltage(lines, 12)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_largest_digits_in_order() {
        assert_eq!(max_joltage("987654321111111", 2), Some(98));
        assert_eq!(max_joltage("811111111111119", 2), Some(89));
        assert_eq!(max_joltage("818181911112111", 2), Some(92));
        assert_eq!(max_joltage("234234234234278", 12), Some(434234234278));
        assert_eq!(max_joltage("12", 2), Some(12));
    }

    #[test]
    fn short_or_broken_banks() {
        assert_eq!(max_joltage("9", 2), None);
        assert_eq!(max_joltage("9x9", 2), None);
        assert!(matches!(
            solve(&["12345", "1"]),
            Err(PuzzleError::Malformed { line: 2, .. })
        ));
    }
}
