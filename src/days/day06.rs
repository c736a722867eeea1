use std::ops::Range;

use regex::Regex;
use tracing::debug;

use super::PuzzleError;
use crate::{big_decimal::BigDecimal, parser_combinators::decimal};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Operation {
    Add,
    Multiply,
}

impl Operation {
    fn apply(self, operands: &[BigDecimal]) -> BigDecimal {
        match self {
            Operation::Add => operands.iter().sum(),
            Operation::Multiply => operands.iter().product(),
        }
    }
}

/// One operator and the character columns it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Block {
    operation: Operation,
    columns: Range<usize>,
}

struct Worksheet<'a> {
    rows: Vec<(usize, &'a str)>,
    blocks: Vec<Block>,
}

impl<'a> Worksheet<'a> {
    fn parse(lines: &[&'a str]) -> Result<Self, PuzzleError> {
        let (operator_index, operator_line) = lines
            .iter()
            .enumerate()
            .rfind(|(_, line)| !line.trim().is_empty())
            .ok_or(PuzzleError::NoData)?;

        let rows = lines[..operator_index]
            .iter()
            .copied()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .collect::<Vec<_>>();

        let width = lines.iter().map(|line| line.len()).max().unwrap_or(0);

        let tokens = Regex::new(r"\S+")?
            .find_iter(operator_line)
            .map(|token| match token.as_str() {
                "+" => Ok((token.start(), Operation::Add)),
                "*" => Ok((token.start(), Operation::Multiply)),
                other => Err(PuzzleError::malformed(
                    operator_index,
                    operator_line,
                    format!("unknown operator {other:?}"),
                )),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let blocks = tokens
            .iter()
            .enumerate()
            .map(|(i, &(start, operation))| {
                let end = tokens.get(i + 1).map_or(width, |&(next, _)| next);
                Block {
                    operation,
                    columns: start..end,
                }
            })
            .collect();

        Ok(Worksheet { rows, blocks })
    }

    /// Characters past the end of a row read as spaces.
    fn cell(row: &str, column: usize) -> char {
        row.as_bytes().get(column).map_or(' ', |&b| b as char)
    }

    fn row_operands(&self, block: &Block) -> Result<Vec<BigDecimal>, PuzzleError> {
        let mut operands = vec![];

        for &(i, row) in &self.rows {
            let text = block
                .columns
                .clone()
                .map(|column| Self::cell(row, column))
                .collect::<String>();
            let text = text.trim();

            if text.is_empty() {
                continue;
            }

            match decimal(text) {
                Some(("", n)) => operands.push(n),
                _ => {
                    return Err(PuzzleError::malformed(
                        i,
                        row,
                        format!("{text:?} is not a number"),
                    ))
                }
            }
        }

        Ok(operands)
    }

    fn column_operands(&self, block: &Block) -> Result<Vec<BigDecimal>, PuzzleError> {
        let mut operands = vec![];

        for column in block.columns.clone().rev() {
            let mut digits = String::new();

            for &(i, row) in &self.rows {
                match Self::cell(row, column) {
                    ' ' => {}
                    c if c.is_ascii_digit() => digits.push(c),
                    c => {
                        return Err(PuzzleError::malformed(
                            i,
                            row,
                            format!("unexpected {c:?} in column {}", column + 1),
                        ))
                    }
                }
            }

            if !digits.is_empty() {
                operands.push(digits.parse()?);
            }
        }

        Ok(operands)
    }

    fn total(
        &self,
        operands: impl Fn(&Self, &Block) -> Result<Vec<BigDecimal>, PuzzleError>,
    ) -> Result<BigDecimal, PuzzleError> {
        let mut total = BigDecimal::zero();

        for block in &self.blocks {
            let operands = operands(self, block)?;
            if operands.is_empty() {
                return Err(PuzzleError::NoSolution("an operator has no operands"));
            }

            let result = block.operation.apply(&operands);
            debug!(operation = ?block.operation, columns = ?block.columns, %result, "block folded");
            total = total.add(&result);
        }

        Ok(total)
    }
}

pub fn solve(lines: &[&str]) -> Result<BigDecimal, PuzzleError> {
    Worksheet::parse(lines)?.total(Worksheet::row_operands)
}

pub fn bonus(lines: &[&str]) -> Result<BigDecimal, PuzzleError> {
    Worksheet::parse(lines)?.total(Worksheet::column_operands)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: [&str; 4] = [
        "123 328  51 64 ",
        " 45 64  387 23 ",
        "  6 98  215 314",
        "*   +   *   +  ",
    ];

    #[test]
    fn blocks_follow_operators() {
        let sheet = Worksheet::parse(&SHEET).unwrap();
        assert_eq!(sheet.rows.len(), 3);
        assert_eq!(
            sheet.blocks,
            vec![
                Block { operation: Operation::Multiply, columns: 0..4 },
                Block { operation: Operation::Add, columns: 4..8 },
                Block { operation: Operation::Multiply, columns: 8..12 },
                Block { operation: Operation::Add, columns: 12..15 },
            ]
        );
    }

    #[test]
    fn reading_rows_and_columns() {
        let sheet = Worksheet::parse(&SHEET).unwrap();
        let last = &sheet.blocks[3];

        let rows = sheet.row_operands(last).unwrap();
        assert_eq!(
            rows.iter().map(BigDecimal::as_str).collect::<Vec<_>>(),
            vec!["64", "23", "314"]
        );

        let columns = sheet.column_operands(last).unwrap();
        assert_eq!(
            columns.iter().map(BigDecimal::as_str).collect::<Vec<_>>(),
            vec!["4", "431", "623"]
        );
    }

    #[test]
    fn short_rows_are_padded() {
        // the second row lost its trailing spaces
        let lines = ["12 3", "4", "*  +"];
        assert_eq!(solve(&lines).unwrap().as_str(), "51");
        assert_eq!(bonus(&lines).unwrap().as_str(), "31");
    }

    #[test]
    fn products_beyond_u128() {
        let lines = [
            "99999999999999999999",
            "99999999999999999999",
            "*",
        ];
        assert_eq!(
            solve(&lines).unwrap().as_str(),
            "9999999999999999999800000000000000000001"
        );
    }

    #[test]
    fn rejects_unknown_operators() {
        assert!(matches!(
            solve(&["1 2", "- +"]),
            Err(PuzzleError::Malformed { line: 2, .. })
        ));
    }
}
