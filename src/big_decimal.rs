//! Arbitrary-precision arithmetic on non-negative integers kept as decimal
//! digit strings.
//!
//! Every value is canonical: digits `0-9` only, most significant first, no
//! leading zero unless the value itself is zero (`"0"`). Operations borrow
//! their operands and hand back fresh values.

use std::{
    cmp::Ordering,
    fmt,
    iter::{once, Product, Sum},
    str::FromStr,
};

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigDecimal(String);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecimalError {
    #[error("empty digit string")]
    Empty,
    #[error("invalid digit {found:?} at offset {offset} in {input:?}")]
    InvalidDigit {
        input: String,
        found: char,
        offset: usize,
    },
    #[error("division by zero")]
    DivisionByZero,
    #[error("cannot decrement zero")]
    DecrementZero,
    #[error("cannot subtract {subtrahend} from {minuend}, the result would be negative")]
    NegativeResult {
        minuend: BigDecimal,
        subtrahend: BigDecimal,
    },
}

impl BigDecimal {
    pub fn zero() -> Self {
        BigDecimal("0".to_string())
    }

    pub fn one() -> Self {
        BigDecimal("1".to_string())
    }

    /// Builds a canonical value from digit values (`0..=9`), most significant first.
    fn from_digits(digits: impl IntoIterator<Item = u8>) -> Self {
        let digits = digits
            .into_iter()
            .skip_while(|&d| d == 0)
            .map(|d| char::from(b'0' + d))
            .collect::<String>();

        if digits.is_empty() {
            Self::zero()
        } else {
            BigDecimal(digits)
        }
    }

    fn digits(&self) -> impl DoubleEndedIterator<Item = u8> + ExactSizeIterator + '_ {
        self.0.bytes().map(|b| b - b'0')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn digit_count(&self) -> usize {
        self.0.len()
    }

    pub fn is_zero(&self) -> bool {
        self.0 == "0"
    }

    /// Strictly-less comparison: shorter canonical strings are smaller, equal
    /// lengths are decided by the first differing digit.
    pub fn is_less(&self, other: &BigDecimal) -> bool {
        self.cmp(other) == Ordering::Less
    }

    pub fn increment(&self) -> BigDecimal {
        let mut digits = self.digits().collect::<Vec<_>>();

        for digit in digits.iter_mut().rev() {
            if *digit < 9 {
                *digit += 1;
                return Self::from_digits(digits);
            }
            *digit = 0;
        }

        // all nines
        Self::from_digits(once(1).chain(digits))
    }

    pub fn decrement(&self) -> Result<BigDecimal, DecimalError> {
        if self.is_zero() {
            return Err(DecimalError::DecrementZero);
        }

        let mut digits = self.digits().collect::<Vec<_>>();

        for digit in digits.iter_mut().rev() {
            if *digit > 0 {
                *digit -= 1;
                break;
            }
            *digit = 9;
        }

        Ok(Self::from_digits(digits))
    }

    pub fn add(&self, other: &BigDecimal) -> BigDecimal {
        let (longer, shorter) = if self.digit_count() >= other.digit_count() {
            (self, other)
        } else {
            (other, self)
        };

        // one spare position for the final carry
        let mut sum = vec![0u8; longer.digit_count() + 1];
        let mut lhs = longer.digits().rev();
        let mut rhs = shorter.digits().rev();
        let mut carry = 0;

        for slot in sum.iter_mut().rev() {
            let total = lhs.next().unwrap_or(0) + rhs.next().unwrap_or(0) + carry;
            *slot = total % 10;
            carry = total / 10;
        }

        Self::from_digits(sum)
    }

    /// `self - subtrahend`, refusing to go below zero.
    pub fn subtract(&self, subtrahend: &BigDecimal) -> Result<BigDecimal, DecimalError> {
        if self.is_less(subtrahend) {
            return Err(DecimalError::NegativeResult {
                minuend: self.clone(),
                subtrahend: subtrahend.clone(),
            });
        }

        Ok(Self::difference(self, subtrahend))
    }

    /// The distance between two values, whichever is larger.
    pub fn abs_diff(&self, other: &BigDecimal) -> BigDecimal {
        if self.is_less(other) {
            Self::difference(other, self)
        } else {
            Self::difference(self, other)
        }
    }

    /// Requires `larger >= smaller`.
    fn difference(larger: &BigDecimal, smaller: &BigDecimal) -> BigDecimal {
        let mut difference = vec![0u8; larger.digit_count()];
        let mut lhs = larger.digits().rev();
        let mut rhs = smaller.digits().rev();
        let mut borrow = 0;

        for slot in difference.iter_mut().rev() {
            let minuend = lhs.next().unwrap_or(0);
            let taken = rhs.next().unwrap_or(0) + borrow;

            if minuend >= taken {
                *slot = minuend - taken;
                borrow = 0;
            } else {
                *slot = minuend + 10 - taken;
                borrow = 1;
            }
        }

        Self::from_digits(difference)
    }

    /// Schoolbook long multiplication, `O(len(self) * len(other))`.
    pub fn multiply(&self, other: &BigDecimal) -> BigDecimal {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let lhs = self.digits().collect::<Vec<_>>();
        let rhs = other.digits().collect::<Vec<_>>();

        // columns[k] collects every digit pair whose positions add up to k - 1
        let mut columns = vec![0u64; lhs.len() + rhs.len()];
        for (i, &a) in lhs.iter().enumerate() {
            for (j, &b) in rhs.iter().enumerate() {
                columns[i + j + 1] += u64::from(a) * u64::from(b);
            }
        }

        let mut carry = 0;
        for column in columns.iter_mut().rev() {
            let total = *column + carry;
            *column = total % 10;
            carry = total / 10;
        }

        Self::from_digits(columns.into_iter().map(|d| d as u8))
    }

    /// Long division, returning `(quotient, remainder)`.
    pub fn divide(&self, divisor: &BigDecimal) -> Result<(BigDecimal, BigDecimal), DecimalError> {
        if divisor.is_zero() {
            return Err(DecimalError::DivisionByZero);
        }

        if self.is_less(divisor) {
            return Ok((Self::zero(), self.clone()));
        }

        let mut quotient = Vec::with_capacity(self.digit_count());
        let mut remainder = Self::zero();

        for digit in self.digits() {
            remainder = remainder.shifted_in(digit);

            let mut count = 0;
            while !remainder.is_less(divisor) {
                remainder = Self::difference(&remainder, divisor);
                count += 1;
            }

            quotient.push(count);
        }

        Ok((Self::from_digits(quotient), remainder))
    }

    /// `self * 10 + digit`
    fn shifted_in(&self, digit: u8) -> BigDecimal {
        Self::from_digits(self.digits().chain(once(digit)))
    }
}

impl Ord for BigDecimal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.digit_count()
            .cmp(&other.digit_count())
            .then_with(|| self.0.as_bytes().cmp(other.0.as_bytes()))
    }
}

impl PartialOrd for BigDecimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl FromStr for BigDecimal {
    type Err = DecimalError;

    /// Accepts redundant leading zeros, rejects anything that is not a digit.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(DecimalError::Empty);
        }

        if let Some((offset, found)) = s.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(DecimalError::InvalidDigit {
                input: s.to_string(),
                found,
                offset,
            });
        }

        Ok(Self::from_digits(s.bytes().map(|b| b - b'0')))
    }
}

impl From<u64> for BigDecimal {
    fn from(n: u64) -> Self {
        BigDecimal(n.to_string())
    }
}

impl fmt::Display for BigDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl Sum for BigDecimal {
    fn sum<I: Iterator<Item = BigDecimal>>(iter: I) -> Self {
        iter.fold(BigDecimal::zero(), |acc, n| acc.add(&n))
    }
}

impl<'a> Sum<&'a BigDecimal> for BigDecimal {
    fn sum<I: Iterator<Item = &'a BigDecimal>>(iter: I) -> Self {
        iter.fold(BigDecimal::zero(), |acc, n| acc.add(n))
    }
}

impl Product for BigDecimal {
    fn product<I: Iterator<Item = BigDecimal>>(iter: I) -> Self {
        iter.fold(BigDecimal::one(), |acc, n| acc.multiply(&n))
    }
}

impl<'a> Product<&'a BigDecimal> for BigDecimal {
    fn product<I: Iterator<Item = &'a BigDecimal>>(iter: I) -> Self {
        iter.fold(BigDecimal::one(), |acc, n| acc.multiply(n))
    }
}
