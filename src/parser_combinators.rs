use crate::{big_decimal::BigDecimal, days::PuzzleError};

pub type ParseResult<I, O> = Option<(I, O)>;

pub trait Parser<I> {
    type Output;

    fn parse(&mut self, input: I) -> ParseResult<I, Self::Output>;
}

impl<I, O, F> Parser<I> for F
where
    F: FnMut(I) -> Option<(I, O)>,
{
    type Output = O;

    fn parse(&mut self, input: I) -> ParseResult<I, Self::Output> {
        self(input)
    }
}

pub struct TagParser<'t> {
    tag: &'t str,
}

pub fn tag(tag: &str) -> TagParser<'_> {
    TagParser { tag }
}

impl<'i, 't: 'i> Parser<&'i str> for TagParser<'t> {
    type Output = &'i str;

    fn parse(&mut self, input: &'i str) -> ParseResult<&'i str, Self::Output> {
        input
            .strip_prefix(self.tag)
            .map(|remaining| (remaining, self.tag))
    }
}

/// The longest non-empty prefix whose chars all satisfy `pred`.
pub fn take_while1<'i>(mut pred: impl FnMut(char) -> bool) -> impl Parser<&'i str, Output = &'i str> {
    move |input: &'i str| {
        let end = input.find(|c: char| !pred(c)).unwrap_or(input.len());
        if end == 0 {
            None
        } else {
            Some((&input[end..], &input[..end]))
        }
    }
}

pub fn decimal(input: &str) -> ParseResult<&str, BigDecimal> {
    let (remaining, digits) = take_while1(|c| c.is_ascii_digit()).parse(input)?;
    Some((remaining, digits.parse().ok()?))
}

pub fn unsigned(input: &str) -> ParseResult<&str, u64> {
    let (remaining, digits) = take_while1(|c| c.is_ascii_digit()).parse(input)?;
    Some((remaining, digits.parse().ok()?))
}

pub fn signed(input: &str) -> ParseResult<&str, i64> {
    let (remaining, (minus, digits)) =
        pair(optional(tag("-")), take_while1(|c| c.is_ascii_digit())).parse(input)?;
    let n = digits.parse::<i64>().ok()?;
    Some((remaining, if minus.is_some() { -n } else { n }))
}

pub fn map<I, O1, O2>(
    mut p: impl Parser<I, Output = O1>,
    mut f: impl FnMut(O1) -> O2,
) -> impl Parser<I, Output = O2> {
    move |input: I| p.parse(input).map(|(remaining, res)| (remaining, f(res)))
}

pub fn pair<I, O1, O2>(
    mut p1: impl Parser<I, Output = O1>,
    mut p2: impl Parser<I, Output = O2>,
) -> impl Parser<I, Output = (O1, O2)> {
    move |input: I| {
        let (input, r1) = p1.parse(input)?;
        let (input, r2) = p2.parse(input)?;
        Some((input, (r1, r2)))
    }
}

pub fn preceded<I, O1, O2>(
    p1: impl Parser<I, Output = O1>,
    p2: impl Parser<I, Output = O2>,
) -> impl Parser<I, Output = O2> {
    map(pair(p1, p2), |(_, r2)| r2)
}

pub fn terminated<I, O1, O2>(
    p1: impl Parser<I, Output = O1>,
    p2: impl Parser<I, Output = O2>,
) -> impl Parser<I, Output = O1> {
    map(pair(p1, p2), |(r1, _)| r1)
}

pub fn separated_pair<I, O1, S, O2>(
    p1: impl Parser<I, Output = O1>,
    sep: impl Parser<I, Output = S>,
    p2: impl Parser<I, Output = O2>,
) -> impl Parser<I, Output = (O1, O2)> {
    pair(p1, preceded(sep, p2))
}

pub fn optional<I: Clone, O>(mut p: impl Parser<I, Output = O>) -> impl Parser<I, Output = Option<O>> {
    move |input: I| match p.parse(input.clone()) {
        Some((input, res)) => Some((input, Some(res))),
        None => Some((input, None)),
    }
}

pub fn alt<I: Clone, O>(
    mut p1: impl Parser<I, Output = O>,
    mut p2: impl Parser<I, Output = O>,
) -> impl Parser<I, Output = O> {
    move |input: I| p1.parse(input.clone()).or_else(|| p2.parse(input))
}

pub fn separated_list1<I: Clone, S, O>(
    mut sep: impl Parser<I, Output = S>,
    mut element: impl Parser<I, Output = O>,
) -> impl Parser<I, Output = Vec<O>> {
    move |input: I| {
        let (mut input, first) = element.parse(input)?;
        let mut results = vec![first];

        while let Some((after_sep, _)) = sep.parse(input.clone()) {
            let Some((remaining, next)) = element.parse(after_sep) else {
                break;
            };
            input = remaining;
            results.push(next);
        }

        Some((input, results))
    }
}

/// Runs `parser` over a whole line. `index` is the zero-based line index,
/// used for the error message only.
pub fn complete<'i, O>(
    mut parser: impl Parser<&'i str, Output = O>,
    index: usize,
    line: &'i str,
) -> Result<O, PuzzleError> {
    match parser.parse(line) {
        Some(("", result)) => Ok(result),
        Some((remaining, _)) => Err(PuzzleError::malformed(
            index,
            line,
            format!("unexpected trailing input {remaining:?}"),
        )),
        None => Err(PuzzleError::malformed(index, line, "unrecognized format")),
    }
}
