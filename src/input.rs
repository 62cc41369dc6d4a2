//! Problem-set input.
//!
//! A stream holds any number of problem sets back to back, each laid out as
//! integers (conventionally one per line):
//!
//! ```text
//! 4        number of denominations
//! 1
//! 5
//! 10
//! 25
//! 2        number of amounts
//! 41
//! 99
//! ```

use std::io::BufRead;

use crate::cs::dynamic::coin_change::DenominationSet;
use crate::error::{Error, Result};

/// One set of denominations and the amounts to solve with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProblemSet {
    pub denominations: DenominationSet,
    /// Amounts to solve; all non-negative.
    pub amounts: Vec<i64>,
}

/// Parses every problem set in `reader`.
pub fn parse_problem_sets<R: BufRead>(reader: R) -> Result<Vec<ProblemSet>> {
    let mut tokens = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        tokens.extend(
            line.split_whitespace()
                .map(|token| (index + 1, token.to_string())),
        );
    }

    let mut tokens = tokens.into_iter().peekable();
    let mut sets = Vec::new();
    while tokens.peek().is_some() {
        let count = next_count(&mut tokens)?;
        let values = (0..count)
            .map(|_| next_int(&mut tokens).map(|(_, value)| value))
            .collect::<Result<Vec<_>>>()?;
        let denominations = DenominationSet::new(values)?;

        let count = next_count(&mut tokens)?;
        let mut amounts = Vec::with_capacity(count);
        for _ in 0..count {
            let (_, amount) = next_int(&mut tokens)?;
            if amount < 0 {
                return Err(Error::InvalidAmount(amount));
            }
            amounts.push(amount);
        }

        sets.push(ProblemSet {
            denominations,
            amounts,
        });
    }
    Ok(sets)
}

/// Parses problem sets from an in-memory string.
pub fn parse_str(input: &str) -> Result<Vec<ProblemSet>> {
    parse_problem_sets(input.as_bytes())
}

fn next_int<I>(tokens: &mut I) -> Result<(usize, i64)>
where
    I: Iterator<Item = (usize, String)>,
{
    let (line, token) = tokens.next().ok_or(Error::UnexpectedEof)?;
    match token.parse::<i64>() {
        Ok(value) => Ok((line, value)),
        Err(_) => Err(Error::Parse { line, token }),
    }
}

fn next_count<I>(tokens: &mut I) -> Result<usize>
where
    I: Iterator<Item = (usize, String)>,
{
    let (line, value) = next_int(tokens)?;
    usize::try_from(value).map_err(|_| Error::InvalidCount { line, value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_consecutive_sets() {
        let input = "4\n1\n5\n10\n25\n2\n41\n99\n3\n1\n3\n4\n1\n6\n";
        let sets = parse_str(input).unwrap();
        assert_eq!(sets.len(), 2);
        assert_eq!(sets[0].denominations.as_slice(), &[1, 5, 10, 25]);
        assert_eq!(sets[0].amounts, vec![41, 99]);
        assert_eq!(sets[1].denominations.as_slice(), &[1, 3, 4]);
        assert_eq!(sets[1].amounts, vec![6]);
    }

    #[test]
    fn tolerates_blank_lines_and_shared_lines() {
        let sets = parse_str("2 1 2\n\n1\n  7 \n").unwrap();
        assert_eq!(sets.len(), 1);
        assert_eq!(sets[0].amounts, vec![7]);
    }

    #[test]
    fn empty_input_has_no_sets() {
        assert!(parse_str("").unwrap().is_empty());
        assert!(parse_str("\n\n").unwrap().is_empty());
    }

    #[test]
    fn zero_counts_are_allowed() {
        let sets = parse_str("0\n0\n").unwrap();
        assert!(sets[0].denominations.is_empty());
        assert!(sets[0].amounts.is_empty());
    }

    #[test]
    fn reports_bad_tokens_with_line() {
        match parse_str("2\n1\nfive\n") {
            Err(Error::Parse { line, token }) => {
                assert_eq!(line, 3);
                assert_eq!(token, "five");
            }
            other => panic!("expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(
            parse_str("2\n1\n0\n1\n5\n"),
            Err(Error::InvalidDenomination { slot: 1, value: 0 })
        ));
        assert!(matches!(
            parse_str("1\n1\n1\n-5\n"),
            Err(Error::InvalidAmount(-5))
        ));
        assert!(matches!(
            parse_str("-1\n"),
            Err(Error::InvalidCount { line: 1, value: -1 })
        ));
    }

    #[test]
    fn truncated_set_is_an_error() {
        assert!(matches!(parse_str("3\n1\n5\n"), Err(Error::UnexpectedEof)));
        assert!(matches!(
            parse_str("1\n1\n3\n1\n2\n"),
            Err(Error::UnexpectedEof)
        ));
    }
}
