use thiserror::Error;

/// Errors produced while validating input or solving a change-making problem.
#[derive(Debug, Error)]
pub enum Error {
    /// A denomination was zero or negative.
    #[error("invalid denomination {value} at slot {slot}: denominations must be positive")]
    InvalidDenomination { slot: usize, value: i64 },

    /// A negative target amount was requested.
    #[error("invalid amount {0}: amounts must not be negative")]
    InvalidAmount(i64),

    /// The denominations cannot represent the amount.
    #[error("no solution for amount {amount}; ensure a unit denomination is present")]
    NoFeasibleSolution { amount: usize },

    /// A recursive solver would have recursed deeper than its configured limit.
    #[error("recursion depth limit of {limit} exceeded")]
    RecursionDepthExceeded { limit: usize },

    /// The solution table for this amount cannot be allocated.
    #[error("amount {amount} needs a table too large to allocate")]
    TableTooLarge { amount: usize },

    /// A table was filled with a different number of slots than denominations.
    #[error("table has {table} slots but there are {denominations} denominations")]
    SlotMismatch { table: usize, denominations: usize },

    /// A denomination or amount count in a problem set was negative.
    #[error("line {line}: invalid count {value}")]
    InvalidCount { line: usize, value: i64 },

    /// A token in a problem set was not an integer.
    #[error("line {line}: expected an integer, found {token:?}")]
    Parse { line: usize, token: String },

    /// The input ended in the middle of a problem set.
    #[error("unexpected end of input inside a problem set")]
    UnexpectedEof,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = Error::InvalidDenomination { slot: 2, value: -5 };
        assert_eq!(
            err.to_string(),
            "invalid denomination -5 at slot 2: denominations must be positive"
        );
        assert_eq!(
            Error::InvalidAmount(-1).to_string(),
            "invalid amount -1: amounts must not be negative"
        );
        assert!(Error::RecursionDepthExceeded { limit: 8 }
            .to_string()
            .contains('8'));
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
