use std::num::ParseIntError;

use thiserror::Error;

/// The top-level error type for this crate.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A polynomial was divided by the zero polynomial, or a [`crate::Rational`]
    /// by zero.
    #[error("attempted to divide by zero")]
    DivisionByZero,
}

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading a polynomial from text.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ReadError {
    #[error("input ended while reading {expected}")]
    UnexpectedEof { expected: String },

    #[error("invalid degree {token:?}")]
    InvalidDegree {
        token: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid coefficient for x^{index}: {token:?}")]
    InvalidCoefficient {
        index: usize,
        token: String,
        #[source]
        source: anyhow::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors raised when parsing a [`crate::Rational`] from a string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseRationalError {
    #[error("cannot parse rational from empty string")]
    Empty,

    #[error("invalid integer in rational")]
    InvalidInteger(#[from] ParseIntError),

    #[error("rational has a zero denominator")]
    ZeroDenominator,
}
