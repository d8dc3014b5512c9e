use std::{
    collections::VecDeque,
    io::{self, BufRead, Write},
    str::FromStr,
};

use crate::{Poly, ReadError, Scalar};

/// Upper bound on the coefficients reserved up front, the degree comes from
/// untrusted input.
const MAX_PREALLOC: usize = 1024;

/// Whitespace separated tokens pulled lazily from a line based reader.
struct Tokens<'a, R> {
    reader: &'a mut R,
    pending: VecDeque<String>,
}

impl<'a, R: BufRead> Tokens<'a, R> {
    fn new(reader: &'a mut R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self, expected: impl FnOnce() -> String) -> Result<String, ReadError> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(token);
            }
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Err(ReadError::UnexpectedEof {
                    expected: expected(),
                });
            }
            self.pending
                .extend(line.split_whitespace().map(str::to_owned));
        }
    }
}

impl<T> Poly<T>
where
    T: Scalar + FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    /// Read a polynomial as its degree followed by that many plus one
    /// coefficients, from the constant term upwards.
    ///
    /// Tokens may be split across lines in any way.
    ///
    /// # Errors
    /// - `UnexpectedEof` if the input ends early
    /// - `InvalidDegree` or `InvalidCoefficient` if a token does not parse
    /// - `Io` if the reader fails
    ///
    /// # Examples
    /// ```
    /// use polynom::{poly, Poly64};
    ///
    /// let p = Poly64::read(&mut "2\n1 0 3\n".as_bytes()).unwrap();
    /// assert_eq!(p, poly![1.0, 0.0, 3.0]);
    /// assert_eq!(p.to_string(), "3x^2+1");
    /// ```
    pub fn read(reader: &mut impl BufRead) -> Result<Self, ReadError> {
        Self::read_interactive(reader, &mut io::sink())
    }

    /// Like [`Poly::read`], but writes a prompt to `prompt` before each value.
    ///
    /// # Errors
    /// See [`Poly::read`], writing a prompt may also fail with `Io`.
    pub fn read_interactive(
        reader: &mut impl BufRead,
        prompt: &mut impl Write,
    ) -> Result<Self, ReadError> {
        let mut tokens = Tokens::new(reader);

        write!(prompt, "Input degree: ")?;
        prompt.flush()?;
        let token = tokens.next_token(|| "degree".to_owned())?;
        let degree: usize = token
            .parse()
            .map_err(|source| ReadError::InvalidDegree { token, source })?;
        log::debug!("reading polynomial {{degree: {degree}}}");

        writeln!(prompt, "Input coefficients:")?;
        let mut coeffs = Vec::with_capacity(degree.saturating_add(1).min(MAX_PREALLOC));
        for index in 0..=degree {
            write!(prompt, "Coefficient for x^{index}: ")?;
            prompt.flush()?;
            let token = tokens.next_token(|| format!("coefficient for x^{index}"))?;
            let c = token
                .parse::<T>()
                .map_err(|e| ReadError::InvalidCoefficient {
                    index,
                    token,
                    source: anyhow::Error::new(e),
                })?;
            coeffs.push(c);
        }
        Ok(Self::from_vec(coeffs))
    }
}
