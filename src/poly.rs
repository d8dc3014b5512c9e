use std::fmt::{self, Display};

use num::{One, Zero};

use crate::Scalar;

mod base;
mod calculus;
mod conversions;
mod impl_num;
mod indexing;
mod io;

/// A univariate polynomial, stored as its coefficients from the constant term
/// upwards.
///
/// Polynomials are always normalized: the last coefficient is nonzero, except
/// for the zero polynomial which is stored as a single `0`. Consequently
/// [`Poly::degree`] is always one less than the number of coefficients.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Poly<T: Scalar>(pub(crate) Vec<T>);

impl<T: Scalar> Poly<T> {
    /// Create a polynomial from coefficients of ascending degree.
    ///
    /// Trailing zeros are trimmed, an empty slice is the zero polynomial.
    ///
    /// ```
    /// use polynom::Poly;
    ///
    /// let p = Poly::new(&[1.0, 2.0, 0.0]);
    /// assert_eq!(p.degree(), 1);
    /// assert_eq!(p.coeffs(), &[1.0, 2.0]);
    /// ```
    #[must_use]
    pub fn new(coeffs: &[T]) -> Self {
        Self::from_vec(coeffs.to_vec())
    }

    #[must_use]
    pub fn from_vec(coeffs: Vec<T>) -> Self {
        Self(coeffs).normalize()
    }

    /// A polynomial with a single term `coeff * x^degree`.
    ///
    /// ```
    /// use polynom::{poly, Poly};
    ///
    /// assert_eq!(Poly::term(3.0, 2), poly![0.0, 0.0, 3.0]);
    /// ```
    #[must_use]
    pub fn term(coeff: T, degree: usize) -> Self {
        let mut coeffs = vec![T::zero(); degree + 1];
        coeffs[degree] = coeff;
        Self::from_vec(coeffs)
    }

    #[must_use]
    pub fn constant(value: T) -> Self {
        Self(vec![value])
    }

    /// The highest exponent with a nonzero coefficient, `0` for the zero
    /// polynomial.
    #[must_use]
    pub fn degree(&self) -> usize {
        debug_assert!(self.is_normalized());
        self.degree_raw()
    }

    /// The coefficient of the highest degree term.
    #[must_use]
    pub fn leading_coefficient(&self) -> &T {
        self.last()
    }

    /// Evaluate the polynomial at `x`.
    ///
    /// ```
    /// use polynom::poly;
    ///
    /// // 3 + 3x + 4x^2 + 9x^3
    /// let p = poly![3.0, 3.0, 4.0, 9.0];
    /// assert_eq!(p.eval(2.0), 97.0);
    /// ```
    #[must_use]
    pub fn eval(&self, x: T) -> T {
        // Horner's method, one multiplication and one addition per coefficient
        debug_assert!(self.is_normalized());
        let mut coeffs = self.0.iter().rev();
        let mut acc = coeffs.next().cloned().unwrap_or_else(T::zero);
        for c in coeffs {
            acc = acc * x.clone() + c.clone();
        }
        acc
    }

    /// Raise to a non-negative integer power.
    ///
    /// ```
    /// use polynom::poly;
    ///
    /// assert_eq!(poly![1.0, 1.0].pow(3), poly![1.0, 3.0, 3.0, 1.0]);
    /// ```
    #[must_use]
    pub fn pow(&self, mut exp: u32) -> Self {
        debug_assert!(self.is_normalized());

        let mut base = self.clone();
        let mut acc = Self::one();
        while exp > 0 {
            if exp & 1 == 1 {
                acc = acc * &base;
            }
            exp >>= 1;
            if exp > 0 {
                base = &base * &base;
            }
        }
        acc
    }

    /// Compose two polynomials, substituting `inner` for `x` in `self`.
    ///
    /// ```
    /// use polynom::poly;
    ///
    /// let f = poly![1.0, 0.0, 1.0];
    /// let g = poly![1.0, 1.0];
    /// // 1 + (1 + x)^2
    /// assert_eq!(f.compose(&g), poly![2.0, 2.0, 1.0]);
    /// ```
    #[must_use]
    pub fn compose(&self, inner: &Self) -> Self {
        debug_assert!(self.is_normalized());
        debug_assert!(inner.is_normalized());

        self.0
            .iter()
            .rev()
            .fold(Self::zero(), |acc, c| acc * inner + Self::constant(c.clone()))
    }
}

impl<T: Scalar> Default for Poly<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar + Display> Display for Poly<T> {
    /// Terms are written from the highest degree down, e.g. `9x^3+4x^2+3x+3`.
    ///
    /// Zero terms are skipped and unit coefficients are left implicit,
    /// except on the constant term. Only the precision of the outer
    /// formatter is passed on to the coefficients, sign and width flags are
    /// ignored.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (i, c) in self.0.iter().enumerate().rev() {
            if c.is_zero() {
                continue;
            }
            if !first && *c > T::zero() {
                f.write_str("+")?;
            }
            if i == 0 {
                write_coeff(c, f)?;
            } else if (T::zero() - c.clone()).is_one() {
                f.write_str("-")?;
            } else if !c.is_one() {
                write_coeff(c, f)?;
            }
            match i {
                0 => {}
                1 => f.write_str("x")?,
                _ => write!(f, "x^{i}")?,
            }
            first = false;
        }
        if first {
            f.write_str("0")?;
        }
        Ok(())
    }
}

fn write_coeff<T: Display>(c: &T, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match f.precision() {
        Some(prec) => write!(f, "{c:.prec$}"),
        None => write!(f, "{c}"),
    }
}
