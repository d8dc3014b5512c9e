use std::{
    cmp::Ordering,
    fmt::{self, Display},
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use num::{Integer, One, Zero};

use crate::{Error, ParseRationalError, Scalar};

/// An exact fraction of two `i64`, always kept in lowest terms with a positive
/// denominator.
///
/// Because the representation is canonical, two rationals are equal exactly
/// when their numerators and denominators are.
///
/// # Examples
/// ```
/// use polynom::Rational;
///
/// let a = Rational::new(2, 8);
/// assert_eq!(a, Rational::new(1, 4));
/// assert_eq!(a + Rational::new(3, 2), Rational::new(7, 4));
/// assert_eq!((a / Rational::new(-1, 2)).to_string(), "-1/2");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rational {
    numer: i64,
    denom: i64,
}

impl Rational {
    /// Create a rational and reduce it.
    ///
    /// # Panics
    /// If `denom` is zero, use [`Rational::try_new`] to handle this case.
    #[must_use]
    pub fn new(numer: i64, denom: i64) -> Self {
        Self::try_new(numer, denom).expect("denominator must not be zero")
    }

    /// Create a rational and reduce it.
    ///
    /// # Errors
    /// - `DivisionByZero` if `denom` is zero
    pub fn try_new(numer: i64, denom: i64) -> crate::Result<Self> {
        if denom == 0 {
            return Err(Error::DivisionByZero);
        }
        Ok(Self::reduced(numer, denom))
    }

    #[must_use]
    pub const fn from_integer(n: i64) -> Self {
        Self { numer: n, denom: 1 }
    }

    #[must_use]
    pub const fn numer(&self) -> i64 {
        self.numer
    }

    /// Always positive.
    #[must_use]
    pub const fn denom(&self) -> i64 {
        self.denom
    }

    #[must_use]
    pub const fn is_integer(&self) -> bool {
        self.denom == 1
    }

    #[must_use]
    pub const fn abs(&self) -> Self {
        Self {
            numer: self.numer.abs(),
            denom: self.denom,
        }
    }

    /// The multiplicative inverse.
    ///
    /// # Errors
    /// - `DivisionByZero` if `self` is zero
    pub fn try_recip(&self) -> crate::Result<Self> {
        Self::try_new(self.denom, self.numer)
    }

    /// The multiplicative inverse.
    ///
    /// # Panics
    /// If `self` is zero.
    #[must_use]
    pub fn recip(&self) -> Self {
        self.try_recip().expect("attempted to divide by zero")
    }

    /// Division that reports a zero divisor instead of panicking.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero
    pub fn try_div(self, rhs: Self) -> crate::Result<Self> {
        Ok(self * rhs.try_recip()?)
    }

    /// Normalize the sign onto the numerator and divide out the gcd.
    fn reduced(numer: i64, denom: i64) -> Self {
        debug_assert_ne!(denom, 0);
        // gcd(0, d) == |d|, so zero always becomes 0/1
        let g = numer.gcd(&denom);
        let (mut numer, mut denom) = (numer / g, denom / g);
        if denom < 0 {
            numer = -numer;
            denom = -denom;
        }
        Self { numer, denom }
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<i32> for Rational {
    fn from(value: i32) -> Self {
        Self::from_integer(value.into())
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self::from_integer(0)
    }

    fn is_zero(&self) -> bool {
        self.numer == 0
    }
}

impl One for Rational {
    fn one() -> Self {
        Self::from_integer(1)
    }

    fn is_one(&self) -> bool {
        self.numer == 1 && self.denom == 1
    }
}

impl Scalar for Rational {}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        // denominators are positive, so cross-multiplying preserves the order
        let lhs = i128::from(self.numer) * i128::from(other.denom);
        let rhs = i128::from(other.numer) * i128::from(self.denom);
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            numer: -self.numer,
            denom: self.denom,
        }
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        if self.denom == rhs.denom {
            return Self::reduced(self.numer + rhs.numer, self.denom);
        }
        let lcm = self.denom.lcm(&rhs.denom);
        let numer = self.numer * (lcm / self.denom) + rhs.numer * (lcm / rhs.denom);
        Self::reduced(numer, lcm)
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + -rhs
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        // cancel crosswise first so the products stay as small as possible
        let g1 = self.numer.gcd(&rhs.denom);
        let g2 = rhs.numer.gcd(&self.denom);
        let numer = (self.numer / g1) * (rhs.numer / g2);
        let denom = (self.denom / g2) * (rhs.denom / g1);
        Self::reduced(numer, denom)
    }
}

impl Div for Rational {
    type Output = Self;

    /// # Panics
    /// If `rhs` is zero, use [`Rational::try_div`] to handle this case.
    fn div(self, rhs: Self) -> Self::Output {
        self * rhs.recip()
    }
}

macro_rules! impl_assign_op {
    ($tr:ident, $method:ident, $op:tt) => {
        impl $tr for Rational {
            fn $method(&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }
    };
}

impl_assign_op!(AddAssign, add_assign, +);
impl_assign_op!(SubAssign, sub_assign, -);
impl_assign_op!(MulAssign, mul_assign, *);
impl_assign_op!(DivAssign, div_assign, /);

impl Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_integer() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl FromStr for Rational {
    type Err = ParseRationalError;

    /// Accepts `"n"` or `"n/d"`, optionally surrounded by whitespace.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ParseRationalError::Empty);
        }
        let Some((numer, denom)) = s.split_once('/') else {
            return Ok(Self::from_integer(s.parse()?));
        };
        let numer: i64 = numer.trim().parse()?;
        let denom: i64 = denom.trim().parse()?;
        Self::try_new(numer, denom).map_err(|_| ParseRationalError::ZeroDenominator)
    }
}
