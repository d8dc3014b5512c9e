use std::{
    fmt::Debug,
    ops::{Add, Div, Mul, Sub},
};

use num::{rational::Ratio, Integer, One, Zero};

/// The numeric capabilities a polynomial coefficient must provide.
///
/// Anything with the four arithmetic operations, equality, an ordering and
/// the constants `0` and `1` qualifies. Other small integers are obtained by
/// adding `1` repeatedly, so no lossy casting is ever involved.
pub trait Scalar:
    Clone
    + Debug
    + PartialEq
    + PartialOrd
    + Zero
    + One
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Whether a coefficient is small enough to be dropped from the remainder
    /// of a long division.
    ///
    /// Exact types should keep the default, which only discards true zeros.
    /// Floating point types accept an absolute tolerance, as cancellation in
    /// the leading terms rarely produces an exact zero.
    fn is_negligible(&self) -> bool {
        self.is_zero()
    }
}

impl Scalar for f32 {
    fn is_negligible(&self) -> bool {
        self.abs() < 1E-5
    }
}

impl Scalar for f64 {
    fn is_negligible(&self) -> bool {
        self.abs() < 1E-10
    }
}

impl<I: Integer + Clone + Debug> Scalar for Ratio<I> {}
