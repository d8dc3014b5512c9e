//! Univariate polynomials over any coefficient type that supports the four
//! arithmetic operations, plus a small exact [`Rational`] type to use as one.
//!
//! ```
//! use polynom::{poly, Poly, Rational};
//!
//! // 3 + 3x + 4x^2 + 9x^3
//! let p = poly![3.0, 3.0, 4.0, 9.0];
//! assert_eq!(p.eval(2.0), 97.0);
//! assert_eq!(p.to_string(), "9x^3+4x^2+3x+3");
//!
//! let q = Poly::new(&[Rational::new(3, 2), Rational::new(2, 5)]);
//! assert_eq!(q.integrate().to_string(), "1/5x^2+3/2x");
//! ```
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub use num;

/// Build a polynomial from its coefficients, ordered from the constant term
/// upwards.
///
/// ```
/// use polynom::{poly, Poly};
///
/// assert_eq!(poly![1.0, 2.0, 3.0], Poly::new(&[1.0, 2.0, 3.0]));
/// assert_eq!(poly![2.0; 3], Poly::new(&[2.0, 2.0, 2.0]));
/// assert_eq!(poly![0.0, 0.0], poly![]);
/// ```
#[macro_export]
macro_rules! poly {
    () => {
        $crate::Poly::new(&[])
    };
    ($elem:expr; $n:expr) => {
        $crate::Poly::from_vec(::std::vec![$elem; $n])
    };
    ($($x:expr),+ $(,)?) => {
        $crate::Poly::new(&[$($x),+])
    };
}

mod error;
pub use error::{Error, ParseRationalError, ReadError, Result};

mod scalar;
pub use scalar::Scalar;

mod rational;
pub use rational::Rational;

mod poly;
pub use poly::Poly;

mod util;

#[doc(hidden)]
pub use util::__testing;

pub type Poly32 = Poly<f32>;
pub type Poly64 = Poly<f64>;
pub type PolyQ = Poly<Rational>;
