#![allow(clippy::op_ref)]

// Implementation of traits related to numeric operations and operators

use std::{
    iter::{Product, Sum},
    mem,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign},
};

use itertools::{EitherOrBoth, Itertools};
use num::{One, Zero};

use crate::{
    util::{doc_macros::panic_division_by_zero, linalg::convolve_1d},
    Error, Poly, Scalar,
};

impl<T: Scalar> Poly<T> {
    /// Calculate the quotient and remainder using long division.
    ///
    /// Trailing remainder coefficients are discarded when
    /// [`Scalar::is_negligible`] says so, which for floats means an absolute
    /// tolerance and for exact types means exactly zero.
    ///
    /// # Errors
    /// - `DivisionByZero` if `divisor` is the zero polynomial
    ///
    /// # Examples
    /// ```
    /// use polynom::poly;
    ///
    /// let dividend = poly![-4.0, 0.0, -2.0, 1.0];
    /// let divisor = poly![-3.0, 1.0];
    /// let (q, r) = dividend.div_rem(&divisor).unwrap();
    /// assert_eq!(q, poly![3.0, 1.0, 1.0]);
    /// assert_eq!(r, poly![5.0]);
    /// ```
    pub fn div_rem(&self, divisor: &Self) -> crate::Result<(Self, Self)> {
        self.div_rem_with(divisor, T::is_negligible)
    }

    /// Long division with a custom test for discarding remainder coefficients.
    ///
    /// # Errors
    /// - `DivisionByZero` if `divisor` is the zero polynomial
    ///
    /// # Examples
    /// ```
    /// use polynom::poly;
    ///
    /// let dividend = poly![1.0, 0.0, 1.0];
    /// let divisor = poly![1.0, 1.0];
    /// let (q, r) = dividend.div_rem_with(&divisor, |c: &f64| c.abs() < 1E-3).unwrap();
    /// assert_eq!(q, poly![-1.0, 1.0]);
    /// assert_eq!(r, poly![2.0]);
    /// ```
    pub fn div_rem_with(
        &self,
        divisor: &Self,
        mut is_negligible: impl FnMut(&T) -> bool,
    ) -> crate::Result<(Self, Self)> {
        // invariant: polynomials are normalized
        debug_assert!(self.is_normalized());
        debug_assert!(divisor.is_normalized());

        if divisor.is_zero() {
            return Err(Error::DivisionByZero);
        }

        if self.degree_raw() < divisor.degree_raw() {
            return Ok((Self::zero(), self.clone()));
        }

        let den_len = divisor.len_raw();
        let den_c = divisor.last();
        let mut quot = vec![T::zero(); self.degree_raw() - divisor.degree_raw() + 1];
        let mut rem = self.0.clone();
        while rem.len() >= den_len {
            let k = rem.len() - den_len;
            let c = rem[rem.len() - 1].clone() / den_c.clone();
            for (r, d) in rem[k..].iter_mut().zip(divisor.0.iter()) {
                *r = r.clone() - c.clone() * d.clone();
            }
            log::trace!("{{degree_diff: {k}, coeff: {c:?}, remainder_len: {}}}", rem.len());
            quot[k] = c;

            // the leading term cancels by construction, even when rounding
            // leaves something behind
            rem.pop();
            while let Some(last) = rem.last() {
                if !is_negligible(last) {
                    break;
                }
                rem.pop();
            }
        }

        Ok((Self(quot).normalize(), Self(rem).normalize()))
    }

    /// The quotient of a long division, see [`Poly::div_rem`].
    ///
    /// # Errors
    /// - `DivisionByZero` if `divisor` is the zero polynomial
    pub fn try_div(&self, divisor: &Self) -> crate::Result<Self> {
        Ok(self.div_rem(divisor)?.0)
    }

    /// The remainder of a long division, see [`Poly::div_rem`].
    ///
    /// # Errors
    /// - `DivisionByZero` if `divisor` is the zero polynomial
    pub fn try_rem(&self, divisor: &Self) -> crate::Result<Self> {
        Ok(self.div_rem(divisor)?.1)
    }
}

impl<T: Scalar> Zero for Poly<T> {
    fn zero() -> Self {
        Self(vec![T::zero()])
    }

    fn is_zero(&self) -> bool {
        debug_assert!(self.is_normalized());
        self.len_raw() == 1 && self.0[0].is_zero()
    }
}

impl<T: Scalar> One for Poly<T> {
    fn one() -> Self {
        Self(vec![T::one()])
    }
}

impl<T: Scalar> Add<&Self> for Poly<T> {
    type Output = Self;

    fn add(self, rhs: &Self) -> Self::Output {
        // invariant: polynomials are normalized
        debug_assert!(self.is_normalized());
        debug_assert!(rhs.is_normalized());

        let coeffs = self
            .0
            .into_iter()
            .zip_longest(rhs.0.iter())
            .map(|p| match p {
                EitherOrBoth::Both(l, r) => l + r.clone(),
                EitherOrBoth::Left(l) => l,
                EitherOrBoth::Right(r) => r.clone(),
            })
            .collect();
        Self(coeffs).normalize()
    }
}

impl<T: Scalar> Sub<&Self> for Poly<T> {
    type Output = Self;

    fn sub(self, rhs: &Self) -> Self::Output {
        // invariant: polynomials are normalized
        debug_assert!(self.is_normalized());
        debug_assert!(rhs.is_normalized());

        let coeffs = self
            .0
            .into_iter()
            .zip_longest(rhs.0.iter())
            .map(|p| match p {
                EitherOrBoth::Both(l, r) => l - r.clone(),
                EitherOrBoth::Left(l) => l,
                EitherOrBoth::Right(r) => T::zero() - r.clone(),
            })
            .collect();
        Self(coeffs).normalize()
    }
}

impl<T: Scalar> Mul<&Self> for Poly<T> {
    type Output = Self;

    fn mul(self, rhs: &Self) -> Self::Output {
        // invariant: polynomials are normalized
        debug_assert!(self.is_normalized());
        debug_assert!(rhs.is_normalized());

        if self.is_zero() || rhs.is_zero() {
            return Self::zero();
        }
        if self.is_one() {
            return rhs.clone();
        }
        if rhs.is_one() {
            return self;
        }

        Self(convolve_1d(&self.0, &rhs.0)).normalize()
    }
}

impl<T: Scalar> Div<&Self> for Poly<T> {
    type Output = Self;

    /// Quotient of a long division, see [`Poly::div_rem`].
    ///
    /// # Panics
    #[doc = panic_division_by_zero!()]
    fn div(self, rhs: &Self) -> Self::Output {
        self.try_div(rhs)
            .expect("attempted to divide a polynomial by zero")
    }
}

impl<T: Scalar> Rem<&Self> for Poly<T> {
    type Output = Self;

    /// Remainder of a long division, see [`Poly::div_rem`].
    ///
    /// # Panics
    #[doc = panic_division_by_zero!()]
    fn rem(self, rhs: &Self) -> Self::Output {
        self.try_rem(rhs)
            .expect("attempted to divide a polynomial by zero")
    }
}

/// Derive the remaining owned/borrowed combinations and the compound
/// assignment of a binary operator from its `Poly<T> op &Poly<T>` form.
macro_rules! forward_binop {
    ($tr:ident, $method:ident, $tr_assign:ident, $method_assign:ident) => {
        impl<T: Scalar> $tr<Poly<T>> for Poly<T> {
            type Output = Poly<T>;

            fn $method(self, rhs: Poly<T>) -> Self::Output {
                $tr::$method(self, &rhs)
            }
        }

        impl<T: Scalar> $tr<Poly<T>> for &Poly<T> {
            type Output = Poly<T>;

            fn $method(self, rhs: Poly<T>) -> Self::Output {
                $tr::$method(self.clone(), &rhs)
            }
        }

        impl<T: Scalar> $tr<&Poly<T>> for &Poly<T> {
            type Output = Poly<T>;

            fn $method(self, rhs: &Poly<T>) -> Self::Output {
                $tr::$method(self.clone(), rhs)
            }
        }

        impl<T: Scalar> $tr_assign<&Poly<T>> for Poly<T> {
            fn $method_assign(&mut self, rhs: &Poly<T>) {
                *self = $tr::$method(mem::take(self), rhs);
            }
        }

        impl<T: Scalar> $tr_assign<Poly<T>> for Poly<T> {
            fn $method_assign(&mut self, rhs: Poly<T>) {
                *self = $tr::$method(mem::take(self), &rhs);
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign);
forward_binop!(Sub, sub, SubAssign, sub_assign);
forward_binop!(Mul, mul, MulAssign, mul_assign);
forward_binop!(Div, div, DivAssign, div_assign);
forward_binop!(Rem, rem, RemAssign, rem_assign);

impl<T: Scalar> Mul<T> for Poly<T> {
    type Output = Self;

    fn mul(mut self, rhs: T) -> Self::Output {
        self *= rhs;
        self
    }
}

impl<T: Scalar> Mul<T> for &Poly<T> {
    type Output = Poly<T>;

    fn mul(self, rhs: T) -> Self::Output {
        self.clone() * rhs
    }
}

impl<T: Scalar> MulAssign<T> for Poly<T> {
    fn mul_assign(&mut self, rhs: T) {
        self.apply(|c| *c = c.clone() * rhs.clone());
    }
}

impl<T: Scalar> Div<T> for Poly<T> {
    type Output = Self;

    /// Divide every coefficient by a scalar. A zero divisor behaves like it
    /// does for `T`, e.g. producing infinities for floats.
    fn div(mut self, rhs: T) -> Self::Output {
        self /= rhs;
        self
    }
}

impl<T: Scalar> Div<T> for &Poly<T> {
    type Output = Poly<T>;

    fn div(self, rhs: T) -> Self::Output {
        self.clone() / rhs
    }
}

impl<T: Scalar> DivAssign<T> for Poly<T> {
    fn div_assign(&mut self, rhs: T) {
        self.apply(|c| *c = c.clone() / rhs.clone());
    }
}

impl<T: Scalar> Neg for Poly<T> {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        self.apply(|c| *c = T::zero() - c.clone());
        self
    }
}

impl<T: Scalar> Neg for &Poly<T> {
    type Output = Poly<T>;

    fn neg(self) -> Self::Output {
        -self.clone()
    }
}

impl<T: Scalar> Sum for Poly<T> {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<'a, T: Scalar> Sum<&'a Self> for Poly<T> {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

impl<T: Scalar> Product for Poly<T> {
    fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc * x)
    }
}

impl<'a, T: Scalar> Product<&'a Self> for Poly<T> {
    fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.fold(Self::one(), |acc, x| acc * x)
    }
}

#[cfg(test)]
mod test {
    use num::{One, Zero};

    use crate::{Error, Poly, Poly64, PolyQ, Rational};

    fn q(n: i64, d: i64) -> Rational {
        Rational::new(n, d)
    }

    #[test]
    fn add() {
        let c1 = poly![1.0, 2.0, 3.0];
        let c2 = poly![3.0, 2.0];
        assert_eq!(&c1 + &c2, poly![4.0, 4.0, 3.0]);
        assert_eq!(c2 + c1, poly![4.0, 4.0, 3.0]);
    }

    #[test]
    fn add_cancels_leading_terms() {
        let p = poly![1.0, 2.0, 3.0] + poly![0.0, 0.0, -3.0];
        assert_eq!(p.degree(), 1);
        assert_eq!(p, poly![1.0, 2.0]);
    }

    #[test]
    fn sub() {
        let p = poly![1.0, 2.0] - poly![0.0, 0.0, 5.0];
        assert_eq!(p, poly![1.0, 2.0, -5.0]);
        let p = poly![1.0, 2.0, 3.0];
        assert!((&p - &p).is_zero());
    }

    #[test]
    fn compound_assign() {
        let mut p = poly![1.0, 1.0];
        p += poly![0.0, 0.0, 1.0];
        assert_eq!(p, poly![1.0, 1.0, 1.0]);
        p -= &poly![1.0];
        assert_eq!(p, poly![0.0, 1.0, 1.0]);
        p *= poly![-1.0, 1.0];
        assert_eq!(p, poly![0.0, -1.0, 0.0, 1.0]);
        p /= poly![0.0, 1.0];
        assert_eq!(p, poly![-1.0, 0.0, 1.0]);
        p %= poly![0.0, 1.0];
        assert_eq!(p, poly![-1.0]);
    }

    #[test]
    fn mul() {
        let p1 = poly![1.0, 2.0, 3.0];
        let p2 = poly![3.0, 2.0, 1.0];
        assert_eq!(p1 * p2, poly![3.0, 8.0, 14.0, 8.0, 3.0]);
    }

    #[test]
    fn mul_is_convolution() {
        let p = poly![3.0, 3.0, 4.0, 9.0];
        let q = poly![2.0, 3.0, 5.0, 8.0, 6.0];
        let r = &p * &q;
        assert_eq!(r.degree(), 7);
        assert_eq!(
            r,
            poly![6.0, 15.0, 32.0, 69.0, 89.0, 95.0, 96.0, 54.0]
        );
    }

    #[test]
    fn mul_by_zero_and_one() {
        let p: Poly64 = poly![1.0, 2.0];
        assert!((&p * Poly::zero()).is_zero());
        assert_eq!(&p * Poly::one(), p);
        assert_eq!(Poly::one() * &p, p);
    }

    #[test]
    fn scalar_ops() {
        let p: Poly64 = poly![2.0, 3.0, 5.0, 8.0, 6.0];
        assert_eq!(&p / 2.0, poly![1.0, 1.5, 2.5, 4.0, 3.0]);
        assert_eq!(&p * 0.5, poly![1.0, 1.5, 2.5, 4.0, 3.0]);
        assert!((p * 0.0).is_zero());
    }

    #[test]
    fn scalar_div_by_zero_follows_float() {
        let p: Poly64 = poly![1.0, -1.0];
        let p = p / 0.0;
        assert_eq!(p.coeffs(), &[f64::INFINITY, f64::NEG_INFINITY]);
    }

    #[test]
    fn neg() {
        assert_eq!(-poly![1.0, -2.0], poly![-1.0, 2.0]);
        assert!((-Poly64::zero()).is_zero());
    }

    #[test]
    fn div() {
        let dividend = poly![-4.0, 0.0, -2.0, 1.0];
        let divisor = poly![-3.0, 1.0];
        let (q, r) = dividend.div_rem(&divisor).unwrap();
        assert_eq!(q, poly![3.0, 1.0, 1.0]);
        assert_eq!(r, poly![5.0]);
    }

    #[test]
    fn div_by_zero() {
        let p = poly![1.0, 2.0];
        assert_eq!(p.div_rem(&Poly::zero()), Err(Error::DivisionByZero));
        assert_eq!(p.try_div(&poly![0.0]), Err(Error::DivisionByZero));
    }

    #[test]
    #[should_panic(expected = "attempted to divide a polynomial by zero")]
    fn div_operator_by_zero_panics() {
        let _ = poly![1.0, 2.0] / poly![];
    }

    #[test]
    fn div_smaller_degree() {
        let p = poly![1.0, 2.0];
        let (q, r) = p.div_rem(&poly![1.0, 0.0, 1.0]).unwrap();
        assert!(q.is_zero());
        assert_eq!(r, p);
    }

    #[test]
    fn div_by_constant() {
        let p = poly![2.0, 4.0, 6.0];
        assert_eq!(&p / &poly![2.0], poly![1.0, 2.0, 3.0]);
        assert!((&p % &poly![2.0]).is_zero());
    }

    #[test]
    fn div_zero_dividend() {
        let (q, r) = Poly64::zero().div_rem(&poly![1.0, 1.0]).unwrap();
        assert!(q.is_zero());
        assert!(r.is_zero());
    }

    #[test]
    fn div_float_product() {
        let p: Poly64 = poly![3.0, 3.0, 4.0, 9.0];
        let q: Poly64 = poly![2.0, 3.0, 5.0, 8.0, 6.0];
        let (quot, rem) = (&q * &p).div_rem(&q).unwrap();
        assert_eq!(quot.degree(), 3);
        for (a, b) in quot.iter().zip(p.iter()) {
            assert!((a - b).abs() < 1E-9);
        }
        assert!(rem.is_zero());
    }

    #[test]
    fn div_rational_keeps_tiny_remainder() {
        let tiny = q(1, 1_000_000_000_000);
        let a: PolyQ = poly![tiny, q(1, 1), q(1, 1)];
        let x: PolyQ = poly![q(0, 1), q(1, 1)];
        let (quot, rem) = a.div_rem(&x).unwrap();
        assert_eq!(quot, poly![q(1, 1), q(1, 1)]);
        assert_eq!(rem, PolyQ::constant(tiny));
        assert_eq!(rem.to_string(), "1/1000000000000");
    }

    #[test]
    fn div_rational_exact() {
        let a: PolyQ = poly![q(1, 2), q(-3, 4), q(2, 1)];
        let b: PolyQ = poly![q(5, 3), q(1, 7)];
        let (quot, rem) = (&a * &b).div_rem(&b).unwrap();
        assert_eq!(quot, a);
        assert!(rem.is_zero());
    }

    #[test]
    fn div_rational_remainder() {
        // x^2 + 1 = (x - 1)(x + 1) + 2
        let a: PolyQ = poly![q(1, 1), q(0, 1), q(1, 1)];
        let b: PolyQ = poly![q(1, 1), q(1, 1)];
        let (quot, rem) = a.div_rem(&b).unwrap();
        assert_eq!(quot, poly![q(-1, 1), q(1, 1)]);
        assert_eq!(rem, poly![q(2, 1)]);
        assert_eq!(quot * &b + &rem, a);
    }

    #[test]
    fn div_rem_with_custom_tolerance() {
        // remainder of 1E-4 survives the default tolerance but not a loose one
        let a = poly![1E-4, 1.0, 1.0];
        let b = poly![0.0, 1.0];
        let (_, r) = a.div_rem(&b).unwrap();
        assert_eq!(r, poly![1E-4]);
        let (q, r) = a.div_rem_with(&b, |c: &f64| c.abs() < 1E-3).unwrap();
        assert_eq!(q, poly![1.0, 1.0]);
        assert!(r.is_zero());
    }

    #[test]
    fn sum_product() {
        let ps = [poly![1.0], poly![0.0, 1.0], poly![0.0, 0.0, 1.0]];
        assert_eq!(ps.iter().sum::<Poly64>(), poly![1.0, 1.0, 1.0]);
        assert_eq!(
            ps.into_iter().product::<Poly64>(),
            poly![0.0, 0.0, 0.0, 1.0]
        );
        assert!(std::iter::empty::<Poly64>().sum::<Poly64>().is_zero());
    }
}
