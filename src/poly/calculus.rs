use itertools::chain;
use num::Zero;

use crate::{Poly, Scalar};

impl<T: Scalar> Poly<T> {
    /// The `order`-th derivative.
    ///
    /// Differentiating a constant gives the zero polynomial, and so does any
    /// order higher than the degree.
    ///
    /// ```
    /// use polynom::poly;
    ///
    /// let p = poly![1.0, 2.0, 3.0];
    /// assert_eq!(p.derivative(1), poly![2.0, 6.0]);
    /// assert_eq!(p.derivative(2), poly![6.0]);
    /// assert_eq!(p.derivative(3), poly![0.0]);
    /// ```
    #[must_use]
    pub fn derivative(&self, order: usize) -> Self {
        let mut res = self.clone();
        res.derivative_mut(order);
        res
    }

    /// In-place version of [`Poly::derivative`].
    pub fn derivative_mut(&mut self, order: usize) {
        debug_assert!(self.is_normalized());

        for _ in 0..order {
            // derivative of constant is zero
            if self.degree_raw() == 0 {
                *self = Self::zero();
                return;
            }
            let mut n = T::zero();
            self.0 = self
                .0
                .iter()
                .skip(1) // shift degrees down
                .map(|c| {
                    n = n.clone() + T::one();
                    c.clone() * n.clone()
                })
                .collect();
        }
        self.normalize_mut();
    }

    /// Antiderivative (with C=0)
    ///
    /// ```
    /// use polynom::poly;
    ///
    /// let p = poly![1.0, 2.0, 3.0];
    /// assert_eq!(p.integrate(), poly![0.0, 1.0, 1.0, 1.0]);
    /// ```
    #[must_use]
    pub fn integrate(&self) -> Self {
        let mut res = self.clone();
        res.integrate_mut();
        res
    }

    /// In-place version of [`Poly::integrate`].
    pub fn integrate_mut(&mut self) {
        debug_assert!(self.is_normalized());

        let mut n = T::zero();
        let coeffs = chain(
            [T::zero()],
            self.0.iter().map(|c| {
                n = n.clone() + T::one();
                c.clone() / n.clone()
            }),
        )
        .collect();
        self.0 = coeffs;
        self.normalize_mut();
    }

    /// The definite integral over `[a, b]`.
    ///
    /// ```
    /// use polynom::{poly, Rational};
    ///
    /// // ∫ 3x^2 dx from 1 to 2
    /// let p = poly![Rational::from_integer(0), Rational::from_integer(0), Rational::from_integer(3)];
    /// let area = p.integral_between(Rational::from_integer(1), Rational::from_integer(2));
    /// assert_eq!(area, Rational::from_integer(7));
    /// ```
    #[must_use]
    pub fn integral_between(&self, a: T, b: T) -> T {
        let antiderivative = self.integrate();
        antiderivative.eval(b) - antiderivative.eval(a)
    }
}

#[cfg(test)]
mod test {
    use num::Zero;

    use crate::{Poly64, PolyQ, Rational};

    fn q(n: i64, d: i64) -> Rational {
        Rational::new(n, d)
    }

    #[test]
    fn derivative() {
        let p = poly![3.0, 3.0, 4.0, 9.0];
        assert_eq!(p.derivative(1), poly![3.0, 8.0, 27.0]);
        // p is left untouched
        assert_eq!(p, poly![3.0, 3.0, 4.0, 9.0]);
    }

    #[test]
    fn derivative_of_constant() {
        let one = poly![1.0];
        assert_eq!(one.derivative(1).degree(), 0);
        assert!(one.derivative(1).is_zero());
    }

    #[test]
    fn derivative_past_degree() {
        let p = poly![1.0, 2.0, 3.0];
        let d = p.derivative(10);
        assert!(d.is_zero());
        assert_eq!(d.coeffs().len(), d.degree() + 1);
    }

    #[test]
    fn derivative_order_zero() {
        let p = poly![1.0, 2.0, 3.0];
        assert_eq!(p.derivative(0), p);
    }

    #[test]
    fn derivative_mut() {
        let mut p = poly![0.0, 0.0, 0.0, 1.0];
        p.derivative_mut(2);
        assert_eq!(p, poly![0.0, 6.0]);
    }

    #[test]
    fn integrate() {
        let p = poly![1.0, 2.0, 3.0];
        assert_eq!(p.integrate(), poly![0.0, 1.0, 1.0, 1.0]);
        assert!(Poly64::zero().integrate().is_zero());
    }

    #[test]
    fn integrate_rational() {
        let p: PolyQ = poly![q(3, 2), q(2, 5), q(6, 4)];
        assert_eq!(p.integrate(), poly![q(0, 1), q(3, 2), q(1, 5), q(1, 2)]);
    }

    #[test]
    fn integrate_mut() {
        let mut p = poly![2.0];
        p.integrate_mut();
        p.integrate_mut();
        assert_eq!(p, poly![0.0, 0.0, 1.0]);
    }

    #[test]
    fn integral_diff() {
        let p = poly![1.0, 2.0, 3.0];
        let q = p.integrate().derivative(1);
        assert_eq!(p, q);
    }

    #[test]
    fn diff_integral_loses_constant() {
        let p: PolyQ = poly![q(5, 1), q(1, 3), q(-7, 2)];
        let r = p.derivative(1).integrate();
        assert_eq!(r, poly![q(0, 1), q(1, 3), q(-7, 2)]);
    }

    #[test]
    fn integral_between() {
        let p = poly![1.0, 1.0];
        assert_eq!(p.integral_between(0.0, 2.0), 4.0);
        assert_eq!(p.integral_between(2.0, 0.0), -4.0);
    }
}
