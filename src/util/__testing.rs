//! Testing utilities, do not depend on any of these in production!

use fastrand::Rng;

use crate::{Poly, Poly64, Rational, Scalar};

/// Endless stream of floats uniformly drawn from `[min, max)`.
pub struct RandStreamF64 {
    state: Rng,
    min: f64,
    max: f64,
}

impl RandStreamF64 {
    #[must_use]
    pub fn new(seed: u64, min: f64, max: f64) -> Self {
        assert!(min <= max, "minimum should be smaller or equal to maximum");
        Self {
            state: Rng::with_seed(seed),
            min,
            max,
        }
    }
}

impl Iterator for RandStreamF64 {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.state.f64().mul_add(self.max - self.min, self.min))
    }
}

/// Endless stream of rationals with numerators in `[-max_numer, max_numer]`
/// and denominators in `[1, max_denom]`.
pub struct RandStreamRational {
    state: Rng,
    max_numer: i64,
    max_denom: i64,
}

impl RandStreamRational {
    #[must_use]
    pub fn new(seed: u64, max_numer: i64, max_denom: i64) -> Self {
        assert!(max_numer >= 1, "numerator range should not be empty");
        assert!(max_denom >= 1, "denominator range should not be empty");
        Self {
            state: Rng::with_seed(seed),
            max_numer,
            max_denom,
        }
    }
}

impl Iterator for RandStreamRational {
    type Item = Rational;

    fn next(&mut self) -> Option<Self::Item> {
        let numer = self.state.i64(-self.max_numer..=self.max_numer);
        let denom = self.state.i64(1..=self.max_denom);
        Some(Rational::new(numer, denom))
    }
}

/// A polynomial of exactly `degree`, with coefficients drawn from `stream`.
///
/// # Panics
/// If the stream runs dry or never yields a nonzero leading coefficient.
pub fn random_poly<T: Scalar>(stream: &mut impl Iterator<Item = T>, degree: usize) -> Poly<T> {
    let mut coeffs: Vec<T> = stream.by_ref().take(degree).collect();
    let leading = stream
        .find(|c| !c.is_zero())
        .expect("stream should be endless");
    coeffs.push(leading);
    assert_eq!(coeffs.len(), degree + 1, "stream should be endless");
    Poly::from_vec(coeffs)
}

/// Coefficient-wise comparison with an absolute tolerance.
#[must_use]
pub fn almost_equal(a: &Poly64, b: &Poly64, tolerance: f64) -> bool {
    a.degree() == b.degree()
        && a.iter()
            .zip(b.iter())
            .all(|(x, y)| (x - y).abs() <= tolerance)
}

#[cfg(test)]
mod test {
    use super::{almost_equal, random_poly, RandStreamF64, RandStreamRational};

    #[test]
    fn streams_are_reproducible() {
        let a: Vec<_> = RandStreamRational::new(3, 10, 10).take(20).collect();
        let b: Vec<_> = RandStreamRational::new(3, 10, 10).take(20).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn float_stream_in_range() {
        assert!(RandStreamF64::new(1, -2.0, 2.0)
            .take(1000)
            .all(|x| (-2.0..2.0).contains(&x)));
    }

    #[test]
    fn random_poly_has_requested_degree() {
        let mut stream = RandStreamRational::new(5, 3, 4);
        for degree in 0..10 {
            assert_eq!(random_poly(&mut stream, degree).degree(), degree);
        }
    }

    #[test]
    fn almost_equal_tolerates_rounding() {
        let a = poly![1.0, 2.0];
        assert!(almost_equal(&a, &poly![1.0 + 1E-12, 2.0], 1E-9));
        assert!(!almost_equal(&a, &poly![1.0, 2.0, 1.0], 1E-9));
    }
}
