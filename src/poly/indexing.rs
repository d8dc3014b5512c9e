use std::ops::Index;

use crate::{Poly, Scalar};

impl<T: Scalar> Poly<T> {
    /// The coefficient of `x^degree`, zero for any degree above
    /// [`Poly::degree`].
    ///
    /// ```
    /// use polynom::poly;
    ///
    /// let p = poly![1.0, 2.0];
    /// assert_eq!(p.coeff(1), 2.0);
    /// assert_eq!(p.coeff(5), 0.0);
    /// ```
    #[must_use]
    pub fn coeff(&self, degree: usize) -> T {
        self.0.get(degree).cloned().unwrap_or_else(T::zero)
    }

    /// Borrow the coefficient of `x^degree`, `None` if out of bounds.
    #[must_use]
    pub fn get(&self, degree: usize) -> Option<&T> {
        self.0.get(degree)
    }
}

impl<T: Scalar> Index<usize> for Poly<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

#[cfg(test)]
mod test {
    #[test]
    fn index() {
        let p = poly![0.0, 1.0, 2.0, 3.0];
        assert_eq!(p[0], 0.0);
        assert_eq!(p[3], 3.0);
    }

    #[test]
    #[should_panic]
    fn index_out_of_bounds() {
        let p = poly![0.0, 1.0];
        let _ = p[2];
    }

    #[test]
    fn get() {
        let p = poly![0.0, 1.0, 2.0, 3.0];
        assert_eq!(p.get(1), Some(&1.0));
        assert!(p.get(4).is_none());
    }

    #[test]
    fn coeff() {
        let p = poly![4.0, 0.0, 2.0];
        assert_eq!(p.coeff(1), 0.0);
        assert_eq!(p.coeff(2), 2.0);
        assert_eq!(p.coeff(100), 0.0);
    }
}
