use crate::{Poly, Scalar};

impl<T: Scalar> Poly<T> {
    /// Coefficients from the constant term upwards
    #[must_use]
    pub fn coeffs(&self) -> &[T] {
        self.0.as_slice()
    }

    /// The same as [`Poly::coeffs`]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.coeffs()
    }

    /// Iterate over coefficients, from the least significant
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.0.clone()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T: Scalar> From<&[T]> for Poly<T> {
    fn from(value: &[T]) -> Self {
        Self::new(value)
    }
}

impl<T: Scalar> From<Vec<T>> for Poly<T> {
    fn from(value: Vec<T>) -> Self {
        Self::from_vec(value)
    }
}

impl<T: Scalar> From<Poly<T>> for Vec<T> {
    fn from(value: Poly<T>) -> Self {
        value.into_vec()
    }
}

impl<T: Scalar> FromIterator<T> for Poly<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<'a, T: Scalar> IntoIterator for &'a Poly<T> {
    type IntoIter = std::slice::Iter<'a, T>;
    type Item = &'a T;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
