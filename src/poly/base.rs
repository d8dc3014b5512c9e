use num::Zero;

use crate::{Poly, Scalar};

impl<T: Scalar> Poly<T> {
    /// The length of the polynomial without checking pre-conditions
    pub(crate) fn len_raw(&self) -> usize {
        self.0.len()
    }

    /// The degree of the polynomial without checking pre-conditions
    #[inline]
    pub(crate) fn degree_raw(&self) -> usize {
        self.len_raw().saturating_sub(1)
    }

    /// The last coefficient
    pub(crate) fn last(&self) -> &T {
        debug_assert!(self.is_normalized());
        &self.0[self.len_raw() - 1]
    }

    pub(crate) fn is_normalized(&self) -> bool {
        match self.0.as_slice() {
            // zero-polynomials are stored as a single zero
            [] => false,
            // a constant is always normalized, as it may be just a constant zero
            [_] => true,
            [.., last] => !last.is_zero(),
        }
    }

    /// Trim trailing zeros in-place, leaving a single zero if nothing else
    /// remains.
    pub(crate) fn normalize_mut(&mut self) {
        while self.0.len() > 1 && self.0.last().is_some_and(Zero::is_zero) {
            self.0.pop();
        }
        if self.0.is_empty() {
            self.0.push(T::zero());
        }

        // post-condition: polynomial is now normalized
        debug_assert!(self.is_normalized());
    }

    /// Moving version of `normalize_mut`
    pub(crate) fn normalize(mut self) -> Self {
        self.normalize_mut();
        self
    }

    /// Apply a closure to each coefficient in-place, then re-normalize
    pub(crate) fn apply(&mut self, f: impl FnMut(&mut T)) {
        self.0.iter_mut().for_each(f);
        self.normalize_mut();
    }
}
