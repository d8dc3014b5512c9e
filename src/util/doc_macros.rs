//! Macros for reducing doc comment boilerplate.

/// Documents panics of the polynomial division operators.
macro_rules! panic_division_by_zero {
    () => {
        r"Panics if the divisor is the zero polynomial. Use [`crate::Poly::div_rem`], [`crate::Poly::try_div`] or [`crate::Poly::try_rem`] to get a `DivisionByZero` error instead.\n\n"
    };
}
pub(crate) use panic_division_by_zero;
