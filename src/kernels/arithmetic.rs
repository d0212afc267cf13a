// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Per-Element Arithmetic Module
//!
//! The scalar function each elementwise kernel applies, specialised by
//! numeric kind.
//!
//! Floating-point remainder matches the divisor's sign (Python-style
//! modulo): `7.0 % -3.0` is `-2.0`, not the `1.0` that `fmod` would give.
//! Integral remainder is the native truncating (sign-of-dividend) operation:
//! `-7 % 3` is `-1`.

use crate::traits::type_unions::Numeric;

/// Remainder specialised for the compute type's numeric kind.
///
/// Implemented for every real (integral or floating) [`crate::DType`]
/// element type; the dispatch layer selects the impl once the compute type
/// is bound.
pub trait Remainder: Numeric {
    /// `self` modulo `rhs`.
    ///
    /// Floats: result has the sign of `rhs` (or is zero). A zero or NaN
    /// divisor propagates the IEEE result of the underlying `%` (NaN).
    ///
    /// Integers: truncating remainder. A zero divisor panics, as native
    /// integer `%` does - callers must not pass a zero integral divisor.
    fn remainder(self, rhs: Self) -> Self;
}

macro_rules! impl_remainder_float {
    ($($t:ty),* $(,)?) => {$(
        impl Remainder for $t {
            #[inline]
            fn remainder(self, rhs: Self) -> Self {
                let rem = self % rhs;
                if ((self < 0.0) ^ (rhs < 0.0)) && rem != 0.0 {
                    rem + rhs
                } else {
                    rem
                }
            }
        }
    )*};
}

macro_rules! impl_remainder_int {
    ($($t:ty),* $(,)?) => {$(
        impl Remainder for $t {
            #[inline]
            fn remainder(self, rhs: Self) -> Self {
                self % rhs
            }
        }
    )*};
}

impl_remainder_float!(f32, f64);
impl_remainder_int!(u8, i8, i16, i32, i64);
