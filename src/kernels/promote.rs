// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Type Promotion Module
//!
//! The promotion and cast-legality relations over the [`DType`] set, kept in
//! one place as explicit pure functions rather than scattered across call
//! sites.
//!
//! Promotion follows the conventional tensor lattice: floating beats
//! integral, wider beats narrower, and the sole unsigned/signed mix at equal
//! width (`UInt8` with `Int8`) promotes to the next signed width (`Int16`).
//! The relation is total and commutative by construction - the table below
//! is symmetric.

use crate::enums::dtype::DType;
use crate::enums::scalar::Scalar;

use DType::{Bool as B1, Float32 as F4, Float64 as F8, Int8 as I1, Int16 as I2, Int32 as I4, Int64 as I8, UInt8 as U1};

/// Symmetric promotion table, indexed by [`DType::index`] in declaration
/// order: Bool, UInt8, Int8, Int16, Int32, Int64, Float32, Float64.
const PROMOTE_TABLE: [[DType; 8]; 8] = [
    /* b1 */ [B1, U1, I1, I2, I4, I8, F4, F8],
    /* u1 */ [U1, U1, I2, I2, I4, I8, F4, F8],
    /* i1 */ [I1, I2, I1, I2, I4, I8, F4, F8],
    /* i2 */ [I2, I2, I2, I2, I4, I8, F4, F8],
    /* i4 */ [I4, I4, I4, I4, I4, I8, F4, F8],
    /* i8 */ [I8, I8, I8, I8, I8, I8, F4, F8],
    /* f4 */ [F4, F4, F4, F4, F4, F4, F4, F8],
    /* f8 */ [F8, F8, F8, F8, F8, F8, F8, F8],
];

/// The common compute type for a pair of operand types. Total; commutative.
#[inline]
pub fn promote(a: DType, b: DType) -> DType {
    PROMOTE_TABLE[a.index()][b.index()]
}

/// The common compute type for a tensor operand and a scalar operand.
///
/// The scalar participates only at kind level, so it can never widen the
/// tensor's type within its own kind:
/// - a boolean scalar keeps the tensor type;
/// - an integer scalar keeps the tensor type, except a `Bool` tensor
///   promotes to `Int64`;
/// - a floating scalar keeps floating tensor types and lifts everything
///   else to `Float64`.
#[inline]
pub fn promote_with_scalar(a: DType, b: &Scalar) -> DType {
    match b {
        Scalar::Bool(_) => a,
        Scalar::Int(_) => {
            if a == DType::Bool {
                DType::Int64
            } else {
                a
            }
        }
        Scalar::Float(_) => {
            if a.is_floating() {
                a
            } else {
                DType::Float64
            }
        }
    }
}

/// Whether a value of `from` may be cast into `to` by a kernel.
///
/// Disallowed: floating to integral (silent truncation), and anything
/// non-bool to bool (no canonical numeric-to-bool narrowing). Everything
/// else is legal, including narrowing within a kind.
#[inline]
pub fn can_cast(from: DType, to: DType) -> bool {
    if from.is_floating() && to.is_integral() {
        return false;
    }
    if from != DType::Bool && to == DType::Bool {
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_promote_is_commutative_and_total() {
        for a in DType::ALL {
            for b in DType::ALL {
                assert_eq!(promote(a, b), promote(b, a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_promote_is_idempotent() {
        for a in DType::ALL {
            assert_eq!(promote(a, a), a);
        }
    }

    #[test]
    fn test_promote_floating_wins() {
        assert_eq!(promote(DType::Int32, DType::Float32), DType::Float32);
        assert_eq!(promote(DType::Int64, DType::Float32), DType::Float32);
        assert_eq!(promote(DType::Float32, DType::Float64), DType::Float64);
    }

    #[test]
    fn test_promote_wider_wins() {
        assert_eq!(promote(DType::Int16, DType::Int32), DType::Int32);
        assert_eq!(promote(DType::UInt8, DType::Int32), DType::Int32);
    }

    #[test]
    fn test_promote_mixed_sign_same_width() {
        assert_eq!(promote(DType::UInt8, DType::Int8), DType::Int16);
    }

    #[test]
    fn test_promote_bool_is_identity() {
        for a in DType::ALL {
            assert_eq!(promote(DType::Bool, a), a);
        }
    }

    #[test]
    fn test_promote_result_is_castable_upper_bound() {
        // The promoted type must be reachable from both operands.
        for a in DType::ALL {
            for b in DType::ALL {
                let p = promote(a, b);
                assert!(can_cast(a, p) || a == DType::Bool, "{a} -> {p}");
                assert!(can_cast(b, p) || b == DType::Bool, "{b} -> {p}");
            }
        }
    }

    #[test]
    fn test_promote_with_scalar_kind_rules() {
        let b = Scalar::Bool(true);
        let i = Scalar::Int(3);
        let f = Scalar::Float(1.5);

        assert_eq!(promote_with_scalar(DType::Int32, &b), DType::Int32);
        assert_eq!(promote_with_scalar(DType::Int32, &i), DType::Int32);
        assert_eq!(promote_with_scalar(DType::UInt8, &i), DType::UInt8);
        assert_eq!(promote_with_scalar(DType::Bool, &i), DType::Int64);
        assert_eq!(promote_with_scalar(DType::Float32, &f), DType::Float32);
        assert_eq!(promote_with_scalar(DType::Int32, &f), DType::Float64);
        assert_eq!(promote_with_scalar(DType::Bool, &f), DType::Float64);
    }

    #[test]
    fn test_can_cast_blocks_float_to_integral() {
        assert!(!can_cast(DType::Float32, DType::Int32));
        assert!(!can_cast(DType::Float64, DType::UInt8));
        assert!(can_cast(DType::Int32, DType::Float32));
        assert!(can_cast(DType::Float64, DType::Float32));
        assert!(can_cast(DType::Int64, DType::Int8));
    }

    #[test]
    fn test_can_cast_blocks_non_bool_to_bool() {
        for from in DType::ALL {
            assert_eq!(can_cast(from, DType::Bool), from == DType::Bool);
        }
    }
}
