//! # DType Module - *Runtime type tagging for tensor buffers*
//!
//! Unified representation of the numeric element types a [`crate::Tensor`]
//! can carry.
//!
//! ## Overview
//! - Covers boolean, unsigned and signed integer, and floating-point widths.
//! - The set is closed: promotion ([`crate::kernels::promote`]) and kernel
//!   dispatch ([`crate::kernels::routing`]) are defined for every member, so
//!   adding a variant means extending both.
//! - `Bool` is a valid *operand* type but never a compute type; kernels
//!   operate on the real (integral or floating) subset.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Runtime discriminant for the element type of a tensor buffer.
///
/// Declaration order follows promotion precedence: boolean, then unsigned
/// and signed integers by width, then floats. [`DType::index`] relies on
/// this ordering for the promotion lookup table.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum DType {
    Bool,
    UInt8,
    Int8,
    Int16,
    Int32,
    Int64,
    Float32,
    Float64,
}

impl DType {
    /// Every supported dtype, in promotion-precedence order.
    pub const ALL: [DType; 8] = [
        DType::Bool,
        DType::UInt8,
        DType::Int8,
        DType::Int16,
        DType::Int32,
        DType::Int64,
        DType::Float32,
        DType::Float64,
    ];

    /// True for `Float32` and `Float64`.
    #[inline]
    pub fn is_floating(self) -> bool {
        matches!(self, DType::Float32 | DType::Float64)
    }

    /// True for the integer widths. Excludes `Bool`.
    #[inline]
    pub fn is_integral(self) -> bool {
        matches!(
            self,
            DType::UInt8 | DType::Int8 | DType::Int16 | DType::Int32 | DType::Int64
        )
    }

    /// True for any type kernels can compute in: integral or floating.
    #[inline]
    pub fn is_real(self) -> bool {
        self.is_integral() || self.is_floating()
    }

    /// Position in the promotion lookup table.
    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            DType::Bool => 0,
            DType::UInt8 => 1,
            DType::Int8 => 2,
            DType::Int16 => 3,
            DType::Int32 => 4,
            DType::Int64 => 5,
            DType::Float32 => 6,
            DType::Float64 => 7,
        }
    }
}

impl Display for DType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DType::Bool => f.write_str("Bool"),
            DType::UInt8 => f.write_str("UInt8"),
            DType::Int8 => f.write_str("Int8"),
            DType::Int16 => f.write_str("Int16"),
            DType::Int32 => f.write_str("Int32"),
            DType::Int64 => f.write_str("Int64"),
            DType::Float32 => f.write_str("Float32"),
            DType::Float64 => f.write_str("Float64"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_predicates_partition_the_set() {
        for dtype in DType::ALL {
            let kinds =
                [dtype == DType::Bool, dtype.is_integral(), dtype.is_floating()];
            assert_eq!(kinds.iter().filter(|k| **k).count(), 1, "{dtype}");
        }
    }

    #[test]
    fn test_index_matches_declaration_order() {
        for (i, dtype) in DType::ALL.iter().enumerate() {
            assert_eq!(dtype.index(), i);
        }
    }
}
