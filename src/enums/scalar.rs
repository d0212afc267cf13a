// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Scalar Enum Module
//!
//! Tagged numeric literal for the tensor-scalar operation form.
//!
//! A `Scalar` carries one value plus its inferred kind. Promotion only ever
//! consults the kind (boolean vs. integral vs. floating), never the literal
//! value, mirroring the tensor-tensor promotion rule. Each kind is stored at
//! its widest representation so extraction into any compute type is a plain
//! cast.

use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::enums::dtype::DType;

/// A numeric literal with value semantics, used as the right-hand operand of
/// scalar kernels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
}

impl Scalar {
    /// The dtype backing this scalar's storage.
    #[inline]
    pub fn dtype(&self) -> DType {
        match self {
            Scalar::Bool(_) => DType::Bool,
            Scalar::Int(_) => DType::Int64,
            Scalar::Float(_) => DType::Float64,
        }
    }

    /// True if the scalar holds a floating-point value.
    #[inline]
    pub fn is_floating(&self) -> bool {
        matches!(self, Scalar::Float(_))
    }

    /// True if the scalar holds an integer value.
    #[inline]
    pub fn is_integral(&self) -> bool {
        matches!(self, Scalar::Int(_))
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Scalar::Int(v as i64)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Int(v)
    }
}

impl From<f32> for Scalar {
    fn from(v: f32) -> Self {
        Scalar::Float(v as f64)
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Float(v)
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Scalar::Bool(v) => write!(f, "{}", v),
            Scalar::Int(v) => write!(f, "{}", v),
            Scalar::Float(v) => write!(f, "{}", v),
        }
    }
}
