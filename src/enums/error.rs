//! # Error Module - Custom *Mintensor* Error Type
//!
//! Defines the unified error type for kernel invocations.
//!
//! ## Features
//! - Covers broadcast-incompatible shapes, fixed output-shape mismatches,
//!   illegal compute-to-output casts, and unsupported type combinations.
//! - Implements `Display` for readable output and `Error` for integration
//!   with standard Rust error handling.

use std::error::Error;
use std::fmt;

use crate::enums::dtype::DType;

/// Catch all error type for `Mintensor` kernels.
///
/// Every variant is detected before any output element is written, so a
/// failed call never leaves partial results in the output buffer.
#[derive(Debug, PartialEq)]
pub enum KernelError {
    /// Input shapes are not broadcast-compatible, or the output tensor has a
    /// fixed shape that differs from the required result shape.
    ShapeMismatch(String),
    /// The promoted compute type cannot be legally cast to the requested
    /// output type.
    InvalidCast { from: DType, to: DType },
    /// No kernel exists for a resolved type combination. The promotion layer
    /// guarantees only computable combinations reach dispatch, so this
    /// indicates an internal invariant violation rather than a user error.
    UnsupportedType(String),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::ShapeMismatch(msg) => {
                write!(f, "Shape mismatch: {}.", msg)
            }
            KernelError::InvalidCast { from, to } => {
                write!(f, "Invalid cast: compute type '{}' cannot be cast to output type '{}'.", from, to)
            }
            KernelError::UnsupportedType(msg) => {
                write!(f, "Unsupported type combination: {}.", msg)
            }
        }
    }
}

impl Error for KernelError {}
