// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Type Dispatch Module
//!
//! Declarative switches from a runtime [`crate::DType`] tag to a concrete
//! element type, used by the routing layer to bind the four type slots of an
//! elementwise kernel (operand A, operand B, compute, output) one at a time.
//!
//! Nesting the switches at a call site expands the full cross product of
//! combinations, so every pairing the promotion layer can produce has a
//! monomorphised kernel - the runtime cost is four tag matches per call, not
//! per element.
//!
//! [`switch_real!`] covers only the computable (integral and floating)
//! types. Its fallback arm returns [`crate::KernelError::UnsupportedType`]:
//! promotion never asks a kernel to compute in `Bool`, so reaching that arm
//! means an upstream invariant was violated, and the error message carries
//! the operation label to locate it.

/// Bind `$T` to the element type of any operand dtype (including `Bool`)
/// and evaluate `$body`.
macro_rules! switch_real_and_bool {
    ($dtype:expr, $op:expr, $T:ident, $body:expr) => {
        match $dtype {
            $crate::DType::Bool => {
                type $T = bool;
                $body
            }
            $crate::DType::UInt8 => {
                type $T = u8;
                $body
            }
            $crate::DType::Int8 => {
                type $T = i8;
                $body
            }
            $crate::DType::Int16 => {
                type $T = i16;
                $body
            }
            $crate::DType::Int32 => {
                type $T = i32;
                $body
            }
            $crate::DType::Int64 => {
                type $T = i64;
                $body
            }
            $crate::DType::Float32 => {
                type $T = f32;
                $body
            }
            $crate::DType::Float64 => {
                type $T = f64;
                $body
            }
        }
    };
}

/// Bind `$T` to the element type of a computable dtype and evaluate `$body`.
///
/// Falls through to `UnsupportedType` for non-real dtypes; see the module
/// docs for why that is an internal error.
macro_rules! switch_real {
    ($dtype:expr, $op:expr, $T:ident, $body:expr) => {
        match $dtype {
            $crate::DType::UInt8 => {
                type $T = u8;
                $body
            }
            $crate::DType::Int8 => {
                type $T = i8;
                $body
            }
            $crate::DType::Int16 => {
                type $T = i16;
                $body
            }
            $crate::DType::Int32 => {
                type $T = i32;
                $body
            }
            $crate::DType::Int64 => {
                type $T = i64;
                $body
            }
            $crate::DType::Float32 => {
                type $T = f32;
                $body
            }
            $crate::DType::Float64 => {
                type $T = f64;
                $body
            }
            other => {
                return Err($crate::KernelError::UnsupportedType(format!(
                    "{}: no kernel for dtype {}",
                    $op, other
                )));
            }
        }
    };
}

pub(crate) use switch_real;
pub(crate) use switch_real_and_bool;
