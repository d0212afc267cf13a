//! Copyright © 2025 Peter Garfield Bower. All rights reserved.
//!
//! # Mintensor
//!
//! A dense-tensor elementwise binary-operation engine: two operands
//! (tensor-tensor or tensor-scalar) of potentially different shapes and
//! numeric types produce a broadcasted, type-promoted result written into a
//! caller-supplied output tensor.
//!
//! The engine composes three independent layers for every call:
//! 1. **Shape broadcasting** - trailing-aligned shape unification plus
//!    in-place output resizing ([`kernels::broadcast`]).
//! 2. **Type promotion** - a total promotion relation over the supported
//!    [`DType`] set and a cast-legality check against the requested output
//!    type ([`kernels::promote`]).
//! 3. **Type-combinatorial dispatch** - runtime selection of the concrete
//!    elementwise loop for the four-way (operand A, operand B, compute,
//!    output) type combination ([`kernels::routing`]).
//!
//! The per-element function shipped here is a remainder with
//! sign-of-divisor semantics for floats and truncating semantics for
//! integers ([`kernels::arithmetic`]), but the broadcasting, promotion, and
//! dispatch machinery generalises to any elementwise binary operation.

pub mod enums {
    pub mod dtype;
    pub mod error;
    pub mod scalar;
    pub mod tensor_data;
}

pub mod structs {
    pub mod tensor;
}

pub mod traits {
    pub mod type_unions;
}

pub mod kernels {
    pub mod arithmetic;
    pub mod broadcast;
    pub mod map;
    pub mod promote;
    pub mod routing {
        pub mod arithmetic;
        pub mod dispatch;
    }
}

pub use enums::dtype::DType;
pub use enums::error::KernelError;
pub use enums::scalar::Scalar;
pub use enums::tensor_data::TensorData;
pub use kernels::arithmetic::Remainder;
pub use kernels::broadcast::{broadcast_shapes, resize_to_broadcast};
pub use kernels::promote::{can_cast, promote, promote_with_scalar};
pub use kernels::routing::arithmetic::{KernelContext, remainder_scalar, remainder_tensor};
pub use structs::tensor::Tensor;
pub use traits::type_unions::{CastFrom, Element, Float, Integer, Numeric};
pub use vec64::Vec64;
