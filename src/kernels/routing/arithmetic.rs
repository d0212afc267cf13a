// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Arithmetic Routing Module
//!
//! The public elementwise remainder operations, composed from the shape
//! broadcaster, the type promoter, the dispatch switches, and the map
//! engines.
//!
//! Every call follows the same sequence: size the output for the broadcast
//! result, derive the common compute type and verify it casts to the output
//! type, bind the four concrete types, then run the elementwise loop that
//! casts each operand element into the compute type, applies the remainder,
//! and casts the result into the output type. All failures are detected
//! before the first element is written.

use crate::enums::error::KernelError;
use crate::enums::scalar::Scalar;
use crate::kernels::arithmetic::Remainder;
use crate::kernels::broadcast::{resize_output, resize_to_broadcast};
use crate::kernels::map::{apply_binary_elementwise, apply_unary_map};
use crate::kernels::promote::{can_cast, promote, promote_with_scalar};
use crate::kernels::routing::dispatch::{switch_real, switch_real_and_bool};
use crate::structs::tensor::Tensor;
use crate::traits::type_unions::CastFrom;

const TENSOR_OP: &str = "remainder.tensor";
const SCALAR_OP: &str = "remainder.scalar";

/// Opaque execution handle supplied by the surrounding kernel-dispatch
/// runtime.
///
/// This core reads no state from it - failures travel through `Result` -
/// but the handle is threaded through every entry point so a larger
/// execution pipeline can pass its own context without an adapter layer.
#[derive(Debug, Default, Clone)]
pub struct KernelContext;

/// Elementwise remainder of two tensors, broadcast together, written into
/// `out`.
///
/// The output is sized to the broadcast result shape (resized in place when
/// dynamic, verified when fixed), operand types are promoted to a common
/// compute type, and each result is cast to `out`'s dtype. Returns the
/// `out` reference for fluent chaining.
///
/// Float compute types yield a remainder with the divisor's sign; integral
/// compute types truncate and panic on a zero divisor (caller-enforced
/// precondition).
///
/// # Errors
/// - `ShapeMismatch` - operands do not broadcast, or a fixed `out` has the
///   wrong shape; `out` is untouched.
/// - `InvalidCast` - the compute type cannot be cast to `out`'s dtype;
///   `out` may have been resized but holds no computed values.
/// - `UnsupportedType` - no kernel for the resolved combination (internal
///   invariant breach, e.g. two `Bool` operands).
pub fn remainder_tensor<'a>(
    _ctx: &KernelContext,
    a: &Tensor,
    b: &Tensor,
    out: &'a mut Tensor,
) -> Result<&'a mut Tensor, KernelError> {
    resize_to_broadcast(a.shape(), b.shape(), out)?;

    let a_type = a.dtype();
    let b_type = b.dtype();
    let common_type = promote(a_type, b_type);
    let out_type = out.dtype();

    if !can_cast(common_type, out_type) {
        return Err(KernelError::InvalidCast { from: common_type, to: out_type });
    }

    let out_shape = out.shape().to_vec();
    switch_real_and_bool!(a_type, TENSOR_OP, ATy, {
        switch_real_and_bool!(b_type, TENSOR_OP, BTy, {
            switch_real!(common_type, TENSOR_OP, CTy, {
                switch_real!(out_type, TENSOR_OP, OTy, {
                    apply_binary_elementwise(
                        |va: ATy, vb: BTy| {
                            let ca = <CTy as CastFrom<ATy>>::cast_from(va);
                            let cb = <CTy as CastFrom<BTy>>::cast_from(vb);
                            <OTy as CastFrom<CTy>>::cast_from(ca.remainder(cb))
                        },
                        a.as_slice::<ATy>(),
                        a.shape(),
                        b.as_slice::<BTy>(),
                        b.shape(),
                        out.as_mut_slice::<OTy>(),
                        &out_shape,
                    );
                })
            })
        })
    });

    Ok(out)
}

/// Elementwise remainder of a tensor and a fixed scalar divisor, written
/// into `out`.
///
/// The output takes `a`'s exact shape - a scalar broadcasts over every
/// element, so no shape computation is involved. Promotion follows the
/// scalar's kind only (see [`promote_with_scalar`]); cast checks and
/// failure modes match [`remainder_tensor`].
pub fn remainder_scalar<'a>(
    _ctx: &KernelContext,
    a: &Tensor,
    b: &Scalar,
    out: &'a mut Tensor,
) -> Result<&'a mut Tensor, KernelError> {
    resize_output(out, a.shape())?;

    let a_type = a.dtype();
    let common_type = promote_with_scalar(a_type, b);
    let out_type = out.dtype();

    if !can_cast(common_type, out_type) {
        return Err(KernelError::InvalidCast { from: common_type, to: out_type });
    }

    // One expansion per scalar kind; the scalar is cast into the compute
    // type once and held fixed across the whole map.
    macro_rules! scalar_kernel {
        ($BTy:ty, $val:expr) => {
            switch_real_and_bool!(a_type, SCALAR_OP, ATy, {
                switch_real!(common_type, SCALAR_OP, CTy, {
                    switch_real!(out_type, SCALAR_OP, OTy, {
                        let vb = <CTy as CastFrom<$BTy>>::cast_from($val);
                        apply_unary_map(
                            |va: ATy| {
                                let ca = <CTy as CastFrom<ATy>>::cast_from(va);
                                <OTy as CastFrom<CTy>>::cast_from(ca.remainder(vb))
                            },
                            a.as_slice::<ATy>(),
                            out.as_mut_slice::<OTy>(),
                        );
                    })
                })
            })
        };
    }

    match *b {
        Scalar::Bool(v) => scalar_kernel!(bool, v),
        Scalar::Int(v) => scalar_kernel!(i64, v),
        Scalar::Float(v) => scalar_kernel!(f64, v),
    }

    Ok(out)
}
