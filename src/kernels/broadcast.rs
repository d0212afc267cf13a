// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Shape Broadcasting Module
//!
//! Trailing-aligned shape unification and output-tensor sizing.
//!
//! The standard rule: align shapes at their trailing dimensions; each
//! dimension pair must be equal or contain a 1, and the result takes the
//! non-1 value. Missing leading dimensions behave as 1. Nothing is ever
//! materialised - [`broadcast_strides`] produces a stride-0 index mapping
//! the elementwise engine walks instead.

use crate::enums::error::KernelError;
use crate::structs::tensor::Tensor;

/// Unify two shapes under the broadcasting rule.
///
/// Returns the broadcast result shape, or `ShapeMismatch` when a dimension
/// pair is incompatible.
pub fn broadcast_shapes(a: &[usize], b: &[usize]) -> Result<Vec<usize>, KernelError> {
    let rank = a.len().max(b.len());
    let mut out = vec![0usize; rank];
    for d in 0..rank {
        // Trailing alignment: missing leading dims count as 1.
        let ad = if d < rank - a.len() { 1 } else { a[d - (rank - a.len())] };
        let bd = if d < rank - b.len() { 1 } else { b[d - (rank - b.len())] };
        out[d] = if ad == bd {
            ad
        } else if ad == 1 {
            bd
        } else if bd == 1 {
            ad
        } else {
            return Err(KernelError::ShapeMismatch(format!(
                "cannot broadcast shapes {:?} and {:?} (dim {}: {} vs {})",
                a, b, d, ad, bd
            )));
        };
    }
    Ok(out)
}

/// Size `out` to the broadcast result of `a_shape` and `b_shape`.
///
/// Incompatible input shapes fail before `out` is touched. A dynamic output
/// is resized in place (reallocating only when the element count changes); a
/// fixed output must already match the result shape.
pub fn resize_to_broadcast(
    a_shape: &[usize],
    b_shape: &[usize],
    out: &mut Tensor,
) -> Result<(), KernelError> {
    let target = broadcast_shapes(a_shape, b_shape)?;
    resize_output(out, &target)
}

/// Size `out` to an exact target shape, per the dynamic/fixed policy above.
pub fn resize_output(out: &mut Tensor, target: &[usize]) -> Result<(), KernelError> {
    if out.shape() == target {
        return Ok(());
    }
    if !out.is_dynamic() {
        return Err(KernelError::ShapeMismatch(format!(
            "output tensor has fixed shape {:?} but the operation requires {:?}",
            out.shape(),
            target
        )));
    }
    out.resize(target);
    Ok(())
}

/// Row-major element strides of `shape` aligned to `target`'s rank, with 0
/// for every broadcast (size-1 or missing) dimension.
///
/// Walking the target index space and accumulating these strides visits the
/// source element each target element maps to, repeating elements exactly as
/// if the source had been materialised to the full target shape.
///
/// Precondition: `shape` broadcasts to `target`.
pub fn broadcast_strides(shape: &[usize], target: &[usize]) -> Vec<usize> {
    let offset = target.len() - shape.len();
    let mut strides = vec![0usize; target.len()];
    let mut acc = 1usize;
    for d in (0..shape.len()).rev() {
        strides[offset + d] = if shape[d] == 1 { 0 } else { acc };
        acc *= shape[d];
    }
    strides
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::dtype::DType;

    #[test]
    fn test_broadcast_shapes_basic() {
        assert_eq!(broadcast_shapes(&[3, 1], &[1, 4]).unwrap(), vec![3, 4]);
        assert_eq!(broadcast_shapes(&[2, 3, 4], &[3, 4]).unwrap(), vec![2, 3, 4]);
        assert_eq!(broadcast_shapes(&[5], &[5]).unwrap(), vec![5]);
        assert_eq!(broadcast_shapes(&[], &[2, 2]).unwrap(), vec![2, 2]);
    }

    #[test]
    fn test_broadcast_shapes_zero_dims() {
        assert_eq!(broadcast_shapes(&[0, 1], &[1, 4]).unwrap(), vec![0, 4]);
        assert!(broadcast_shapes(&[0], &[3]).is_err());
    }

    #[test]
    fn test_broadcast_shapes_incompatible() {
        let err = broadcast_shapes(&[3, 4], &[5]).unwrap_err();
        assert!(matches!(err, KernelError::ShapeMismatch(_)));
    }

    #[test]
    fn test_broadcast_strides_stride0_on_broadcast_dims() {
        assert_eq!(broadcast_strides(&[3, 1], &[3, 4]), vec![1, 0]);
        assert_eq!(broadcast_strides(&[1, 4], &[3, 4]), vec![0, 1]);
        assert_eq!(broadcast_strides(&[4], &[3, 4]), vec![0, 1]);
        assert_eq!(broadcast_strides(&[], &[3, 4]), vec![0, 0]);
        assert_eq!(broadcast_strides(&[2, 3], &[2, 3]), vec![3, 1]);
    }

    #[test]
    fn test_resize_to_broadcast_dynamic() {
        let mut out = Tensor::zeroed(DType::Float64, &[1]);
        resize_to_broadcast(&[3, 1], &[1, 4], &mut out).unwrap();
        assert_eq!(out.shape(), &[3, 4]);
        assert_eq!(out.numel(), 12);
    }

    #[test]
    fn test_resize_to_broadcast_fixed_mismatch() {
        let mut out = Tensor::zeroed(DType::Float64, &[2, 2]).fixed();
        let err = resize_to_broadcast(&[3, 1], &[1, 4], &mut out).unwrap_err();
        assert!(matches!(err, KernelError::ShapeMismatch(_)));
        // Untouched on failure.
        assert_eq!(out.shape(), &[2, 2]);
    }

    #[test]
    fn test_resize_to_broadcast_fixed_exact_match_ok() {
        let mut out = Tensor::zeroed(DType::Float64, &[3, 4]).fixed();
        resize_to_broadcast(&[3, 1], &[1, 4], &mut out).unwrap();
        assert_eq!(out.shape(), &[3, 4]);
    }

    #[test]
    fn test_incompatible_inputs_leave_out_untouched() {
        let mut out = Tensor::from_slice(&[9.0f64, 9.0], &[2]).unwrap();
        assert!(resize_to_broadcast(&[3, 4], &[5], &mut out).is_err());
        assert_eq!(out.shape(), &[2]);
        assert_eq!(out.as_slice::<f64>(), &[9.0, 9.0]);
    }
}
