// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Tensor Module
//!
//! N-dimensional view over a contiguous numeric buffer.
//!
//! ## Overview
//! - `shape` is row-major with no stride indirection; broadcasting is
//!   applied by the elementwise engine at iteration time, never
//!   materialised.
//! - A tensor is either *dynamic* (kernels may resize it to the broadcast
//!   result shape) or *fixed* (kernels verify the shape and fail on
//!   mismatch). Inputs are never mutated either way.
//! - Rank 0 is a scalar tensor holding exactly one element. Dimensions of
//!   size 0 are legal and make the tensor empty.

use crate::enums::dtype::DType;
use crate::enums::error::KernelError;
use crate::enums::tensor_data::TensorData;
use crate::traits::type_unions::Element;

/// Dense n-dimensional tensor over one of the [`DType`] element types.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    shape: Vec<usize>,
    data: TensorData,
    dynamic: bool,
}

impl Tensor {
    /// Construct a dynamic-shape tensor. Fails if the buffer length does not
    /// match the shape's element count.
    pub fn new(data: TensorData, shape: Vec<usize>) -> Result<Self, KernelError> {
        let numel: usize = shape.iter().product();
        if data.len() != numel {
            return Err(KernelError::ShapeMismatch(format!(
                "buffer holds {} elements but shape {:?} requires {}",
                data.len(),
                shape,
                numel
            )));
        }
        Ok(Tensor { shape, data, dynamic: true })
    }

    /// Construct a tensor from a typed slice, copying into aligned storage.
    pub fn from_slice<T: Element>(values: &[T], shape: &[usize]) -> Result<Self, KernelError> {
        Tensor::new(T::buffer_from(values), shape.to_vec())
    }

    /// A zero-filled dynamic tensor of the given dtype and shape. The usual
    /// way to prepare an output tensor.
    pub fn zeroed(dtype: DType, shape: &[usize]) -> Self {
        let numel: usize = shape.iter().product();
        Tensor {
            shape: shape.to_vec(),
            data: TensorData::zeroed(dtype, numel),
            dynamic: true,
        }
    }

    /// Pin the current shape: kernels will no longer resize this tensor and
    /// instead fail with `ShapeMismatch` when the required shape differs.
    pub fn fixed(mut self) -> Self {
        self.dynamic = false;
        self
    }

    /// The element type tag.
    #[inline]
    pub fn dtype(&self) -> DType {
        self.data.dtype()
    }

    /// Row-major dimension sizes.
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Total element count. `1` for rank-0 tensors.
    #[inline]
    pub fn numel(&self) -> usize {
        self.shape.iter().product()
    }

    /// Whether kernels may resize this tensor in place.
    #[inline]
    pub fn is_dynamic(&self) -> bool {
        self.dynamic
    }

    /// Typed view over the buffer.
    ///
    /// # Panics
    /// If `T` does not match the tensor's dtype.
    #[inline]
    pub fn as_slice<T: Element>(&self) -> &[T] {
        T::slice(&self.data)
    }

    /// Typed mutable view over the buffer.
    ///
    /// # Panics
    /// If `T` does not match the tensor's dtype.
    #[inline]
    pub fn as_mut_slice<T: Element>(&mut self) -> &mut [T] {
        T::slice_mut(&mut self.data)
    }

    /// Replace the shape, reallocating the buffer only when the element
    /// count changes. Content is preserved when the count is unchanged and
    /// zero-filled otherwise; the dtype never changes.
    pub(crate) fn resize(&mut self, shape: &[usize]) {
        let numel: usize = shape.iter().product();
        if numel != self.data.len() {
            self.data = TensorData::zeroed(self.dtype(), numel);
        }
        self.shape = shape.to_vec();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_checks_element_count() {
        let data = TensorData::zeroed(DType::Float32, 6);
        assert!(Tensor::new(data.clone(), vec![2, 3]).is_ok());
        let err = Tensor::new(data, vec![2, 4]).unwrap_err();
        assert!(matches!(err, KernelError::ShapeMismatch(_)));
    }

    #[test]
    fn test_rank0_has_one_element() {
        let t = Tensor::from_slice(&[42i64], &[]).unwrap();
        assert_eq!(t.numel(), 1);
        assert_eq!(t.shape(), &[] as &[usize]);
    }

    #[test]
    fn test_resize_keeps_buffer_when_numel_unchanged() {
        let mut t = Tensor::from_slice(&[1.0f64, 2.0, 3.0, 4.0], &[4]).unwrap();
        let ptr = t.as_slice::<f64>().as_ptr();
        t.resize(&[2, 2]);
        assert_eq!(t.as_slice::<f64>().as_ptr(), ptr);
        assert_eq!(t.as_slice::<f64>(), &[1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_resize_reallocates_zeroed_on_growth() {
        let mut t = Tensor::from_slice(&[1.0f32, 2.0], &[2]).unwrap();
        t.resize(&[3]);
        assert_eq!(t.as_slice::<f32>(), &[0.0, 0.0, 0.0]);
        assert_eq!(t.dtype(), DType::Float32);
    }
}
