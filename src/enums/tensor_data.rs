//! # TensorData Enum Module
//!
//! Tagged union over the typed data buffers a [`crate::Tensor`] can own.
//!
//! One variant per [`DType`], each wrapping a 64-byte aligned `Vec64<T>`.
//! Typed access goes through [`crate::traits::type_unions::Element`], which
//! is how the dispatch layer recovers a concrete `&[T]` once it has matched
//! the runtime dtype.

use vec64::Vec64;

use crate::enums::dtype::DType;

/// Owned, contiguous element storage for one tensor.
#[derive(Debug, Clone, PartialEq)]
pub enum TensorData {
    Bool(Vec64<bool>),
    UInt8(Vec64<u8>),
    Int8(Vec64<i8>),
    Int16(Vec64<i16>),
    Int32(Vec64<i32>),
    Int64(Vec64<i64>),
    Float32(Vec64<f32>),
    Float64(Vec64<f64>),
}

macro_rules! for_each_variant {
    ($self:expr, $v:ident => $body:expr) => {
        match $self {
            TensorData::Bool($v) => $body,
            TensorData::UInt8($v) => $body,
            TensorData::Int8($v) => $body,
            TensorData::Int16($v) => $body,
            TensorData::Int32($v) => $body,
            TensorData::Int64($v) => $body,
            TensorData::Float32($v) => $body,
            TensorData::Float64($v) => $body,
        }
    };
}

impl TensorData {
    /// The dtype backing this buffer.
    #[inline]
    pub fn dtype(&self) -> DType {
        match self {
            TensorData::Bool(_) => DType::Bool,
            TensorData::UInt8(_) => DType::UInt8,
            TensorData::Int8(_) => DType::Int8,
            TensorData::Int16(_) => DType::Int16,
            TensorData::Int32(_) => DType::Int32,
            TensorData::Int64(_) => DType::Int64,
            TensorData::Float32(_) => DType::Float32,
            TensorData::Float64(_) => DType::Float64,
        }
    }

    /// Number of elements in the buffer.
    #[inline]
    pub fn len(&self) -> usize {
        for_each_variant!(self, v => v.len())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A zero-filled buffer of `len` elements of the given dtype.
    pub fn zeroed(dtype: DType, len: usize) -> Self {
        macro_rules! filled {
            ($t:ty, $variant:ident) => {
                TensorData::$variant(
                    std::iter::repeat(<$t>::default()).take(len).collect::<Vec64<$t>>(),
                )
            };
        }
        match dtype {
            DType::Bool => filled!(bool, Bool),
            DType::UInt8 => filled!(u8, UInt8),
            DType::Int8 => filled!(i8, Int8),
            DType::Int16 => filled!(i16, Int16),
            DType::Int32 => filled!(i32, Int32),
            DType::Int64 => filled!(i64, Int64),
            DType::Float32 => filled!(f32, Float32),
            DType::Float64 => filled!(f64, Float64),
        }
    }
}

macro_rules! impl_from_vec64 {
    ($($t:ty => $variant:ident),* $(,)?) => {$(
        impl From<Vec64<$t>> for TensorData {
            fn from(v: Vec64<$t>) -> Self {
                TensorData::$variant(v)
            }
        }
    )*};
}

impl_from_vec64!(
    bool => Bool,
    u8 => UInt8,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    f32 => Float32,
    f64 => Float64,
);
