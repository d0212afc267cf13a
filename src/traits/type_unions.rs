use std::fmt::Debug;

use num_traits::{Float as NumFloat, Num, NumCast, PrimInt, ToPrimitive};
use vec64::Vec64;

use crate::enums::dtype::DType;
use crate::enums::tensor_data::TensorData;

/// Trait for types valid as float elements in tensor buffers.
///
/// Useful when specifying `my_fn::<T: Float>() {}`.
///
/// Extends and constrains the *num-traits* `Float` implementation to fit the crate's type universe.
pub trait Float: NumFloat + Copy + Default + ToPrimitive + PartialEq + 'static {}
impl Float for f32 {}
impl Float for f64 {}

/// Trait for types valid as integer elements in tensor buffers.
pub trait Integer: PrimInt + Default + Debug + ToPrimitive + 'static {}
impl Integer for u8 {}
impl Integer for i8 {}
impl Integer for i16 {}
impl Integer for i32 {}
impl Integer for i64 {}

/// Trait for types valid as numerical.
///
/// Useful when specifying `my_fn::<T: Numeric>() {}`.
///
/// Extends and constrains the *num-traits* `Num` implementation to fit the crate's type universe.
pub trait Numeric: Num + NumCast + Copy + Default + ToPrimitive + PartialEq + 'static {}
impl Numeric for f32 {}
impl Numeric for f64 {}
impl Numeric for u8 {}
impl Numeric for i8 {}
impl Numeric for i16 {}
impl Numeric for i32 {}
impl Numeric for i64 {}

/// Trait for types that can live inside a [`TensorData`] buffer: the numeric
/// types plus `bool`.
///
/// Bridges between the runtime [`DType`] tag and compile-time element types.
/// The accessors assume the caller has already matched the buffer's dtype -
/// the dispatch layer guarantees this - so a variant mismatch is an internal
/// invariant breach, not a recoverable condition.
pub trait Element: Copy + Default + Send + Sync + 'static {
    /// The dtype tag corresponding to this element type.
    const DTYPE: DType;

    /// Typed view over a matching buffer.
    fn slice(data: &TensorData) -> &[Self];

    /// Typed mutable view over a matching buffer.
    fn slice_mut(data: &mut TensorData) -> &mut [Self];

    /// Build a buffer from a slice of values, copying into aligned storage.
    fn buffer_from(values: &[Self]) -> TensorData;
}

macro_rules! impl_element {
    ($($t:ty => $variant:ident),* $(,)?) => {$(
        impl Element for $t {
            const DTYPE: DType = DType::$variant;

            #[inline]
            fn slice(data: &TensorData) -> &[Self] {
                match data {
                    TensorData::$variant(v) => v.as_slice(),
                    other => unreachable!(
                        "tensor data is {} but {} was requested",
                        other.dtype(),
                        DType::$variant
                    ),
                }
            }

            #[inline]
            fn slice_mut(data: &mut TensorData) -> &mut [Self] {
                match data {
                    TensorData::$variant(v) => v.as_mut_slice(),
                    other => unreachable!(
                        "tensor data is {} but {} was requested",
                        other.dtype(),
                        DType::$variant
                    ),
                }
            }

            fn buffer_from(values: &[Self]) -> TensorData {
                TensorData::$variant(values.iter().copied().collect::<Vec64<$t>>())
            }
        }
    )*};
}

impl_element!(
    bool => Bool,
    u8 => UInt8,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    f32 => Float32,
    f64 => Float64,
);

/// Value conversion with C `static_cast` semantics, i.e. Rust `as` casts.
///
/// This is the cast the elementwise engine applies when moving operand
/// elements into the compute type and compute results into the output type.
/// It is saturating for float-to-int in Rust, truncating for narrowing
/// integer casts, and maps `bool` through `0`/`1`.
pub trait CastFrom<S>: Sized {
    fn cast_from(v: S) -> Self;
}

macro_rules! impl_cast_from {
    ($dst:ty; $($src:ty),* $(,)?) => {$(
        impl CastFrom<$src> for $dst {
            #[inline(always)]
            fn cast_from(v: $src) -> $dst {
                v as $dst
            }
        }
    )*};
}

macro_rules! impl_cast_from_bool {
    ($($dst:ty),* $(,)?) => {$(
        impl CastFrom<bool> for $dst {
            #[inline(always)]
            fn cast_from(v: bool) -> $dst {
                v as u8 as $dst
            }
        }
    )*};
}

impl_cast_from!(u8; u8, i8, i16, i32, i64, f32, f64);
impl_cast_from!(i8; u8, i8, i16, i32, i64, f32, f64);
impl_cast_from!(i16; u8, i8, i16, i32, i64, f32, f64);
impl_cast_from!(i32; u8, i8, i16, i32, i64, f32, f64);
impl_cast_from!(i64; u8, i8, i16, i32, i64, f32, f64);
impl_cast_from!(f32; u8, i8, i16, i32, i64, f32, f64);
impl_cast_from!(f64; u8, i8, i16, i32, i64, f32, f64);
impl_cast_from_bool!(u8, i8, i16, i32, i64, f32, f64);
