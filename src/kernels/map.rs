// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under MIT License.

//! # Elementwise Map Module
//!
//! The iteration engines behind every elementwise kernel.
//!
//! Two modes:
//! - **Binary, broadcasted**: walk the output index space and pull each
//!   operand element through its broadcast stride mapping. Results are
//!   identical to materialising both inputs at the full broadcast shape.
//! - **Unary over a fixed scalar**: plain element-order iteration, no index
//!   mapping needed.
//!
//! Elements have no data dependency on each other, so with the
//! `parallel_proc` feature large outputs are computed on the Rayon pool;
//! every element is still written exactly once.

use crate::kernels::broadcast::broadcast_strides;

/// Element count above which the Rayon path takes over.
#[cfg(feature = "parallel_proc")]
const PARALLEL_THRESHOLD: usize = 16_384;

/// Apply `f` across two broadcast operands, writing into `out`.
///
/// `out` must already hold the broadcast result shape's element count;
/// `a_shape` and `b_shape` must broadcast to `out_shape`. Both are
/// guaranteed by the routing layer.
pub fn apply_binary_elementwise<A, B, O, F>(
    f: F,
    a: &[A],
    a_shape: &[usize],
    b: &[B],
    b_shape: &[usize],
    out: &mut [O],
    out_shape: &[usize],
) where
    A: Copy + Sync,
    B: Copy + Sync,
    O: Send,
    F: Fn(A, B) -> O + Sync,
{
    let a_strides = broadcast_strides(a_shape, out_shape);
    let b_strides = broadcast_strides(b_shape, out_shape);

    #[cfg(feature = "parallel_proc")]
    if out.len() >= PARALLEL_THRESHOLD {
        use rayon::prelude::*;
        out.par_iter_mut().enumerate().for_each(|(i, slot)| {
            let (ai, bi) = mapped_offsets(i, out_shape, &a_strides, &b_strides);
            *slot = f(a[ai], b[bi]);
        });
        return;
    }

    // Odometer walk: carry coordinates from the innermost dimension out,
    // keeping running operand offsets so no per-element division is needed.
    let rank = out_shape.len();
    let mut coords = vec![0usize; rank];
    let (mut ai, mut bi) = (0usize, 0usize);
    for slot in out.iter_mut() {
        *slot = f(a[ai], b[bi]);
        for d in (0..rank).rev() {
            coords[d] += 1;
            ai += a_strides[d];
            bi += b_strides[d];
            if coords[d] < out_shape[d] {
                break;
            }
            coords[d] = 0;
            ai -= a_strides[d] * out_shape[d];
            bi -= b_strides[d] * out_shape[d];
        }
    }
}

/// Apply `f` to every element of `a` in order, writing into `out`.
///
/// `out` must hold exactly `a.len()` elements.
pub fn apply_unary_map<A, O, F>(f: F, a: &[A], out: &mut [O])
where
    A: Copy + Sync,
    O: Send,
    F: Fn(A) -> O + Sync,
{
    debug_assert_eq!(a.len(), out.len());

    #[cfg(feature = "parallel_proc")]
    if a.len() >= PARALLEL_THRESHOLD {
        use rayon::prelude::*;
        out.par_iter_mut().zip(a.par_iter()).for_each(|(slot, &v)| {
            *slot = f(v);
        });
        return;
    }

    for (slot, &v) in out.iter_mut().zip(a.iter()) {
        *slot = f(v);
    }
}

/// Operand offsets for one flat output index, via divmod over the output
/// shape. Used by the parallel path where no odometer state can be carried.
#[cfg(feature = "parallel_proc")]
fn mapped_offsets(
    index: usize,
    out_shape: &[usize],
    a_strides: &[usize],
    b_strides: &[usize],
) -> (usize, usize) {
    let mut rem = index;
    let (mut ai, mut bi) = (0usize, 0usize);
    for d in (0..out_shape.len()).rev() {
        let c = rem % out_shape[d];
        rem /= out_shape[d];
        ai += c * a_strides[d];
        bi += c * b_strides[d];
    }
    (ai, bi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_no_broadcast() {
        let a = [1i32, 2, 3, 4];
        let b = [10i32, 20, 30, 40];
        let mut out = [0i64; 4];
        apply_binary_elementwise(
            |x: i32, y: i32| (x + y) as i64,
            &a,
            &[4],
            &b,
            &[4],
            &mut out,
            &[4],
        );
        assert_eq!(out, [11, 22, 33, 44]);
    }

    #[test]
    fn test_binary_broadcast_cross() {
        // (3,1) x (1,4) -> (3,4); out[i][j] == f(a[i], b[j])
        let a = [1.0f64, 2.0, 3.0];
        let b = [10.0f64, 20.0, 30.0, 40.0];
        let mut out = [0.0f64; 12];
        apply_binary_elementwise(
            |x, y| x + y,
            &a,
            &[3, 1],
            &b,
            &[1, 4],
            &mut out,
            &[3, 4],
        );
        let expected = [
            11.0, 21.0, 31.0, 41.0, //
            12.0, 22.0, 32.0, 42.0, //
            13.0, 23.0, 33.0, 43.0,
        ];
        assert_eq!(out, expected);
    }

    #[test]
    fn test_binary_matches_materialised_expansion() {
        // (2,3) x (3,) against manual repetition of b.
        let a = [5i32, 7, 9, 11, 13, 15];
        let b = [1i32, 2, 3];
        let mut out = [0i32; 6];
        apply_binary_elementwise(|x, y| x * y, &a, &[2, 3], &b, &[3], &mut out, &[2, 3]);

        let b_full = [1i32, 2, 3, 1, 2, 3];
        let expected: Vec<i32> = a.iter().zip(b_full.iter()).map(|(x, y)| x * y).collect();
        assert_eq!(out.to_vec(), expected);
    }

    #[test]
    fn test_binary_rank0_operand() {
        let a = [1i32, 2, 3];
        let b = [10i32];
        let mut out = [0i32; 3];
        apply_binary_elementwise(|x, y| x + y, &a, &[3], &b, &[], &mut out, &[3]);
        assert_eq!(out, [11, 12, 13]);
    }

    #[test]
    fn test_binary_zero_size_dim_is_noop() {
        let a: [i32; 0] = [];
        let b = [1i32, 2, 3, 4];
        let mut out: [i32; 0] = [];
        apply_binary_elementwise(|x, y| x + y, &a, &[0, 1], &b, &[1, 4], &mut out, &[0, 4]);
    }

    #[test]
    fn test_unary_order_preserved() {
        let a = [3.5f64, -3.5, 0.0];
        let mut out = [0.0f64; 3];
        apply_unary_map(|x| x * 2.0, &a, &mut out);
        assert_eq!(out, [7.0, -7.0, 0.0]);
    }
}
