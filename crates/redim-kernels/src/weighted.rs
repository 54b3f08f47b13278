//! Weighted sums along a single dimension
//!
//! Each contribution is `A[i] * w[i_d]` in the promoted accumulator type,
//! where `i_d` is the coordinate along the reduced dimension `d`. Rank-1
//! inputs reduce to a widened dot product. Contiguous float inputs reduced
//! along their first or last axis may use a matrix-vector product instead of
//! the general traversal, see [`KernelConfig::accelerated_weighted_sum`].

use crate::config::KernelConfig;
use crate::dims::DimensionSet;
use crate::element::{Accumulate, Promote, WeightedElement};
use crate::error::{ReduceError, ReduceResult};
use crate::init::init_filled;
use crate::shape::{reduced_shape, ShapeIndexer};
use crate::traversal::advance;
use scirs2_core::ndarray_ext::{Array, ArrayView, ArrayViewMut, Axis, IxDyn};

const OPERATION: &str = "weighted_sum";

/// The 0-based axis a weighted reduction runs along
///
/// An empty set reduces nothing and behaves like a dimension past the rank:
/// every element is scaled by a single weight.
fn weighted_axis(dims: &DimensionSet, rank: usize) -> ReduceResult<usize> {
    let mut ids = dims.iter();
    match (ids.next(), ids.next()) {
        (Some(dim), None) => Ok(dim - 1),
        (None, _) => Ok(rank),
        _ => Err(ReduceError::argument_configuration(
            OPERATION,
            "reducing over more than one dimension is not supported with weights",
        )),
    }
}

/// Weighted sum of `a` over `dims` into a fresh accumulator
///
/// # Examples
///
/// ```
/// use redim_kernels::{weighted_sum, DimensionSet};
/// use scirs2_core::ndarray_ext::{Array, IxDyn};
///
/// let a = Array::from_shape_vec(IxDyn(&[2, 2]), vec![1, 2, 3, 4]).unwrap();
/// let r = weighted_sum(&a.view(), &[1, 2], &DimensionSet::new([1]).unwrap()).unwrap();
/// assert_eq!(r.iter().copied().collect::<Vec<i64>>(), vec![7, 10]);
/// ```
pub fn weighted_sum<T: WeightedElement>(
    a: &ArrayView<'_, T, IxDyn>,
    weights: &[T],
    dims: &DimensionSet,
) -> ReduceResult<Array<T::Acc, IxDyn>> {
    weighted_sum_with_config(a, weights, dims, &KernelConfig::default())
}

/// [`weighted_sum`] with an explicit configuration
pub fn weighted_sum_with_config<T: WeightedElement>(
    a: &ArrayView<'_, T, IxDyn>,
    weights: &[T],
    dims: &DimensionSet,
    config: &KernelConfig,
) -> ReduceResult<Array<T::Acc, IxDyn>> {
    let mut r = init_filled(&reduced_shape(a.shape(), dims), T::promoted_zero());
    weighted_sum_into_with_config(&mut r.view_mut(), a, weights, dims, false, config)?;
    Ok(r)
}

/// Accumulate the weighted sum of `a` over `dims` into `r`
///
/// With `init` the accumulator is zeroed first, otherwise the sums are added
/// onto its contents.
///
/// # Errors
///
/// - `ArgumentConfiguration` when `dims` names more than one dimension.
/// - `ShapeMismatch` when the weight count differs from that dimension's
///   extent (1 past the input's rank or for an empty `dims`) or `r` is not
///   of the reduced shape.
pub fn weighted_sum_into<T: WeightedElement>(
    r: &mut ArrayViewMut<'_, T::Acc, IxDyn>,
    a: &ArrayView<'_, T, IxDyn>,
    weights: &[T],
    dims: &DimensionSet,
    init: bool,
) -> ReduceResult<()> {
    weighted_sum_into_with_config(r, a, weights, dims, init, &KernelConfig::default())
}

/// [`weighted_sum_into`] with an explicit configuration
pub fn weighted_sum_into_with_config<T: WeightedElement>(
    r: &mut ArrayViewMut<'_, T::Acc, IxDyn>,
    a: &ArrayView<'_, T, IxDyn>,
    weights: &[T],
    dims: &DimensionSet,
    init: bool,
    config: &KernelConfig,
) -> ReduceResult<()> {
    let rank = a.ndim();
    let axis = weighted_axis(dims, rank)?;
    let extent = a.shape().get(axis).copied().unwrap_or(1);
    if weights.len() != extent {
        return Err(ReduceError::shape_mismatch(
            OPERATION,
            vec![extent],
            vec![weights.len()],
            format!("weights must match the extent of dimension {}", axis + 1),
        ));
    }
    let expected = reduced_shape(a.shape(), dims);
    if r.shape() != expected.as_slice() {
        return Err(ReduceError::shape_mismatch(
            OPERATION,
            expected,
            r.shape().to_vec(),
            "accumulator must have the reduced shape",
        ));
    }

    if init {
        r.fill(T::promoted_zero());
    }
    if a.is_empty() {
        return Ok(());
    }

    if rank == 0 {
        if let (Some(cell), Some(&x)) = (r.iter_mut().next(), a.iter().next()) {
            *cell = cell.acc_add(x.promote().acc_mul(weights[0].promote()));
        }
        return Ok(());
    }

    if rank == 1 && axis == 0 {
        log::debug!("{}: dot product of length {}", OPERATION, extent);
        let dot = a
            .iter()
            .zip(weights)
            .fold(T::promoted_zero(), |acc, (&x, &w)| {
                acc.acc_add(x.promote().acc_mul(w.promote()))
            });
        if let Some(cell) = r.iter_mut().next() {
            *cell = cell.acc_add(dot);
        }
        return Ok(());
    }

    if config.accelerated_weighted_sum && axis < rank {
        if let Some(sums) = T::accelerated_weighted_sum(a, weights, axis) {
            log::debug!("{}: matrix-vector product along axis {}", OPERATION, axis);
            for (cell, s) in r.iter_mut().zip(sums) {
                *cell = cell.acc_add(s);
            }
            return Ok(());
        }
    }

    weighted_general(r, a, weights, axis);
    Ok(())
}

fn weighted_general<T: WeightedElement>(
    r: &mut ArrayViewMut<'_, T::Acc, IxDyn>,
    a: &ArrayView<'_, T, IxDyn>,
    weights: &[T],
    axis: usize,
) {
    let last = a.ndim() - 1;
    let outer_shape = &a.shape()[..last];
    let indexer = ShapeIndexer::new(r.shape());
    let register = !indexer.is_kept(last);
    log::debug!(
        "{}: general path, {} accumulation along the last axis",
        OPERATION,
        if register { "register" } else { "direct" }
    );

    let mut a_idx = vec![0usize; a.ndim()];
    let mut r_idx = vec![0usize; indexer.out_rank()];
    for lane in a.lanes(Axis(last)) {
        indexer.map_into(&a_idx, &mut r_idx);
        let outer_weight = if axis < last { a_idx[axis] } else { 0 };
        let weight_at = |i: usize| {
            if axis == last {
                weights[i].promote()
            } else {
                weights[outer_weight].promote()
            }
        };
        if register {
            let cell = &mut r[&r_idx[..]];
            let mut acc = *cell;
            for (i, &x) in lane.iter().enumerate() {
                acc = acc.acc_add(x.promote().acc_mul(weight_at(i)));
            }
            *cell = acc;
        } else {
            for (i, &x) in lane.iter().enumerate() {
                r_idx[last] = i;
                let cell = &mut r[&r_idx[..]];
                *cell = cell.acc_add(x.promote().acc_mul(weight_at(i)));
            }
        }
        advance(&mut a_idx[..last], outer_shape);
    }
}
