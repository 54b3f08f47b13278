//! Extremum search with canonical keys
//!
//! Tracks a paired accumulator: `rval` holds the extremal values and `rind`
//! the canonical key at which each was found. Keys are 1-based positions in
//! the input's logical row-major order; a key of [`UNSEEDED_KEY`] marks a cell
//! that has not recorded a value yet, and the first candidate always replaces
//! it.
//!
//! NaN counts as the most extreme value: a NaN candidate displaces a number,
//! and a recorded NaN is never displaced. Among equal values the first one in
//! key order is kept.

use crate::config::KernelConfig;
use crate::dims::DimensionSet;
use crate::element::Ordered;
use crate::error::{ReduceError, ReduceResult};
use crate::init::{init_filled, map_first_into};
use crate::kernel::check_reducedims;
use crate::ops::{Comparator, Identity};
use crate::shape::{reduced_shape, reduced_shape0, ShapeIndexer};
use crate::traversal::{advance, KeyCursor};
use redim_core::UNSEEDED_KEY;
use scirs2_core::ndarray_ext::{Array, ArrayView, ArrayViewMut, Axis, IxDyn};

/// Whether candidate `v` replaces the recorded `(rv, ri)`
#[inline]
fn replaces<T: Ordered>(cmp: Comparator, v: T, rv: T, ri: usize) -> bool {
    ri == UNSEEDED_KEY || (!rv.is_nan() && (v.is_nan() || cmp.holds(v, rv)))
}

fn operation(cmp: Comparator) -> &'static str {
    match cmp {
        Comparator::Less => "findmin",
        Comparator::Greater => "findmax",
    }
}

/// Search `a` for extrema, updating the paired accumulator in place
///
/// # Errors
///
/// `ShapeMismatch` when `rval` and `rind` differ in shape or do not fit `a`.
/// Nothing is written on error.
pub fn find_extremum_into<T: Ordered>(
    cmp: Comparator,
    rval: &mut ArrayViewMut<'_, T, IxDyn>,
    rind: &mut ArrayViewMut<'_, usize, IxDyn>,
    a: &ArrayView<'_, T, IxDyn>,
) -> ReduceResult<()> {
    find_extremum_into_with_config(cmp, rval, rind, a, &KernelConfig::default())
}

/// [`find_extremum_into`] with an explicit configuration
pub fn find_extremum_into_with_config<T: Ordered>(
    cmp: Comparator,
    rval: &mut ArrayViewMut<'_, T, IxDyn>,
    rind: &mut ArrayViewMut<'_, usize, IxDyn>,
    a: &ArrayView<'_, T, IxDyn>,
    config: &KernelConfig,
) -> ReduceResult<()> {
    let name = operation(cmp);
    if rval.shape() != rind.shape() {
        return Err(ReduceError::shape_mismatch(
            name,
            rval.shape().to_vec(),
            rind.shape().to_vec(),
            "value and index outputs must share a shape",
        ));
    }
    let block = check_reducedims(rval.shape(), a.shape())?;
    if a.is_empty() {
        return Ok(());
    }

    let mut keys = KeyCursor::new();
    if a.ndim() == 0 {
        if let (Some(rv), Some(ri), Some(&v)) =
            (rval.iter_mut().next(), rind.iter_mut().next(), a.iter().next())
        {
            let key = keys.advance();
            if replaces(cmp, v, *rv, *ri) {
                *rv = v;
                *ri = key;
            }
        }
        return Ok(());
    }

    if config.takes_fast_path(block) {
        if let Some(data) = a.as_slice() {
            log::debug!("{}: contiguous fast path, block length {}", name, block);
            let cells = rval.iter_mut().zip(rind.iter_mut());
            for ((rv, ri), run) in cells.zip(data.chunks_exact(block)) {
                let (mut best, mut best_key) = (*rv, *ri);
                for &v in run {
                    let key = keys.advance();
                    if replaces(cmp, v, best, best_key) {
                        best = v;
                        best_key = key;
                    }
                }
                *rv = best;
                *ri = best_key;
            }
            return Ok(());
        }
    }

    let last = a.ndim() - 1;
    let outer_shape = &a.shape()[..last];
    let indexer = ShapeIndexer::new(rval.shape());
    let register = !indexer.is_kept(last);
    log::debug!(
        "{}: general path, {} accumulation along the last axis",
        name,
        if register { "register" } else { "direct" }
    );

    let mut a_idx = vec![0usize; a.ndim()];
    let mut r_idx = vec![0usize; indexer.out_rank()];
    for lane in a.lanes(Axis(last)) {
        indexer.map_into(&a_idx, &mut r_idx);
        if register {
            let (mut best, mut best_key) = (rval[&r_idx[..]], rind[&r_idx[..]]);
            for &v in lane.iter() {
                let key = keys.advance();
                if replaces(cmp, v, best, best_key) {
                    best = v;
                    best_key = key;
                }
            }
            rval[&r_idx[..]] = best;
            rind[&r_idx[..]] = best_key;
        } else {
            for (i, &v) in lane.iter().enumerate() {
                let key = keys.advance();
                r_idx[last] = i;
                if replaces(cmp, v, rval[&r_idx[..]], rind[&r_idx[..]]) {
                    rval[&r_idx[..]] = v;
                    rind[&r_idx[..]] = key;
                }
            }
        }
        advance(&mut a_idx[..last], outer_shape);
    }
    Ok(())
}

/// Minimum values and their keys, updating the paired accumulator
pub fn findmin_into<T: Ordered>(
    rval: &mut ArrayViewMut<'_, T, IxDyn>,
    rind: &mut ArrayViewMut<'_, usize, IxDyn>,
    a: &ArrayView<'_, T, IxDyn>,
) -> ReduceResult<()> {
    find_extremum_into(Comparator::Less, rval, rind, a)
}

/// Maximum values and their keys, updating the paired accumulator
pub fn findmax_into<T: Ordered>(
    rval: &mut ArrayViewMut<'_, T, IxDyn>,
    rind: &mut ArrayViewMut<'_, usize, IxDyn>,
    a: &ArrayView<'_, T, IxDyn>,
) -> ReduceResult<()> {
    find_extremum_into(Comparator::Greater, rval, rind, a)
}

/// Seed a paired accumulator for a fresh search
///
/// Values take the first element of each reduced slice and every key is
/// reset to [`UNSEEDED_KEY`]. Both outputs are validated before either is
/// written.
pub fn seed_extremum_into<T: Ordered>(
    rval: &mut ArrayViewMut<'_, T, IxDyn>,
    rind: &mut ArrayViewMut<'_, usize, IxDyn>,
    a: &ArrayView<'_, T, IxDyn>,
) -> ReduceResult<()> {
    if rval.shape() != rind.shape() {
        return Err(ReduceError::shape_mismatch(
            "find_extremum",
            rval.shape().to_vec(),
            rind.shape().to_vec(),
            "value and index outputs must share a shape",
        ));
    }
    map_first_into(&Identity, rval, a)?;
    rind.fill(UNSEEDED_KEY);
    Ok(())
}

/// Extremal values of `a` over `dims` and their canonical keys
///
/// The outputs use the collapse0 shape, so an input that is structurally
/// empty along a reduced dimension with an otherwise empty result yields
/// empty outputs.
///
/// # Errors
///
/// `ArgumentConfiguration` when `a` is empty but the reduced shape is not.
///
/// # Examples
///
/// ```
/// use redim_kernels::{find_extremum, Comparator, DimensionSet};
/// use scirs2_core::ndarray_ext::{Array, IxDyn};
///
/// let a = Array::from_shape_vec(IxDyn(&[2, 2]), vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// let dims = DimensionSet::new([2]).unwrap();
/// let (vals, keys) = find_extremum(Comparator::Greater, &a.view(), &dims).unwrap();
/// assert_eq!(vals.iter().copied().collect::<Vec<_>>(), vec![2.0, 4.0]);
/// assert_eq!(keys.iter().copied().collect::<Vec<_>>(), vec![2, 4]);
/// ```
pub fn find_extremum<T: Ordered>(
    cmp: Comparator,
    a: &ArrayView<'_, T, IxDyn>,
    dims: &DimensionSet,
) -> ReduceResult<(Array<T, IxDyn>, Array<usize, IxDyn>)> {
    find_extremum_with_config(cmp, a, dims, &KernelConfig::default())
}

/// [`find_extremum`] with an explicit configuration
pub fn find_extremum_with_config<T: Ordered>(
    cmp: Comparator,
    a: &ArrayView<'_, T, IxDyn>,
    dims: &DimensionSet,
    config: &KernelConfig,
) -> ReduceResult<(Array<T, IxDyn>, Array<usize, IxDyn>)> {
    if a.is_empty() {
        let collapsed: usize = reduced_shape(a.shape(), dims).iter().product();
        if collapsed > 0 {
            return Err(ReduceError::empty_reduction(operation(cmp)));
        }
        let shape = reduced_shape0(a.shape(), dims);
        return Ok((empty_array(cmp, &shape)?, empty_array(cmp, &shape)?));
    }

    let Some(&first) = a.iter().next() else {
        return Err(ReduceError::empty_reduction(operation(cmp)));
    };
    let shape = reduced_shape0(a.shape(), dims);
    let mut rval = init_filled(&shape, first);
    let mut rind = init_filled(&shape, UNSEEDED_KEY);
    map_first_into(&Identity, &mut rval.view_mut(), a)?;
    find_extremum_into_with_config(cmp, &mut rval.view_mut(), &mut rind.view_mut(), a, config)?;
    Ok((rval, rind))
}

fn empty_array<R>(cmp: Comparator, shape: &[usize]) -> ReduceResult<Array<R, IxDyn>> {
    Array::from_shape_vec(IxDyn(shape), Vec::new()).map_err(|e| {
        ReduceError::shape_mismatch(operation(cmp), shape.to_vec(), vec![0], e.to_string())
    })
}
