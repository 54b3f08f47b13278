//! Dimension-wise map-reduce kernel
//!
//! [`mapreducedim_into`] folds `f(A[i])` into a pre-shaped, pre-seeded
//! accumulator `R`. Every input element lands in the accumulator cell whose
//! kept coordinates equal its own; reduced dimensions of `R` have extent 1.
//!
//! Two traversals exist:
//!
//! - **Contiguous fast path**: when the reduced dimensions form a trailing
//!   suffix of the input's axes, the input's memory splits into runs of
//!   `block` elements, one run per output cell, folded left to right.
//! - **General path**: lanes along the last axis in row-major order. When the
//!   last axis is reduced the accumulator cell is held in a register for the
//!   whole lane, otherwise every element updates its own cell.
//!
//! Both traversals combine each cell's seed first and then its elements in
//! row-major order, so they produce bit-identical results.

use crate::config::KernelConfig;
use crate::error::{ReduceError, ReduceResult};
use crate::ops::{Combine, MapFn};
use crate::shape::ShapeIndexer;
use crate::traversal::advance;
use scirs2_core::ndarray_ext::{ArrayView, ArrayViewMut, Axis, IxDyn};

/// Validate an accumulator shape against an input shape
///
/// Returns the fast-path block length: the product of the reduced extents
/// when the reduced dimensions form a trailing suffix of the input's axes,
/// 0 when a kept dimension follows a reduced one. Accumulator dimensions
/// past its rank count as extent 1.
///
/// # Errors
///
/// `ShapeMismatch` when the accumulator has more dimensions than the input,
/// or when an accumulator extent is neither 1 nor the input's extent.
///
/// # Examples
///
/// ```
/// use redim_kernels::check_reducedims;
///
/// assert_eq!(check_reducedims(&[3, 1, 1], &[3, 4, 5]).unwrap(), 20);
/// assert_eq!(check_reducedims(&[1, 4, 1], &[3, 4, 5]).unwrap(), 0);
/// assert!(check_reducedims(&[2, 1], &[3, 4]).is_err());
/// ```
pub fn check_reducedims(r_shape: &[usize], a_shape: &[usize]) -> ReduceResult<usize> {
    if r_shape.len() > a_shape.len() {
        return Err(ReduceError::shape_mismatch(
            "check_reducedims",
            a_shape.to_vec(),
            r_shape.to_vec(),
            "accumulator has more dimensions than the input",
        ));
    }

    let mut block = 1usize;
    let mut seen_kept = false;
    for axis in (0..a_shape.len()).rev() {
        let ai = a_shape[axis];
        let ri = r_shape.get(axis).copied().unwrap_or(1);
        if ri == 1 && ai != 1 {
            block = if seen_kept { 0 } else { block * ai };
        } else if ri != ai {
            return Err(ReduceError::shape_mismatch(
                "check_reducedims",
                a_shape.to_vec(),
                r_shape.to_vec(),
                format!("dimension {} must have extent {} or 1", axis + 1, ai),
            ));
        } else if ai != 1 {
            seen_kept = true;
        }
    }
    Ok(block)
}

/// Fold `f(A)` into the accumulator `r` with the default configuration
///
/// # Examples
///
/// ```
/// use redim_kernels::{mapreducedim_into, Add, Identity};
/// use scirs2_core::ndarray_ext::{Array, IxDyn};
///
/// let a = Array::from_shape_vec(IxDyn(&[2, 2]), vec![1, 2, 3, 4]).unwrap();
/// let mut r = Array::from_elem(IxDyn(&[1, 2]), 0);
/// mapreducedim_into(&Identity, &Add, &mut r.view_mut(), &a.view()).unwrap();
/// assert_eq!(r.iter().copied().collect::<Vec<_>>(), vec![4, 6]);
/// ```
pub fn mapreducedim_into<T, M, C>(
    f: &M,
    op: &C,
    r: &mut ArrayViewMut<'_, M::Output, IxDyn>,
    a: &ArrayView<'_, T, IxDyn>,
) -> ReduceResult<()>
where
    T: Copy,
    M: MapFn<T>,
    C: Combine<M::Output>,
{
    mapreducedim_into_with_config(f, op, r, a, &KernelConfig::default())
}

/// Fold `f(A)` into the accumulator `r`
///
/// The accumulator is validated before it is touched; on error it is left
/// unchanged.
pub fn mapreducedim_into_with_config<T, M, C>(
    f: &M,
    op: &C,
    r: &mut ArrayViewMut<'_, M::Output, IxDyn>,
    a: &ArrayView<'_, T, IxDyn>,
    config: &KernelConfig,
) -> ReduceResult<()>
where
    T: Copy,
    M: MapFn<T>,
    C: Combine<M::Output>,
{
    let block = check_reducedims(r.shape(), a.shape())?;
    if a.is_empty() {
        return Ok(());
    }

    let name = op.tag().name();
    if a.ndim() == 0 {
        if let (Some(cell), Some(&x)) = (r.iter_mut().next(), a.iter().next()) {
            *cell = op.combine(*cell, f.apply(x));
        }
        return Ok(());
    }

    if config.takes_fast_path(block) && op.tag().fast_path_eligible() {
        if let Some(data) = a.as_slice() {
            log::debug!("{}: contiguous fast path, block length {}", name, block);
            for (cell, run) in r.iter_mut().zip(data.chunks_exact(block)) {
                *cell = fold_run(f, op, *cell, run);
            }
            return Ok(());
        }
    }

    reduce_general(f, op, r, a);
    Ok(())
}

/// Fold one contiguous run onto `seed`, strictly left to right
#[inline]
fn fold_run<T, M, C>(f: &M, op: &C, seed: M::Output, run: &[T]) -> M::Output
where
    T: Copy,
    M: MapFn<T>,
    C: Combine<M::Output>,
{
    let mut acc = seed;
    let mut chunks = run.chunks_exact(4);
    for c in &mut chunks {
        acc = op.combine(acc, f.apply(c[0]));
        acc = op.combine(acc, f.apply(c[1]));
        acc = op.combine(acc, f.apply(c[2]));
        acc = op.combine(acc, f.apply(c[3]));
    }
    for &x in chunks.remainder() {
        acc = op.combine(acc, f.apply(x));
    }
    acc
}

fn reduce_general<T, M, C>(
    f: &M,
    op: &C,
    r: &mut ArrayViewMut<'_, M::Output, IxDyn>,
    a: &ArrayView<'_, T, IxDyn>,
) where
    T: Copy,
    M: MapFn<T>,
    C: Combine<M::Output>,
{
    let last = a.ndim() - 1;
    let outer_shape = &a.shape()[..last];
    let indexer = ShapeIndexer::new(r.shape());
    let register = !indexer.is_kept(last);
    log::debug!(
        "{}: general path, {} accumulation along the last axis",
        op.tag().name(),
        if register { "register" } else { "direct" }
    );

    let mut a_idx = vec![0usize; a.ndim()];
    let mut r_idx = vec![0usize; indexer.out_rank()];
    for lane in a.lanes(Axis(last)) {
        indexer.map_into(&a_idx, &mut r_idx);
        if register {
            let cell = &mut r[&r_idx[..]];
            let mut acc = *cell;
            for &x in lane.iter() {
                acc = op.combine(acc, f.apply(x));
            }
            *cell = acc;
        } else {
            for (i, &x) in lane.iter().enumerate() {
                r_idx[last] = i;
                let cell = &mut r[&r_idx[..]];
                *cell = op.combine(*cell, f.apply(x));
            }
        }
        advance(&mut a_idx[..last], outer_shape);
    }
}
