//! Accumulator seeding
//!
//! Allocates accumulators of the reduced shape and seeds them according to the
//! operator's [`IdentityRule`]. Constant identities fill the whole array.
//! Min/max-like operators seed every cell from real data: `f` of the first
//! element of that cell's reduced slice, with NaN seeds replaced by the
//! operator's identity. A max over a map with a known lower bound (`abs`,
//! `abs2`) seeds with that bound instead, which also covers empty slices.

use crate::dims::DimensionSet;
use crate::error::{ReduceError, ReduceResult};
use crate::kernel::check_reducedims;
use crate::ops::{Combine, IdentityRule, MapFn, ReduceOp};
use crate::shape::reduced_shape;
use crate::traversal::advance;
use scirs2_core::ndarray_ext::{Array, ArrayView, ArrayViewMut, IxDyn};

/// Accumulator of `shape` with every cell set to `value`
pub fn init_filled<R: Copy>(shape: &[usize], value: R) -> Array<R, IxDyn> {
    Array::from_elem(IxDyn(shape), value)
}

/// Accumulator of `shape` filled with the operator's identity
///
/// # Errors
///
/// `ArgumentConfiguration` when the operator has no constant identity.
pub fn init_identity<R, C>(op: &C, shape: &[usize]) -> ReduceResult<Array<R, IxDyn>>
where
    R: Copy,
    C: Combine<R>,
{
    let value = op.identity().ok_or_else(|| {
        ReduceError::argument_configuration(
            op.tag().name(),
            "operator has no identity; supply an explicit init",
        )
    })?;
    Ok(init_filled(shape, value))
}

/// Validate `r` against `a_shape`, then fill it with `value`
pub fn fill_checked<R: Copy>(
    r: &mut ArrayViewMut<'_, R, IxDyn>,
    a_shape: &[usize],
    value: R,
) -> ReduceResult<()> {
    check_reducedims(r.shape(), a_shape)?;
    r.fill(value);
    Ok(())
}

/// Set every accumulator cell to `f` of the first element of its reduced slice
///
/// # Errors
///
/// `ShapeMismatch` when `r` does not fit `a`, `ArgumentConfiguration` when
/// `a` is empty but `r` is not.
pub fn map_first_into<T, M>(
    f: &M,
    r: &mut ArrayViewMut<'_, M::Output, IxDyn>,
    a: &ArrayView<'_, T, IxDyn>,
) -> ReduceResult<()>
where
    T: Copy,
    M: MapFn<T>,
{
    check_reducedims(r.shape(), a.shape())?;
    if r.is_empty() {
        return Ok(());
    }
    if a.is_empty() {
        return Err(ReduceError::empty_reduction("map_first"));
    }

    let r_shape = r.shape().to_vec();
    let mut r_idx = vec![0usize; r_shape.len()];
    let mut a_idx = vec![0usize; a.ndim()];
    loop {
        a_idx[..r_idx.len()].copy_from_slice(&r_idx);
        r[&r_idx[..]] = f.apply(a[&a_idx[..]]);
        if !advance(&mut r_idx, &r_shape) {
            break;
        }
    }
    Ok(())
}

/// [`map_first_into`], then replace NaN seeds with the operator's identity
pub fn seed_first_into<T, M, C>(
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
    map_first_into(f, r, a)?;
    let mut replaced = 0usize;
    for cell in r.iter_mut() {
        if let Some(seed) = op.replace_seed(*cell) {
            *cell = seed;
            replaced += 1;
        }
    }
    if replaced > 0 {
        log::trace!("{}: replaced {} NaN seeds", op.tag().name(), replaced);
    }
    Ok(())
}

/// Allocate an accumulator seeded from the first slice of `a`
///
/// # Errors
///
/// `ArgumentConfiguration` when the reduced shape is non-empty but `a` has no
/// elements to seed from.
pub fn init_first_slice<T, M, C>(
    f: &M,
    op: &C,
    a: &ArrayView<'_, T, IxDyn>,
    dims: &DimensionSet,
) -> ReduceResult<Array<M::Output, IxDyn>>
where
    T: Copy,
    M: MapFn<T>,
    C: Combine<M::Output>,
{
    let shape = reduced_shape(a.shape(), dims);
    let cells: usize = shape.iter().product();
    if cells == 0 {
        return collect_array(op.tag(), shape, Vec::new());
    }
    if a.is_empty() {
        return Err(ReduceError::empty_reduction(op.tag().name()));
    }

    let mut seeds = Vec::with_capacity(cells);
    let mut replaced = 0usize;
    let mut idx = vec![0usize; shape.len()];
    loop {
        let seed = f.apply(a[&idx[..]]);
        match op.replace_seed(seed) {
            Some(substitute) => {
                replaced += 1;
                seeds.push(substitute);
            }
            None => seeds.push(seed),
        }
        if !advance(&mut idx, &shape) {
            break;
        }
    }
    if replaced > 0 {
        log::trace!("{}: replaced {} NaN seeds", op.tag().name(), replaced);
    }
    collect_array(op.tag(), shape, seeds)
}

/// Constant seed of a max over a map with a known lower bound
///
/// `Some` only for [`ReduceOp::Max`] over maps such as `Abs` and `Abs2`.
/// Such reductions seed with the bound instead of the first slice, which
/// also covers empty slices.
pub fn lower_bound_seed<T, M, C>(f: &M, op: &C) -> Option<M::Output>
where
    M: MapFn<T>,
    C: Combine<M::Output>,
{
    if op.tag() != ReduceOp::Max {
        return None;
    }
    let lower = f.floor()?;
    log::trace!("maximum: seeding with the lower bound of the map");
    Some(lower)
}

/// Allocate and seed the accumulator for reducing `a` over `dims`
///
/// An explicit `init` fills every cell and bypasses the operator's rule, so
/// it also permits reductions over empty slices.
///
/// # Errors
///
/// `ArgumentConfiguration` for a custom operator without `init`, or for a
/// first-slice seed over an empty input with a non-empty result.
pub fn init_accumulator<T, M, C>(
    f: &M,
    op: &C,
    a: &ArrayView<'_, T, IxDyn>,
    dims: &DimensionSet,
    init: Option<M::Output>,
) -> ReduceResult<Array<M::Output, IxDyn>>
where
    T: Copy,
    M: MapFn<T>,
    C: Combine<M::Output>,
{
    let shape = reduced_shape(a.shape(), dims);
    if let Some(value) = init {
        return Ok(init_filled(&shape, value));
    }

    match op.tag().identity_rule() {
        IdentityRule::Zero | IdentityRule::One | IdentityRule::True | IdentityRule::False => {
            init_identity(op, &shape)
        }
        IdentityRule::FirstSlice => match lower_bound_seed::<T, M, C>(f, op) {
            Some(lower) => Ok(init_filled(&shape, lower)),
            None => init_first_slice(f, op, a, dims),
        },
        IdentityRule::Explicit => Err(ReduceError::argument_configuration(
            op.tag().name(),
            "custom operators require an explicit init",
        )),
    }
}

fn collect_array<R>(
    op: ReduceOp,
    shape: Vec<usize>,
    values: Vec<R>,
) -> ReduceResult<Array<R, IxDyn>> {
    let len = values.len();
    Array::from_shape_vec(IxDyn(&shape), values)
        .map_err(|e| ReduceError::shape_mismatch(op.name(), shape, vec![len], e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::ops::{
        Abs, Add, And, CombineWith, Compose, Identity, MapWith, Max, Min, MinMax, Widen,
    };

    fn arr<T>(shape: &[usize], data: Vec<T>) -> Array<T, IxDyn> {
        Array::from_shape_vec(IxDyn(shape), data).unwrap()
    }

    fn dims(ids: &[isize]) -> DimensionSet {
        DimensionSet::new(ids.iter().copied()).unwrap()
    }

    #[test]
    fn test_identity_seeds() {
        let a = arr(&[2, 3], vec![1i32; 6]);
        let r = init_accumulator(&Widen, &Add, &a.view(), &dims(&[2]), None).unwrap();
        assert_eq!(r.shape(), &[2, 1]);
        assert!(r.iter().all(|&x| x == 0i64));

        let b = arr(&[2, 3], vec![true; 6]);
        let r = init_accumulator(&Identity, &And, &b.view(), &dims(&[1]), None).unwrap();
        assert!(r.iter().all(|&x| x));
    }

    #[test]
    fn test_first_slice_seed() {
        let a = arr(&[2, 3], vec![5.0, 1.0, 2.0, 4.0, 6.0, 0.5]);
        let r = init_accumulator(&Identity, &Min, &a.view(), &dims(&[1]), None).unwrap();
        assert_eq!(r.iter().copied().collect::<Vec<_>>(), vec![5.0, 1.0, 2.0]);
        let r = init_accumulator(&Identity, &Max, &a.view(), &dims(&[2]), None).unwrap();
        assert_eq!(r.iter().copied().collect::<Vec<_>>(), vec![5.0, 4.0]);
    }

    #[test]
    fn test_nan_seed_replaced() {
        let a = arr(&[1, 2], vec![f64::NAN, 1.0]);
        let r = init_accumulator(&Identity, &Max, &a.view(), &dims(&[2]), None).unwrap();
        assert_eq!(r[&[0, 0][..]], f64::NEG_INFINITY);
        let r = init_accumulator(&Identity, &Min, &a.view(), &dims(&[2]), None).unwrap();
        assert_eq!(r[&[0, 0][..]], f64::INFINITY);
    }

    #[test]
    fn test_empty_slice_policy() {
        let a = arr::<f64>(&[0, 3], vec![]);
        let err = init_accumulator(&Identity, &Min, &a.view(), &dims(&[1]), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConfiguration);

        let r = init_accumulator(&Identity, &Min, &a.view(), &dims(&[2]), None).unwrap();
        assert_eq!(r.shape(), &[0, 1]);
    }

    #[test]
    fn test_abs_max_seeds_with_lower_bound() {
        let a = arr::<i32>(&[0, 3], vec![]);
        let r = init_accumulator(&Abs, &Max, &a.view(), &dims(&[1]), None).unwrap();
        assert_eq!(r.shape(), &[1, 3]);
        assert!(r.iter().all(|&x| x == 0));
    }

    #[test]
    fn test_composed_map_seeds_from_first_slice() {
        let a = arr(&[2], vec![1.0, 2.0]);
        let negated_abs = Compose(Abs, MapWith(|x: f64| -x));
        let r = init_accumulator(&negated_abs, &Max, &a.view(), &dims(&[1]), None).unwrap();
        assert_eq!(r.iter().copied().collect::<Vec<_>>(), vec![-1.0]);

        let empty = arr::<f64>(&[0], vec![]);
        let err = init_accumulator(&negated_abs, &Max, &empty.view(), &dims(&[1]), None)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConfiguration);
    }

    #[test]
    fn test_lower_bound_seed_only_for_max() {
        assert_eq!(lower_bound_seed::<i32, _, _>(&Abs, &Max), Some(0));
        assert_eq!(lower_bound_seed::<i32, _, _>(&Abs, &Min), None);
        assert_eq!(lower_bound_seed::<i32, _, _>(&Identity, &Max), None);
    }

    #[test]
    fn test_explicit_init_and_custom_operator() {
        let a = arr::<i64>(&[0, 2], vec![]);
        let op = CombineWith(|x: i64, y: i64| x.max(y));
        let err = init_accumulator(&Identity, &op, &a.view(), &dims(&[1]), None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConfiguration);

        let r = init_accumulator(&Identity, &op, &a.view(), &dims(&[1]), Some(-1)).unwrap();
        assert_eq!(r.iter().copied().collect::<Vec<_>>(), vec![-1, -1]);
    }

    #[test]
    fn test_extrema_seed_pairs() {
        let a = arr(&[2, 2], vec![3, 1, 4, 1]);
        let pair = MapWith(|x: i32| (x, x));
        let r = init_accumulator(&pair, &MinMax, &a.view(), &dims(&[1]), None).unwrap();
        assert_eq!(r.iter().copied().collect::<Vec<_>>(), vec![(3, 3), (1, 1)]);
    }

    #[test]
    fn test_map_first_into_lower_rank() {
        let a = arr(&[2, 3], vec![1, 2, 3, 4, 5, 6]);
        let mut r = Array::from_elem(IxDyn(&[2]), 0);
        map_first_into(&Identity, &mut r.view_mut(), &a.view()).unwrap();
        assert_eq!(r.iter().copied().collect::<Vec<_>>(), vec![1, 4]);
    }

    #[test]
    fn test_fill_checked_validates_first() {
        let mut r = Array::from_elem(IxDyn(&[3]), 5);
        let err = fill_checked(&mut r.view_mut(), &[2, 2], 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
        assert!(r.iter().all(|&x| x == 5));
    }

    #[test]
    fn test_seed_first_into_empty_input() {
        let a = arr::<f32>(&[0, 2], vec![]);
        let mut r = Array::from_elem(IxDyn(&[1, 2]), 0.0f32);
        let err = seed_first_into(&Identity, &Max, &mut r.view_mut(), &a.view()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConfiguration);
    }
}
