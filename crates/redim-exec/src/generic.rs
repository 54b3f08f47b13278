//! Generic reduce-with-map entry points
//!
//! Every named operation in this crate is a thin layer over these functions.

use redim_core::DenseND;
use redim_kernels::{
    fill_checked, init_accumulator, lower_bound_seed, mapreducedim_into_with_config,
    seed_first_into, Combine, DimensionSet, Identity, IdentityRule, KernelConfig, MapFn,
    ReduceError, ReduceResult,
};

/// Reduce `f(A)` with `op` over `dims`
///
/// With `init` every output cell starts from that value, otherwise the
/// operator's identity rule seeds it. An explicit `init` is required for
/// custom operators and permits min/max over empty slices.
///
/// # Errors
///
/// `ArgumentConfiguration` for invalid dimension identifiers, custom operators
/// without `init`, and min/max-like reductions over empty slices without `init`.
///
/// # Examples
///
/// ```
/// use redim_core::DenseND;
/// use redim_exec::mapreduce_dims;
/// use redim_kernels::{Abs2, Add};
///
/// let a = DenseND::from_vec(vec![1.0, -2.0, 3.0, -4.0], &[2, 2]).unwrap();
/// let r = mapreduce_dims(Abs2, Add, &a, &[2], None).unwrap();
/// assert_eq!(r.to_vec(), vec![5.0, 25.0]);
/// ```
pub fn mapreduce_dims<T, M, C>(
    f: M,
    op: C,
    a: &DenseND<T>,
    dims: &[isize],
    init: Option<M::Output>,
) -> ReduceResult<DenseND<M::Output>>
where
    T: Copy,
    M: MapFn<T>,
    C: Combine<M::Output>,
{
    mapreduce_dims_with_config(f, op, a, dims, init, &KernelConfig::default())
}

/// [`mapreduce_dims`] with an explicit kernel configuration
pub fn mapreduce_dims_with_config<T, M, C>(
    f: M,
    op: C,
    a: &DenseND<T>,
    dims: &[isize],
    init: Option<M::Output>,
    config: &KernelConfig,
) -> ReduceResult<DenseND<M::Output>>
where
    T: Copy,
    M: MapFn<T>,
    C: Combine<M::Output>,
{
    let dims = DimensionSet::try_from(dims)?;
    mapreduce_set(&f, &op, a, &dims, init, config)
}

/// Reduce `A` with `op` over `dims`
///
/// # Examples
///
/// ```
/// use redim_core::DenseND;
/// use redim_exec::reduce_dims;
/// use redim_kernels::CombineWith;
///
/// let a = DenseND::from_vec(vec![1, 2, 3, 4], &[2, 2]).unwrap();
/// let r = reduce_dims(CombineWith(|x: i32, y: i32| x * 10 + y), &a, &[2], Some(0)).unwrap();
/// assert_eq!(r.to_vec(), vec![12, 34]);
/// ```
pub fn reduce_dims<T, C>(
    op: C,
    a: &DenseND<T>,
    dims: &[isize],
    init: Option<T>,
) -> ReduceResult<DenseND<T>>
where
    T: Copy,
    C: Combine<T>,
{
    mapreduce_dims(Identity, op, a, dims, init)
}

pub(crate) fn mapreduce_set<T, M, C>(
    f: &M,
    op: &C,
    a: &DenseND<T>,
    dims: &DimensionSet,
    init: Option<M::Output>,
    config: &KernelConfig,
) -> ReduceResult<DenseND<M::Output>>
where
    T: Copy,
    M: MapFn<T>,
    C: Combine<M::Output>,
{
    log::debug!(
        "{}: reducing shape {:?} over dims {:?} ({})",
        op.tag().name(),
        a.shape(),
        dims.iter().collect::<Vec<_>>(),
        if a.is_contiguous() { "contiguous" } else { "strided" }
    );
    let view = a.view();
    let mut r = init_accumulator(f, op, &view, dims, init)?;
    mapreducedim_into_with_config(f, op, &mut r.view_mut(), &view, config)?;
    Ok(DenseND::from_array(r))
}

/// Reduce `f(A)` with `op` into the caller's accumulator `r`
///
/// The reduced dimensions are those where `r` has extent 1 and `A` does not.
/// With `init` the accumulator is first reseeded by the operator's identity
/// rule; otherwise the reduction accumulates onto its contents.
///
/// # Errors
///
/// `ShapeMismatch` when `r` does not fit `A`, raised before `r` is written.
/// With `init`, `ArgumentConfiguration` for custom operators and for
/// min/max-like reductions over an empty `A` into a non-empty `r`.
pub fn mapreduce_into<T, M, C>(
    f: M,
    op: C,
    r: &mut DenseND<M::Output>,
    a: &DenseND<T>,
    init: bool,
) -> ReduceResult<()>
where
    T: Copy,
    M: MapFn<T>,
    C: Combine<M::Output>,
{
    reduce_into(&f, &op, r, a, init)
}

pub(crate) fn reduce_into<T, M, C>(
    f: &M,
    op: &C,
    r: &mut DenseND<M::Output>,
    a: &DenseND<T>,
    init: bool,
) -> ReduceResult<()>
where
    T: Copy,
    M: MapFn<T>,
    C: Combine<M::Output>,
{
    log::debug!(
        "{}: accumulating shape {:?} into {:?} (init = {})",
        op.tag().name(),
        a.shape(),
        r.shape(),
        init
    );
    let view = a.view();
    let mut acc = r.view_mut();
    if init {
        match op.tag().identity_rule() {
            IdentityRule::FirstSlice => match lower_bound_seed::<T, M, C>(f, op) {
                Some(lower) => fill_checked(&mut acc, view.shape(), lower)?,
                None => seed_first_into(f, op, &mut acc, &view)?,
            },
            IdentityRule::Explicit => {
                return Err(ReduceError::argument_configuration(
                    op.tag().name(),
                    "custom operators cannot be reseeded; fill the accumulator and pass init = false",
                ))
            }
            _ => {
                let seed = op.identity().ok_or_else(|| {
                    ReduceError::argument_configuration(op.tag().name(), "operator has no identity")
                })?;
                fill_checked(&mut acc, view.shape(), seed)?;
            }
        }
    }
    redim_kernels::mapreducedim_into(f, op, &mut acc, &view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use redim_kernels::{Abs, Add, CombineWith, ErrorKind, MapWith, Max, Mul};

    #[test]
    fn test_mapreduce_with_closure_map() {
        let a = DenseND::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
        let r = mapreduce_dims(MapWith(|x: i32| x * x), Add, &a, &[1], None).unwrap();
        assert_eq!(r.shape(), &[1, 3]);
        assert_eq!(r.to_vec(), vec![17, 29, 45]);
    }

    #[test]
    fn test_invalid_dims_rejected() {
        let a = DenseND::from_vec(vec![1.0, 2.0], &[2]).unwrap();
        let err = mapreduce_dims(Identity, Add, &a, &[0], None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConfiguration);
    }

    #[test]
    fn test_custom_operator_needs_init() {
        let a = DenseND::from_vec(vec![1, 2], &[2]).unwrap();
        let op = CombineWith(|x: i32, y: i32| x - y);
        let err = reduce_dims(op, &a, &[1], None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConfiguration);
        let r = reduce_dims(op, &a, &[1], Some(10)).unwrap();
        assert_eq!(r.to_vec(), vec![7]);
    }

    #[test]
    fn test_explicit_init_allows_empty_max() {
        let a = DenseND::<f64>::from_vec(vec![], &[0, 2]).unwrap();
        let r = reduce_dims(Max, &a, &[1], Some(f64::NEG_INFINITY)).unwrap();
        assert_eq!(r.to_vec(), vec![f64::NEG_INFINITY; 2]);
    }

    #[test]
    fn test_into_accumulates_or_reseeds() {
        let a = DenseND::from_vec(vec![1i64, 2, 3, 4], &[2, 2]).unwrap();
        let mut r = DenseND::from_elem(&[1, 2], 1i64);
        mapreduce_into(Identity, Mul, &mut r, &a, false).unwrap();
        assert_eq!(r.to_vec(), vec![3, 8]);
        mapreduce_into(Identity, Mul, &mut r, &a, false).unwrap();
        assert_eq!(r.to_vec(), vec![9, 64]);
        mapreduce_into(Identity, Mul, &mut r, &a, true).unwrap();
        assert_eq!(r.to_vec(), vec![3, 8]);
    }

    #[test]
    fn test_into_abs_max_reseeds_like_value_form() {
        let empty = DenseND::<i32>::zeros(&[0, 2]);
        let mut r = DenseND::from_elem(&[1, 2], 9i32);
        mapreduce_into(Abs, Max, &mut r, &empty, true).unwrap();
        assert_eq!(r.to_vec(), vec![0, 0]);
        assert_eq!(mapreduce_dims(Abs, Max, &empty, &[1], None).unwrap(), r);

        let a = DenseND::from_vec(vec![-3, 1, 2, -5], &[2, 2]).unwrap();
        mapreduce_into(Abs, Max, &mut r, &a, true).unwrap();
        assert_eq!(r.to_vec(), vec![3, 5]);
    }

    #[test]
    fn test_into_shape_mismatch_leaves_accumulator() {
        let a = DenseND::from_vec(vec![1i64, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
        let mut r = DenseND::from_elem(&[2, 2], 7i64);
        let err = mapreduce_into(Identity, Add, &mut r, &a, true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
        assert_eq!(r.to_vec(), vec![7; 4]);
    }
}
