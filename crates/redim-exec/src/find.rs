//! Location of extremal values
//!
//! Indices are canonical keys: 1-based positions in the logical row-major
//! order of the input. Use [`DenseND::unravel_key`] to turn a key into a
//! multi-index.

use redim_core::DenseND;
use redim_kernels::{
    find_extremum_into, find_extremum_with_config, seed_extremum_into, Comparator, DimensionSet,
    KernelConfig, Ordered, ReduceResult,
};

fn find<T: Ordered>(
    cmp: Comparator,
    a: &DenseND<T>,
    dims: &[isize],
) -> ReduceResult<(DenseND<T>, DenseND<usize>)> {
    let dims = DimensionSet::try_from(dims)?;
    let config = KernelConfig::default();
    let (values, keys) = find_extremum_with_config(cmp, &a.view(), &dims, &config)?;
    Ok((DenseND::from_array(values), DenseND::from_array(keys)))
}

fn find_into<T: Ordered>(
    cmp: Comparator,
    rval: &mut DenseND<T>,
    rind: &mut DenseND<usize>,
    a: &DenseND<T>,
    init: bool,
) -> ReduceResult<()> {
    let view = a.view();
    let mut values = rval.view_mut();
    let mut keys = rind.view_mut();
    if init {
        seed_extremum_into(&mut values, &mut keys, &view)?;
    }
    find_extremum_into(cmp, &mut values, &mut keys, &view)
}

/// Minimum of each slice and the key where it occurs
///
/// NaN is smaller than every number, and the first of equal minima wins.
///
/// # Examples
///
/// ```
/// use redim_core::DenseND;
/// use redim_exec::findmin;
///
/// let a = DenseND::from_vec(vec![f64::NAN, 1.0, 2.0], &[3]).unwrap();
/// let (values, keys) = findmin(&a, &[1]).unwrap();
/// assert!(values.to_vec()[0].is_nan());
/// assert_eq!(keys.to_vec(), vec![1]);
/// ```
pub fn findmin<T: Ordered>(
    a: &DenseND<T>,
    dims: &[isize],
) -> ReduceResult<(DenseND<T>, DenseND<usize>)> {
    find(Comparator::Less, a, dims)
}

/// Maximum of each slice and the key where it occurs
///
/// NaN is larger than every number, and the first of equal maxima wins.
///
/// # Examples
///
/// ```
/// use redim_core::DenseND;
/// use redim_exec::findmax;
///
/// let a = DenseND::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
/// let (values, keys) = findmax(&a, &[2]).unwrap();
/// assert_eq!(values.to_vec(), vec![2.0, 4.0]);
/// assert_eq!(keys.to_vec(), vec![2, 4]);
/// assert_eq!(a.unravel_key(4), Some(vec![1, 1]));
/// ```
pub fn findmax<T: Ordered>(
    a: &DenseND<T>,
    dims: &[isize],
) -> ReduceResult<(DenseND<T>, DenseND<usize>)> {
    find(Comparator::Greater, a, dims)
}

/// Keys of the minima of each slice
pub fn argmin<T: Ordered>(a: &DenseND<T>, dims: &[isize]) -> ReduceResult<DenseND<usize>> {
    findmin(a, dims).map(|(_, keys)| keys)
}

/// Keys of the maxima of each slice
pub fn argmax<T: Ordered>(a: &DenseND<T>, dims: &[isize]) -> ReduceResult<DenseND<usize>> {
    findmax(a, dims).map(|(_, keys)| keys)
}

/// [`findmin`] into caller-supplied outputs
///
/// With `init` the outputs are reseeded first; otherwise the search continues
/// from their contents, and a key of 0 marks a cell with no value yet.
///
/// # Errors
///
/// `ShapeMismatch` when the outputs differ in shape or do not fit `A`.
pub fn findmin_into<T: Ordered>(
    rval: &mut DenseND<T>,
    rind: &mut DenseND<usize>,
    a: &DenseND<T>,
    init: bool,
) -> ReduceResult<()> {
    find_into(Comparator::Less, rval, rind, a, init)
}

/// [`findmax`] into caller-supplied outputs
pub fn findmax_into<T: Ordered>(
    rval: &mut DenseND<T>,
    rind: &mut DenseND<usize>,
    a: &DenseND<T>,
    init: bool,
) -> ReduceResult<()> {
    find_into(Comparator::Greater, rval, rind, a, init)
}

#[cfg(test)]
mod tests {
    use super::*;
    use redim_kernels::ErrorKind;

    #[test]
    fn test_findmin_columns() {
        let a = DenseND::from_vec(vec![5, 2, 1, 7], &[2, 2]).unwrap();
        let (values, keys) = findmin(&a, &[1]).unwrap();
        assert_eq!(values.to_vec(), vec![1, 2]);
        assert_eq!(keys.to_vec(), vec![3, 2]);
        assert_eq!(argmin(&a, &[1]).unwrap().to_vec(), vec![3, 2]);
    }

    #[test]
    fn test_argmax_full_reduction() {
        let a = DenseND::from_vec(vec![0.5, 9.0, 9.0, -1.0, 3.0, 2.0], &[3, 2]).unwrap();
        let keys = argmax(&a, &[1, 2]).unwrap();
        assert_eq!(keys.shape(), &[1, 1]);
        assert_eq!(keys.to_vec(), vec![2]);
        assert_eq!(a.unravel_key(2), Some(vec![0, 1]));
    }

    #[test]
    fn test_into_with_and_without_init() {
        let a = DenseND::from_vec(vec![3, 8, 6, 1], &[2, 2]).unwrap();
        let mut values = DenseND::from_elem(&[2, 1], 0);
        let mut keys = DenseND::from_elem(&[2, 1], 0usize);

        findmax_into(&mut values, &mut keys, &a, true).unwrap();
        assert_eq!(values.to_vec(), vec![8, 6]);
        assert_eq!(keys.to_vec(), vec![2, 3]);

        let b = DenseND::from_vec(vec![9, 0, 0, 0], &[2, 2]).unwrap();
        findmax_into(&mut values, &mut keys, &b, false).unwrap();
        assert_eq!(values.to_vec(), vec![9, 6]);
        assert_eq!(keys.to_vec(), vec![1, 3]);

        findmin_into(&mut values, &mut keys, &a, true).unwrap();
        assert_eq!(values.to_vec(), vec![3, 1]);
        assert_eq!(keys.to_vec(), vec![1, 4]);
    }

    #[test]
    fn test_into_rejects_mismatched_outputs() {
        let a = DenseND::from_vec(vec![1.0, 2.0], &[2]).unwrap();
        let mut values = DenseND::from_elem(&[1], 0.0);
        let mut keys = DenseND::from_elem(&[2], 0usize);
        let err = findmin_into(&mut values, &mut keys, &a, true).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
        assert_eq!(values.to_vec(), vec![0.0]);
    }
}
