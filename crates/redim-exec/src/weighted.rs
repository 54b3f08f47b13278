//! Weighted sums
//!
//! Passing `None` for the weights routes to the plain [`sum`](crate::sum).

use crate::families::{sum, sum_into};
use redim_core::DenseND;
use redim_kernels::{
    weighted_sum_into_with_config, DimensionSet, KernelConfig, ReduceResult, WeightedElement,
};

/// Sum of `w[i_d] * A[i]` over the single dimension `d` in `dims`
///
/// # Errors
///
/// With weights: `ArgumentConfiguration` when `dims` names more than one
/// dimension, `ShapeMismatch` when the weight count differs from its extent.
/// An empty `dims` takes a single weight that scales every element.
///
/// # Examples
///
/// ```
/// use redim_core::DenseND;
/// use redim_exec::weighted_sum;
///
/// let a = DenseND::from_vec(vec![1, 2, 3, 4], &[2, 2]).unwrap();
/// let r = weighted_sum(&a, Some(&[1, 2][..]), &[1]).unwrap();
/// assert_eq!(r.to_vec(), vec![7i64, 10]);
/// ```
pub fn weighted_sum<T: WeightedElement>(
    a: &DenseND<T>,
    weights: Option<&[T]>,
    dims: &[isize],
) -> ReduceResult<DenseND<T::Acc>> {
    weighted_sum_with_config(a, weights, dims, &KernelConfig::default())
}

/// [`weighted_sum`] with an explicit kernel configuration
pub fn weighted_sum_with_config<T: WeightedElement>(
    a: &DenseND<T>,
    weights: Option<&[T]>,
    dims: &[isize],
    config: &KernelConfig,
) -> ReduceResult<DenseND<T::Acc>> {
    match weights {
        None => sum(a, dims),
        Some(w) => {
            let dims = DimensionSet::try_from(dims)?;
            log::debug!("weighted_sum: shape {:?}, {} weights", a.shape(), w.len());
            redim_kernels::weighted_sum_with_config(&a.view(), w, &dims, config)
                .map(DenseND::from_array)
        }
    }
}

/// Weighted sum of `A` into `r`
///
/// With `init` the accumulator is zeroed first, otherwise the sums are added
/// onto it. Without weights `dims` is implied by the shape of `r`.
pub fn weighted_sum_into<T: WeightedElement>(
    r: &mut DenseND<T::Acc>,
    a: &DenseND<T>,
    weights: Option<&[T]>,
    dims: &[isize],
    init: bool,
) -> ReduceResult<()> {
    match weights {
        None => sum_into(r, a, init),
        Some(w) => {
            let dims = DimensionSet::try_from(dims)?;
            weighted_sum_into_with_config(
                &mut r.view_mut(),
                &a.view(),
                w,
                &dims,
                init,
                &KernelConfig::default(),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use redim_kernels::ErrorKind;

    #[test]
    fn test_unweighted_routes_to_sum() {
        let a = DenseND::from_vec(vec![1i32, 2, 3, 4], &[2, 2]).unwrap();
        assert_eq!(weighted_sum(&a, None, &[1, 2]).unwrap().to_vec(), vec![10i64]);
    }

    #[test]
    fn test_weighted_rows() {
        let a = DenseND::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
        let r = weighted_sum(&a, Some(&[1.0, 0.0, -1.0][..]), &[2]).unwrap();
        assert_eq!(r.shape(), &[2, 1]);
        assert_eq!(r.to_vec(), vec![-2.0, -2.0]);
    }

    #[test]
    fn test_weighted_into_accumulates() {
        let a = DenseND::from_vec(vec![1i64, 2, 3, 4], &[2, 2]).unwrap();
        let mut r = DenseND::from_elem(&[1, 2], 0i64);
        weighted_sum_into(&mut r, &a, Some(&[1, 2][..]), &[1], true).unwrap();
        weighted_sum_into(&mut r, &a, Some(&[1, 2][..]), &[1], false).unwrap();
        assert_eq!(r.to_vec(), vec![14, 20]);
    }

    #[test]
    fn test_weighted_errors() {
        let a = DenseND::from_vec(vec![1i32, 2, 3, 4], &[2, 2]).unwrap();
        let err = weighted_sum(&a, Some(&[1, 2, 3][..]), &[1]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
        let err = weighted_sum(&a, Some(&[1, 2][..]), &[1, 2]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConfiguration);
        let err = weighted_sum(&a, Some(&[1, 2][..]), &[-1]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConfiguration);
    }
}
