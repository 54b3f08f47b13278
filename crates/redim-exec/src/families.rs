//! Named reduction families
//!
//! Each family comes in a value-returning form that allocates its result and
//! an in-place `*_into` form writing into a caller-supplied accumulator. The
//! `*_with` forms apply a map to every element first.
//!
//! Sums and products accumulate in the promoted type of the element (see
//! [`Promote`]), so `sum` over `i32` yields `i64` and `sum_with(Abs, ..)` over
//! complex input yields real values.

use crate::generic::{mapreduce_set, reduce_into};
use redim_core::DenseND;
use redim_kernels::{
    Add, And, Combine, Compose, DimensionSet, Identity, KernelConfig, MapFn, MapWith, Max, Min,
    MinMax, Mul, Or, Ordered, Promote, ReduceResult, Widen,
};

fn reduce<T, M, C>(
    f: M,
    op: C,
    a: &DenseND<T>,
    dims: &[isize],
) -> ReduceResult<DenseND<M::Output>>
where
    T: Copy,
    M: MapFn<T>,
    C: Combine<M::Output>,
{
    let dims = DimensionSet::try_from(dims)?;
    mapreduce_set(&f, &op, a, &dims, None, &KernelConfig::default())
}

/// Sum over `dims`
///
/// # Examples
///
/// ```
/// use redim_core::DenseND;
/// use redim_exec::sum;
///
/// let a = DenseND::from_vec(vec![1i32, 2, 3, 4], &[2, 2]).unwrap();
/// assert_eq!(sum(&a, &[1]).unwrap().to_vec(), vec![4i64, 6]);
/// assert_eq!(sum(&a, &[2]).unwrap().to_vec(), vec![3i64, 7]);
/// ```
pub fn sum<T: Promote>(a: &DenseND<T>, dims: &[isize]) -> ReduceResult<DenseND<T::Acc>> {
    reduce(Widen, Add, a, dims)
}

/// Sum of `f(x)` over `dims`
pub fn sum_with<T, M>(
    f: M,
    a: &DenseND<T>,
    dims: &[isize],
) -> ReduceResult<DenseND<<M::Output as Promote>::Acc>>
where
    T: Copy,
    M: MapFn<T>,
    M::Output: Promote,
{
    reduce(Compose(f, Widen), Add, a, dims)
}

/// Product over `dims`
pub fn prod<T: Promote>(a: &DenseND<T>, dims: &[isize]) -> ReduceResult<DenseND<T::Acc>> {
    reduce(Widen, Mul, a, dims)
}

/// Product of `f(x)` over `dims`
pub fn prod_with<T, M>(
    f: M,
    a: &DenseND<T>,
    dims: &[isize],
) -> ReduceResult<DenseND<<M::Output as Promote>::Acc>>
where
    T: Copy,
    M: MapFn<T>,
    M::Output: Promote,
{
    reduce(Compose(f, Widen), Mul, a, dims)
}

/// Maximum over `dims`
///
/// NaN propagates. Reducing an empty slice into a non-empty result is an
/// `ArgumentConfiguration` error.
pub fn maximum<T: Ordered>(a: &DenseND<T>, dims: &[isize]) -> ReduceResult<DenseND<T>> {
    reduce(Identity, Max, a, dims)
}

/// Maximum of `f(x)` over `dims`
///
/// Maps with a lower bound, such as `Abs`, seed with that bound and accept
/// empty slices.
pub fn maximum_with<T, M>(f: M, a: &DenseND<T>, dims: &[isize]) -> ReduceResult<DenseND<M::Output>>
where
    T: Copy,
    M: MapFn<T>,
    M::Output: Ordered,
{
    reduce(f, Max, a, dims)
}

/// Minimum over `dims`
///
/// # Examples
///
/// ```
/// use redim_core::DenseND;
/// use redim_exec::minimum;
///
/// let a = DenseND::<f64>::ones(&[0, 3]);
/// assert!(minimum(&a, &[1]).is_err());
/// assert_eq!(minimum(&a, &[2]).unwrap().shape(), &[0, 1]);
/// ```
pub fn minimum<T: Ordered>(a: &DenseND<T>, dims: &[isize]) -> ReduceResult<DenseND<T>> {
    reduce(Identity, Min, a, dims)
}

/// Minimum of `f(x)` over `dims`
pub fn minimum_with<T, M>(f: M, a: &DenseND<T>, dims: &[isize]) -> ReduceResult<DenseND<M::Output>>
where
    T: Copy,
    M: MapFn<T>,
    M::Output: Ordered,
{
    reduce(f, Min, a, dims)
}

/// Logical and over `dims`
pub fn all(a: &DenseND<bool>, dims: &[isize]) -> ReduceResult<DenseND<bool>> {
    reduce(Identity, And, a, dims)
}

/// Whether `pred` holds for every element of each slice
pub fn all_with<T, F>(pred: F, a: &DenseND<T>, dims: &[isize]) -> ReduceResult<DenseND<bool>>
where
    T: Copy,
    F: Fn(T) -> bool,
{
    reduce(MapWith(pred), And, a, dims)
}

/// Logical or over `dims`
pub fn any(a: &DenseND<bool>, dims: &[isize]) -> ReduceResult<DenseND<bool>> {
    reduce(Identity, Or, a, dims)
}

/// Whether `pred` holds for some element of each slice
pub fn any_with<T, F>(pred: F, a: &DenseND<T>, dims: &[isize]) -> ReduceResult<DenseND<bool>>
where
    T: Copy,
    F: Fn(T) -> bool,
{
    reduce(MapWith(pred), Or, a, dims)
}

/// Number of elements of each slice satisfying `pred`
///
/// # Examples
///
/// ```
/// use redim_core::DenseND;
/// use redim_exec::count;
///
/// let a = DenseND::from_vec(vec![1, -2, 3, -4, 5, 6], &[2, 3]).unwrap();
/// assert_eq!(count(|x: i32| x > 0, &a, &[2]).unwrap().to_vec(), vec![2, 2]);
/// ```
pub fn count<T, F>(pred: F, a: &DenseND<T>, dims: &[isize]) -> ReduceResult<DenseND<usize>>
where
    T: Copy,
    F: Fn(T) -> bool,
{
    reduce(MapWith(move |x: T| usize::from(pred(x))), Add, a, dims)
}

/// Minimum and maximum of each slice as `(min, max)` pairs
pub fn extrema<T: Ordered>(a: &DenseND<T>, dims: &[isize]) -> ReduceResult<DenseND<(T, T)>> {
    reduce(MapWith(|x: T| (x, x)), MinMax, a, dims)
}

/// Sum of `A` into `r`, zeroing `r` first when `init` is set
pub fn sum_into<T: Promote>(
    r: &mut DenseND<T::Acc>,
    a: &DenseND<T>,
    init: bool,
) -> ReduceResult<()> {
    reduce_into(&Widen, &Add, r, a, init)
}

/// Product of `A` into `r`, resetting `r` to one first when `init` is set
pub fn prod_into<T: Promote>(
    r: &mut DenseND<T::Acc>,
    a: &DenseND<T>,
    init: bool,
) -> ReduceResult<()> {
    reduce_into(&Widen, &Mul, r, a, init)
}

/// Maximum of `A` into `r`
///
/// With `init`, `r` is first seeded from the first slice of `A`.
pub fn maximum_into<T: Ordered>(
    r: &mut DenseND<T>,
    a: &DenseND<T>,
    init: bool,
) -> ReduceResult<()> {
    reduce_into(&Identity, &Max, r, a, init)
}

/// Minimum of `A` into `r`
///
/// With `init`, `r` is first seeded from the first slice of `A`.
pub fn minimum_into<T: Ordered>(
    r: &mut DenseND<T>,
    a: &DenseND<T>,
    init: bool,
) -> ReduceResult<()> {
    reduce_into(&Identity, &Min, r, a, init)
}

/// Logical and of `A` into `r`
pub fn all_into(r: &mut DenseND<bool>, a: &DenseND<bool>, init: bool) -> ReduceResult<()> {
    reduce_into(&Identity, &And, r, a, init)
}

/// Logical or of `A` into `r`
pub fn any_into(r: &mut DenseND<bool>, a: &DenseND<bool>, init: bool) -> ReduceResult<()> {
    reduce_into(&Identity, &Or, r, a, init)
}
