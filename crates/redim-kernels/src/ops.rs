//! Operator table and element maps
//!
//! [`ReduceOp`] is the closed set of reduction operators. Each tag carries the
//! rules the seeding policy and the kernels consult: which identity seeds the
//! accumulator, whether the contiguous fast path applies and which comparator
//! orders values. Kernels are generic over [`Combine`], so the operator is
//! resolved statically and no dispatch happens in inner loops.
//!
//! [`MapFn`] is applied to every element before it is combined.

use crate::element::{Accumulate, Ordered, Promote, RealPart};
use scirs2_core::numeric::{One, Zero};
use std::fmt;

/// Reduction operator tags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReduceOp {
    /// Addition
    Sum,
    /// Multiplication
    Prod,
    /// Minimum
    Min,
    /// Maximum
    Max,
    /// Logical and
    All,
    /// Logical or
    Any,
    /// Paired minimum and maximum
    Extrema,
    /// Caller-supplied binary function
    Custom,
}

/// Where a reduction's initial accumulator values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityRule {
    /// Additive zero of the accumulator type
    Zero,
    /// Multiplicative one of the accumulator type
    One,
    /// Constant `true`
    True,
    /// Constant `false`
    False,
    /// Mapped first element of every reduced slice
    FirstSlice,
    /// Only a caller-supplied initial value
    Explicit,
}

/// Strict ordering used to pick extremal values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    /// `a < b`
    Less,
    /// `a > b`, i.e. `b < a`
    Greater,
}

impl Comparator {
    /// Whether `a` is strictly better than `b`
    #[inline]
    pub fn holds<T: PartialOrd>(self, a: T, b: T) -> bool {
        match self {
            Comparator::Less => a < b,
            Comparator::Greater => b < a,
        }
    }
}

impl ReduceOp {
    /// Seeding rule of the operator
    pub fn identity_rule(self) -> IdentityRule {
        match self {
            ReduceOp::Sum => IdentityRule::Zero,
            ReduceOp::Prod => IdentityRule::One,
            ReduceOp::All => IdentityRule::True,
            ReduceOp::Any => IdentityRule::False,
            ReduceOp::Min | ReduceOp::Max | ReduceOp::Extrema => IdentityRule::FirstSlice,
            ReduceOp::Custom => IdentityRule::Explicit,
        }
    }

    /// Whether contiguous runs may be folded by the fast path
    pub fn fast_path_eligible(self) -> bool {
        !matches!(self, ReduceOp::Custom)
    }

    /// Comparator of the order-based operators
    pub fn comparator(self) -> Option<Comparator> {
        match self {
            ReduceOp::Min => Some(Comparator::Less),
            ReduceOp::Max => Some(Comparator::Greater),
            _ => None,
        }
    }

    /// Operation name used in error reports and logs
    pub fn name(self) -> &'static str {
        match self {
            ReduceOp::Sum => "sum",
            ReduceOp::Prod => "prod",
            ReduceOp::Min => "minimum",
            ReduceOp::Max => "maximum",
            ReduceOp::All => "all",
            ReduceOp::Any => "any",
            ReduceOp::Extrema => "extrema",
            ReduceOp::Custom => "mapreduce",
        }
    }
}

impl fmt::Display for ReduceOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Binary associative combine function over accumulator values of type `R`
pub trait Combine<R: Copy> {
    /// Operator tag
    fn tag(&self) -> ReduceOp;

    /// Fold `x` into `acc`
    fn combine(&self, acc: R, x: R) -> R;

    /// Identity element, for operators with a constant seed
    fn identity(&self) -> Option<R> {
        None
    }

    /// Substitute for a seed that would poison every later comparison
    fn replace_seed(&self, _seed: R) -> Option<R> {
        None
    }

    /// `seed`, or its substitute when it has one
    fn sanitize_seed(&self, seed: R) -> R {
        self.replace_seed(seed).unwrap_or(seed)
    }
}

/// Addition, wrapping on integer overflow
#[derive(Debug, Clone, Copy, Default)]
pub struct Add;

/// Multiplication, wrapping on integer overflow
#[derive(Debug, Clone, Copy, Default)]
pub struct Mul;

/// NaN-propagating minimum
#[derive(Debug, Clone, Copy, Default)]
pub struct Min;

/// NaN-propagating maximum
#[derive(Debug, Clone, Copy, Default)]
pub struct Max;

/// Logical and
#[derive(Debug, Clone, Copy, Default)]
pub struct And;

/// Logical or
#[derive(Debug, Clone, Copy, Default)]
pub struct Or;

/// Paired `(min, max)`
#[derive(Debug, Clone, Copy, Default)]
pub struct MinMax;

/// Caller-supplied combine function
#[derive(Debug, Clone, Copy)]
pub struct CombineWith<F>(pub F);

impl<R> Combine<R> for Add
where
    R: Zero + Accumulate,
{
    fn tag(&self) -> ReduceOp {
        ReduceOp::Sum
    }

    #[inline]
    fn combine(&self, acc: R, x: R) -> R {
        acc.acc_add(x)
    }

    fn identity(&self) -> Option<R> {
        Some(R::zero())
    }
}

impl<R> Combine<R> for Mul
where
    R: One + Accumulate,
{
    fn tag(&self) -> ReduceOp {
        ReduceOp::Prod
    }

    #[inline]
    fn combine(&self, acc: R, x: R) -> R {
        acc.acc_mul(x)
    }

    fn identity(&self) -> Option<R> {
        Some(R::one())
    }
}

#[inline]
fn pick<R: Ordered>(cmp: Comparator, acc: R, x: R) -> R {
    if acc.is_nan() {
        acc
    } else if x.is_nan() || cmp.holds(x, acc) {
        x
    } else {
        acc
    }
}

impl<R: Ordered> Combine<R> for Min {
    fn tag(&self) -> ReduceOp {
        ReduceOp::Min
    }

    #[inline]
    fn combine(&self, acc: R, x: R) -> R {
        pick(Comparator::Less, acc, x)
    }

    fn identity(&self) -> Option<R> {
        Some(R::min_identity())
    }

    fn replace_seed(&self, seed: R) -> Option<R> {
        seed.is_nan().then(R::min_identity)
    }
}

impl<R: Ordered> Combine<R> for Max {
    fn tag(&self) -> ReduceOp {
        ReduceOp::Max
    }

    #[inline]
    fn combine(&self, acc: R, x: R) -> R {
        pick(Comparator::Greater, acc, x)
    }

    fn identity(&self) -> Option<R> {
        Some(R::max_identity())
    }

    fn replace_seed(&self, seed: R) -> Option<R> {
        seed.is_nan().then(R::max_identity)
    }
}

impl Combine<bool> for And {
    fn tag(&self) -> ReduceOp {
        ReduceOp::All
    }

    #[inline]
    fn combine(&self, acc: bool, x: bool) -> bool {
        acc && x
    }

    fn identity(&self) -> Option<bool> {
        Some(true)
    }
}

impl Combine<bool> for Or {
    fn tag(&self) -> ReduceOp {
        ReduceOp::Any
    }

    #[inline]
    fn combine(&self, acc: bool, x: bool) -> bool {
        acc || x
    }

    fn identity(&self) -> Option<bool> {
        Some(false)
    }
}

impl<R: Ordered> Combine<(R, R)> for MinMax {
    fn tag(&self) -> ReduceOp {
        ReduceOp::Extrema
    }

    #[inline]
    fn combine(&self, acc: (R, R), x: (R, R)) -> (R, R) {
        (
            pick(Comparator::Less, acc.0, x.0),
            pick(Comparator::Greater, acc.1, x.1),
        )
    }

    fn replace_seed(&self, seed: (R, R)) -> Option<(R, R)> {
        if seed.0.is_nan() || seed.1.is_nan() {
            Some((Min.sanitize_seed(seed.0), Max.sanitize_seed(seed.1)))
        } else {
            None
        }
    }
}

impl<R, F> Combine<R> for CombineWith<F>
where
    R: Copy,
    F: Fn(R, R) -> R,
{
    fn tag(&self) -> ReduceOp {
        ReduceOp::Custom
    }

    #[inline]
    fn combine(&self, acc: R, x: R) -> R {
        (self.0)(acc, x)
    }
}

/// Function applied to every element before it is combined
pub trait MapFn<T> {
    /// Mapped value type, which is also the accumulator type
    type Output: Copy;

    /// Map one element
    fn apply(&self, x: T) -> Self::Output;

    /// Lower bound of every mapped value, when the map has one
    fn floor(&self) -> Option<Self::Output> {
        None
    }
}

/// `x -> x`
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

/// `x -> |x|`, real-valued for complex input
#[derive(Debug, Clone, Copy, Default)]
pub struct Abs;

/// `x -> |x|^2`, real-valued for complex input
#[derive(Debug, Clone, Copy, Default)]
pub struct Abs2;

/// `x -> x` in the promoted accumulator type
#[derive(Debug, Clone, Copy, Default)]
pub struct Widen;

/// Arbitrary closure
#[derive(Debug, Clone, Copy)]
pub struct MapWith<F>(pub F);

/// `x -> second(first(x))`
///
/// Advertises no lower bound, since `second` need not preserve one.
#[derive(Debug, Clone, Copy)]
pub struct Compose<F, G>(pub F, pub G);

impl<T: Copy> MapFn<T> for Identity {
    type Output = T;

    #[inline]
    fn apply(&self, x: T) -> T {
        x
    }
}

impl<T: RealPart> MapFn<T> for Abs {
    type Output = T::Real;

    #[inline]
    fn apply(&self, x: T) -> T::Real {
        x.magnitude()
    }

    fn floor(&self) -> Option<T::Real> {
        Some(T::Real::zero())
    }
}

impl<T: RealPart> MapFn<T> for Abs2 {
    type Output = T::Real;

    #[inline]
    fn apply(&self, x: T) -> T::Real {
        x.magnitude_sq()
    }

    fn floor(&self) -> Option<T::Real> {
        Some(T::Real::zero())
    }
}

impl<T: Promote> MapFn<T> for Widen {
    type Output = T::Acc;

    #[inline]
    fn apply(&self, x: T) -> T::Acc {
        x.promote()
    }
}

impl<T, U, F> MapFn<T> for MapWith<F>
where
    U: Copy,
    F: Fn(T) -> U,
{
    type Output = U;

    #[inline]
    fn apply(&self, x: T) -> U {
        (self.0)(x)
    }
}

impl<T, F, G> MapFn<T> for Compose<F, G>
where
    F: MapFn<T>,
    G: MapFn<F::Output>,
{
    type Output = G::Output;

    #[inline]
    fn apply(&self, x: T) -> G::Output {
        self.1.apply(self.0.apply(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scirs2_core::num_complex::Complex;

    #[test]
    fn test_operator_table() {
        assert_eq!(ReduceOp::Sum.identity_rule(), IdentityRule::Zero);
        assert_eq!(ReduceOp::Prod.identity_rule(), IdentityRule::One);
        assert_eq!(ReduceOp::All.identity_rule(), IdentityRule::True);
        assert_eq!(ReduceOp::Any.identity_rule(), IdentityRule::False);
        assert_eq!(ReduceOp::Max.identity_rule(), IdentityRule::FirstSlice);
        assert_eq!(ReduceOp::Custom.identity_rule(), IdentityRule::Explicit);
        assert!(ReduceOp::Min.fast_path_eligible());
        assert!(!ReduceOp::Custom.fast_path_eligible());
        assert_eq!(ReduceOp::Min.comparator(), Some(Comparator::Less));
        assert_eq!(ReduceOp::Max.comparator(), Some(Comparator::Greater));
        assert_eq!(ReduceOp::Sum.comparator(), None);
    }

    #[test]
    fn test_comparator_is_strict() {
        assert!(Comparator::Less.holds(1, 2));
        assert!(!Comparator::Less.holds(2, 2));
        assert!(Comparator::Greater.holds(3.0, 2.0));
        assert!(!Comparator::Greater.holds(2.0, 2.0));
    }

    #[test]
    fn test_min_max_propagate_nan() {
        assert!(Combine::<f64>::combine(&Max, 1.0, f64::NAN).is_nan());
        assert!(Combine::<f64>::combine(&Max, f64::NAN, 5.0).is_nan());
        assert!(Combine::<f64>::combine(&Min, f64::NAN, -5.0).is_nan());
        assert_eq!(Combine::<i32>::combine(&Min, 4, -2), -2);
    }

    #[test]
    fn test_sanitize_replaces_nan_seed_with_identity() {
        assert_eq!(Combine::<f64>::sanitize_seed(&Max, f64::NAN), f64::NEG_INFINITY);
        assert_eq!(Combine::<f64>::sanitize_seed(&Min, f64::NAN), f64::INFINITY);
        assert_eq!(Combine::<f64>::sanitize_seed(&Max, 2.5), 2.5);
        let pair = MinMax.sanitize_seed((f32::NAN, f32::NAN));
        assert_eq!(pair, (f32::INFINITY, f32::NEG_INFINITY));
    }

    #[test]
    fn test_abs_of_complex_is_real() {
        let z = Complex::new(0.0f64, -2.0);
        let m: f64 = Abs.apply(z);
        assert_eq!(m, 2.0);
        assert_eq!(MapFn::<Complex<f64>>::floor(&Abs2), Some(0.0));
    }

    #[test]
    fn test_compose_and_widen() {
        let f = Compose(Abs, Widen);
        let v: i64 = f.apply(-7i32);
        assert_eq!(v, 7);
        assert_eq!(MapFn::<i32>::floor(&f), None);

        let negated = Compose(Abs, MapWith(|x: f64| -x));
        assert_eq!(MapFn::<f64>::floor(&negated), None);
        assert_eq!(MapFn::<i8>::floor(&Widen), None);
    }

    #[test]
    fn test_custom_combine() {
        let op = CombineWith(|a: i32, b: i32| a.max(b) * 2);
        assert_eq!(Combine::<i32>::tag(&op), ReduceOp::Custom);
        assert_eq!(Combine::<i32>::combine(&op, 1, 3), 6);
        assert_eq!(Combine::<i32>::identity(&op), None);
    }
}
