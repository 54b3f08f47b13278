//! Element traits: promotion, real parts, ordering and weighted sums
//!
//! Numeric promotion is explicit here rather than inferred from values. Each
//! input element type names the accumulator type its sums and products use,
//! the real type its magnitude maps to, and the identities min/max fall back
//! on when a seed is NaN.

use scirs2_core::ndarray_ext::{ArrayView, ArrayView1, ArrayView2, IxDyn};
use scirs2_core::num_complex::Complex;
use scirs2_core::numeric::{One, Zero};
use std::fmt::Debug;

/// Accumulation arithmetic of sums and products
///
/// Integers wrap on overflow; floats and complex numbers use ordinary
/// arithmetic.
pub trait Accumulate: Copy {
    /// `self + rhs`, wrapping for integers
    fn acc_add(self, rhs: Self) -> Self;

    /// `self * rhs`, wrapping for integers
    fn acc_mul(self, rhs: Self) -> Self;
}

macro_rules! impl_accumulate_int {
    ($($t:ty),*) => {
        $(
            impl Accumulate for $t {
                #[inline]
                fn acc_add(self, rhs: $t) -> $t {
                    self.wrapping_add(rhs)
                }

                #[inline]
                fn acc_mul(self, rhs: $t) -> $t {
                    self.wrapping_mul(rhs)
                }
            }
        )*
    };
}

macro_rules! impl_accumulate_float {
    ($($t:ty),*) => {
        $(
            impl Accumulate for $t {
                #[inline]
                fn acc_add(self, rhs: $t) -> $t {
                    self + rhs
                }

                #[inline]
                fn acc_mul(self, rhs: $t) -> $t {
                    self * rhs
                }
            }
        )*
    };
}

impl_accumulate_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_accumulate_float!(f32, f64, Complex<f32>, Complex<f64>);

/// Promotion of an element type to its sum/product accumulator type
///
/// Small integers widen to 64 bits and `bool` counts as `i64`; floats and
/// complex numbers accumulate in their own type.
pub trait Promote: Copy + 'static {
    /// Accumulator type
    type Acc: Copy
        + Debug
        + PartialEq
        + Zero
        + One
        + Accumulate
        + 'static;

    /// Convert into the accumulator type
    fn promote(self) -> Self::Acc;

    /// Additive identity of the accumulator type
    fn promoted_zero() -> Self::Acc {
        Self::Acc::zero()
    }

    /// Multiplicative identity of the accumulator type
    fn promoted_one() -> Self::Acc {
        Self::Acc::one()
    }
}

macro_rules! impl_promote {
    ($($t:ty => $acc:ty),* $(,)?) => {
        $(
            impl Promote for $t {
                type Acc = $acc;

                #[inline]
                fn promote(self) -> $acc {
                    self as $acc
                }
            }
        )*
    };
}

impl_promote!(
    i8 => i64, i16 => i64, i32 => i64, i64 => i64, isize => i64,
    u8 => u64, u16 => u64, u32 => u64, u64 => u64, usize => u64,
    f32 => f32, f64 => f64,
);

impl Promote for bool {
    type Acc = i64;

    #[inline]
    fn promote(self) -> i64 {
        i64::from(self)
    }
}

impl Promote for Complex<f32> {
    type Acc = Complex<f32>;

    #[inline]
    fn promote(self) -> Complex<f32> {
        self
    }
}

impl Promote for Complex<f64> {
    type Acc = Complex<f64>;

    #[inline]
    fn promote(self) -> Complex<f64> {
        self
    }
}

/// Real-part typing for magnitude maps
///
/// `abs` and `abs2` of a complex number are real, so reductions composed with
/// them accumulate in the real type.
pub trait RealPart: Copy {
    /// The real type underlying `Self`
    type Real: Copy + PartialOrd + Zero + 'static;

    /// Absolute value
    fn magnitude(self) -> Self::Real;

    /// Squared absolute value
    fn magnitude_sq(self) -> Self::Real;
}

macro_rules! impl_real_part_signed {
    ($($t:ty),*) => {
        $(
            impl RealPart for $t {
                type Real = $t;

                #[inline]
                fn magnitude(self) -> $t {
                    self.wrapping_abs()
                }

                #[inline]
                fn magnitude_sq(self) -> $t {
                    self.wrapping_mul(self)
                }
            }
        )*
    };
}

macro_rules! impl_real_part_unsigned {
    ($($t:ty),*) => {
        $(
            impl RealPart for $t {
                type Real = $t;

                #[inline]
                fn magnitude(self) -> $t {
                    self
                }

                #[inline]
                fn magnitude_sq(self) -> $t {
                    self.wrapping_mul(self)
                }
            }
        )*
    };
}

macro_rules! impl_real_part_float {
    ($($t:ty),*) => {
        $(
            impl RealPart for $t {
                type Real = $t;

                #[inline]
                fn magnitude(self) -> $t {
                    self.abs()
                }

                #[inline]
                fn magnitude_sq(self) -> $t {
                    self * self
                }
            }

            impl RealPart for Complex<$t> {
                type Real = $t;

                #[inline]
                fn magnitude(self) -> $t {
                    self.norm()
                }

                #[inline]
                fn magnitude_sq(self) -> $t {
                    self.norm_sqr()
                }
            }
        )*
    };
}

impl_real_part_signed!(i8, i16, i32, i64, isize);
impl_real_part_unsigned!(u8, u16, u32, u64, usize);
impl_real_part_float!(f32, f64);

/// Ordering support for min/max reductions and extremum search
pub trait Ordered: Copy + PartialOrd {
    /// Whether the value is unordered (NaN)
    fn is_nan(self) -> bool;

    /// Seed that never wins a min-seeking comparison: +∞ or the type's maximum
    fn min_identity() -> Self;

    /// Seed that never wins a max-seeking comparison: −∞ or the type's minimum
    fn max_identity() -> Self;
}

macro_rules! impl_ordered_int {
    ($($t:ty),*) => {
        $(
            impl Ordered for $t {
                #[inline]
                fn is_nan(self) -> bool {
                    false
                }

                fn min_identity() -> $t {
                    <$t>::MAX
                }

                fn max_identity() -> $t {
                    <$t>::MIN
                }
            }
        )*
    };
}

macro_rules! impl_ordered_float {
    ($($t:ty),*) => {
        $(
            impl Ordered for $t {
                #[inline]
                fn is_nan(self) -> bool {
                    <$t>::is_nan(self)
                }

                fn min_identity() -> $t {
                    <$t>::INFINITY
                }

                fn max_identity() -> $t {
                    <$t>::NEG_INFINITY
                }
            }
        )*
    };
}

impl_ordered_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_ordered_float!(f32, f64);

impl Ordered for bool {
    #[inline]
    fn is_nan(self) -> bool {
        false
    }

    fn min_identity() -> bool {
        true
    }

    fn max_identity() -> bool {
        false
    }
}

/// Elements that support weighted sums
///
/// The optional hook substitutes a dense matrix-vector product for the
/// generic traversal. It is only offered for contiguous float data reduced
/// along its first or last axis; everything else returns `None` and falls
/// back to the general weighted traversal.
pub trait WeightedElement: Promote {
    /// Weighted sum of `a` along the 0-based `axis`, one value per output cell
    /// in row-major order, or `None` when no accelerated routine applies
    fn accelerated_weighted_sum(
        _a: &ArrayView<'_, Self, IxDyn>,
        _weights: &[Self],
        _axis: usize,
    ) -> Option<Vec<Self::Acc>> {
        None
    }
}

macro_rules! impl_weighted_plain {
    ($($t:ty),*) => {
        $(impl WeightedElement for $t {})*
    };
}

impl_weighted_plain!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl WeightedElement for Complex<f32> {}
impl WeightedElement for Complex<f64> {}

macro_rules! impl_weighted_dense {
    ($($t:ty),*) => {
        $(
            impl WeightedElement for $t {
                fn accelerated_weighted_sum(
                    a: &ArrayView<'_, $t, IxDyn>,
                    weights: &[$t],
                    axis: usize,
                ) -> Option<Vec<$t>> {
                    let data = a.as_slice()?;
                    let shape = a.shape();
                    let n = *shape.get(axis)?;
                    if n == 0 || data.is_empty() || weights.len() != n {
                        return None;
                    }
                    let m = data.len() / n;
                    let w = ArrayView1::from(weights);
                    if axis + 1 == shape.len() {
                        let mat = ArrayView2::from_shape((m, n), data).ok()?;
                        Some(mat.dot(&w).to_vec())
                    } else if axis == 0 {
                        let mat = ArrayView2::from_shape((n, m), data).ok()?;
                        Some(w.dot(&mat).to_vec())
                    } else {
                        None
                    }
                }
            }
        )*
    };
}

impl_weighted_dense!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use scirs2_core::ndarray_ext::Array;

    #[test]
    fn test_small_integers_widen() {
        let x: i8 = 127;
        assert_eq!(x.promote() + x.promote(), 254i64);
        assert_eq!(true.promote(), 1i64);
        assert_eq!(<u8 as Promote>::promoted_zero(), 0u64);
        assert_eq!(<f32 as Promote>::promoted_one(), 1.0f32);
    }

    #[test]
    fn test_integer_accumulation_wraps() {
        assert_eq!(i64::MAX.acc_add(1), i64::MIN);
        assert_eq!(10i64.pow(18).acc_mul(10), 10i64.pow(18).wrapping_mul(10));
        assert_eq!(u64::MAX.acc_add(2), 1);
        assert_eq!(1.5f64.acc_mul(2.0), 3.0);
        let z = Complex::new(1.0f32, 1.0);
        assert_eq!(z.acc_mul(z), Complex::new(0.0, 2.0));
    }

    #[test]
    fn test_complex_magnitude_is_real() {
        let z = Complex::new(3.0f64, 4.0);
        let m: f64 = z.magnitude();
        assert_eq!(m, 5.0);
        assert_eq!(z.magnitude_sq(), 25.0);
    }

    #[test]
    fn test_integer_magnitude() {
        assert_eq!((-3i32).magnitude(), 3);
        assert_eq!((-3i32).magnitude_sq(), 9);
        assert_eq!(7u16.magnitude(), 7);
    }

    #[test]
    fn test_ordered_identities() {
        assert_eq!(<f64 as Ordered>::min_identity(), f64::INFINITY);
        assert_eq!(<f64 as Ordered>::max_identity(), f64::NEG_INFINITY);
        assert_eq!(<i32 as Ordered>::max_identity(), i32::MIN);
        assert!(Ordered::is_nan(f32::NAN));
        assert!(!Ordered::is_nan(3i64));
    }

    #[test]
    fn test_accelerated_weighted_sum_last_axis() {
        let a = Array::from_shape_vec(IxDyn(&[2, 3]), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let sums = f64::accelerated_weighted_sum(&a.view(), &[1.0, 0.0, 2.0], 1).unwrap();
        assert_eq!(sums, vec![7.0, 16.0]);
    }

    #[test]
    fn test_accelerated_weighted_sum_first_axis() {
        let a = Array::from_shape_vec(IxDyn(&[2, 2]), vec![1.0f32, 2.0, 3.0, 4.0]).unwrap();
        let sums = f32::accelerated_weighted_sum(&a.view(), &[1.0, 2.0], 0).unwrap();
        assert_eq!(sums, vec![7.0, 10.0]);
    }

    #[test]
    fn test_accelerated_weighted_sum_declines_middle_axis() {
        let a = Array::<f64, _>::zeros(IxDyn(&[2, 3, 4]));
        assert!(f64::accelerated_weighted_sum(&a.view(), &[1.0; 3], 1).is_none());
        assert!(i32::accelerated_weighted_sum(
            &Array::<i32, _>::zeros(IxDyn(&[2, 2])).view(),
            &[1, 1],
            1
        )
        .is_none());
    }
}
