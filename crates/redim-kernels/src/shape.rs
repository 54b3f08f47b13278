//! Output shapes of reductions
//!
//! The shape reducer maps an input index space and a [`DimensionSet`] to the
//! index space of the accumulator. Two collapse policies exist:
//!
//! - [`CollapsePolicy::ToOne`]: every reduced dimension becomes extent 1.
//! - [`CollapsePolicy::Zero`]: as above, except a reduced dimension that is
//!   already extent 0 stays 0, so structurally empty inputs give empty outputs.
//!
//! [`ShapeIndexer`] maps input coordinates onto accumulator coordinates:
//! kept dimensions pass through and reduced dimensions always land on 0.

use crate::dims::DimensionSet;
use crate::error::{ReduceError, ReduceResult};

/// How a reduced dimension's extent maps into the output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollapsePolicy {
    /// Reduced extents become 1
    ToOne,
    /// Reduced extents become 1, except that 0 stays 0
    Zero,
}

/// Index range of one dimension
///
/// Ordinary arrays use `OneTo`. Offset-indexed arrays describe their axes as
/// windows; strided index sets are representable but cannot be collapsed
/// unless their step is 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisRange {
    /// `len` indices starting at the first position
    OneTo(usize),
    /// `len` consecutive indices starting at `start`
    Window { start: isize, len: usize },
    /// `len` indices `start, start + step, ...`
    Stepped {
        start: isize,
        step: isize,
        len: usize,
    },
}

impl AxisRange {
    /// Number of indices in the range
    pub fn len(&self) -> usize {
        match *self {
            AxisRange::OneTo(len) => len,
            AxisRange::Window { len, .. } => len,
            AxisRange::Stepped { len, .. } => len,
        }
    }

    /// Whether the range holds no index
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn kind_name(&self) -> &'static str {
        match self {
            AxisRange::OneTo(_) => "one-based",
            AxisRange::Window { .. } => "window",
            AxisRange::Stepped { .. } => "stepped",
        }
    }

    /// Collapse this range to its first coordinate under `policy`
    ///
    /// `dim` is the 1-based dimension, used in error reports.
    pub fn collapse(self, dim: usize, policy: CollapsePolicy) -> ReduceResult<AxisRange> {
        let len = match policy {
            CollapsePolicy::Zero if self.is_empty() => 0,
            _ => 1,
        };
        match self {
            AxisRange::OneTo(_) => Ok(AxisRange::OneTo(len)),
            AxisRange::Window { start, .. } => Ok(AxisRange::Window { start, len }),
            AxisRange::Stepped { start, step: 1, .. } => Ok(AxisRange::Window { start, len }),
            other => Err(ReduceError::unsupported_index_kind(dim, other.kind_name())),
        }
    }
}

/// Collapse the reduced dimensions of `axes`
///
/// Every reduced range is collapsed before the result is returned, so an
/// unsupported index kind leaves nothing half-built. Identifiers past
/// `axes.len()` are ignored.
///
/// # Examples
///
/// ```
/// use redim_kernels::{reduced_axes, AxisRange, CollapsePolicy, DimensionSet};
///
/// let axes = [AxisRange::Window { start: -2, len: 5 }, AxisRange::OneTo(3)];
/// let dims = DimensionSet::new([1]).unwrap();
/// let out = reduced_axes(&axes, &dims, CollapsePolicy::ToOne).unwrap();
/// assert_eq!(out, vec![AxisRange::Window { start: -2, len: 1 }, AxisRange::OneTo(3)]);
/// ```
pub fn reduced_axes(
    axes: &[AxisRange],
    dims: &DimensionSet,
    policy: CollapsePolicy,
) -> ReduceResult<Vec<AxisRange>> {
    axes.iter()
        .enumerate()
        .map(|(axis, &range)| {
            if dims.reduces_axis(axis) {
                range.collapse(axis + 1, policy)
            } else {
                Ok(range)
            }
        })
        .collect()
}

/// Output shape of a reduction with the collapse-to-one policy
///
/// # Examples
///
/// ```
/// use redim_kernels::{reduced_shape, DimensionSet};
///
/// let dims = DimensionSet::new([1, 3]).unwrap();
/// assert_eq!(reduced_shape(&[4, 5, 6], &dims), vec![1, 5, 1]);
/// assert_eq!(reduced_shape(&[0, 3], &DimensionSet::new([1]).unwrap()), vec![1, 3]);
/// ```
pub fn reduced_shape(shape: &[usize], dims: &DimensionSet) -> Vec<usize> {
    collapse_extents(shape, dims, CollapsePolicy::ToOne)
}

/// Output shape of a reduction with the collapse0 policy
///
/// # Examples
///
/// ```
/// use redim_kernels::{reduced_shape0, DimensionSet};
///
/// let dims = DimensionSet::new([1]).unwrap();
/// assert_eq!(reduced_shape0(&[0, 3], &dims), vec![0, 3]);
/// assert_eq!(reduced_shape0(&[2, 3], &dims), vec![1, 3]);
/// ```
pub fn reduced_shape0(shape: &[usize], dims: &DimensionSet) -> Vec<usize> {
    collapse_extents(shape, dims, CollapsePolicy::Zero)
}

fn collapse_extents(shape: &[usize], dims: &DimensionSet, policy: CollapsePolicy) -> Vec<usize> {
    shape
        .iter()
        .enumerate()
        .map(|(axis, &extent)| {
            if !dims.reduces_axis(axis) {
                extent
            } else if policy == CollapsePolicy::Zero && extent == 0 {
                0
            } else {
                1
            }
        })
        .collect()
}

/// Maps input coordinates to accumulator coordinates
///
/// Built from the accumulator's shape: an accumulator dimension of extent 1
/// always maps to coordinate 0, every other dimension passes its coordinate
/// through. Input dimensions past the accumulator's rank are dropped.
#[derive(Debug, Clone)]
pub struct ShapeIndexer {
    keep: Vec<bool>,
}

impl ShapeIndexer {
    /// Build the indexer for an accumulator of shape `out_shape`
    pub fn new(out_shape: &[usize]) -> Self {
        Self {
            keep: out_shape.iter().map(|&extent| extent != 1).collect(),
        }
    }

    /// Rank of the accumulator
    pub fn out_rank(&self) -> usize {
        self.keep.len()
    }

    /// Whether the 0-based `axis` passes its coordinate through
    pub fn is_kept(&self, axis: usize) -> bool {
        self.keep.get(axis).copied().unwrap_or(false)
    }

    /// Write the accumulator coordinate of `input` into `out`
    ///
    /// `out` must have length [`ShapeIndexer::out_rank`].
    pub fn map_into(&self, input: &[usize], out: &mut [usize]) {
        for (axis, slot) in out.iter_mut().enumerate() {
            *slot = if self.keep[axis] { input[axis] } else { 0 };
        }
    }

    /// Accumulator coordinate of `input`
    pub fn map(&self, input: &[usize]) -> Vec<usize> {
        let mut out = vec![0; self.out_rank()];
        self.map_into(input, &mut out);
        out
    }
}
