//! Dimension sets
//!
//! A [`DimensionSet`] names the dimensions a reduction collapses. Identifiers
//! are 1-based, unordered, and duplicates are idempotent. Identifiers past the
//! rank of the array being reduced are accepted and ignored.

use crate::error::{ReduceError, ReduceResult};
use std::collections::BTreeSet;

/// Validated set of 1-based dimension identifiers
///
/// # Examples
///
/// ```
/// use redim_kernels::DimensionSet;
///
/// let dims = DimensionSet::new([2, 1, 2]).unwrap();
/// assert_eq!(dims.len(), 2);
/// assert!(dims.contains(1));
///
/// // Identifiers past the rank are ignored when mapped onto an array.
/// let dims = DimensionSet::new([1, 5]).unwrap();
/// assert_eq!(dims.axes(2), vec![0]);
///
/// assert!(DimensionSet::new([0]).is_err());
/// assert!(DimensionSet::new([-1]).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct DimensionSet {
    dims: BTreeSet<usize>,
}

impl DimensionSet {
    /// Build a set from integer identifiers
    ///
    /// Every identifier is validated before the set is built.
    ///
    /// # Errors
    ///
    /// `ArgumentConfiguration` if any identifier is zero or negative.
    pub fn new<I>(ids: I) -> ReduceResult<Self>
    where
        I: IntoIterator<Item = isize>,
    {
        let ids: Vec<isize> = ids.into_iter().collect();
        if let Some(bad) = ids.iter().find(|&&id| id <= 0) {
            return Err(ReduceError::argument_configuration(
                "dims",
                format!("region dimension {} must be a positive integer", bad),
            ));
        }
        Ok(Self {
            dims: ids.into_iter().map(|id| id as usize).collect(),
        })
    }

    /// Build a set from real-valued identifiers
    ///
    /// Accepts values such as `2.0` that denote integers exactly.
    ///
    /// # Errors
    ///
    /// `ArgumentConfiguration` if any identifier is non-finite, non-integral
    /// or not positive.
    ///
    /// # Examples
    ///
    /// ```
    /// use redim_kernels::DimensionSet;
    ///
    /// assert_eq!(DimensionSet::from_real([2.0]).unwrap(), DimensionSet::new([2]).unwrap());
    /// assert!(DimensionSet::from_real([1.5]).is_err());
    /// ```
    pub fn from_real<I>(ids: I) -> ReduceResult<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let ids: Vec<f64> = ids.into_iter().collect();
        if let Some(bad) = ids
            .iter()
            .find(|id| !id.is_finite() || id.fract() != 0.0 || **id < 1.0)
        {
            return Err(ReduceError::argument_configuration(
                "dims",
                format!("region dimension {} must be a positive integer", bad),
            ));
        }
        Ok(Self {
            dims: ids.into_iter().map(|id| id as usize).collect(),
        })
    }

    /// Set holding a single dimension
    pub fn single(dim: usize) -> ReduceResult<Self> {
        if dim == 0 {
            return Err(ReduceError::argument_configuration(
                "dims",
                "region dimension 0 must be a positive integer",
            ));
        }
        Ok(Self {
            dims: BTreeSet::from([dim]),
        })
    }

    /// Set naming every dimension of a rank-`rank` array (a full reduction)
    pub fn all(rank: usize) -> Self {
        Self {
            dims: (1..=rank).collect(),
        }
    }

    /// Whether the 1-based dimension `dim` is reduced
    pub fn contains(&self, dim: usize) -> bool {
        self.dims.contains(&dim)
    }

    /// Number of distinct identifiers, including those past any rank
    pub fn len(&self) -> usize {
        self.dims.len()
    }

    /// Whether no dimension is reduced
    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }

    /// Iterate identifiers in ascending order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.dims.iter().copied()
    }

    /// 0-based axes of a rank-`rank` array named by this set
    pub fn axes(&self, rank: usize) -> Vec<usize> {
        self.dims
            .iter()
            .filter(|&&d| d <= rank)
            .map(|&d| d - 1)
            .collect()
    }

    /// Whether the 0-based `axis` is reduced
    pub fn reduces_axis(&self, axis: usize) -> bool {
        self.dims.contains(&(axis + 1))
    }
}

impl TryFrom<&[isize]> for DimensionSet {
    type Error = ReduceError;

    fn try_from(ids: &[isize]) -> ReduceResult<Self> {
        DimensionSet::new(ids.iter().copied())
    }
}
