//! Allocation and initialization
//!
//! Accumulators are allocated here with a given shape and seeded with a
//! uniform value before a reduction kernel mutates them.

use super::types::DenseND;
use scirs2_core::ndarray_ext::{Array, IxDyn};
use scirs2_core::numeric::{One, Zero};

impl<T: Clone> DenseND<T> {
    /// Create an array filled with a specific value
    ///
    /// # Examples
    ///
    /// ```
    /// use redim_core::DenseND;
    ///
    /// let tensor = DenseND::from_elem(&[2, 3], true);
    /// assert_eq!(tensor.get(&[1, 2]), Some(&true));
    /// ```
    pub fn from_elem(shape: &[usize], value: T) -> Self {
        Self {
            data: Array::from_elem(IxDyn(shape), value),
        }
    }

    /// Overwrite every element with `value`
    ///
    /// # Examples
    ///
    /// ```
    /// use redim_core::DenseND;
    ///
    /// let mut tensor = DenseND::from_elem(&[2, 2], 1);
    /// tensor.fill(7);
    /// assert!(tensor.iter().all(|&x| x == 7));
    /// ```
    pub fn fill(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Return an array with its axes reordered, keeping the strided layout
    ///
    /// The result shares no storage with `self` but is generally not
    /// C-contiguous, which makes it useful for exercising the strided
    /// reduction paths.
    ///
    /// # Errors
    ///
    /// Fails when `axes` is not a permutation of `0..rank`.
    ///
    /// # Examples
    ///
    /// ```
    /// use redim_core::DenseND;
    ///
    /// let tensor = DenseND::from_vec((1..=6).collect(), &[2, 3]).unwrap();
    /// let permuted = tensor.permuted(&[1, 0]).unwrap();
    /// assert_eq!(permuted.shape(), &[3, 2]);
    /// assert!(!permuted.is_contiguous());
    /// assert_eq!(permuted.get(&[2, 1]), Some(&6));
    /// ```
    pub fn permuted(&self, axes: &[usize]) -> anyhow::Result<Self> {
        let rank = self.rank();
        let mut seen = vec![false; rank];
        if axes.len() != rank {
            anyhow::bail!(
                "Permutation {:?} has {} axes, array has rank {}",
                axes,
                axes.len(),
                rank
            );
        }
        for &axis in axes {
            if axis >= rank || seen[axis] {
                anyhow::bail!("Invalid permutation {:?} for rank {}", axes, rank);
            }
            seen[axis] = true;
        }
        Ok(Self {
            data: self.data.clone().permuted_axes(IxDyn(axes)),
        })
    }
}

impl<T: Clone + Zero> DenseND<T> {
    /// Create an array of zeros
    ///
    /// # Examples
    ///
    /// ```
    /// use redim_core::DenseND;
    ///
    /// let tensor = DenseND::<i64>::zeros(&[0, 3]);
    /// assert!(tensor.is_empty());
    /// ```
    pub fn zeros(shape: &[usize]) -> Self {
        Self {
            data: Array::zeros(IxDyn(shape)),
        }
    }
}

impl<T: Clone + One> DenseND<T> {
    /// Create an array of ones
    ///
    /// # Examples
    ///
    /// ```
    /// use redim_core::DenseND;
    ///
    /// let tensor = DenseND::<f64>::ones(&[2, 3]);
    /// assert_eq!(tensor.len(), 6);
    /// ```
    pub fn ones(shape: &[usize]) -> Self {
        Self {
            data: Array::ones(IxDyn(shape)),
        }
    }
}
