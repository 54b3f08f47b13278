//! Dense array type definition and basic accessors

use scirs2_core::ndarray_ext::{Array, ArrayView, ArrayViewMut, IxDyn};

/// Dense N-dimensional array backed by scirs2_core's ndarray
///
/// `DenseND` is the array abstraction the reduction kernels read from and
/// write into. Inputs are borrowed as read-only views; accumulators are
/// borrowed mutably for the duration of a single kernel call.
///
/// # Type Parameters
///
/// * `T` - The element type. Only `Clone` is required for storage, so boolean
///   masks and index arrays use the same type as numeric data.
///
/// # Memory Layout
///
/// Arrays created through the constructors here are C-contiguous. Arrays
/// built with [`DenseND::from_array`] or [`DenseND::permuted`] may carry any
/// stride pattern; element enumeration by key is always logical row-major.
///
/// # Examples
///
/// ```
/// use redim_core::DenseND;
///
/// let tensor = DenseND::<f64>::zeros(&[2, 3, 4]);
/// assert_eq!(tensor.shape(), &[2, 3, 4]);
/// assert_eq!(tensor.rank(), 3);
/// ```
#[derive(Clone, PartialEq)]
pub struct DenseND<T> {
    /// Underlying ndarray storage (via scirs2_core)
    pub(crate) data: Array<T, IxDyn>,
}

impl<T> DenseND<T> {
    /// Create an array from an existing ndarray, keeping its layout
    ///
    /// # Examples
    ///
    /// ```
    /// use scirs2_core::ndarray_ext::{Array, IxDyn};
    /// use redim_core::DenseND;
    ///
    /// let arr = Array::<f64, _>::zeros(IxDyn(&[2, 3]));
    /// let tensor = DenseND::from_array(arr);
    /// assert_eq!(tensor.shape(), &[2, 3]);
    /// ```
    pub fn from_array(array: Array<T, IxDyn>) -> Self {
        Self { data: array }
    }

    /// Create an array from row-major data with the given shape
    ///
    /// # Errors
    ///
    /// Fails when `vec.len()` differs from the product of `shape`.
    ///
    /// # Examples
    ///
    /// ```
    /// use redim_core::DenseND;
    ///
    /// let tensor = DenseND::from_vec(vec![1, 2, 3, 4, 5, 6], &[2, 3]).unwrap();
    /// assert_eq!(tensor.shape(), &[2, 3]);
    ///
    /// assert!(DenseND::from_vec(vec![1, 2, 3], &[2, 2]).is_err());
    /// ```
    pub fn from_vec(vec: Vec<T>, shape: &[usize]) -> anyhow::Result<Self> {
        let total: usize = shape.iter().product();
        if vec.len() != total {
            anyhow::bail!(
                "Shape {:?} requires {} elements, but got {}",
                shape,
                total,
                vec.len()
            );
        }
        let array = Array::from_shape_vec(IxDyn(shape), vec)?;
        Ok(Self { data: array })
    }

    /// Number of dimensions
    pub fn rank(&self) -> usize {
        self.data.ndim()
    }

    /// Per-dimension extents
    pub fn shape(&self) -> &[usize] {
        self.data.shape()
    }

    /// Total number of elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the array has zero elements
    ///
    /// An array is empty as soon as any extent is zero.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether the elements are laid out C-contiguously in memory
    ///
    /// Only contiguous arrays support direct linear addressing, which the
    /// contiguous reduction fast path requires.
    pub fn is_contiguous(&self) -> bool {
        self.data.is_standard_layout()
    }

    /// Borrow the elements as a slice when the array is C-contiguous
    pub fn as_slice(&self) -> Option<&[T]> {
        self.data.as_slice()
    }

    /// Get an immutable view of the array
    pub fn view(&self) -> ArrayView<'_, T, IxDyn> {
        self.data.view()
    }

    /// Get a mutable view of the array
    pub fn view_mut(&mut self) -> ArrayViewMut<'_, T, IxDyn> {
        self.data.view_mut()
    }
}
