//! # redim - reductions along chosen dimensions
//!
//! Folds dense N-dimensional arrays along any set of dimensions with sums,
//! products, logical folds, minima and maxima, weighted sums and extremum
//! search. Results keep the rank of their input; reduced dimensions have
//! extent 1.
//!
//! This is the **meta crate** that re-exports all redim components.
//!
//! ## Quick Start
//!
//! ```
//! use redim::prelude::*;
//!
//! let a = DenseND::from_vec(vec![1, 2, 3, 4], &[2, 2])?;
//! assert_eq!(sum(&a, &[1])?.to_vec(), vec![4i64, 6]);
//! assert_eq!(sum(&a, &[2])?.to_vec(), vec![3i64, 7]);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Components
//!
//! ### Arrays ([`core`])
//!
//! `DenseND`, a dynamic-rank dense array with 1-based canonical keys.
//!
//! ### Kernels ([`kernels`])
//!
//! Dimension sets, shape reduction, the operator table, seeding policy and
//! the reduction, weighted-sum and extremum kernels working on array views.
//!
//! ```
//! use redim::kernels::{reduced_shape, DimensionSet};
//!
//! let dims = DimensionSet::new([1, 3]).unwrap();
//! assert_eq!(reduced_shape(&[4, 5, 6], &dims), vec![1, 5, 1]);
//! ```
//!
//! ### Operations ([`exec`])
//!
//! Named reductions over `DenseND` in value-returning and in-place form.
//!
//! ```
//! use redim::exec::findmax;
//! use redim::core::DenseND;
//!
//! let a = DenseND::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
//! let (values, keys) = findmax(&a, &[2]).unwrap();
//! assert_eq!(values.to_vec(), vec![2.0, 4.0]);
//! assert_eq!(keys.to_vec(), vec![2, 4]);
//! ```
//!
//! ## Features
//!
//! - `serde`: Serialize/Deserialize for the kernel configuration and operator tags

// Re-export all components
pub use redim_core as core;
pub use redim_exec as exec;
pub use redim_kernels as kernels;

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! # Example
    //!
    //! ```
    //! use redim::prelude::*;
    //!
    //! let a = DenseND::<f64>::ones(&[2, 3]);
    //! let r = maximum(&a, &[1, 2]).unwrap();
    //! assert_eq!(r.to_vec(), vec![1.0]);
    //! ```

    // Core types
    pub use crate::core::DenseND;

    // Kernel vocabulary
    pub use crate::kernels::{
        Abs, Abs2, Add, And, CombineWith, DimensionSet, ErrorKind, Identity, KernelConfig, MapWith,
        Max, Min, Mul, Or, ReduceError, ReduceOp, ReduceResult,
    };

    // Operations
    pub use crate::exec::{
        all, all_with, any, any_with, argmax, argmin, count, extrema, findmax, findmax_into,
        findmin, findmin_into, mapreduce_dims, mapreduce_into, maximum, maximum_into,
        maximum_with, minimum, minimum_into, minimum_with, prod, prod_into, prod_with,
        reduce_dims, sum, sum_into, sum_with, weighted_sum, weighted_sum_into,
    };
}
