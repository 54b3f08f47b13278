//! # redim-exec
//!
//! Reductions along chosen dimensions of a [`DenseND`](redim_core::DenseND).
//!
//! This crate provides:
//! - `mapreduce_dims` / `reduce_dims` - the generic reduce-with-map entry points
//! - Named families: `sum`, `prod`, `maximum`, `minimum`, `all`, `any`, `count`,
//!   `extrema`, with `*_with` forms taking a map and `*_into` forms writing into a
//!   caller-supplied accumulator
//! - `weighted_sum` along a single dimension
//! - `findmin` / `findmax` / `argmin` / `argmax` with canonical keys
//!
//! Dimension identifiers are 1-based. Identifiers past the rank of the input
//! are ignored, zero or negative identifiers are rejected. Reduced dimensions
//! collapse to extent 1, so results keep the rank of their input.
//!
//! ```
//! use redim_core::DenseND;
//! use redim_exec::{findmax, prod, sum};
//!
//! let a = DenseND::from_vec(vec![1, 2, 3, 4], &[2, 2]).unwrap();
//! assert_eq!(sum(&a, &[1]).unwrap().to_vec(), vec![4i64, 6]);
//! assert_eq!(prod(&a, &[1]).unwrap().to_vec(), vec![3i64, 8]);
//!
//! let (values, keys) = findmax(&a, &[2]).unwrap();
//! assert_eq!(values.to_vec(), vec![2, 4]);
//! assert_eq!(keys.to_vec(), vec![2, 4]);
//! ```

pub mod families;
pub mod find;
pub mod generic;
pub mod weighted;

// Re-exports
pub use families::*;
pub use find::*;
pub use generic::{mapreduce_dims, mapreduce_dims_with_config, mapreduce_into, reduce_dims};
pub use weighted::*;
