//! # redim-core
//!
//! Dense array type for the redim reduction stack.
//!
//! This crate provides the array abstraction the reduction kernels consume:
//!
//! - **Dense storage** ([`DenseND`]) backed by `scirs2_core`'s dynamic-rank arrays
//! - **Multi-index access** with bounds-checked `get`
//! - **Canonical keys**: a 1-based, logical row-major enumeration of elements that
//!   is independent of the memory layout of the backing array
//! - **Allocation and uniform fill** for accumulators
//!
//! ## Quick Start
//!
//! ```
//! use redim_core::DenseND;
//!
//! let tensor = DenseND::from_vec(vec![1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
//! assert_eq!(tensor.shape(), &[2, 2]);
//! assert_eq!(tensor.get(&[1, 0]), Some(&3.0));
//!
//! // Keys enumerate elements row-major, starting at 1.
//! assert_eq!(tensor.get_key(3), Some(&3.0));
//! assert_eq!(tensor.unravel_key(3), Some(vec![1, 0]));
//! ```
//!
//! ## Memory Layout
//!
//! Arrays default to C-contiguous (row-major) layout. Permuted arrays keep their
//! strided layout; canonical keys still follow the logical order.
//!
//! ## SciRS2 Integration
//!
//! All array storage goes through `scirs2_core::ndarray_ext`.

pub mod dense;
pub mod keys;

pub use dense::DenseND;
pub use keys::{ravel_index, unravel_key, UNSEEDED_KEY};
