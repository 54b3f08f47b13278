//! # redim-kernels
//!
//! Dimension-wise reduction kernels for dense N-dimensional arrays.
//!
//! ## Overview
//!
//! A reduction folds an array along a chosen set of dimensions and keeps the
//! rest. The output keeps the input's rank: reduced dimensions collapse to
//! extent 1. This crate holds the machinery behind every such operation:
//!
//! - **Dimension sets** ([`DimensionSet`]) - validated 1-based dimension identifiers
//! - **Shape reduction** ([`reduced_shape`], [`reduced_shape0`], [`reduced_axes`])
//! - **Operator table** ([`ReduceOp`]) - identity rule, fast-path eligibility and
//!   comparator per operator, with statically dispatched [`Combine`] implementations
//! - **Explicit promotion** ([`Promote`], [`RealPart`]) - accumulator types are
//!   named per element type, never inferred from values
//! - **Seeding policy** ([`init_accumulator`]) - constant identities, first-slice
//!   seeds for min/max, explicit initial values
//! - **Reduction kernel** ([`mapreducedim_into`]) - contiguous fast path and
//!   general strided traversal with identical results
//! - **Weighted sums** ([`weighted_sum_into`]) along one dimension
//! - **Extremum search** ([`find_extremum_into`]) with canonical keys
//!
//! ## Quick Start
//!
//! ```rust
//! use redim_kernels::{init_accumulator, mapreducedim_into, Add, DimensionSet, Widen};
//! use scirs2_core::ndarray_ext::{Array, IxDyn};
//!
//! let a = Array::from_shape_vec(IxDyn(&[2, 2]), vec![1i32, 2, 3, 4]).unwrap();
//! let dims = DimensionSet::new([1]).unwrap();
//!
//! let mut r = init_accumulator(&Widen, &Add, &a.view(), &dims, None).unwrap();
//! mapreducedim_into(&Widen, &Add, &mut r.view_mut(), &a.view()).unwrap();
//! assert_eq!(r.shape(), &[1, 2]);
//! assert_eq!(r.iter().copied().collect::<Vec<i64>>(), vec![4, 6]);
//! ```
//!
//! ## Layout
//!
//! Arrays are row-major, so the last axis varies fastest. The contiguous fast
//! path applies when the reduced dimensions form a trailing suffix and the
//! block they span is longer than [`KernelConfig::fast_path_threshold`]. The
//! general path walks lanes along the last axis.
//!
//! ## SciRS2 Integration
//!
//! All array storage and views go through `scirs2_core::ndarray_ext`.

pub mod config;
pub mod dims;
pub mod element;
pub mod error;
pub mod extrema;
pub mod init;
pub mod kernel;
pub mod ops;
pub mod shape;
pub mod traversal;
pub mod weighted;


// Re-exports
pub use config::*;
pub use dims::*;
pub use element::*;
pub use error::{ErrorKind, ReduceError, ReduceResult};
pub use extrema::*;
pub use init::*;
pub use kernel::*;
pub use ops::*;
pub use shape::*;
pub use traversal::*;
pub use weighted::*;
