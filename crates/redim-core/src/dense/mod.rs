//! Dense array implementation
//!
//! The array type lives in [`types`]; construction helpers, element access and
//! trait implementations are split into sibling modules.

pub mod types;

mod creation;
mod indexing;

pub mod densend_traits;

pub use types::DenseND;
