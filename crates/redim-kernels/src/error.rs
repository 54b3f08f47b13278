//! Error types for reduction kernels
//!
//! Every error is raised during the validation pass that precedes mutation,
//! so a failed call leaves its accumulator untouched.

use thiserror::Error;

/// Error type for reduction operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReduceError {
    /// The call itself is misconfigured: bad dimension identifiers, too many
    /// weighted dimensions, or a reduction that has nothing to start from.
    #[error("{operation}: invalid argument: {reason}")]
    ArgumentConfiguration { operation: String, reason: String },

    /// Output, weight or paired-output shapes are incompatible with the input.
    #[error("{operation}: shape mismatch - expected {expected:?}, got {actual:?}. {reason}")]
    ShapeMismatch {
        operation: String,
        expected: Vec<usize>,
        actual: Vec<usize>,
        reason: String,
    },

    /// A dimension uses an index representation with no collapse rule.
    #[error("dimension {dim}: no collapse rule for {kind} indices")]
    UnsupportedIndexKind { dim: usize, kind: String },
}

/// Fieldless discriminant of [`ReduceError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ArgumentConfiguration,
    ShapeMismatch,
    UnsupportedIndexKind,
}

/// Result type for reduction operations
pub type ReduceResult<T> = Result<T, ReduceError>;

impl ReduceError {
    /// Create an argument configuration error
    pub fn argument_configuration(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        ReduceError::ArgumentConfiguration {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Create the error raised when a reduction has an empty source but a
    /// non-empty result and no explicit initial value
    pub fn empty_reduction(operation: impl Into<String>) -> Self {
        Self::argument_configuration(
            operation,
            "reduction over empty collection slice is invalid; supply an explicit init",
        )
    }

    /// Create a shape mismatch error
    pub fn shape_mismatch(
        operation: impl Into<String>,
        expected: Vec<usize>,
        actual: Vec<usize>,
        reason: impl Into<String>,
    ) -> Self {
        ReduceError::ShapeMismatch {
            operation: operation.into(),
            expected,
            actual,
            reason: reason.into(),
        }
    }

    /// Create an unsupported index kind error
    pub fn unsupported_index_kind(dim: usize, kind: impl Into<String>) -> Self {
        ReduceError::UnsupportedIndexKind {
            dim,
            kind: kind.into(),
        }
    }

    /// The category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ReduceError::ArgumentConfiguration { .. } => ErrorKind::ArgumentConfiguration,
            ReduceError::ShapeMismatch { .. } => ErrorKind::ShapeMismatch,
            ReduceError::UnsupportedIndexKind { .. } => ErrorKind::UnsupportedIndexKind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_display() {
        let err = ReduceError::shape_mismatch(
            "weighted_sum",
            vec![3],
            vec![2],
            "weights must match the reduced extent",
        );

        let msg = format!("{}", err);
        assert!(msg.contains("weighted_sum"));
        assert!(msg.contains("shape mismatch"));
        assert!(msg.contains("[3]"));
        assert!(msg.contains("[2]"));
        assert_eq!(err.kind(), ErrorKind::ShapeMismatch);
    }

    #[test]
    fn test_empty_reduction_is_argument_error() {
        let err = ReduceError::empty_reduction("minimum");
        assert_eq!(err.kind(), ErrorKind::ArgumentConfiguration);
        assert!(format!("{}", err).contains("empty collection slice"));
    }

    #[test]
    fn test_unsupported_index_kind_display() {
        let err = ReduceError::unsupported_index_kind(2, "stepped");
        let msg = format!("{}", err);
        assert!(msg.contains("dimension 2"));
        assert!(msg.contains("stepped"));
        assert_eq!(err.kind(), ErrorKind::UnsupportedIndexKind);
    }
}
