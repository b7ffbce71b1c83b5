//! Error types for distance computations.

use thiserror::Error;

/// Edit operation whose cost is being configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Remove one character from the source.
    Deletion,
    /// Insert one character of the target.
    Insertion,
    /// Replace one source character with a different target character.
    Substitution,
}

impl Operation {
    /// Get a human-readable name for this operation
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Deletion => "deletion",
            Operation::Insertion => "insertion",
            Operation::Substitution => "substitution",
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors that can occur while configuring or computing a distance.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DistanceError {
    /// An edit cost was negative, NaN or infinite.
    ///
    /// Costs are validated when an [`EditCosts`](super::EditCosts) value is
    /// built, so a distance computation never observes an invalid cost.
    #[error("{operation} cost must be finite and non-negative, got {value}")]
    InvalidCost {
        /// The operation whose cost was rejected.
        operation: Operation,
        /// The rejected value.
        value: f64,
    },

    /// The inputs of a position-wise metric differ in length.
    ///
    /// Lengths are counted in characters, not bytes.
    #[error("strings must have equal length, got {left} and {right} characters")]
    LengthMismatch {
        /// Character count of the left input.
        left: usize,
        /// Character count of the right input.
        right: usize,
    },
}

/// A specialized `Result` type for distance operations.
pub type Result<T> = std::result::Result<T, DistanceError>;
