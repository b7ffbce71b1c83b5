//! Per-operation cost configuration for weighted edit distance.

use super::error::{DistanceError, Operation, Result};

/// Default cost of deleting one character.
pub const DEFAULT_DELETION_COST: f64 = 1.0;

/// Default cost of inserting one character.
pub const DEFAULT_INSERTION_COST: f64 = 1.0;

/// Default cost of substituting one character.
///
/// A substitution is priced as a deletion followed by an insertion.
pub const DEFAULT_SUBSTITUTION_COST: f64 = 2.0;

/// Costs charged for each edit operation.
///
/// Every cost is finite and non-negative. Values are checked when the
/// configuration is built, so any `EditCosts` in hand is valid and
/// [`edit_distance`](super::edit_distance) never has to fail.
///
/// Costs do not have to satisfy any triangle-style relationship, and a cost
/// of zero makes the operation free.
///
/// # Example
///
/// ```rust
/// use lexsim::distance::EditCosts;
///
/// let costs = EditCosts::default().with_deletion(0.5).unwrap();
/// assert_eq!(costs.deletion(), 0.5);
/// assert_eq!(costs.substitution(), 2.0);
///
/// assert!(EditCosts::new(-1.0, 1.0, 2.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serialization",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawEditCosts")
)]
pub struct EditCosts {
    deletion: f64,
    insertion: f64,
    substitution: f64,
}

impl Default for EditCosts {
    fn default() -> Self {
        Self {
            deletion: DEFAULT_DELETION_COST,
            insertion: DEFAULT_INSERTION_COST,
            substitution: DEFAULT_SUBSTITUTION_COST,
        }
    }
}

impl EditCosts {
    /// Build a cost configuration, rejecting negative or non-finite values.
    pub fn new(deletion: f64, insertion: f64, substitution: f64) -> Result<Self> {
        Ok(Self {
            deletion: validate(Operation::Deletion, deletion)?,
            insertion: validate(Operation::Insertion, insertion)?,
            substitution: validate(Operation::Substitution, substitution)?,
        })
    }

    /// Replace the deletion cost.
    pub fn with_deletion(self, cost: f64) -> Result<Self> {
        Ok(Self {
            deletion: validate(Operation::Deletion, cost)?,
            ..self
        })
    }

    /// Replace the insertion cost.
    pub fn with_insertion(self, cost: f64) -> Result<Self> {
        Ok(Self {
            insertion: validate(Operation::Insertion, cost)?,
            ..self
        })
    }

    /// Replace the substitution cost.
    pub fn with_substitution(self, cost: f64) -> Result<Self> {
        Ok(Self {
            substitution: validate(Operation::Substitution, cost)?,
            ..self
        })
    }

    /// Cost of removing one character from the source.
    #[inline]
    pub fn deletion(&self) -> f64 {
        self.deletion
    }

    /// Cost of inserting one character of the target.
    #[inline]
    pub fn insertion(&self) -> f64 {
        self.insertion
    }

    /// Cost of replacing a source character with a different target character.
    #[inline]
    pub fn substitution(&self) -> f64 {
        self.substitution
    }

    /// Cost of a single operation.
    pub fn cost_of(&self, operation: Operation) -> f64 {
        match operation {
            Operation::Deletion => self.deletion,
            Operation::Insertion => self.insertion,
            Operation::Substitution => self.substitution,
        }
    }

    /// Costs for the reversed problem: transforming `y` into `x`.
    ///
    /// A deletion from `x` is an insertion into `y` and vice versa.
    #[inline]
    pub(crate) fn transposed(self) -> Self {
        Self {
            deletion: self.insertion,
            insertion: self.deletion,
            substitution: self.substitution,
        }
    }
}

fn validate(operation: Operation, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        tracing::debug!(%operation, value, "rejecting edit cost");
        Err(DistanceError::InvalidCost { operation, value })
    }
}

/// Unvalidated wire form of [`EditCosts`]; missing fields take the defaults.
#[cfg(feature = "serialization")]
#[derive(serde::Deserialize)]
#[serde(default)]
struct RawEditCosts {
    deletion: f64,
    insertion: f64,
    substitution: f64,
}

#[cfg(feature = "serialization")]
impl Default for RawEditCosts {
    fn default() -> Self {
        let costs = EditCosts::default();
        Self {
            deletion: costs.deletion,
            insertion: costs.insertion,
            substitution: costs.substitution,
        }
    }
}

#[cfg(feature = "serialization")]
impl TryFrom<RawEditCosts> for EditCosts {
    type Error = DistanceError;

    fn try_from(raw: RawEditCosts) -> Result<Self> {
        EditCosts::new(raw.deletion, raw.insertion, raw.substitution)
    }
}
