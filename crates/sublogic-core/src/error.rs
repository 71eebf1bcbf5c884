//! Error types for opinion construction and the operator set

use std::fmt;
use thiserror::Error;

/// Result type alias for opinion operations.
pub type Result<T> = std::result::Result<T, OpinionError>;

/// Quantity an [`OpinionError::OutOfRange`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Mass assigned to "true"
    Belief,
    /// Mass assigned to "false"
    Disbelief,
    /// Mass assigned to "don't know"
    Uncertainty,
    /// Prior probability of "true"
    BaseRate,
    /// Projected probability `b + a·u`
    Probability,
}

impl Field {
    /// Get the field name as used in the structural form
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Belief => "belief",
            Field::Disbelief => "disbelief",
            Field::Uncertainty => "uncertainty",
            Field::BaseRate => "base_rate",
            Field::Probability => "probability",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised by opinion construction and the operator set.
///
/// Every error is raised at the point of violation; no operation ever
/// returns a partially built opinion.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OpinionError {
    /// A field value (input or derived) falls outside [0, 1]
    #[error("{field} must be between 0 and 1, got {value}")]
    OutOfRange {
        /// Offending field
        field: Field,
        /// Offending value, as rendered from the input
        value: String,
    },

    /// belief + disbelief + uncertainty deviates from 1 beyond tolerance
    #[error("belief + disbelief + uncertainty must equal 1, got {sum}")]
    InvariantViolation {
        /// The offending sum
        sum: String,
    },

    /// A combination operator's precondition does not hold
    #[error("{operator} is undefined: {reason}")]
    UndefinedOperation {
        /// Operator name
        operator: &'static str,
        /// Why the operator cannot be applied
        reason: &'static str,
    },

    /// Evidence-derivation inputs are not acceptable
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Structural input is missing required structure
    #[error("Malformed input: {0}")]
    MalformedInput(String),
}

impl OpinionError {
    pub(crate) fn out_of_range(field: Field, value: impl fmt::Display) -> Self {
        OpinionError::OutOfRange {
            field,
            value: value.to_string(),
        }
    }
}
